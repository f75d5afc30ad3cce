//! Gregorian calendar ↔ Julian Day Number.
//!
//! Uses the Meeus formulation (Astronomical Algorithms, ch. 7) with the
//! Gregorian correction term always applied. The result is the integer JDN
//! of the civil day, i.e. the Julian Date at noon of that day.

/// Julian Day Number of a Gregorian calendar date.
///
/// `julian_day_number(2000, 1, 1) == 2_451_545`.
pub fn julian_day_number(year: i32, month: u32, day: u32) -> i64 {
    let (mut y, mut m) = (year as i64, month as i64);
    if m <= 2 {
        y -= 1;
        m += 12;
    }
    let a = y.div_euclid(100);
    let b = 2 - a + a.div_euclid(4);
    // floor(365.25 * (y + 4716)) and floor(30.6001 * (m + 1)) in integer form
    let days_in_years = (1461 * (y + 4716)).div_euclid(4);
    let days_in_months = (306_001 * (m + 1)).div_euclid(10_000);
    days_in_years + days_in_months + day as i64 + b - 1524
}

/// Inverse of [`julian_day_number`]: JDN → (year, month, day).
pub fn jdn_to_calendar(jdn: i64) -> (i32, u32, u32) {
    let z = jdn;
    let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
    let a = z + 1 + alpha - alpha.div_euclid(4);
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (1461 * c).div_euclid(4);
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = b - d - (306_001 * e).div_euclid(10_000);
    let month = if e < 14 { e - 1 } else { e - 13 };
    let year = if month > 2 { c - 4716 } else { c - 4715 };
    (year as i32, month as u32, day as u32)
}

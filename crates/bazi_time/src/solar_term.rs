//! Approximate sectional solar terms (節入り) for Bazi month cutovers.
//!
//! Each Gregorian month contains one sectional term that starts a new Bazi
//! month (立春 in February starts the 寅 month, and so on). The estimate is a
//! fixed baseline day per month adjusted by a linear drift term in
//! `(year - 2000)`, minus a leap-year count. Only a negative adjustment is
//! ever applied, so the estimate never moves later than the baseline.
//!
//! The cutover instant is taken as 00:00 local time of the estimated day.
//! This is a day-resolution approximation, not an astronomical computation:
//! a birth within about a day of the true term may land in the neighbouring
//! Bazi month.

use serde::{Deserialize, Serialize};

use crate::civil::CivilDateTime;
use crate::error::TimeError;

/// Mean advance of the tropical year against the Gregorian calendar, in days per year.
const DRIFT_DAYS_PER_YEAR: f64 = 0.2422;

/// The 12 sectional terms, one per Gregorian month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarTerm {
    #[serde(rename = "小寒")]
    Shokan,
    #[serde(rename = "立春")]
    Risshun,
    #[serde(rename = "啓蟄")]
    Keichitsu,
    #[serde(rename = "清明")]
    Seimei,
    #[serde(rename = "立夏")]
    Rikka,
    #[serde(rename = "芒種")]
    Boshu,
    #[serde(rename = "小暑")]
    Shosho,
    #[serde(rename = "立秋")]
    Risshu,
    #[serde(rename = "白露")]
    Hakuro,
    #[serde(rename = "寒露")]
    Kanro,
    #[serde(rename = "立冬")]
    Ritto,
    #[serde(rename = "大雪")]
    Taisetsu,
}

/// All sectional terms in Gregorian month order (index 0 = January's 小寒).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Shokan,
    SolarTerm::Risshun,
    SolarTerm::Keichitsu,
    SolarTerm::Seimei,
    SolarTerm::Rikka,
    SolarTerm::Boshu,
    SolarTerm::Shosho,
    SolarTerm::Risshu,
    SolarTerm::Hakuro,
    SolarTerm::Kanro,
    SolarTerm::Ritto,
    SolarTerm::Taisetsu,
];

impl SolarTerm {
    /// Kanji name of the term.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shokan => "小寒",
            Self::Risshun => "立春",
            Self::Keichitsu => "啓蟄",
            Self::Seimei => "清明",
            Self::Rikka => "立夏",
            Self::Boshu => "芒種",
            Self::Shosho => "小暑",
            Self::Risshu => "立秋",
            Self::Hakuro => "白露",
            Self::Kanro => "寒露",
            Self::Ritto => "立冬",
            Self::Taisetsu => "大雪",
        }
    }

    /// Gregorian month (1-12) in which the term falls.
    pub const fn month(self) -> u32 {
        match self {
            Self::Shokan => 1,
            Self::Risshun => 2,
            Self::Keichitsu => 3,
            Self::Seimei => 4,
            Self::Rikka => 5,
            Self::Boshu => 6,
            Self::Shosho => 7,
            Self::Risshu => 8,
            Self::Hakuro => 9,
            Self::Kanro => 10,
            Self::Ritto => 11,
            Self::Taisetsu => 12,
        }
    }

    /// Baseline day-of-month before the drift correction.
    pub const fn baseline_day(self) -> u32 {
        match self {
            Self::Shokan => 5,
            Self::Risshun => 4,
            Self::Keichitsu => 5,
            Self::Seimei => 5,
            Self::Rikka => 5,
            Self::Boshu => 6,
            Self::Shosho => 7,
            Self::Risshu => 7,
            Self::Hakuro => 8,
            Self::Kanro => 8,
            Self::Ritto => 7,
            Self::Taisetsu => 7,
        }
    }

    /// Term for a Gregorian month, or `None` outside 1..=12.
    pub fn for_month(month: u32) -> Option<Self> {
        let idx = usize::try_from(month.checked_sub(1)?).ok()?;
        ALL_SOLAR_TERMS.get(idx).copied()
    }

    /// Estimated start of this term in `year`.
    pub fn cutover(self, year: i32) -> SolarTermCutover {
        cutover_for(year, self)
    }
}

/// Estimated start of a sectional term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolarTermCutover {
    pub term: SolarTerm,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

/// Drift correction in days for a year; only negative values shift the day.
fn drift_correction(year: i32) -> i64 {
    let dy = i64::from(year) - 2000;
    let drift = (dy as f64 * DRIFT_DAYS_PER_YEAR + 0.5).floor() as i64;
    let leaps = dy.div_euclid(4);
    (drift - leaps).min(0)
}

fn cutover_for(year: i32, term: SolarTerm) -> SolarTermCutover {
    let day = (i64::from(term.baseline_day()) + drift_correction(year)).max(1) as u32;
    SolarTermCutover {
        term,
        year,
        month: term.month(),
        day,
        hour: 0,
        minute: 0,
    }
}

/// Estimated cutover of the sectional term in the given Gregorian month.
pub fn solar_term_cutover(year: i32, month: u32) -> Result<SolarTermCutover, TimeError> {
    let term = SolarTerm::for_month(month)
        .ok_or_else(|| TimeError::InvalidInput(format!("month out of range: {month}")))?;
    Ok(cutover_for(year, term))
}

/// True if the moment is at or after the month's estimated cutover.
pub fn is_after_cutover(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> Result<bool, TimeError> {
    let c = solar_term_cutover(year, month)?;
    Ok((day, hour, minute) >= (c.day, c.hour, c.minute))
}

impl CivilDateTime {
    /// The sectional term of this date's Gregorian month.
    pub fn solar_term(&self) -> SolarTermCutover {
        // month is 1..=12: construction and deserialization both go through `new`
        ALL_SOLAR_TERMS[(self.month() as usize + 11) % 12].cutover(self.year())
    }

    /// True if this instant is at or after its month's sectional term.
    pub fn is_after_cutover(&self) -> bool {
        let c = self.solar_term();
        (self.day(), self.hour(), self.minute()) >= (c.day, c.hour, c.minute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_terms_count() {
        assert_eq!(ALL_SOLAR_TERMS.len(), 12);
    }

    #[test]
    fn months_sequential() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.month() as usize, i + 1);
            assert_eq!(SolarTerm::for_month(t.month()), Some(*t));
        }
    }

    #[test]
    fn for_month_out_of_range() {
        assert_eq!(SolarTerm::for_month(0), None);
        assert_eq!(SolarTerm::for_month(13), None);
    }

    #[test]
    fn risshun_2024_is_feb_4() {
        let c = solar_term_cutover(2024, 2).unwrap();
        assert_eq!(c.term, SolarTerm::Risshun);
        assert_eq!((c.month, c.day, c.hour, c.minute), (2, 4, 0, 0));
    }

    #[test]
    fn positive_drift_is_ignored() {
        // 1990: drift -2, leaps -3 → +1, not applied
        assert_eq!(drift_correction(1990), 0);
        assert_eq!(solar_term_cutover(1990, 1).unwrap().day, 5);
    }

    #[test]
    fn negative_drift_moves_earlier() {
        // 2100: drift 24, leaps 25 → -1
        assert_eq!(drift_correction(2100), -1);
        assert_eq!(solar_term_cutover(2100, 2).unwrap().day, 3);
    }

    #[test]
    fn cutover_is_inclusive() {
        assert!(is_after_cutover(2024, 2, 4, 0, 0).unwrap());
        assert!(!is_after_cutover(2024, 2, 3, 23, 59).unwrap());
        assert!(is_after_cutover(2024, 2, 5, 0, 0).unwrap());
    }

    #[test]
    fn invalid_month_is_error() {
        assert!(matches!(
            is_after_cutover(2024, 13, 1, 0, 0),
            Err(TimeError::InvalidInput(_))
        ));
        assert!(solar_term_cutover(2024, 0).is_err());
    }

    #[test]
    fn civil_method_agrees_with_free_fn() {
        for (m, d) in [(1, 4), (1, 5), (2, 3), (2, 4), (6, 6), (12, 6), (12, 31)] {
            let t = CivilDateTime::new(2010, m, d, 9, 0).unwrap();
            assert_eq!(
                t.is_after_cutover(),
                is_after_cutover(2010, m, d, 9, 0).unwrap(),
                "2010-{m}-{d}"
            );
        }
    }
}

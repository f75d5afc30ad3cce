//! Integration tests for civil date handling and solar-term estimation.

use bazi_time::{
    ALL_SOLAR_TERMS, CivilDateTime, TimeError, is_after_cutover, jdn_to_calendar,
    julian_day_number, solar_term_cutover,
};

/// The estimate may move earlier than the baseline but never later.
#[test]
fn cutover_never_after_baseline() {
    for year in 1900..=2100 {
        for term in ALL_SOLAR_TERMS {
            let c = solar_term_cutover(year, term.month()).unwrap();
            assert!(
                c.day <= term.baseline_day(),
                "{year} {}: day {} > baseline {}",
                term.name(),
                c.day,
                term.baseline_day()
            );
            assert!(c.day >= 1);
        }
    }
}

/// Every day of the month flips from "before" to "after" exactly once.
#[test]
fn cutover_is_monotone_within_month() {
    for month in 1..=12 {
        let mut flips = 0;
        let mut prev = is_after_cutover(1984, month, 1, 0, 0).unwrap();
        for day in 2..=28 {
            let now = is_after_cutover(1984, month, day, 0, 0).unwrap();
            if now != prev {
                flips += 1;
            }
            assert!(!(prev && !now), "month {month} went back to before at day {day}");
            prev = now;
        }
        assert_eq!(flips, 1, "month {month}");
    }
}

/// JDN ↔ calendar round trip over several years of consecutive days.
#[test]
fn jdn_consecutive_days() {
    let start = julian_day_number(1999, 12, 25);
    for offset in 0..1500 {
        let (y, m, d) = jdn_to_calendar(start + offset);
        assert_eq!(julian_day_number(y, m, d), start + offset);
        assert!(CivilDateTime::new(y, m, d, 0, 0).is_ok(), "{y}-{m}-{d}");
    }
}

#[test]
fn parse_errors_are_invalid_input() {
    for bad in ["", "2024", "2024-13-01", "2024-01-32T10:00", "2024-01-01T10:61", "x"] {
        let err = CivilDateTime::parse(bad).unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput(_)), "{bad:?}: {err}");
    }
}

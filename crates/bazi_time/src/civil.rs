//! Local civil date-time with minute resolution.
//!
//! `CivilDateTime` is the single input type of the pillar calculator. It is
//! always a real Gregorian calendar instant: construction goes through
//! `chrono`, which rejects days such as 2023-02-29 or hours past 23.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::TimeError;
use crate::julian::julian_day_number;

/// Time of day assumed when the input carries only a date.
pub const DEFAULT_TIME: &str = "12:00";

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Local wall-clock date-time. Seconds are accepted on input and dropped.
///
/// Fields are private so every value, deserialized ones included, has passed
/// through [`CivilDateTime::new`] or the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CivilFields")]
pub struct CivilDateTime {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

/// Unchecked wire form of [`CivilDateTime`].
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CivilFields {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl TryFrom<CivilFields> for CivilDateTime {
    type Error = TimeError;

    fn try_from(f: CivilFields) -> Result<Self, Self::Error> {
        Self::new(f.year, f.month, f.day, f.hour, f.minute)
    }
}

impl CivilDateTime {
    /// Build a validated date-time.
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            TimeError::InvalidInput(format!("no such date: {year:04}-{month:02}-{day:02}"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            TimeError::InvalidInput(format!("no such time: {hour:02}:{minute:02}"))
        })?;
        Ok(Self::from_naive(date.and_time(time)))
    }

    /// Parse a date-time, falling back to [`DEFAULT_TIME`] for date-only input.
    pub fn parse(s: &str) -> Result<Self, TimeError> {
        Self::parse_with_default_time(s, DEFAULT_TIME)
    }

    /// Parse `YYYY-MM-DD[Thh:mm[:ss]]` (a space may replace the `T`, a
    /// trailing `Z` is ignored). Date-only input gets `default_time`.
    pub fn parse_with_default_time(s: &str, default_time: &str) -> Result<Self, TimeError> {
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        if s.is_empty() {
            return Err(TimeError::InvalidInput("empty date-time".into()));
        }

        if let Some(dt) = DATE_TIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            return Ok(Self::from_naive(dt));
        }

        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
            TimeError::InvalidInput(format!("expected YYYY-MM-DD[Thh:mm[:ss]], got {s:?}: {e}"))
        })?;
        let time = parse_time(default_time)?;
        Ok(Self::from_naive(date.and_time(time)))
    }

    fn from_naive(dt: NaiveDateTime) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Month, 1..=12.
    pub const fn month(&self) -> u32 {
        self.month
    }

    pub const fn day(&self) -> u32 {
        self.day
    }

    /// Hour, 0..=23.
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    pub const fn minute(&self) -> u32 {
        self.minute
    }

    /// Julian Day Number of the civil date (time of day ignored).
    pub fn julian_day_number(&self) -> i64 {
        julian_day_number(self.year, self.month, self.day)
    }
}

/// Parse a bare `hh:mm[:ss]` time of day.
pub fn parse_time(s: &str) -> Result<NaiveTime, TimeError> {
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s.trim(), fmt).ok())
        .ok_or_else(|| TimeError::InvalidInput(format!("expected hh:mm[:ss], got {s:?}")))
}

impl FromStr for CivilDateTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

//! Civil calendar support for the Bazi engine.
//!
//! This crate provides:
//! - `CivilDateTime`, a local wall-clock instant with minute resolution
//! - Gregorian ↔ Julian Day Number conversion
//! - An approximate solar-term (節入り) estimator used for month cutovers
//!
//! No timezone conversion is performed anywhere: inputs are taken as the
//! wall-clock time at the place of birth.

pub mod civil;
pub mod error;
pub mod julian;
pub mod solar_term;

pub use civil::{CivilDateTime, DEFAULT_TIME};
pub use error::TimeError;
pub use julian::{julian_day_number, jdn_to_calendar};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, SolarTermCutover, is_after_cutover, solar_term_cutover,
};

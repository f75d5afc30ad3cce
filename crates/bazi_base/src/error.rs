//! Error types for Bazi calculations.

use bazi_time::TimeError;
use thiserror::Error;

/// Errors from Bazi table lookups and chart computation.
///
/// Every variant is terminal for the computation that produced it; no
/// partial chart is ever returned alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum BaziError {
    /// Unparseable or non-existent date-time.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A stem, branch or sexagenary value outside its closed set.
    #[error("invalid symbol: {0}")]
    InvalidSymbol(String),
    /// Static table data or a configuration value is malformed.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

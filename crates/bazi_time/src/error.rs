//! Error types for civil date-time handling.

use thiserror::Error;

/// Errors from date-time parsing or calendar validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The input could not be parsed, or names a day/time that does not exist.
    #[error("invalid date-time input: {0}")]
    InvalidInput(String),
}

//! Error types for civil time handling.

use thiserror::Error;

/// Errors from civil date parsing and validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day triple does not name a Gregorian calendar day.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Time-of-day component out of range.
    #[error("invalid time of day {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// UTC offset outside [-14h, +14h].
    #[error("UTC offset {0}h outside [-14, +14]")]
    InvalidOffset(f64),
    /// Text could not be parsed as a date or instant.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<chrono::ParseError> for TimeError {
    fn from(e: chrono::ParseError) -> Self {
        Self::Parse(e.to_string())
    }
}

//! Error types for time-domain search.

use panchang_base::{EphemerisError, VedicError};
use panchang_time::TimeError;
use thiserror::Error;

/// Errors from searches, snapshots and the boundary batch.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The ephemeris provider failed.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
    /// A search window closed without the expected crossing.
    #[error("no crossing found: {0}")]
    NoCrossingFound(&'static str),
    /// Invalid search configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// Classification rule rejected its input.
    #[error("classification error: {0}")]
    Vedic(#[from] VedicError),
    /// Error from civil time handling.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Boundary cache could not be read, written or validated.
    #[error("boundary cache: {0}")]
    Cache(String),
}

impl From<serde_json::Error> for SearchError {
    fn from(e: serde_json::Error) -> Self {
        Self::Cache(e.to_string())
    }
}

impl From<std::io::Error> for SearchError {
    fn from(e: std::io::Error) -> Self {
        Self::Cache(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panchang_base::Body;

    #[test]
    fn ephemeris_converts() {
        let e: SearchError = EphemerisError::Unsupported(Body::Mars).into();
        assert!(matches!(e, SearchError::Ephemeris(_)));
        assert_eq!(e.to_string(), "ephemeris error: Mars not supported by this provider");
    }

    #[test]
    fn no_crossing_message() {
        let e = SearchError::NoCrossingFound("tithi end");
        assert_eq!(e.to_string(), "no crossing found: tithi end");
    }
}

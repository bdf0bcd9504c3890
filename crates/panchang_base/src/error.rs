//! Error types for panchang classification.

use panchang_time::TimeError;
use thiserror::Error;

/// Errors from classification and masa rules.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// An element or month index outside its modulus.
    #[error("{kind} index {index} outside 0..{modulus}")]
    IndexOutOfRange {
        kind: &'static str,
        index: u32,
        modulus: u32,
    },
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Error from civil time handling.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}

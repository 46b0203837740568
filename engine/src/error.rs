//! Error types
//!
//! Generation never fails; degenerate inputs (empty ranges, short slices)
//! have defined results. The only errors are an empty `choice` and invalid
//! configuration.

use thiserror::Error;

/// Errors surfaced by the engine
#[derive(Debug, Error, PartialEq)]
pub enum RngError {
    #[error("Cannot choose from an empty sequence")]
    EmptySequence,

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for RngError {
    fn from(err: serde_json::Error) -> Self {
        RngError::InvalidConfig(err.to_string())
    }
}

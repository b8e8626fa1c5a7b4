//! Error types for provider operations.

use frontier_core::FrontierError;
use thiserror::Error;

/// Common error type for provider operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TraitError {
    /// Requested asset not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Source not available
    #[error("source not available: {0}")]
    SourceNotAvailable(String),

    /// Not enough history to derive a statistic
    #[error("insufficient data: {0}")]
    InsufficientData(String),

    /// Operation timed out
    #[error("timeout")]
    Timeout,

    /// Parse/deserialization error
    #[error("parse error: {0}")]
    ParseError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for TraitError {
    fn from(e: std::io::Error) -> Self {
        TraitError::IoError(e.to_string())
    }
}

impl From<FrontierError> for TraitError {
    fn from(e: FrontierError) -> Self {
        TraitError::InvalidInput(e.to_string())
    }
}

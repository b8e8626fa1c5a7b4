//! CLI error types.

use frontier_core::FrontierError;
use frontier_traits::TraitError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Missing required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// Price file does not exist.
    #[error("Price file not found: {0}")]
    PriceFileNotFound(String),

    /// Engine or input validation error.
    #[error(transparent)]
    Frontier(#[from] FrontierError),

    /// Statistics provider error.
    #[error("Statistics error: {0}")]
    Provider(#[from] TraitError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

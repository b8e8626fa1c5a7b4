//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Matrix is singular (not invertible).
    #[error("Singular matrix: cannot invert")]
    SingularMatrix,

    /// Matrix is invertible but not positive definite.
    #[error("Matrix is not positive definite")]
    NotPositiveDefinite,

    /// Matrix is not square.
    #[error("Matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// Matrix is not symmetric within tolerance.
    #[error("Matrix is not symmetric: [{row},{col}] = {upper:.6e} but [{col},{row}] = {lower:.6e}")]
    NotSymmetric {
        /// Row of the offending upper-triangle entry.
        row: usize,
        /// Column of the offending upper-triangle entry.
        col: usize,
        /// Upper-triangle value.
        upper: f64,
        /// Mirrored lower-triangle value.
        lower: f64,
    },

    /// Matrix or vector dimensions are incompatible.
    #[error("Incompatible dimensions: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// A value that must be finite is NaN or infinite.
    #[error("Non-finite value in {context}")]
    NonFinite {
        /// Where the value was found.
        context: String,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl MathError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Creates a non-finite value error.
    #[must_use]
    pub fn non_finite(context: impl Into<String>) -> Self {
        Self::NonFinite {
            context: context.into(),
        }
    }
}

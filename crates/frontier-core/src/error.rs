//! Error types for frontier computations.
//!
//! Every failure of the engine is one of three kinds: the caller broke a
//! precondition, the inputs do not span a frontier, or the requested target
//! lies off the frontier. Errors are terminal; nothing is retried.

use frontier_math::MathError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A specialized Result type for frontier operations.
pub type FrontierResult<T> = Result<T, FrontierError>;

/// The main error type for frontier operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrontierError {
    /// A precondition on the inputs was violated.
    #[error("Validation error: {reason}")]
    Validation {
        /// Which precondition failed.
        reason: String,
    },

    /// The inputs do not define a usable frontier.
    #[error("Degenerate frontier: {reason}")]
    DegenerateFrontier {
        /// Why the frontier is degenerate.
        reason: String,
    },

    /// The requested volatility is below the global minimum.
    #[error(
        "Unattainable target: volatility {requested:.6} is below the minimum attainable {minimum:.6}"
    )]
    UnattainableTarget {
        /// Requested volatility.
        requested: f64,
        /// Volatility of the minimum-variance portfolio.
        minimum: f64,
    },
}

/// Classification of a [`FrontierError`], used by outer layers to map
/// failures onto exit codes and HTTP statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierErrorKind {
    /// See [`FrontierError::Validation`].
    Validation,
    /// See [`FrontierError::DegenerateFrontier`].
    DegenerateFrontier,
    /// See [`FrontierError::UnattainableTarget`].
    UnattainableTarget,
}

impl fmt::Display for FrontierErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrontierErrorKind::Validation => "validation_error",
            FrontierErrorKind::DegenerateFrontier => "degenerate_frontier",
            FrontierErrorKind::UnattainableTarget => "unattainable_target",
        };
        write!(f, "{name}")
    }
}

impl FrontierError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    /// Creates a degenerate frontier error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateFrontier {
            reason: reason.into(),
        }
    }

    /// Creates an unattainable target error.
    #[must_use]
    pub fn unattainable(requested: f64, minimum: f64) -> Self {
        Self::UnattainableTarget { requested, minimum }
    }

    /// Returns the kind of this error.
    #[must_use]
    pub fn kind(&self) -> FrontierErrorKind {
        match self {
            Self::Validation { .. } => FrontierErrorKind::Validation,
            Self::DegenerateFrontier { .. } => FrontierErrorKind::DegenerateFrontier,
            Self::UnattainableTarget { .. } => FrontierErrorKind::UnattainableTarget,
        }
    }
}

impl From<MathError> for FrontierError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::SingularMatrix => {
                Self::degenerate("covariance matrix is singular")
            }
            MathError::NotPositiveDefinite => {
                Self::degenerate("covariance matrix is not positive definite")
            }
            other => Self::validation(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        assert_eq!(
            FrontierError::validation("x").kind(),
            FrontierErrorKind::Validation
        );
        assert_eq!(
            FrontierError::degenerate("x").kind(),
            FrontierErrorKind::DegenerateFrontier
        );
        assert_eq!(
            FrontierError::unattainable(0.1, 0.2).kind(),
            FrontierErrorKind::UnattainableTarget
        );
    }

    #[test]
    fn test_error_display() {
        let err = FrontierError::unattainable(0.1, 0.166_410);
        let msg = err.to_string();
        assert!(msg.contains("0.100000"));
        assert!(msg.contains("0.166410"));

        assert_eq!(
            FrontierErrorKind::DegenerateFrontier.to_string(),
            "degenerate_frontier"
        );
    }

    #[test]
    fn test_from_math_error() {
        let err: FrontierError = MathError::SingularMatrix.into();
        assert_eq!(err.kind(), FrontierErrorKind::DegenerateFrontier);

        let err: FrontierError = MathError::NotPositiveDefinite.into();
        assert_eq!(err.kind(), FrontierErrorKind::DegenerateFrontier);

        let err: FrontierError = MathError::NotSquare { rows: 2, cols: 3 }.into();
        assert_eq!(err.kind(), FrontierErrorKind::Validation);
        assert!(err.to_string().contains("2x3"));
    }
}

//! Portfolio targets.

use crate::error::{FrontierError, FrontierResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the caller wants an optimal portfolio to hit.
///
/// `NoTarget` is distinct from `TargetReturn(0.0)`: without a target the
/// risky-only optimum is the minimum-variance portfolio, while the
/// risk-free path has nothing to place a position on.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Target {
    /// No target supplied.
    #[default]
    NoTarget,
    /// Target expected return (decimal).
    TargetReturn(f64),
    /// Target volatility (decimal, strictly positive).
    TargetVolatility(f64),
}

impl Target {
    /// Builds a target from the two optional caller inputs.
    ///
    /// Supplying both is an error; supplying neither yields
    /// [`Target::NoTarget`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use frontier_core::types::Target;
    ///
    /// assert_eq!(Target::from_inputs(Some(0.15), None).unwrap(), Target::TargetReturn(0.15));
    /// assert!(Target::from_inputs(Some(0.15), Some(0.2)).is_err());
    /// ```
    pub fn from_inputs(
        target_return: Option<f64>,
        target_volatility: Option<f64>,
    ) -> FrontierResult<Self> {
        let target = match (target_return, target_volatility) {
            (Some(_), Some(_)) => {
                return Err(FrontierError::validation(
                    "supply either a target return or a target volatility, not both",
                ))
            }
            (Some(r), None) => Target::TargetReturn(r),
            (None, Some(v)) => Target::TargetVolatility(v),
            (None, None) => Target::NoTarget,
        };
        target.validate()?;
        Ok(target)
    }

    /// Checks the value carried by the target.
    pub fn validate(&self) -> FrontierResult<()> {
        match *self {
            Target::NoTarget => Ok(()),
            Target::TargetReturn(r) if !r.is_finite() => {
                Err(FrontierError::validation("target return must be finite"))
            }
            Target::TargetVolatility(v) if !(v.is_finite() && v > 0.0) => Err(
                FrontierError::validation("target volatility must be finite and positive"),
            ),
            _ => Ok(()),
        }
    }

    /// Returns true when no target was supplied.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self, Target::NoTarget)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::NoTarget => write!(f, "none"),
            Target::TargetReturn(r) => write!(f, "return {:.2}%", r * 100.0),
            Target::TargetVolatility(v) => write!(f, "volatility {:.2}%", v * 100.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_inputs() {
        assert_eq!(Target::from_inputs(None, None).unwrap(), Target::NoTarget);
        assert_eq!(
            Target::from_inputs(None, Some(0.2)).unwrap(),
            Target::TargetVolatility(0.2)
        );
        assert_eq!(
            Target::from_inputs(Some(0.0), None).unwrap(),
            Target::TargetReturn(0.0)
        );
        assert_ne!(Target::TargetReturn(0.0), Target::NoTarget);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Target::from_inputs(Some(0.1), Some(0.1)).is_err());
        assert!(Target::from_inputs(None, Some(0.0)).is_err());
        assert!(Target::from_inputs(None, Some(-0.1)).is_err());
        assert!(Target::from_inputs(Some(f64::INFINITY), None).is_err());
        assert!(Target::TargetVolatility(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Target::TargetReturn(0.15)).unwrap();
        assert_eq!(json, r#"{"kind":"target_return","value":0.15}"#);

        let none: Target = serde_json::from_str(r#"{"kind":"no_target"}"#).unwrap();
        assert!(none.is_none());
    }
}

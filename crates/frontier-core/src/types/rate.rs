//! Risk-free rate.

use crate::error::{FrontierError, FrontierResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Annualized risk-free rate in decimal form (`0.02` is 2%).
///
/// May be zero or negative; must be finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RiskFreeRate(f64);

impl RiskFreeRate {
    /// A zero risk-free rate.
    pub const ZERO: Self = Self(0.0);

    /// Creates a risk-free rate from a decimal value.
    pub fn new(rate: f64) -> FrontierResult<Self> {
        if rate.is_finite() {
            Ok(Self(rate))
        } else {
            Err(FrontierError::validation("risk-free rate must be finite"))
        }
    }

    /// Creates a risk-free rate from a percentage (`2.0` is 2%).
    pub fn from_percent(percent: f64) -> FrontierResult<Self> {
        Self::new(percent / 100.0)
    }

    /// Returns the decimal value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for RiskFreeRate {
    type Error = FrontierError;

    fn try_from(rate: f64) -> FrontierResult<Self> {
        Self::new(rate)
    }
}

impl From<RiskFreeRate> for f64 {
    fn from(rate: RiskFreeRate) -> Self {
        rate.0
    }
}

impl fmt::Display for RiskFreeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}%", self.0 * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rate() {
        assert_eq!(RiskFreeRate::default(), RiskFreeRate::ZERO);
        assert_relative_eq!(RiskFreeRate::from_percent(2.5).unwrap().value(), 0.025);
        assert!(RiskFreeRate::new(f64::NAN).is_err());
        assert_eq!(RiskFreeRate::new(0.02).unwrap().to_string(), "2.0000%");
    }
}

//! Engine configuration.

use frontier_core::{FrontierError, FrontierResult};
use serde::{Deserialize, Serialize};

/// Tunables for curve sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of evenly spaced returns sampled for each curve.
    pub curve_points: usize,
    /// Amount added to the largest expected return to get the upper end of
    /// the sampled return range.
    pub curve_return_margin: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            curve_points: 1000,
            curve_return_margin: 0.1,
        }
    }
}

impl EngineConfig {
    /// Sets the curve density.
    #[must_use]
    pub fn with_curve_points(mut self, points: usize) -> Self {
        self.curve_points = points;
        self
    }

    /// Sets the return margin above the largest expected return.
    #[must_use]
    pub fn with_curve_return_margin(mut self, margin: f64) -> Self {
        self.curve_return_margin = margin;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> FrontierResult<()> {
        if self.curve_points < 2 {
            return Err(FrontierError::validation(
                "curve_points must be at least 2",
            ));
        }
        if !self.curve_return_margin.is_finite() {
            return Err(FrontierError::validation(
                "curve_return_margin must be finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.curve_points, 1000);
        assert_eq!(config.curve_return_margin, 0.1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate() {
        assert!(EngineConfig::default().with_curve_points(1).validate().is_err());
        assert!(EngineConfig::default()
            .with_curve_return_margin(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_deserialize() {
        let config: EngineConfig = serde_json::from_str(r#"{"curve_points": 50}"#).unwrap();
        assert_eq!(config.curve_points, 50);
        assert_eq!(config.curve_return_margin, 0.1);
    }
}

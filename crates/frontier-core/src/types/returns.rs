//! Expected return vector.

use crate::error::{FrontierError, FrontierResult};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Annualized expected returns, one per asset in [`AssetSet`] order.
///
/// Every entry is finite.
///
/// [`AssetSet`]: crate::types::AssetSet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ReturnVector {
    values: DVector<f64>,
}

impl ReturnVector {
    /// Creates a return vector from annualized returns.
    pub fn new(values: Vec<f64>) -> FrontierResult<Self> {
        if values.is_empty() {
            return Err(FrontierError::validation("return vector is empty"));
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(FrontierError::validation(format!(
                "expected return at index {i} is not finite"
            )));
        }
        Ok(Self {
            values: DVector::from_vec(values),
        })
    }

    /// Number of assets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed vector.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the underlying vector.
    #[must_use]
    pub fn as_vector(&self) -> &DVector<f64> {
        &self.values
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.values.as_slice()
    }

    /// Largest expected return.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}

impl TryFrom<Vec<f64>> for ReturnVector {
    type Error = FrontierError;

    fn try_from(values: Vec<f64>) -> FrontierResult<Self> {
        Self::new(values)
    }
}

impl From<ReturnVector> for Vec<f64> {
    fn from(returns: ReturnVector) -> Self {
        returns.values.as_slice().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let r = ReturnVector::new(vec![0.10, 0.20, 0.05]).unwrap();
        assert_eq!(r.len(), 3);
        assert_eq!(r.max(), 0.20);
        assert_eq!(r.as_slice(), &[0.10, 0.20, 0.05]);
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = ReturnVector::new(vec![0.1, f64::NAN]).unwrap_err();
        assert!(err.to_string().contains("index 1"));
        assert!(ReturnVector::new(vec![]).is_err());
    }
}

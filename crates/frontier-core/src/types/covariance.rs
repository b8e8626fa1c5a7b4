//! Covariance matrix of asset returns.

use crate::error::FrontierResult;
use frontier_math::linear_algebra::{check_symmetric, matrix_from_rows, matrix_to_rows};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Annualized N×N covariance of asset returns.
///
/// Construction rejects non-square shapes, non-finite entries and asymmetry
/// beyond [`frontier_math::linear_algebra::SYMMETRY_TOLERANCE`]. Whether the
/// matrix is invertible is decided by the engine.
///
/// Serializes as row-major nested arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CovarianceMatrix {
    matrix: DMatrix<f64>,
}

impl CovarianceMatrix {
    /// Builds a covariance matrix from row-major data.
    pub fn from_rows(rows: &[Vec<f64>]) -> FrontierResult<Self> {
        let matrix = matrix_from_rows(rows)?;
        Self::from_matrix(matrix)
    }

    /// Wraps an existing matrix after validating it.
    pub fn from_matrix(matrix: DMatrix<f64>) -> FrontierResult<Self> {
        if matrix.iter().any(|v| !v.is_finite()) {
            return Err(frontier_math::MathError::non_finite("covariance matrix").into());
        }
        check_symmetric(&matrix)?;
        Ok(Self { matrix })
    }

    /// Builds a diagonal covariance matrix from per-asset variances.
    pub fn diagonal(variances: &[f64]) -> FrontierResult<Self> {
        let n = variances.len();
        Self::from_matrix(DMatrix::from_fn(n, n, |i, j| {
            if i == j {
                variances[i]
            } else {
                0.0
            }
        }))
    }

    /// Number of assets.
    #[must_use]
    pub fn size(&self) -> usize {
        self.matrix.nrows()
    }

    /// Returns the underlying matrix.
    #[must_use]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Variance of asset `i`.
    #[must_use]
    pub fn variance(&self, i: usize) -> Option<f64> {
        (i < self.size()).then(|| self.matrix[(i, i)])
    }

    /// Row-major copy of the entries.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        matrix_to_rows(&self.matrix)
    }
}

impl TryFrom<Vec<Vec<f64>>> for CovarianceMatrix {
    type Error = crate::error::FrontierError;

    fn try_from(rows: Vec<Vec<f64>>) -> FrontierResult<Self> {
        Self::from_rows(&rows)
    }
}

impl From<CovarianceMatrix> for Vec<Vec<f64>> {
    fn from(cov: CovarianceMatrix) -> Self {
        cov.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FrontierErrorKind;

    #[test]
    fn test_from_rows() {
        let cov = CovarianceMatrix::from_rows(&[vec![0.04, 0.01], vec![0.01, 0.09]]).unwrap();
        assert_eq!(cov.size(), 2);
        assert_eq!(cov.variance(1), Some(0.09));
        assert_eq!(cov.variance(2), None);
        assert_eq!(cov.to_rows(), vec![vec![0.04, 0.01], vec![0.01, 0.09]]);
    }

    #[test]
    fn test_diagonal() {
        let cov = CovarianceMatrix::diagonal(&[0.04, 0.09]).unwrap();
        assert_eq!(cov.as_matrix()[(0, 1)], 0.0);
        assert_eq!(cov.as_matrix()[(1, 1)], 0.09);
    }

    #[test]
    fn test_rejects_bad_shapes() {
        let ragged = CovarianceMatrix::from_rows(&[vec![0.04, 0.01], vec![0.01]]).unwrap_err();
        assert_eq!(ragged.kind(), FrontierErrorKind::Validation);

        let asym = CovarianceMatrix::from_rows(&[vec![0.04, 0.01], vec![0.03, 0.09]]).unwrap_err();
        assert_eq!(asym.kind(), FrontierErrorKind::Validation);
        assert!(asym.to_string().contains("symmetric"));

        let inf = CovarianceMatrix::from_rows(&[vec![f64::INFINITY, 0.0], vec![0.0, 0.09]]);
        assert!(inf.is_err());
    }

    #[test]
    fn test_serde_rows() {
        let cov: CovarianceMatrix = serde_json::from_str("[[0.04,0.0],[0.0,0.09]]").unwrap();
        assert_eq!(cov.size(), 2);
        assert_eq!(
            serde_json::to_string(&cov).unwrap(),
            "[[0.04,0.0],[0.0,0.09]]"
        );
    }
}

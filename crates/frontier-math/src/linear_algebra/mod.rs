//! Linear algebra utilities.
//!
//! This module provides the matrix operations needed by the closed-form
//! frontier engine: conversion from row-major data, symmetry checks,
//! inversion of symmetric positive definite matrices and quadratic forms.

use crate::error::{MathError, MathResult};
use nalgebra::{DMatrix, DVector};

/// Relative tolerance used when comparing mirrored matrix entries.
pub const SYMMETRY_TOLERANCE: f64 = 1e-10;

/// Builds a square matrix from row-major nested vectors.
///
/// Every row must have the same length as the number of rows and every
/// entry must be finite.
pub fn matrix_from_rows(rows: &[Vec<f64>]) -> MathResult<DMatrix<f64>> {
    let n = rows.len();

    for row in rows {
        if row.len() != n {
            return Err(MathError::NotSquare {
                rows: n,
                cols: row.len(),
            });
        }
    }

    if rows.iter().flatten().any(|v| !v.is_finite()) {
        return Err(MathError::non_finite("matrix entries"));
    }

    Ok(DMatrix::from_fn(n, n, |i, j| rows[i][j]))
}

/// Converts a square matrix back into row-major nested vectors.
pub fn matrix_to_rows(matrix: &DMatrix<f64>) -> Vec<Vec<f64>> {
    (0..matrix.nrows())
        .map(|i| matrix.row(i).iter().copied().collect())
        .collect()
}

/// Checks that a square matrix is symmetric within [`SYMMETRY_TOLERANCE`].
///
/// The tolerance is relative to the larger magnitude of each mirrored pair,
/// with an absolute floor of the tolerance itself.
pub fn check_symmetric(matrix: &DMatrix<f64>) -> MathResult<()> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(MathError::NotSquare {
            rows: n,
            cols: matrix.ncols(),
        });
    }

    for i in 0..n {
        for j in (i + 1)..n {
            let upper = matrix[(i, j)];
            let lower = matrix[(j, i)];
            let scale = upper.abs().max(lower.abs()).max(1.0);
            if (upper - lower).abs() > SYMMETRY_TOLERANCE * scale {
                return Err(MathError::NotSymmetric {
                    row: i,
                    col: j,
                    upper,
                    lower,
                });
            }
        }
    }

    Ok(())
}

/// Inverts a symmetric positive definite matrix via Cholesky decomposition.
///
/// Returns [`MathError::SingularMatrix`] when the matrix has no inverse and
/// [`MathError::NotPositiveDefinite`] when it is invertible but indefinite.
pub fn invert_positive_definite(matrix: &DMatrix<f64>) -> MathResult<DMatrix<f64>> {
    let n = matrix.nrows();
    if n != matrix.ncols() {
        return Err(MathError::NotSquare {
            rows: n,
            cols: matrix.ncols(),
        });
    }
    if n == 0 {
        return Err(MathError::insufficient_data(1, 0));
    }

    if matrix.amax() == 0.0 {
        return Err(MathError::SingularMatrix);
    }

    match matrix.clone().cholesky() {
        Some(cholesky) => {
            let l = cholesky.l();
            let min_pivot = min_diagonal(&l);
            if is_negligible_pivot(min_pivot * min_pivot, matrix) {
                return Err(MathError::SingularMatrix);
            }
            let inverse = cholesky.inverse();
            if inverse.iter().all(|v| v.is_finite()) {
                Ok(inverse)
            } else {
                Err(MathError::SingularMatrix)
            }
        }
        None => {
            let lu = matrix.clone().lu();
            if lu.is_invertible() && !is_negligible_pivot(min_diagonal(&lu.u()), matrix) {
                Err(MathError::NotPositiveDefinite)
            } else {
                Err(MathError::SingularMatrix)
            }
        }
    }
}

fn min_diagonal(factor: &DMatrix<f64>) -> f64 {
    (0..factor.nrows())
        .map(|i| factor[(i, i)].abs())
        .fold(f64::INFINITY, f64::min)
}

/// A pivot that is negligible relative to the largest entry of the factored
/// matrix marks it as numerically singular, even when the factorization
/// itself went through. Cholesky pivots are squared before the comparison.
fn is_negligible_pivot(pivot: f64, matrix: &DMatrix<f64>) -> bool {
    pivot <= 1e3 * f64::EPSILON * matrix.amax() * matrix.nrows() as f64
}

/// Computes the bilinear form `xᵗ M y`.
pub fn quadratic_form(x: &DVector<f64>, m: &DMatrix<f64>, y: &DVector<f64>) -> MathResult<f64> {
    if m.nrows() != x.len() {
        return Err(MathError::DimensionMismatch {
            expected: m.nrows(),
            actual: x.len(),
        });
    }
    if m.ncols() != y.len() {
        return Err(MathError::DimensionMismatch {
            expected: m.ncols(),
            actual: y.len(),
        });
    }

    Ok(x.dot(&(m * y)))
}

/// Matrix-vector product with a dimension check.
pub fn mat_vec(m: &DMatrix<f64>, v: &DVector<f64>) -> MathResult<DVector<f64>> {
    if m.ncols() != v.len() {
        return Err(MathError::DimensionMismatch {
            expected: m.ncols(),
            actual: v.len(),
        });
    }
    Ok(m * v)
}

//! Quadratic-form coefficients of the efficient frontier.
//!
//! With `Σ⁻¹` the inverse covariance, `μ` the expected returns and `1` the
//! ones vector:
//!
//! ```text
//! A = 1ᵗΣ⁻¹1    B = 1ᵗΣ⁻¹μ    C = μᵗΣ⁻¹μ    Δ = AC − B²
//! ```
//!
//! The risky-only frontier is the parabola `σ²(r) = (A r² − 2B r + C) / Δ`.

use frontier_core::{FrontierError, FrontierResult};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// `Δ` at or below this fraction of `|AC|` is treated as zero.
pub const DELTA_RELATIVE_TOLERANCE: f64 = 1e-10;

/// The scalars `A`, `B`, `C` and `Δ`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontierCoefficients {
    /// `1ᵗΣ⁻¹1`
    pub a: f64,
    /// `1ᵗΣ⁻¹μ`
    pub b: f64,
    /// `μᵗΣ⁻¹μ`
    pub c: f64,
    /// `AC − B²`
    pub delta: f64,
}

impl FrontierCoefficients {
    /// Computes the coefficients from `Σ⁻¹1` and `Σ⁻¹μ`.
    ///
    /// Fails with a degenerate frontier error when `Δ` is not strictly
    /// positive, which happens when the expected returns are all equal.
    pub(crate) fn from_products(
        returns: &DVector<f64>,
        inv_ones: &DVector<f64>,
        inv_returns: &DVector<f64>,
    ) -> FrontierResult<Self> {
        let a = inv_ones.sum();
        let b = inv_returns.sum();
        let c = returns.dot(inv_returns);
        let delta = a * c - b * b;

        if !(a.is_finite() && b.is_finite() && c.is_finite()) || a <= 0.0 {
            return Err(FrontierError::degenerate(
                "frontier coefficients are not finite",
            ));
        }
        if delta <= DELTA_RELATIVE_TOLERANCE * (a * c).abs() {
            return Err(FrontierError::degenerate(format!(
                "frontier has no spread in expected returns (delta = {delta:.3e})"
            )));
        }

        Ok(Self { a, b, c, delta })
    }

    /// Expected return of the minimum-variance portfolio, `B / A`.
    #[must_use]
    pub fn minimum_variance_return(&self) -> f64 {
        self.b / self.a
    }

    /// Volatility of the minimum-variance portfolio, `1 / √A`.
    #[must_use]
    pub fn minimum_volatility(&self) -> f64 {
        self.a.sqrt().recip()
    }

    /// Radicand `(A r² − 2B r + C) / Δ` of the frontier volatility at `r`.
    #[must_use]
    pub fn frontier_variance(&self, r: f64) -> f64 {
        (self.a * r * r - 2.0 * self.b * r + self.c) / self.delta
    }

    /// Frontier volatility at return `r`, or `None` where the radicand is
    /// negative.
    #[must_use]
    pub fn frontier_volatility(&self, r: f64) -> Option<f64> {
        let variance = self.frontier_variance(r);
        (variance >= 0.0).then(|| variance.sqrt())
    }

    /// `H = C − 2 rf B + rf² A`, the squared slope of the capital
    /// allocation line.
    #[must_use]
    pub fn capital_allocation_factor(&self, rf: f64) -> f64 {
        self.c - 2.0 * rf * self.b + rf * rf * self.a
    }
}

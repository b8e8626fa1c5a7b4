//! Portfolios produced by the engine.

use serde::{Deserialize, Serialize};

/// A weight vector with its risk and return coordinates.
///
/// Weights follow the order of the input returns. Entries may be negative
/// (short positions).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    /// Asset weights.
    pub weights: Vec<f64>,
    /// Annualized expected return.
    pub expected_return: f64,
    /// Annualized volatility.
    pub volatility: f64,
    /// `(expected_return − rf) / volatility`.
    pub sharpe_ratio: f64,
}

impl Portfolio {
    /// Sum of the asset weights.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// A blend of risky assets and the risk-free asset.
///
/// `risky.weights` are the risky-asset weights; the remainder is held in the
/// risk-free asset. A negative `risk_free_weight` means borrowing at the
/// risk-free rate. Return, volatility and Sharpe ratio on `risky` describe
/// the whole position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFreePortfolio {
    /// Risky weights and whole-position statistics.
    pub risky: Portfolio,
    /// Allocation to the risk-free asset, `1 − Σ risky weights`.
    pub risk_free_weight: f64,
}

impl RiskFreePortfolio {
    /// Annualized expected return of the position.
    #[must_use]
    pub fn expected_return(&self) -> f64 {
        self.risky.expected_return
    }

    /// Annualized volatility of the position.
    #[must_use]
    pub fn volatility(&self) -> f64 {
        self.risky.volatility
    }

    /// Sharpe ratio of the position.
    #[must_use]
    pub fn sharpe_ratio(&self) -> f64 {
        self.risky.sharpe_ratio
    }
}

/// The target return an optimal portfolio was built for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedTarget {
    /// Return the portfolio was solved for.
    pub target_return: f64,
    /// True when a requested return below the minimum-variance return was
    /// raised to it.
    pub clamped: bool,
}

impl ResolvedTarget {
    pub(crate) fn exact(target_return: f64) -> Self {
        Self {
            target_return,
            clamped: false,
        }
    }
}

//! The full result of a frontier computation.

use crate::curve::FrontierCurve;
use crate::portfolio::{Portfolio, ResolvedTarget, RiskFreePortfolio};
use frontier_core::Target;
use serde::{Deserialize, Serialize};

/// Everything the presentation layer needs from one engine run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioBundle {
    /// Global minimum-variance portfolio.
    pub minimum_variance: Portfolio,
    /// Maximum-Sharpe portfolio of risky assets.
    pub tangency: Portfolio,
    /// Optimal risky-only portfolio at the resolved target.
    pub optimal: Portfolio,
    /// Target return used for `optimal`.
    pub optimal_target: ResolvedTarget,
    /// Optimal blend with the risk-free asset.
    pub optimal_with_risk_free: RiskFreePortfolio,
    /// Target return used for `optimal_with_risk_free`.
    pub optimal_with_risk_free_target: ResolvedTarget,
    /// Risky-only efficient frontier.
    pub risky_curve: FrontierCurve,
    /// Capital allocation line through the tangency portfolio.
    pub capital_allocation_curve: FrontierCurve,
    /// Risk-free rate used throughout.
    pub risk_free_rate: f64,
    /// Target as requested by the caller.
    pub target: Target,
}

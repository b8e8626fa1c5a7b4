//! # Frontier Engine
//!
//! Closed-form Markowitz mean-variance analysis.
//!
//! Given expected returns `μ`, a covariance matrix `Σ`, a risk-free rate and
//! an optional [`Target`](frontier_core::Target), the engine derives:
//!
//! - the global minimum-variance portfolio
//! - the tangency (maximum-Sharpe) portfolio
//! - the optimal risky-only portfolio at the resolved target
//! - the optimal blend with the risk-free asset
//! - the risky-only frontier and the capital allocation line, sampled for
//!   plotting
//!
//! Everything follows from two-fund separation; `Σ` is inverted once and no
//! iterative solver is involved.
//!
//! ## Example
//!
//! ```rust
//! use frontier_core::prelude::*;
//! use frontier_engine::compute_frontier;
//!
//! let returns = ReturnVector::new(vec![0.10, 0.20]).unwrap();
//! let cov = CovarianceMatrix::diagonal(&[0.04, 0.09]).unwrap();
//! let rf = RiskFreeRate::new(0.02).unwrap();
//!
//! let bundle = compute_frontier(&returns, &cov, rf, Target::TargetReturn(0.15)).unwrap();
//! assert!(bundle.tangency.sharpe_ratio >= bundle.minimum_variance.sharpe_ratio);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

pub mod bundle;
pub mod coefficients;
pub mod config;
pub mod curve;
pub mod engine;
pub mod portfolio;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bundle::PortfolioBundle;
    pub use crate::coefficients::FrontierCoefficients;
    pub use crate::config::EngineConfig;
    pub use crate::curve::{FrontierCurve, FrontierPoint};
    pub use crate::engine::{compute_frontier, compute_frontier_with_config, FrontierEngine};
    pub use crate::portfolio::{Portfolio, ResolvedTarget, RiskFreePortfolio};
}

pub use bundle::PortfolioBundle;
pub use config::EngineConfig;
pub use engine::{compute_frontier, compute_frontier_with_config, FrontierEngine};
pub use portfolio::{Portfolio, ResolvedTarget, RiskFreePortfolio};

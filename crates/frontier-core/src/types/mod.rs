//! Domain types for mean-variance analysis.
//!
//! - [`AssetSet`]: ordered, unique asset identifiers
//! - [`ReturnVector`]: annualized expected returns in asset order
//! - [`CovarianceMatrix`]: annualized covariance of asset returns
//! - [`RiskFreeRate`]: annualized risk-free rate
//! - [`Target`]: optional return or volatility target

mod asset_set;
mod covariance;
mod rate;
mod returns;
mod target;

pub use asset_set::AssetSet;
pub use covariance::CovarianceMatrix;
pub use rate::RiskFreeRate;
pub use returns::ReturnVector;
pub use target::Target;

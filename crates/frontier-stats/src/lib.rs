//! # Frontier Stats
//!
//! Derivation of engine inputs from historical daily closes.
//!
//! - **Returns**: mean of annual returns measured on month-end closes
//! - **Risk**: annualized sample volatility and covariance of daily returns
//! - **Benchmark**: mean return, volatility and Sharpe ratio of a reference
//!   asset
//! - **Provider**: [`HistoricalStatistics`], a
//!   [`StatisticsProvider`](frontier_traits::StatisticsProvider) over any
//!   [`PriceHistorySource`](frontier_traits::PriceHistorySource)
//!
//! Series of different lengths are aligned on their most recent
//! observations before any cross-asset statistic is computed.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod benchmark;
pub mod config;
pub mod provider;
pub mod returns;
pub mod risk;

pub use benchmark::benchmark_statistics;
pub use config::StatisticsConfig;
pub use provider::HistoricalStatistics;
pub use returns::{annual_returns, daily_returns, mean_annual_return, monthly_closes, simple_returns};
pub use risk::{align_return_series, annualized_volatility, covariance_matrix, sample_covariance};

//! Benchmark statistics.

use frontier_math::{MathError, MathResult};
use frontier_traits::{BenchmarkStats, PriceHistory};

use crate::config::StatisticsConfig;
use crate::returns::{daily_returns, mean_annual_return};
use crate::risk::annualized_volatility;

/// Mean annual return, annualized volatility and Sharpe ratio of a
/// benchmark history.
pub fn benchmark_statistics(
    history: &PriceHistory,
    risk_free_rate: f64,
    config: &StatisticsConfig,
) -> MathResult<BenchmarkStats> {
    let mean_return = mean_annual_return(history, config)?;
    let volatility = annualized_volatility(&daily_returns(history, config)?, config.trading_days)?;
    if volatility == 0.0 {
        return Err(MathError::invalid_input(format!(
            "benchmark {} has zero volatility",
            history.asset
        )));
    }

    Ok(BenchmarkStats {
        mean_return,
        volatility,
        sharpe: (mean_return - risk_free_rate) / volatility,
    })
}

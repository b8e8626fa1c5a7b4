//! Statistics provider backed by price history.

use async_trait::async_trait;
use frontier_core::{AssetSet, CovarianceMatrix, ReturnVector, RiskFreeRate};
use frontier_math::MathError;
use frontier_traits::{
    AssetId, BenchmarkStats, PriceHistory, PriceHistorySource, StatisticsProvider, TraitError,
};
use tracing::debug;

use crate::benchmark::benchmark_statistics;
use crate::config::StatisticsConfig;
use crate::returns::{daily_returns, mean_annual_return};
use crate::risk::{annualized_volatility, covariance_matrix};

/// Derives engine inputs from any [`PriceHistorySource`].
///
/// Mean returns use the monthly window and risk statistics use the daily
/// window of the configuration; nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct HistoricalStatistics<S> {
    source: S,
    config: StatisticsConfig,
}

impl<S: PriceHistorySource> HistoricalStatistics<S> {
    /// Creates a provider with the default window.
    pub fn new(source: S) -> Self {
        Self::with_config(source, StatisticsConfig::default())
    }

    /// Creates a provider with an explicit configuration.
    pub fn with_config(source: S, config: StatisticsConfig) -> Self {
        Self { source, config }
    }

    /// The underlying price source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The statistics configuration.
    pub fn config(&self) -> &StatisticsConfig {
        &self.config
    }

    async fn history(&self, asset: &str) -> Result<PriceHistory, TraitError> {
        let history = self.source.history(&AssetId::new(asset)).await?;
        if history.window(self.config.start, self.config.end).is_empty() {
            return Err(TraitError::InsufficientData(format!(
                "{asset}: no prices between {} and {}",
                self.config.start, self.config.end
            )));
        }
        Ok(history)
    }
}

fn stats_error(asset: &str, err: MathError) -> TraitError {
    match err {
        MathError::InsufficientData { .. } => {
            TraitError::InsufficientData(format!("{asset}: {err}"))
        }
        other => TraitError::InvalidInput(format!("{asset}: {other}")),
    }
}

#[async_trait]
impl<S: PriceHistorySource> StatisticsProvider for HistoricalStatistics<S> {
    async fn returns(&self, assets: &AssetSet) -> Result<ReturnVector, TraitError> {
        let mut returns = Vec::with_capacity(assets.len());
        for asset in assets.iter() {
            let history = self.history(asset).await?;
            let mean = mean_annual_return(&history, &self.config)
                .map_err(|e| stats_error(asset, e))?;
            debug!(asset, mean_return = mean, "derived mean annual return");
            returns.push(mean);
        }
        Ok(ReturnVector::new(returns)?)
    }

    async fn covariance(&self, assets: &AssetSet) -> Result<CovarianceMatrix, TraitError> {
        let mut series = Vec::with_capacity(assets.len());
        for asset in assets.iter() {
            let history = self.history(asset).await?;
            let daily = daily_returns(&history, &self.config).map_err(|e| stats_error(asset, e))?;
            debug!(asset, observations = daily.len(), "collected daily returns");
            series.push(daily);
        }

        let rows = covariance_matrix(&series, self.config.trading_days)
            .map_err(|e| stats_error(&assets.to_string(), e))?;
        Ok(CovarianceMatrix::from_rows(&rows)?)
    }

    async fn volatilities(&self, assets: &AssetSet) -> Result<Vec<f64>, TraitError> {
        let mut volatilities = Vec::with_capacity(assets.len());
        for asset in assets.iter() {
            let history = self.history(asset).await?;
            let daily = daily_returns(&history, &self.config).map_err(|e| stats_error(asset, e))?;
            let sigma = annualized_volatility(&daily, self.config.trading_days)
                .map_err(|e| stats_error(asset, e))?;
            debug!(asset, volatility = sigma, "derived annualized volatility");
            volatilities.push(sigma);
        }
        Ok(volatilities)
    }

    async fn benchmark(
        &self,
        benchmark: &AssetId,
        risk_free_rate: RiskFreeRate,
    ) -> Result<BenchmarkStats, TraitError> {
        let history = self.history(benchmark.as_str()).await?;
        let stats = benchmark_statistics(&history, risk_free_rate.value(), &self.config)
            .map_err(|e| stats_error(benchmark.as_str(), e))?;
        debug!(
            benchmark = %benchmark,
            mean_return = stats.mean_return,
            volatility = stats.volatility,
            sharpe = stats.sharpe,
            "derived benchmark statistics"
        );
        Ok(stats)
    }
}

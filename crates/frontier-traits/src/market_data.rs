//! Market data traits.
//!
//! These traits define the two layers that feed the engine:
//! - [`PriceHistorySource`]: raw daily closes per asset
//! - [`StatisticsProvider`]: annualized returns, volatilities, covariance
//!   and benchmark statistics derived from a fixed historical window
//!
//! Misaligned or missing data is reported as a [`TraitError`] before the
//! engine is ever invoked.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TraitError;
use crate::ids::AssetId;
use frontier_core::{AssetSet, CovarianceMatrix, ReturnVector, RiskFreeRate};

// =============================================================================
// PRICE HISTORY
// =============================================================================

/// A single daily close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date
    pub date: NaiveDate,
    /// Closing price
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point.
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Daily closes of one asset, sorted by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceHistory {
    /// Asset the closes belong to
    pub asset: AssetId,
    /// Closes in ascending date order
    pub points: Vec<PricePoint>,
}

impl PriceHistory {
    /// Create a history, sorting the points by date.
    pub fn new(asset: AssetId, mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        Self { asset, points }
    }

    /// Number of closes.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when there are no closes.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// First and last date, if any.
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.points.first()?.date, self.points.last()?.date))
    }

    /// The closes dated within `[start, end)`.
    pub fn window(&self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            asset: self.asset.clone(),
            points: self
                .points
                .iter()
                .filter(|p| p.date >= start && p.date < end)
                .copied()
                .collect(),
        }
    }
}

/// Source of raw daily price history.
#[async_trait]
pub trait PriceHistorySource: Send + Sync {
    /// Full history for one asset.
    ///
    /// Unknown assets are [`TraitError::NotFound`].
    async fn history(&self, asset: &AssetId) -> Result<PriceHistory, TraitError>;

    /// Every asset the source can serve, sorted.
    async fn available_assets(&self) -> Result<Vec<AssetId>, TraitError>;
}

#[async_trait]
impl<T: PriceHistorySource + ?Sized> PriceHistorySource for Arc<T> {
    async fn history(&self, asset: &AssetId) -> Result<PriceHistory, TraitError> {
        (**self).history(asset).await
    }

    async fn available_assets(&self) -> Result<Vec<AssetId>, TraitError> {
        (**self).available_assets().await
    }
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Annualized statistics of a benchmark asset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkStats {
    /// Mean annual return
    pub mean_return: f64,
    /// Annualized volatility
    pub volatility: f64,
    /// `(mean_return − rf) / volatility`
    pub sharpe: f64,
}

/// All per-asset statistics for one request, in [`AssetSet`] order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketStatistics {
    /// Assets the statistics are indexed by
    pub assets: AssetSet,
    /// Annualized expected returns
    pub returns: ReturnVector,
    /// Annualized covariance
    pub covariance: CovarianceMatrix,
    /// Annualized volatility per asset
    pub volatilities: Vec<f64>,
}

/// Provider of the statistics the engine consumes.
#[async_trait]
pub trait StatisticsProvider: Send + Sync {
    /// Annualized expected returns.
    async fn returns(&self, assets: &AssetSet) -> Result<ReturnVector, TraitError>;

    /// Annualized covariance matrix.
    async fn covariance(&self, assets: &AssetSet) -> Result<CovarianceMatrix, TraitError>;

    /// Annualized volatility per asset.
    async fn volatilities(&self, assets: &AssetSet) -> Result<Vec<f64>, TraitError>;

    /// Mean return, volatility and Sharpe ratio of a benchmark asset.
    async fn benchmark(
        &self,
        benchmark: &AssetId,
        risk_free_rate: RiskFreeRate,
    ) -> Result<BenchmarkStats, TraitError>;

    /// All per-asset statistics at once.
    async fn snapshot(&self, assets: &AssetSet) -> Result<MarketStatistics, TraitError> {
        let returns = self.returns(assets).await?;
        let covariance = self.covariance(assets).await?;
        let volatilities = self.volatilities(assets).await?;
        Ok(MarketStatistics {
            assets: assets.clone(),
            returns,
            covariance,
            volatilities,
        })
    }
}

//! Request handlers.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use frontier_core::{AssetSet, CovarianceMatrix, ReturnVector, RiskFreeRate, Target};
use frontier_engine::{compute_frontier_with_config, EngineConfig, PortfolioBundle};
use frontier_stats::HistoricalStatistics;
use frontier_traits::{
    AssetId, MarketStatistics, PriceHistorySource, StatisticsProvider, TraitError,
};

use crate::config::ServerConfig;
use crate::error::ApiError;

/// Shared price source behind the statistics provider.
pub type SharedSource = Arc<dyn PriceHistorySource>;

/// Application state.
pub struct AppState {
    /// Statistics derived from the configured price source
    pub statistics: HistoricalStatistics<SharedSource>,
    /// Curve sampling for every request
    pub engine_config: EngineConfig,
    /// Used when a request omits `risk_free_rate`
    pub default_risk_free_rate: f64,
    /// Upper bound on provider calls
    pub request_timeout: Duration,
}

impl AppState {
    /// Builds the state from a price source and the server configuration.
    pub fn new(source: SharedSource, config: &ServerConfig) -> Self {
        Self {
            statistics: HistoricalStatistics::with_config(source, config.statistics.clone()),
            engine_config: config.engine.clone(),
            default_risk_free_rate: config.risk_free_rate,
            request_timeout: config.request_timeout(),
        }
    }

    async fn provider_call<T>(
        &self,
        call: impl Future<Output = Result<T, TraitError>>,
    ) -> Result<T, ApiError> {
        tokio::time::timeout(self.request_timeout, call)
            .await
            .map_err(|_| ApiError::Timeout(self.request_timeout))?
            .map_err(ApiError::from)
    }

    fn risk_free_rate(&self, requested: Option<f64>) -> Result<RiskFreeRate, ApiError> {
        Ok(RiskFreeRate::new(
            requested.unwrap_or(self.default_risk_free_rate),
        )?)
    }
}

// =============================================================================
// HEALTH
// =============================================================================

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    version: String,
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// ASSETS
// =============================================================================

/// Assets known to the price source.
#[derive(Debug, Serialize)]
pub struct AssetsResponse {
    assets: Vec<AssetId>,
}

/// List the assets the price source can serve.
pub async fn list_assets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<AssetsResponse>, ApiError> {
    let assets = state
        .provider_call(state.statistics.source().available_assets())
        .await?;
    Ok(Json(AssetsResponse { assets }))
}

// =============================================================================
// FRONTIER FROM RAW INPUTS
// =============================================================================

/// Request for a frontier over caller-supplied statistics.
#[derive(Debug, Deserialize)]
pub struct FrontierRequest {
    /// Annualized expected returns
    pub returns: Vec<f64>,
    /// Annualized covariance rows
    pub covariance: Vec<Vec<f64>>,
    /// Decimal fraction; the server default when absent
    pub risk_free_rate: Option<f64>,
    /// Target expected return
    pub target_return: Option<f64>,
    /// Target volatility
    pub target_volatility: Option<f64>,
}

/// Compute the portfolio bundle for raw inputs.
pub async fn compute_frontier(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FrontierRequest>,
) -> Result<Json<PortfolioBundle>, ApiError> {
    let target = Target::from_inputs(request.target_return, request.target_volatility)?;
    let risk_free_rate = state.risk_free_rate(request.risk_free_rate)?;
    let returns = ReturnVector::new(request.returns)?;
    let covariance = CovarianceMatrix::from_rows(&request.covariance)?;

    let bundle = compute_frontier_with_config(
        state.engine_config.clone(),
        &returns,
        &covariance,
        risk_free_rate,
        target,
    )?;

    Ok(Json(bundle))
}

// =============================================================================
// FRONTIER FROM ASSET IDENTIFIERS
// =============================================================================

/// Request for a frontier over assets served by the price source.
#[derive(Debug, Deserialize)]
pub struct AssetFrontierRequest {
    /// Asset identifiers, at least two
    pub assets: Vec<String>,
    /// Benchmark asset to place next to the frontier
    pub benchmark: Option<String>,
    /// Decimal fraction; the server default when absent
    pub risk_free_rate: Option<f64>,
    /// Target expected return
    pub target_return: Option<f64>,
    /// Target volatility
    pub target_volatility: Option<f64>,
}

/// Risk/return location of a single asset.
#[derive(Debug, Serialize)]
pub struct AssetMarker {
    asset: String,
    expected_return: f64,
    volatility: f64,
}

/// Risk/return location of the benchmark.
#[derive(Debug, Serialize)]
pub struct BenchmarkMarker {
    asset: AssetId,
    mean_return: f64,
    volatility: f64,
    sharpe: f64,
}

/// Bundle plus the markers a chart needs.
#[derive(Debug, Serialize)]
pub struct AssetFrontierResponse {
    frontier: PortfolioBundle,
    assets: Vec<AssetMarker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    benchmark: Option<BenchmarkMarker>,
}

/// Derive statistics for the requested assets and compute the bundle.
///
/// Statistics are fetched once and shared by the engine and the markers.
pub async fn compute_asset_frontier(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AssetFrontierRequest>,
) -> Result<Json<AssetFrontierResponse>, ApiError> {
    let target = Target::from_inputs(request.target_return, request.target_volatility)?;
    let risk_free_rate = state.risk_free_rate(request.risk_free_rate)?;
    let assets = AssetSet::new(&request.assets)?;

    let stats = state
        .provider_call(state.statistics.snapshot(&assets))
        .await?;

    let frontier = compute_frontier_with_config(
        state.engine_config.clone(),
        &stats.returns,
        &stats.covariance,
        risk_free_rate,
        target,
    )?;

    let benchmark = match request.benchmark {
        Some(id) => {
            let asset = AssetId::new(id);
            let point = state
                .provider_call(state.statistics.benchmark(&asset, risk_free_rate))
                .await?;
            Some(BenchmarkMarker {
                asset,
                mean_return: point.mean_return,
                volatility: point.volatility,
                sharpe: point.sharpe,
            })
        }
        None => None,
    };

    info!(assets = %assets, target = %target, "computed asset frontier");

    Ok(Json(AssetFrontierResponse {
        frontier,
        assets: markers(&stats),
        benchmark,
    }))
}

fn markers(stats: &MarketStatistics) -> Vec<AssetMarker> {
    stats
        .assets
        .iter()
        .zip(stats.returns.as_slice())
        .zip(&stats.volatilities)
        .map(|((asset, &expected_return), &volatility)| AssetMarker {
            asset: asset.to_string(),
            expected_return,
            volatility,
        })
        .collect()
}

// =============================================================================
// STATISTICS
// =============================================================================

/// Request for per-asset statistics.
#[derive(Debug, Deserialize)]
pub struct StatisticsRequest {
    /// Asset identifiers, at least two
    pub assets: Vec<String>,
}

/// Per-asset returns, volatilities and covariance.
pub async fn statistics(
    State(state): State<Arc<AppState>>,
    Json(request): Json<StatisticsRequest>,
) -> Result<Json<MarketStatistics>, ApiError> {
    let assets = AssetSet::new(&request.assets)?;
    let stats = state
        .provider_call(state.statistics.snapshot(&assets))
        .await?;
    Ok(Json(stats))
}

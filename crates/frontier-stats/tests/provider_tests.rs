//! Integration tests for the historical statistics provider.

use approx::assert_relative_eq;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use frontier_core::prelude::*;
use frontier_ext_file::InMemoryPriceSource;
use frontier_stats::{
    annualized_volatility, daily_returns, mean_annual_return, HistoricalStatistics,
    StatisticsConfig,
};
use frontier_traits::{AssetId, PricePoint, StatisticsProvider, TraitError};

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// Weekday closes over the default window with a steady drift and a
/// deterministic oscillation.
fn synthetic_prices(start_price: f64, drift: f64, wobble: f64, phase: f64) -> Vec<PricePoint> {
    let mut points = Vec::new();
    let mut date = NaiveDate::from_ymd_opt(2009, 12, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
    let mut t = 0.0_f64;

    while date <= end {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            let close = start_price * (drift * t).exp() * (1.0 + wobble * (0.7 * t + phase).sin());
            points.push(PricePoint::new(date, close));
            t += 1.0;
        }
        date += Duration::days(1);
    }

    points
}

fn provider() -> HistoricalStatistics<InMemoryPriceSource> {
    let source = InMemoryPriceSource::new()
        .with_points("GROWTH", synthetic_prices(100.0, 0.0004, 0.01, 0.0))
        .with_points("INCOME", synthetic_prices(50.0, 0.0001, 0.004, 1.3))
        .with_points("BENCH", synthetic_prices(200.0, 0.0003, 0.008, 2.1));
    HistoricalStatistics::new(source)
}

fn assets() -> AssetSet {
    AssetSet::new(["growth", "income"]).unwrap()
}

// =============================================================================
// TESTS
// =============================================================================

#[tokio::test]
async fn test_returns_follow_drift() {
    let returns = provider().returns(&assets()).await.unwrap();
    assert_eq!(returns.len(), 2);

    // ~252 weekdays per year of exp(drift) growth
    assert!(returns.as_slice()[0] > returns.as_slice()[1]);
    assert!(returns.as_slice()[0] > 0.05);
    assert!(returns.as_slice()[1] > 0.0);
}

#[tokio::test]
async fn test_covariance_diagonal_matches_volatility() {
    let provider = provider();
    let cov = provider.covariance(&assets()).await.unwrap();
    let vols = provider.volatilities(&assets()).await.unwrap();

    assert_eq!(cov.size(), 2);
    for (i, vol) in vols.iter().enumerate() {
        assert_relative_eq!(cov.variance(i).unwrap(), vol * vol, epsilon = 1e-12);
    }
}

#[tokio::test]
async fn test_snapshot_is_consistent() {
    let provider = provider();
    let snapshot = provider.snapshot(&assets()).await.unwrap();

    assert_eq!(snapshot.assets, assets());
    assert_eq!(snapshot.returns, provider.returns(&assets()).await.unwrap());
    assert_eq!(snapshot.volatilities.len(), 2);
}

#[tokio::test]
async fn test_benchmark() {
    let provider = provider();
    let rf = RiskFreeRate::new(0.02).unwrap();
    let stats = provider.benchmark(&AssetId::new("bench"), rf).await.unwrap();

    assert!(stats.volatility > 0.0);
    assert_relative_eq!(
        stats.sharpe,
        (stats.mean_return - 0.02) / stats.volatility,
        epsilon = 1e-12
    );

    let history = frontier_traits::PriceHistory::new(
        AssetId::new("BENCH"),
        synthetic_prices(200.0, 0.0003, 0.008, 2.1),
    );
    let config = StatisticsConfig::default();
    assert_relative_eq!(
        stats.mean_return,
        mean_annual_return(&history, &config).unwrap(),
        epsilon = 1e-12
    );
    assert_relative_eq!(
        stats.volatility,
        annualized_volatility(&daily_returns(&history, &config).unwrap(), 252).unwrap(),
        epsilon = 1e-12
    );
}

/// The default sources with the 2009-12-15 GROWTH close tripled.
fn december_shocked_source() -> InMemoryPriceSource {
    let mut growth = synthetic_prices(100.0, 0.0004, 0.01, 0.0);
    let mid_december = NaiveDate::from_ymd_opt(2009, 12, 15).unwrap();
    for point in growth.iter_mut().filter(|p| p.date == mid_december) {
        point.close *= 3.0;
    }
    InMemoryPriceSource::new()
        .with_points("GROWTH", growth)
        .with_points("INCOME", synthetic_prices(50.0, 0.0001, 0.004, 1.3))
}

#[tokio::test]
async fn test_december_2009_closes_do_not_move_risk() {
    let baseline = provider();
    let shocked = HistoricalStatistics::new(december_shocked_source());

    let expected = baseline.volatilities(&assets()).await.unwrap();
    let actual = shocked.volatilities(&assets()).await.unwrap();
    for (a, e) in actual.iter().zip(&expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-15);
    }
    assert_eq!(
        shocked.covariance(&assets()).await.unwrap(),
        baseline.covariance(&assets()).await.unwrap()
    );

    // Stretching the daily window back to the monthly start picks the shock up
    let config = StatisticsConfig::default().with_daily_window(
        NaiveDate::from_ymd_opt(2009, 12, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 4).unwrap(),
    );
    let widened = HistoricalStatistics::with_config(december_shocked_source(), config)
        .volatilities(&assets())
        .await
        .unwrap();
    assert!(widened[0] > expected[0]);
}

#[tokio::test]
async fn test_unknown_asset() {
    let assets = AssetSet::new(["GROWTH", "MISSING"]).unwrap();
    let err = provider().returns(&assets).await.unwrap_err();
    assert!(matches!(err, TraitError::NotFound(_)));
}

#[tokio::test]
async fn test_window_without_data() {
    let config = StatisticsConfig::default().with_window(
        NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(1991, 1, 1).unwrap(),
    );
    let source = InMemoryPriceSource::new()
        .with_points("GROWTH", synthetic_prices(100.0, 0.0004, 0.01, 0.0))
        .with_points("INCOME", synthetic_prices(50.0, 0.0001, 0.004, 1.3));
    let provider = HistoricalStatistics::with_config(source, config);

    let err = provider.volatilities(&assets()).await.unwrap_err();
    assert!(matches!(err, TraitError::InsufficientData(_)));
}

#[tokio::test]
async fn test_short_history_is_insufficient() {
    let short: Vec<PricePoint> = synthetic_prices(100.0, 0.0004, 0.01, 0.0)
        .into_iter()
        .take(100)
        .collect();
    let source = InMemoryPriceSource::new()
        .with_points("GROWTH", short)
        .with_points("INCOME", synthetic_prices(50.0, 0.0001, 0.004, 1.3));
    let provider = HistoricalStatistics::new(source);

    let err = provider.returns(&assets()).await.unwrap_err();
    assert!(matches!(err, TraitError::InsufficientData(_)));
}

#[tokio::test]
async fn test_statistics_feed_the_engine() {
    let snapshot = provider().snapshot(&assets()).await.unwrap();
    let rf = RiskFreeRate::new(0.01).unwrap();
    let bundle = frontier_engine::compute_frontier(
        &snapshot.returns,
        &snapshot.covariance,
        rf,
        Target::TargetVolatility(0.2),
    );
    assert!(bundle.is_ok());
}

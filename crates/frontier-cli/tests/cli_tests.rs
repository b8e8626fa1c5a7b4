//! End-to-end tests for the `frontier` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// FIXTURES
// =============================================================================

fn frontier() -> Command {
    let mut cmd = Command::cargo_bin("frontier").unwrap();
    cmd.env_remove("FRONTIER_PRICES").env_remove("RUST_LOG");
    cmd
}

/// Two uncorrelated assets with 10% and 20% expected return.
fn write_statistics(dir: &Path) -> (String, String) {
    let returns = dir.join("returns.json");
    let covariance = dir.join("covariance.json");
    fs::write(&returns, "[0.10, 0.20]").unwrap();
    fs::write(&covariance, "[[0.04, 0.0], [0.0, 0.09]]").unwrap();
    (
        returns.display().to_string(),
        covariance.display().to_string(),
    )
}

/// Weekday closes for three assets over 2020-2021.
fn write_prices(dir: &Path) -> String {
    let path = dir.join("prices.csv");
    let mut csv = String::from("date,asset,close\n");

    let assets = [
        ("GROWTH", 100.0, 0.0005, 0.012, 0.0),
        ("INCOME", 50.0, 0.0002, 0.005, 1.1),
        ("BENCH", 200.0, 0.0003, 0.008, 2.3),
    ];
    let mut date = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2021, 12, 31).unwrap();
    let mut t = 0.0_f64;
    while date <= end {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            for (asset, start, drift, wobble, phase) in assets {
                let close = start * (drift * t).exp() * (1.0 + wobble * (0.9 * t + phase).sin());
                csv.push_str(&format!("{date},{asset},{close:.6}\n"));
            }
            t += 1.0;
        }
        date += Duration::days(1);
    }

    fs::write(&path, csv).unwrap();
    path.display().to_string()
}

fn window() -> [&'static str; 4] {
    ["--start", "2020-01-01", "--end", "2022-01-01"]
}

// =============================================================================
// OPTIMIZE
// =============================================================================

#[test]
fn test_optimize_json_from_statistics() {
    let dir = TempDir::new().unwrap();
    let (returns, covariance) = write_statistics(dir.path());

    let output = frontier()
        .args(["--format", "json", "optimize", "--returns", &returns])
        .args(["--covariance", &covariance, "--rf", "2", "--target-return", "15"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["assets"], serde_json::json!(["ASSET1", "ASSET2"]));

    let mvp: Vec<f64> = serde_json::from_value(report["minimum_variance"]["weights"].clone()).unwrap();
    assert!((mvp[0] - 0.692_308).abs() < 1e-6);
    assert!((mvp.iter().sum::<f64>() - 1.0).abs() < 1e-10);

    let optimal_return = report["optimal"]["expected_return"].as_f64().unwrap();
    assert!((optimal_return - 0.15).abs() < 1e-10);
    assert_eq!(report["optimal_target"]["clamped"], false);

    let with_rf = &report["optimal_with_risk_free"];
    let risky: Vec<f64> = serde_json::from_value(with_rf["risky"]["weights"].clone()).unwrap();
    let cash = with_rf["risk_free_weight"].as_f64().unwrap();
    assert!((risky.iter().sum::<f64>() + cash - 1.0).abs() < 1e-10);
}

#[test]
fn test_optimize_table_shows_cash_row() {
    let dir = TempDir::new().unwrap();
    let (returns, covariance) = write_statistics(dir.path());

    frontier()
        .args(["optimize", "--returns", &returns, "--covariance", &covariance])
        .args(["--assets", "stocks,bonds", "--target-return", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Portfolio Weights"))
        .stdout(predicate::str::contains("STOCKS"))
        .stdout(predicate::str::contains("CASH"));
}

#[test]
fn test_optimize_without_target_reports_mvp_and_tangency() {
    let dir = TempDir::new().unwrap();
    let (returns, covariance) = write_statistics(dir.path());

    let output = frontier()
        .args(["--format", "json", "optimize", "--returns", &returns])
        .args(["--covariance", &covariance, "--rf", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["optimal"].is_null());
    let tangency_return = report["tangency"]["expected_return"].as_f64().unwrap();
    assert!((tangency_return - 0.15).abs() < 1e-10);
}

#[test]
fn test_optimize_rejects_two_targets() {
    let dir = TempDir::new().unwrap();
    let (returns, covariance) = write_statistics(dir.path());

    frontier()
        .args(["optimize", "--returns", &returns, "--covariance", &covariance])
        .args(["--target-return", "15", "--target-volatility", "20"])
        .assert()
        .failure();
}

#[test]
fn test_optimize_unattainable_volatility() {
    let dir = TempDir::new().unwrap();
    let (returns, covariance) = write_statistics(dir.path());

    frontier()
        .args(["optimize", "--returns", &returns, "--covariance", &covariance])
        .args(["--target-volatility", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unattainable target"));
}

#[test]
fn test_optimize_singular_covariance() {
    let dir = TempDir::new().unwrap();
    let (returns, _) = write_statistics(dir.path());
    let covariance = dir.path().join("singular.json");
    fs::write(&covariance, "[[0.04, 0.06], [0.06, 0.09]]").unwrap();

    frontier()
        .args(["optimize", "--returns", &returns])
        .args(["--covariance", &covariance.display().to_string()])
        .args(["--target-return", "15"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("singular"));
}

#[test]
fn test_optimize_from_prices_with_benchmark() {
    let dir = TempDir::new().unwrap();
    let prices = write_prices(dir.path());

    let output = frontier()
        .args(["--format", "json", "optimize", "--prices", &prices])
        .args(["--assets", "GROWTH,INCOME", "--target-volatility", "30"])
        .args(["--benchmark", "BENCH"])
        .args(window())
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(report["benchmark"]["volatility"].as_f64().unwrap() > 0.0);
    assert_eq!(report["benchmark"]["asset"], "BENCH");
}

#[test]
fn test_missing_price_file() {
    frontier()
        .args(["optimize", "--prices", "/nonexistent/prices.csv", "--assets", "A,B"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Price file not found"));
}

// =============================================================================
// STATS AND CURVE
// =============================================================================

#[test]
fn test_stats_json() {
    let dir = TempDir::new().unwrap();
    let prices = write_prices(dir.path());

    let output = frontier()
        .args(["--format", "json", "stats", "--prices", &prices, "--assets", "growth,income"])
        .args(window())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let volatilities = stats["volatilities"].as_array().unwrap();
    assert_eq!(volatilities.len(), 2);

    // Diagonal of the covariance is the squared volatility
    let variance = stats["covariance"][0][0].as_f64().unwrap();
    let vol = volatilities[0].as_f64().unwrap();
    assert!((variance - vol * vol).abs() < 1e-10);
}

#[test]
fn test_stats_table() {
    let dir = TempDir::new().unwrap();
    let prices = write_prices(dir.path());

    frontier()
        .args(["stats", "--prices", &prices, "--assets", "GROWTH,INCOME"])
        .args(window())
        .assert()
        .success()
        .stdout(predicate::str::contains("Annualized Covariance"))
        .stdout(predicate::str::contains("GROWTH"));
}

#[test]
fn test_stats_invalid_date() {
    let dir = TempDir::new().unwrap();
    let prices = write_prices(dir.path());

    frontier()
        .args(["stats", "--prices", &prices, "--assets", "GROWTH,INCOME"])
        .args(["--start", "01/01/2020"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn test_curve_csv() {
    let dir = TempDir::new().unwrap();
    let (returns, covariance) = write_statistics(dir.path());

    let output = frontier()
        .args(["--format", "csv", "curve", "--returns", &returns])
        .args(["--covariance", &covariance, "--rf", "2", "--points", "11"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("curve,expected_return,volatility"));
    let count = |prefix: &str| stdout.lines().filter(|l| l.starts_with(prefix)).count();
    assert_eq!(count("risky,"), 11);
    assert_eq!(count("cal,"), 11);
}

//! Optimize command implementation.
//!
//! Computes the minimum-variance and tangency portfolios, and the optimal
//! portfolios for a target return or volatility with and without the
//! risk-free asset.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use frontier_core::{AssetSet, RiskFreeRate, Target};
use frontier_engine::{FrontierEngine, Portfolio, ResolvedTarget, RiskFreePortfolio};
use frontier_traits::{AssetId, BenchmarkStats, StatisticsProvider};

use crate::cli::OutputFormat;
use crate::commands::{from_percent, InputArgs};
use crate::error::CliError;
use crate::output::{format_percent, print_header, print_json, print_output, print_warning, KeyValue};

/// Arguments for the optimize command.
#[derive(Args, Debug)]
pub struct OptimizeArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Risk-free rate (as percentage, e.g., 2.0 for 2%)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub rf: f64,

    /// Target expected return (as percentage)
    #[arg(long, conflicts_with = "target_volatility", allow_negative_numbers = true)]
    pub target_return: Option<f64>,

    /// Target volatility (as percentage)
    #[arg(long)]
    pub target_volatility: Option<f64>,

    /// Benchmark asset to report alongside the portfolios (requires --prices)
    #[arg(short, long)]
    pub benchmark: Option<String>,
}

/// Everything the optimize command reports.
#[derive(Debug, Serialize)]
struct OptimizeReport {
    assets: AssetSet,
    risk_free_rate: f64,
    target: Target,
    minimum_variance: Portfolio,
    tangency: Option<Portfolio>,
    optimal: Option<Portfolio>,
    optimal_target: Option<ResolvedTarget>,
    optimal_with_risk_free: Option<RiskFreePortfolio>,
    optimal_with_risk_free_target: Option<ResolvedTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    benchmark: Option<BenchmarkReport>,
}

#[derive(Debug, Serialize)]
struct BenchmarkReport {
    asset: AssetId,
    #[serde(flatten)]
    stats: BenchmarkStats,
}

#[derive(Debug, Serialize, Tabled)]
struct WeightRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Min Variance")]
    minimum_variance: String,
    #[tabled(rename = "Tangency")]
    tangency: String,
    #[tabled(rename = "Optimal")]
    optimal: String,
    #[tabled(rename = "Optimal + Cash")]
    optimal_with_risk_free: String,
}

/// Execute the optimize command.
pub async fn execute(args: OptimizeArgs, format: OutputFormat) -> Result<()> {
    let risk_free_rate = RiskFreeRate::from_percent(args.rf)?;
    let target = Target::from_inputs(
        args.target_return.map(from_percent),
        args.target_volatility.map(from_percent),
    )?;

    let inputs = args.inputs.load().await?;
    let engine = FrontierEngine::new(&inputs.returns, &inputs.covariance, risk_free_rate)?;

    let report = if target.is_none() {
        let tangency = match engine.tangency() {
            Ok(portfolio) => Some(portfolio),
            Err(e) => {
                print_warning(&format!("No tangency portfolio: {e}"));
                None
            }
        };
        OptimizeReport {
            assets: inputs.assets.clone(),
            risk_free_rate: risk_free_rate.value(),
            target,
            minimum_variance: engine.minimum_variance(),
            tangency,
            optimal: None,
            optimal_target: None,
            optimal_with_risk_free: None,
            optimal_with_risk_free_target: None,
            benchmark: None,
        }
    } else {
        let bundle = engine.compute(target)?;
        OptimizeReport {
            assets: inputs.assets.clone(),
            risk_free_rate: bundle.risk_free_rate,
            target: bundle.target,
            minimum_variance: bundle.minimum_variance,
            tangency: Some(bundle.tangency),
            optimal: Some(bundle.optimal),
            optimal_target: Some(bundle.optimal_target),
            optimal_with_risk_free: Some(bundle.optimal_with_risk_free),
            optimal_with_risk_free_target: Some(bundle.optimal_with_risk_free_target),
            benchmark: None,
        }
    };

    let benchmark = match &args.benchmark {
        Some(symbol) => {
            if !args.inputs.uses_prices() {
                return Err(CliError::MissingArgument("--prices (for --benchmark)".into()).into());
            }
            let provider = args.inputs.prices.provider()?;
            let asset = AssetId::new(symbol);
            let stats = provider.benchmark(&asset, risk_free_rate).await?;
            Some(BenchmarkReport { asset, stats })
        }
        None => None,
    };
    let report = OptimizeReport { benchmark, ..report };

    info!(assets = report.assets.len(), target = %report.target, "optimization complete");

    match format {
        OutputFormat::Table => print_tables(&report)?,
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv => print_output(&weight_rows(&report), format)?,
        OutputFormat::Minimal => {
            let headline = report
                .optimal_with_risk_free
                .as_ref()
                .map(|p| &p.risky)
                .or(report.tangency.as_ref())
                .unwrap_or(&report.minimum_variance);
            println!(
                "{:.6} {:.6} {:.6}",
                headline.expected_return, headline.volatility, headline.sharpe_ratio
            );
        }
    }

    Ok(())
}

fn weight_rows(report: &OptimizeReport) -> Vec<WeightRow> {
    let cell = |portfolio: Option<&Portfolio>, i: usize| {
        portfolio
            .and_then(|p| p.weights.get(i))
            .map(|w| format!("{w:.6}"))
            .unwrap_or_default()
    };
    let with_rf = report.optimal_with_risk_free.as_ref();

    let mut rows: Vec<WeightRow> = report
        .assets
        .iter()
        .enumerate()
        .map(|(i, asset)| WeightRow {
            asset: asset.to_string(),
            minimum_variance: cell(Some(&report.minimum_variance), i),
            tangency: cell(report.tangency.as_ref(), i),
            optimal: cell(report.optimal.as_ref(), i),
            optimal_with_risk_free: cell(with_rf.map(|p| &p.risky), i),
        })
        .collect();

    if let Some(p) = with_rf {
        rows.push(WeightRow {
            asset: "CASH".to_string(),
            minimum_variance: String::new(),
            tangency: String::new(),
            optimal: String::new(),
            optimal_with_risk_free: format!("{:.6}", p.risk_free_weight),
        });
    }
    rows
}

fn portfolio_metrics(results: &mut Vec<KeyValue>, label: &str, portfolio: &Portfolio) {
    results.push(KeyValue::from_percent(format!("{label} Return"), portfolio.expected_return));
    results.push(KeyValue::from_percent(format!("{label} Volatility"), portfolio.volatility));
    results.push(KeyValue::from_f64(format!("{label} Sharpe"), portfolio.sharpe_ratio, 4));
}

fn print_tables(report: &OptimizeReport) -> Result<()> {
    print_header("Portfolio Weights");
    print_output(&weight_rows(report), OutputFormat::Table)?;

    let mut results = vec![
        KeyValue::from_percent("Risk-Free Rate", report.risk_free_rate),
        KeyValue::new("Target", report.target.to_string()),
        KeyValue::new("", ""),
    ];
    portfolio_metrics(&mut results, "Min Variance", &report.minimum_variance);
    if let Some(tangency) = &report.tangency {
        portfolio_metrics(&mut results, "Tangency", tangency);
    }
    if let Some(optimal) = &report.optimal {
        portfolio_metrics(&mut results, "Optimal", optimal);
    }
    if let Some(with_rf) = &report.optimal_with_risk_free {
        portfolio_metrics(&mut results, "Optimal + Cash", &with_rf.risky);
        results.push(KeyValue::from_percent("Cash Weight", with_rf.risk_free_weight));
    }

    print_header("Portfolio Metrics");
    print_output(&results, OutputFormat::Table)?;

    for (label, resolved) in [
        ("risky-only", report.optimal_target),
        ("with risk-free asset", report.optimal_with_risk_free_target),
    ] {
        if let Some(resolved) = resolved.filter(|r| r.clamped) {
            print_warning(&format!(
                "Target below the minimum-variance return; {label} portfolio uses {}",
                format_percent(resolved.target_return)
            ));
        }
    }

    if let Some(benchmark) = &report.benchmark {
        print_header(&format!("Benchmark {}", benchmark.asset));
        let rows = vec![
            KeyValue::from_percent("Mean Return", benchmark.stats.mean_return),
            KeyValue::from_percent("Volatility", benchmark.stats.volatility),
            KeyValue::from_f64("Sharpe", benchmark.stats.sharpe, 4),
        ];
        print_output(&rows, OutputFormat::Table)?;
    }

    Ok(())
}

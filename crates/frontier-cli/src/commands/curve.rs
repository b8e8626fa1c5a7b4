//! Curve command implementation.
//!
//! Samples the risky-only frontier and the capital allocation line over the
//! same return grid, for plotting.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use frontier_core::RiskFreeRate;
use frontier_engine::curve::FrontierCurve;
use frontier_engine::{EngineConfig, FrontierEngine};

use crate::cli::OutputFormat;
use crate::commands::InputArgs;
use crate::output::{print_header, print_json, print_output};

/// Arguments for the curve command.
#[derive(Args, Debug)]
pub struct CurveArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Risk-free rate (as percentage, e.g., 2.0 for 2%)
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub rf: f64,

    /// Number of return samples
    #[arg(long, default_value = "100")]
    pub points: usize,
}

#[derive(Debug, Serialize, Tabled)]
struct CurveRow {
    #[tabled(rename = "Curve")]
    curve: &'static str,
    #[tabled(rename = "Return", display_with = "fixed")]
    expected_return: f64,
    #[tabled(rename = "Volatility", display_with = "fixed")]
    volatility: f64,
}

fn fixed(value: &f64) -> String {
    format!("{value:.6}")
}

#[derive(Debug, Serialize)]
struct CurveReport {
    risky: FrontierCurve,
    capital_allocation: FrontierCurve,
}

fn rows<'a>(label: &'static str, curve: &'a FrontierCurve) -> impl Iterator<Item = CurveRow> + 'a {
    curve.iter().map(move |point| CurveRow {
        curve: label,
        expected_return: point.expected_return,
        volatility: point.volatility,
    })
}

/// Execute the curve command.
pub async fn execute(args: CurveArgs, format: OutputFormat) -> Result<()> {
    let risk_free_rate = RiskFreeRate::from_percent(args.rf)?;
    let config = EngineConfig::default().with_curve_points(args.points);

    let inputs = args.inputs.load().await?;
    let engine =
        FrontierEngine::with_config(config, &inputs.returns, &inputs.covariance, risk_free_rate)?;

    let report = CurveReport {
        risky: engine.risky_curve()?,
        capital_allocation: engine.capital_allocation_curve()?,
    };

    let table: Vec<CurveRow> = rows("risky", &report.risky)
        .chain(rows("cal", &report.capital_allocation))
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Efficient Frontier");
            print_output(&table, format)?;
        }
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Csv | OutputFormat::Minimal => print_output(&table, format)?,
    }

    Ok(())
}

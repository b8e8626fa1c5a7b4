//! Stats command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use frontier_traits::StatisticsProvider;

use crate::cli::OutputFormat;
use crate::commands::PriceArgs;
use crate::output::{format_percent, print_grid, print_header, print_json, print_output};

/// Arguments for the stats command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub prices: PriceArgs,
}

#[derive(Debug, Serialize, Tabled)]
struct AssetRow {
    #[tabled(rename = "Asset")]
    asset: String,
    #[tabled(rename = "Expected Return", display_with = "percent")]
    expected_return: f64,
    #[tabled(rename = "Volatility", display_with = "percent")]
    volatility: f64,
}

fn percent(value: &f64) -> String {
    format_percent(*value)
}

/// Execute the stats command.
pub async fn execute(args: StatsArgs, format: OutputFormat) -> Result<()> {
    let assets = args.prices.asset_set()?;
    let provider = args.prices.provider()?;
    let stats = provider.snapshot(&assets).await?;

    let rows: Vec<AssetRow> = assets
        .iter()
        .zip(stats.returns.as_slice())
        .zip(&stats.volatilities)
        .map(|((asset, &expected_return), &volatility)| AssetRow {
            asset: asset.to_string(),
            expected_return,
            volatility,
        })
        .collect();

    match format {
        OutputFormat::Table => {
            print_header("Asset Statistics");
            print_output(&rows, format)?;
            print_header("Annualized Covariance");
            print_grid(assets.as_slice(), &stats.covariance.to_rows(), 6);
        }
        OutputFormat::Json => print_json(&stats)?,
        OutputFormat::Csv => print_output(&rows, format)?,
        OutputFormat::Minimal => {
            for row in &rows {
                println!("{} {:.6} {:.6}", row.asset, row.expected_return, row.volatility);
            }
        }
    }

    Ok(())
}

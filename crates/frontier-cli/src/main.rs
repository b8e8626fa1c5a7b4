//! Frontier CLI - Mean-variance portfolio analysis from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Optimal portfolios for a 12% target return with a 2% risk-free rate
//! frontier optimize --prices prices.csv --assets SPY,AGG,GLD --rf 2 --target-return 12
//!
//! # Same, from precomputed statistics
//! frontier optimize --returns mu.json --covariance cov.json --target-volatility 15
//!
//! # Per-asset statistics and covariance
//! frontier stats --prices prices.csv --assets SPY,AGG,GLD
//!
//! # Curve data for plotting
//! frontier --format csv curve --prices prices.csv --assets SPY,AGG,GLD --rf 2
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli);

    // Set up output format
    let format = cli.format;

    // Execute command
    match cli.command {
        Commands::Optimize(args) => commands::optimize::execute(args, format).await?,
        Commands::Stats(args) => commands::stats::execute(args, format).await?,
        Commands::Curve(args) => commands::curve::execute(args, format).await?,
    }

    Ok(())
}

/// Logs go to stderr so that stdout stays machine-readable.
fn init_tracing(cli: &Cli) {
    let default = if cli.quiet {
        "error"
    } else if cli.verbose {
        "info,frontier=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

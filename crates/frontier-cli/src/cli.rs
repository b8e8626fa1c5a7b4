//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{CurveArgs, OptimizeArgs, StatsArgs};

/// Frontier - Closed-form Markowitz efficient frontier CLI
#[derive(Parser)]
#[command(name = "frontier")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log engine and statistics details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Compute the minimum-variance, tangency and optimal portfolios
    Optimize(OptimizeArgs),

    /// Show per-asset return, volatility and the covariance matrix
    Stats(StatsArgs),

    /// Export the risky-only frontier and the capital allocation line
    Curve(CurveArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (key numbers only)
    Minimal,
}

//! CLI command implementations.

pub mod curve;
pub mod optimize;
pub mod stats;

// Re-export submodules for convenience
pub use curve::CurveArgs;
pub use optimize::OptimizeArgs;
pub use stats::StatsArgs;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;

use frontier_core::{AssetSet, CovarianceMatrix, ReturnVector};
use frontier_ext_file::CsvPriceSource;
use frontier_stats::{HistoricalStatistics, StatisticsConfig};
use frontier_traits::StatisticsProvider;

use crate::error::{CliError, CliResult};

/// Price history inputs shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct PriceArgs {
    /// Long-format CSV of daily closes with a `date,asset,close` header
    #[arg(short, long, env = "FRONTIER_PRICES")]
    pub prices: Option<PathBuf>,

    /// Asset identifiers (comma-separated, e.g., "SPY,AGG,GLD")
    #[arg(short, long)]
    pub assets: Option<String>,

    /// First date of the statistics window (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// End of the statistics window, exclusive (YYYY-MM-DD)
    #[arg(long)]
    pub end: Option<String>,
}

impl PriceArgs {
    /// Parses the asset list.
    pub fn asset_set(&self) -> CliResult<AssetSet> {
        let list = self
            .assets
            .as_deref()
            .ok_or_else(|| CliError::MissingArgument("--assets".into()))?;
        Ok(AssetSet::parse_list(list)?)
    }

    /// Statistics windows, defaulting to the library windows.
    ///
    /// `--start` and `--end` move the monthly and daily windows together.
    pub fn statistics_config(&self) -> CliResult<StatisticsConfig> {
        let mut config = StatisticsConfig::default();
        if let Some(start) = &self.start {
            config.start = parse_date(start)?;
            config.daily_start = config.start;
        }
        if let Some(end) = &self.end {
            config.end = parse_date(end)?;
            config.daily_end = config.end;
        }
        Ok(config)
    }

    /// Opens the price file and wraps it in a statistics provider.
    pub fn provider(&self) -> CliResult<HistoricalStatistics<CsvPriceSource>> {
        let path = self
            .prices
            .as_ref()
            .ok_or_else(|| CliError::MissingArgument("--prices".into()))?;
        if !path.exists() {
            return Err(CliError::PriceFileNotFound(path.display().to_string()));
        }
        let source = CsvPriceSource::new(path)?;
        Ok(HistoricalStatistics::with_config(
            source,
            self.statistics_config()?,
        ))
    }
}

/// Engine inputs: either price history or precomputed statistics.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    #[command(flatten)]
    pub prices: PriceArgs,

    /// JSON array of annualized expected returns (decimal fractions).
    /// Takes precedence over --prices.
    #[arg(long, requires = "covariance")]
    pub returns: Option<PathBuf>,

    /// JSON array of covariance rows matching --returns
    #[arg(long, requires = "returns")]
    pub covariance: Option<PathBuf>,
}

/// Statistics ready for the engine.
#[derive(Debug, Clone)]
pub struct EngineInputs {
    pub assets: AssetSet,
    pub returns: ReturnVector,
    pub covariance: CovarianceMatrix,
}

impl InputArgs {
    /// Whether the inputs come from a price file.
    pub fn uses_prices(&self) -> bool {
        self.returns.is_none()
    }

    /// Loads returns and covariance from files or derives them from prices.
    pub async fn load(&self) -> CliResult<EngineInputs> {
        match (&self.returns, &self.covariance) {
            (Some(returns_path), Some(covariance_path)) => {
                let values: Vec<f64> = read_json(returns_path)?;
                let rows: Vec<Vec<f64>> = read_json(covariance_path)?;
                let returns = ReturnVector::new(values)?;
                let covariance = CovarianceMatrix::from_rows(&rows)?;
                let assets = match &self.prices.assets {
                    Some(list) => AssetSet::parse_list(list)?,
                    None => AssetSet::new((1..=returns.len()).map(|i| format!("ASSET{i}")))?,
                };
                Ok(EngineInputs {
                    assets,
                    returns,
                    covariance,
                })
            }
            _ => {
                let assets = self.prices.asset_set()?;
                let provider = self.prices.provider()?;
                let stats = provider.snapshot(&assets).await?;
                Ok(EngineInputs {
                    assets,
                    returns: stats.returns,
                    covariance: stats.covariance,
                })
            }
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &std::path::Path) -> CliResult<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Converts a percentage input (`5` for 5%) into a decimal fraction.
pub fn from_percent(value: f64) -> f64 {
    value / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics_config_defaults() {
        let config = PriceArgs::default().statistics_config().unwrap();
        assert_eq!(config, StatisticsConfig::default());
    }

    #[test]
    fn test_statistics_config_moves_both_windows() {
        let args = PriceArgs {
            start: Some("2020-01-01".into()),
            end: Some("2022-01-01".into()),
            ..PriceArgs::default()
        };
        let config = args.statistics_config().unwrap();
        assert_eq!(config.start, config.daily_start);
        assert_eq!(config.end, config.daily_end);
        assert_eq!(config.daily_start.to_string(), "2020-01-01");
    }

    #[test]
    fn test_statistics_config_rejects_bad_date() {
        let args = PriceArgs {
            end: Some("2022/01/01".into()),
            ..PriceArgs::default()
        };
        assert!(matches!(
            args.statistics_config(),
            Err(CliError::InvalidDate(_))
        ));
    }
}

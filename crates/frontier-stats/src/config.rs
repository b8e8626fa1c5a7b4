//! Statistics configuration.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Historical windows and annualization constants.
///
/// Mean returns come from month-end closes in `start..end`. Volatility,
/// covariance and benchmark risk come from daily closes in
/// `daily_start..daily_end`, which by default opens on the last close of
/// 2009 so the first daily return falls in 2010.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsConfig {
    /// First date of the window (inclusive).
    pub start: NaiveDate,
    /// Last date of the window (exclusive).
    pub end: NaiveDate,
    /// First date of the daily window (inclusive).
    pub daily_start: NaiveDate,
    /// Last date of the daily window (exclusive).
    pub daily_end: NaiveDate,
    /// Trading days per year, used to annualize daily statistics.
    pub trading_days: u32,
    /// Months per year, the step between annual observations.
    pub months_per_year: usize,
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2009, 12, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2025, 1, 4).unwrap_or(NaiveDate::MAX),
            daily_start: NaiveDate::from_ymd_opt(2009, 12, 31).unwrap_or(NaiveDate::MIN),
            daily_end: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or(NaiveDate::MAX),
            trading_days: 252,
            months_per_year: 12,
        }
    }
}

impl StatisticsConfig {
    /// Sets both the monthly and the daily window.
    #[must_use]
    pub fn with_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start = start;
        self.end = end;
        self.daily_start = start;
        self.daily_end = end;
        self
    }

    /// Sets only the daily window.
    #[must_use]
    pub fn with_daily_window(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.daily_start = start;
        self.daily_end = end;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StatisticsConfig::default();
        assert_eq!(config.start.to_string(), "2009-12-01");
        assert_eq!(config.end.to_string(), "2025-01-04");
        assert_eq!(config.daily_start.to_string(), "2009-12-31");
        assert_eq!(config.daily_end.to_string(), "2025-01-01");
        assert_eq!(config.trading_days, 252);
        assert_eq!(config.months_per_year, 12);
    }

    #[test]
    fn test_deserialize_dates() {
        let config: StatisticsConfig =
            serde_json::from_str(r#"{"start": "2015-01-01", "trading_days": 260}"#).unwrap();
        assert_eq!(config.start, NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
        assert_eq!(config.trading_days, 260);
        assert_eq!(config.months_per_year, 12);
        assert_eq!(config.daily_start.to_string(), "2009-12-31");
    }

    #[test]
    fn test_with_window_moves_daily_window() {
        let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
        let config = StatisticsConfig::default().with_window(start, end);
        assert_eq!((config.daily_start, config.daily_end), (start, end));

        let daily_start = NaiveDate::from_ymd_opt(2020, 12, 31).unwrap();
        let config = config.with_daily_window(daily_start, end);
        assert_eq!(config.start, start);
        assert_eq!(config.daily_start, daily_start);
    }
}

//! Return series and mean annual returns.

use chrono::Datelike;
use frontier_math::{MathError, MathResult};
use frontier_traits::PriceHistory;

use crate::config::StatisticsConfig;

/// Simple returns `(p[i] − p[i−1]) / p[i−1]` of consecutive closes.
///
/// Fewer than two closes give an empty series.
pub fn simple_returns(closes: &[f64]) -> MathResult<Vec<f64>> {
    closes
        .windows(2)
        .map(|w| {
            if w[0] == 0.0 || !w[0].is_finite() || !w[1].is_finite() {
                Err(MathError::invalid_input(format!(
                    "cannot compute a return from {} to {}",
                    w[0], w[1]
                )))
            } else {
                Ok((w[1] - w[0]) / w[0])
            }
        })
        .collect()
}

/// Last close of each calendar month, in date order.
pub fn monthly_closes(history: &PriceHistory) -> Vec<f64> {
    let mut closes: Vec<f64> = Vec::new();
    let mut current: Option<(i32, u32)> = None;

    for point in &history.points {
        let month = (point.date.year(), point.date.month());
        if current == Some(month) {
            if let Some(last) = closes.last_mut() {
                *last = point.close;
            }
        } else {
            closes.push(point.close);
            current = Some(month);
        }
    }

    closes
}

/// Returns over each complete year of monthly closes.
///
/// Year `i` runs from close `i·m` to close `(i+1)·m` where `m` is
/// `months_per_year`; a trailing partial year is ignored.
pub fn annual_returns(monthly: &[f64], months_per_year: usize) -> MathResult<Vec<f64>> {
    if months_per_year == 0 {
        return Err(MathError::invalid_input("months_per_year must be positive"));
    }
    if monthly.len() <= months_per_year {
        return Err(MathError::insufficient_data(
            months_per_year + 1,
            monthly.len(),
        ));
    }

    let years = (monthly.len() - 1) / months_per_year;
    let anchors: Vec<f64> = (0..=years).map(|i| monthly[i * months_per_year]).collect();
    simple_returns(&anchors)
}

/// Mean annual return of a history clipped to the configured window.
pub fn mean_annual_return(history: &PriceHistory, config: &StatisticsConfig) -> MathResult<f64> {
    let window = history.window(config.start, config.end);
    let annual = annual_returns(&monthly_closes(&window), config.months_per_year)?;
    Ok(annual.iter().sum::<f64>() / annual.len() as f64)
}

/// Daily simple returns of a history clipped to the configured daily window.
pub fn daily_returns(history: &PriceHistory, config: &StatisticsConfig) -> MathResult<Vec<f64>> {
    simple_returns(&history.window(config.daily_start, config.daily_end).closes())
}

//! Volatility and covariance of daily returns.

use frontier_math::{MathError, MathResult};

/// Sample standard deviation (`ddof = 1`) annualized by `√trading_days`.
pub fn annualized_volatility(daily_returns: &[f64], trading_days: u32) -> MathResult<f64> {
    let variance = sample_covariance(daily_returns, daily_returns)?;
    Ok((variance * f64::from(trading_days)).sqrt())
}

/// Truncates every series to the length of the shortest, keeping the most
/// recent observations.
pub fn align_return_series(series: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let min_len = series.iter().map(Vec::len).min().unwrap_or(0);
    series
        .iter()
        .map(|s| s[s.len() - min_len..].to_vec())
        .collect()
}

/// Annualized sample covariance matrix of daily return series.
///
/// Series are aligned to their common tail first. The result is exactly
/// symmetric.
pub fn covariance_matrix(series: &[Vec<f64>], trading_days: u32) -> MathResult<Vec<Vec<f64>>> {
    let aligned = align_return_series(series);
    let n = aligned.len();
    let scale = f64::from(trading_days);
    let mut cov = vec![vec![0.0; n]; n];

    for i in 0..n {
        for j in i..n {
            let c = sample_covariance(&aligned[i], &aligned[j])? * scale;
            cov[i][j] = c;
            cov[j][i] = c;
        }
    }

    Ok(cov)
}

/// Sample covariance (`ddof = 1`) of two equal-length series.
pub fn sample_covariance(x: &[f64], y: &[f64]) -> MathResult<f64> {
    if x.len() != y.len() {
        return Err(MathError::DimensionMismatch {
            expected: x.len(),
            actual: y.len(),
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(MathError::insufficient_data(2, n));
    }

    let mean_x = x.iter().sum::<f64>() / n as f64;
    let mean_y = y.iter().sum::<f64>() / n as f64;
    let sum: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum();
    Ok(sum / (n - 1) as f64)
}

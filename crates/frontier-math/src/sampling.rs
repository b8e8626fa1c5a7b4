//! Evenly spaced sampling grids.

use crate::error::{MathError, MathResult};

/// Returns `n` evenly spaced values from `start` to `end`, both inclusive.
///
/// Follows the usual `linspace` convention: a single point yields `[start]`,
/// and the last point is exactly `end`.
///
/// # Example
///
/// ```rust
/// use frontier_math::sampling::linspace;
///
/// let grid = linspace(0.0, 1.0, 5).unwrap();
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, n: usize) -> MathResult<Vec<f64>> {
    if n == 0 {
        return Err(MathError::insufficient_data(1, 0));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(MathError::non_finite("linspace bounds"));
    }
    if n == 1 {
        return Ok(vec![start]);
    }

    let step = (end - start) / (n - 1) as f64;
    let mut grid: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
    grid[n - 1] = end;
    Ok(grid)
}

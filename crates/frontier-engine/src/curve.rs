//! Sampled frontier curves for plotting.

use serde::{Deserialize, Serialize};

/// One `(volatility, return)` coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrontierPoint {
    /// Annualized volatility.
    pub volatility: f64,
    /// Annualized expected return.
    pub expected_return: f64,
}

/// An ordered sequence of points, sampled by increasing return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FrontierCurve {
    points: Vec<FrontierPoint>,
}

impl FrontierCurve {
    pub(crate) fn from_points(points: Vec<FrontierPoint>) -> Self {
        Self { points }
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the curve has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points in sampling order.
    #[must_use]
    pub fn points(&self) -> &[FrontierPoint] {
        &self.points
    }

    /// Iterates over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, FrontierPoint> {
        self.points.iter()
    }

    /// Volatility coordinates.
    #[must_use]
    pub fn volatilities(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.volatility).collect()
    }

    /// Return coordinates.
    #[must_use]
    pub fn returns(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.expected_return).collect()
    }
}

impl<'a> IntoIterator for &'a FrontierCurve {
    type Item = &'a FrontierPoint;
    type IntoIter = std::slice::Iter<'a, FrontierPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

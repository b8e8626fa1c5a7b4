//! The closed-form frontier engine.
//!
//! [`FrontierEngine`] inverts the covariance matrix once, derives the
//! frontier coefficients, and answers every portfolio question from the two
//! products `Σ⁻¹1` and `Σ⁻¹μ`. Nothing is solved iteratively.

use crate::bundle::PortfolioBundle;
use crate::coefficients::FrontierCoefficients;
use crate::config::EngineConfig;
use crate::curve::{FrontierCurve, FrontierPoint};
use crate::portfolio::{Portfolio, ResolvedTarget, RiskFreePortfolio};
use frontier_core::{
    CovarianceMatrix, FrontierError, FrontierResult, ReturnVector, RiskFreeRate, Target,
};
use frontier_math::linear_algebra::{invert_positive_definite, mat_vec};
use frontier_math::sampling::linspace;
use nalgebra::DVector;
use tracing::{debug, info, warn};

/// Negative discriminants down to this value are treated as zero.
pub const DISCRIMINANT_TOLERANCE: f64 = 1e-12;

/// Relative tolerance on `B − rf·A` below which the tangency portfolio is
/// undefined.
pub const TANGENCY_TOLERANCE: f64 = 1e-12;

/// Relative tolerance on `B` below which the auxiliary fund is undefined.
const AUXILIARY_TOLERANCE: f64 = 1e-12;

/// Closed-form mean-variance engine for one set of inputs.
///
/// Construction validates the inputs and fails early; every method after
/// that is a fixed amount of vector arithmetic.
///
/// # Example
///
/// ```rust
/// use frontier_core::prelude::*;
/// use frontier_engine::FrontierEngine;
///
/// let returns = ReturnVector::new(vec![0.10, 0.20]).unwrap();
/// let cov = CovarianceMatrix::diagonal(&[0.04, 0.09]).unwrap();
/// let engine = FrontierEngine::new(&returns, &cov, RiskFreeRate::new(0.02).unwrap()).unwrap();
///
/// let mvp = engine.minimum_variance();
/// assert!((mvp.weights[0] - 0.6923).abs() < 1e-4);
///
/// let (optimal, _) = engine.optimal_risky(Target::NoTarget).unwrap();
/// assert!((optimal.volatility - mvp.volatility).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct FrontierEngine {
    config: EngineConfig,
    returns: DVector<f64>,
    risk_free_rate: f64,
    /// `Σ⁻¹1`
    inv_ones: DVector<f64>,
    /// `Σ⁻¹μ`
    inv_returns: DVector<f64>,
    coefficients: FrontierCoefficients,
}

impl FrontierEngine {
    /// Creates an engine with the default [`EngineConfig`].
    pub fn new(
        returns: &ReturnVector,
        cov: &CovarianceMatrix,
        risk_free_rate: RiskFreeRate,
    ) -> FrontierResult<Self> {
        Self::with_config(EngineConfig::default(), returns, cov, risk_free_rate)
    }

    /// Creates an engine with an explicit configuration.
    pub fn with_config(
        config: EngineConfig,
        returns: &ReturnVector,
        cov: &CovarianceMatrix,
        risk_free_rate: RiskFreeRate,
    ) -> FrontierResult<Self> {
        config.validate()?;

        let n = returns.len();
        if n != cov.size() {
            return Err(FrontierError::validation(format!(
                "returns has {n} entries but the covariance matrix is {size}x{size}",
                size = cov.size()
            )));
        }
        if n < 2 {
            return Err(FrontierError::degenerate(
                "at least two assets are required to span a frontier",
            ));
        }

        let inverse = invert_positive_definite(cov.as_matrix())?;
        let mu = returns.as_vector().clone();
        let inv_ones = mat_vec(&inverse, &DVector::from_element(n, 1.0))?;
        let inv_returns = mat_vec(&inverse, &mu)?;
        let coefficients = FrontierCoefficients::from_products(&mu, &inv_ones, &inv_returns)?;

        debug!(
            assets = n,
            a = coefficients.a,
            b = coefficients.b,
            c = coefficients.c,
            delta = coefficients.delta,
            "computed frontier coefficients"
        );

        Ok(Self {
            config,
            returns: mu,
            risk_free_rate: risk_free_rate.value(),
            inv_ones,
            inv_returns,
            coefficients,
        })
    }

    /// The frontier coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &FrontierCoefficients {
        &self.coefficients
    }

    /// The engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of assets.
    #[must_use]
    pub fn asset_count(&self) -> usize {
        self.returns.len()
    }

    /// The risk-free rate.
    #[must_use]
    pub fn risk_free_rate(&self) -> f64 {
        self.risk_free_rate
    }

    /// Volatility of the risky-only frontier at return `r`.
    #[must_use]
    pub fn frontier_volatility(&self, r: f64) -> Option<f64> {
        self.coefficients.frontier_volatility(r)
    }

    /// The global minimum-variance portfolio, `Σ⁻¹1 / A`.
    #[must_use]
    pub fn minimum_variance(&self) -> Portfolio {
        let weights = &self.inv_ones / self.coefficients.a;
        let r = weights.dot(&self.returns);
        self.frontier_portfolio(weights, r)
    }

    /// Weights of the auxiliary fund `Σ⁻¹μ / B`.
    ///
    /// Returns `None` when `B` is numerically zero.
    #[must_use]
    pub fn auxiliary_fund(&self) -> Option<Vec<f64>> {
        let scale = self.inv_returns.iter().map(|v| v.abs()).sum::<f64>().max(1.0);
        if self.coefficients.b.abs() <= AUXILIARY_TOLERANCE * scale {
            return None;
        }
        Some((&self.inv_returns / self.coefficients.b).as_slice().to_vec())
    }

    /// Resolves the target return of the risky-only optimal portfolio.
    ///
    /// - no target resolves to the minimum-variance return
    /// - a volatility target resolves to the upper root of the frontier
    ///   quadratic, or fails when it lies below the minimum volatility
    /// - a return target below the minimum-variance return is clamped up
    pub fn resolve_target(&self, target: Target) -> FrontierResult<ResolvedTarget> {
        target.validate()?;
        let k = &self.coefficients;
        let r_mvp = k.minimum_variance_return();

        match target {
            Target::NoTarget => Ok(ResolvedTarget::exact(r_mvp)),
            Target::TargetReturn(r) if r < r_mvp => {
                warn!(
                    requested = r,
                    minimum = r_mvp,
                    "target return below the minimum-variance return, clamping"
                );
                Ok(ResolvedTarget {
                    target_return: r_mvp,
                    clamped: true,
                })
            }
            Target::TargetReturn(r) => Ok(ResolvedTarget::exact(r)),
            Target::TargetVolatility(v) => {
                let disc = 4.0 * k.b * k.b - 4.0 * k.a * (k.c - k.delta * v * v);
                if disc < -DISCRIMINANT_TOLERANCE {
                    return Err(FrontierError::unattainable(v, k.minimum_volatility()));
                }
                let r = (2.0 * k.b + disc.max(0.0).sqrt()) / (2.0 * k.a);
                Ok(ResolvedTarget::exact(r))
            }
        }
    }

    /// The optimal risky-only portfolio for `target`.
    pub fn optimal_risky(&self, target: Target) -> FrontierResult<(Portfolio, ResolvedTarget)> {
        let resolved = self.resolve_target(target)?;
        let r = resolved.target_return;
        let weights = self.frontier_weights(r);
        Ok((self.frontier_portfolio(weights, r), resolved))
    }

    /// The tangency (maximum-Sharpe) portfolio, `Σ⁻¹(μ − rf·1) / (B − rf·A)`.
    ///
    /// Undefined when the risk-free rate equals the minimum-variance return.
    pub fn tangency(&self) -> FrontierResult<Portfolio> {
        let k = &self.coefficients;
        let rf = self.risk_free_rate;
        let denom = k.b - rf * k.a;
        let scale = k.b.abs().max((rf * k.a).abs()).max(1.0);
        if denom.abs() <= TANGENCY_TOLERANCE * scale {
            return Err(FrontierError::degenerate(
                "risk-free rate equals the minimum-variance return, tangency portfolio is undefined",
            ));
        }

        let weights = self.excess_return_weights() / denom;
        let r = weights.dot(&self.returns);
        Ok(self.frontier_portfolio(weights, r))
    }

    /// `H = C − 2 rf B + rf² A`, failing when it is not strictly positive.
    pub fn capital_allocation_factor(&self) -> FrontierResult<f64> {
        let h = self
            .coefficients
            .capital_allocation_factor(self.risk_free_rate);
        if h > 0.0 && h.is_finite() {
            Ok(h)
        } else {
            Err(FrontierError::degenerate(format!(
                "capital allocation line has no slope (H = {h:.3e})"
            )))
        }
    }

    /// Resolves the target return on the capital allocation line.
    ///
    /// A target is mandatory here: there is nothing to place a blended
    /// position on without one.
    pub fn resolve_target_with_risk_free(&self, target: Target) -> FrontierResult<ResolvedTarget> {
        target.validate()?;
        match target {
            Target::NoTarget => Err(FrontierError::validation(
                "a target return or target volatility is required with a risk-free asset",
            )),
            Target::TargetReturn(r) => Ok(ResolvedTarget::exact(r)),
            Target::TargetVolatility(v) => {
                let h = self.capital_allocation_factor()?;
                Ok(ResolvedTarget::exact(self.risk_free_rate + v * h.sqrt()))
            }
        }
    }

    /// The optimal blend of risky assets and the risk-free asset.
    ///
    /// Risky weights are `λ(B − rf·A)·w_t` with `λ = (r − rf) / H`, which is
    /// `λ·Σ⁻¹(μ − rf·1)`. On the efficient half-line (`r > rf` with `rf`
    /// below the minimum-variance return) the Sharpe ratio equals the
    /// tangency Sharpe ratio. An all-cash position (`r = rf`) has a Sharpe
    /// ratio of zero.
    pub fn optimal_with_risk_free(
        &self,
        target: Target,
    ) -> FrontierResult<(RiskFreePortfolio, ResolvedTarget)> {
        let resolved = self.resolve_target_with_risk_free(target)?;
        let h = self.capital_allocation_factor()?;
        // Risky weights are a multiple of the tangency portfolio.
        self.tangency()?;

        let rf = self.risk_free_rate;
        let r = resolved.target_return;
        let lambda = (r - rf) / h;
        let weights = self.excess_return_weights() * lambda;
        let risk_free_weight = 1.0 - weights.sum();
        let volatility = (r - rf).abs() / h.sqrt();
        let sharpe_ratio = if volatility > 0.0 {
            (r - rf) / volatility
        } else {
            0.0
        };

        let portfolio = RiskFreePortfolio {
            risky: Portfolio {
                weights: weights.as_slice().to_vec(),
                expected_return: r,
                volatility,
                sharpe_ratio,
            },
            risk_free_weight,
        };
        Ok((portfolio, resolved))
    }

    /// The risky-only frontier sampled over the configured return range.
    ///
    /// Samples where the frontier variance would be negative are skipped.
    pub fn risky_curve(&self) -> FrontierResult<FrontierCurve> {
        let points = self
            .sample_returns()?
            .into_iter()
            .filter_map(|r| {
                self.frontier_volatility(r).map(|volatility| FrontierPoint {
                    volatility,
                    expected_return: r,
                })
            })
            .collect();
        Ok(FrontierCurve::from_points(points))
    }

    /// The capital allocation line sampled over the configured return range.
    pub fn capital_allocation_curve(&self) -> FrontierResult<FrontierCurve> {
        let slope = self.capital_allocation_factor()?.sqrt();
        let rf = self.risk_free_rate;
        let points = self
            .sample_returns()?
            .into_iter()
            .map(|r| FrontierPoint {
                volatility: (r - rf).abs() / slope,
                expected_return: r,
            })
            .collect();
        Ok(FrontierCurve::from_points(points))
    }

    /// Computes the full bundle for `target`.
    ///
    /// Fails without a target since the risk-free portfolio needs one; use
    /// the individual methods for risky-only work.
    pub fn compute(&self, target: Target) -> FrontierResult<PortfolioBundle> {
        target.validate()?;
        if target.is_none() {
            return Err(FrontierError::validation(
                "a target return or target volatility is required with a risk-free asset",
            ));
        }

        let minimum_variance = self.minimum_variance();
        let tangency = self.tangency()?;
        let (optimal, optimal_target) = self.optimal_risky(target)?;
        let (optimal_with_risk_free, optimal_with_risk_free_target) =
            self.optimal_with_risk_free(target)?;
        let risky_curve = self.risky_curve()?;
        let capital_allocation_curve = self.capital_allocation_curve()?;

        info!(
            assets = self.asset_count(),
            %target,
            mvp_return = minimum_variance.expected_return,
            mvp_volatility = minimum_variance.volatility,
            tangency_sharpe = tangency.sharpe_ratio,
            "computed efficient frontier"
        );

        Ok(PortfolioBundle {
            minimum_variance,
            tangency,
            optimal,
            optimal_target,
            optimal_with_risk_free,
            optimal_with_risk_free_target,
            risky_curve,
            capital_allocation_curve,
            risk_free_rate: self.risk_free_rate,
            target,
        })
    }

    /// Frontier weights at return `r`.
    ///
    /// Uses the two-fund combination of the minimum-variance portfolio and
    /// the auxiliary fund, or the equivalent direct form when `B` is zero.
    fn frontier_weights(&self, r: f64) -> DVector<f64> {
        let k = &self.coefficients;
        match self.auxiliary_fund() {
            Some(fund) => {
                let w_mvp = &self.inv_ones / k.a;
                let w_aux = DVector::from_vec(fund);
                w_mvp * ((k.c - r * k.b) * k.a / k.delta)
                    + w_aux * ((r * k.a - k.b) * k.b / k.delta)
            }
            None => {
                &self.inv_ones * ((k.c - r * k.b) / k.delta)
                    + &self.inv_returns * ((r * k.a - k.b) / k.delta)
            }
        }
    }

    /// `Σ⁻¹(μ − rf·1)`
    fn excess_return_weights(&self) -> DVector<f64> {
        &self.inv_returns - &self.inv_ones * self.risk_free_rate
    }

    fn frontier_portfolio(&self, weights: DVector<f64>, r: f64) -> Portfolio {
        let volatility = self.coefficients.frontier_variance(r).max(0.0).sqrt();
        Portfolio {
            weights: weights.as_slice().to_vec(),
            expected_return: r,
            volatility,
            sharpe_ratio: (r - self.risk_free_rate) / volatility,
        }
    }

    fn sample_returns(&self) -> FrontierResult<Vec<f64>> {
        let upper = self.returns.iter().copied().fold(f64::NEG_INFINITY, f64::max)
            + self.config.curve_return_margin;
        Ok(linspace(0.0, upper, self.config.curve_points)?)
    }
}

/// Computes the full frontier bundle in one call.
///
/// The target is checked before any linear algebra runs.
pub fn compute_frontier(
    returns: &ReturnVector,
    cov: &CovarianceMatrix,
    risk_free_rate: RiskFreeRate,
    target: Target,
) -> FrontierResult<PortfolioBundle> {
    compute_frontier_with_config(EngineConfig::default(), returns, cov, risk_free_rate, target)
}

/// [`compute_frontier`] with an explicit configuration.
pub fn compute_frontier_with_config(
    config: EngineConfig,
    returns: &ReturnVector,
    cov: &CovarianceMatrix,
    risk_free_rate: RiskFreeRate,
    target: Target,
) -> FrontierResult<PortfolioBundle> {
    target.validate()?;
    FrontierEngine::with_config(config, returns, cov, risk_free_rate)?.compute(target)
}

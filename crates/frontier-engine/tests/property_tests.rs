//! Property-based tests for frontier invariants.
//!
//! These tests verify properties that hold for any well-conditioned input:
//! - The minimum-variance portfolio has the lowest volatility on the curve
//! - Risky-only weights sum to one
//! - Risky weights plus the risk-free allocation sum to one
//! - The tangency portfolio has the highest Sharpe ratio
//! - Volatility targets resolve on the efficient branch

use frontier_core::prelude::*;
use frontier_engine::prelude::*;
use proptest::prelude::*;

// =============================================================================
// INPUT GENERATORS
// =============================================================================

/// Expected returns with at least two distinct values, and a positive
/// definite covariance `G Gᵗ + D`.
fn inputs() -> impl Strategy<Value = (ReturnVector, CovarianceMatrix)> {
    (2usize..6).prop_flat_map(|n| {
        (
            prop::collection::vec(0.0f64..0.25, n),
            0.02f64..0.15,
            prop::collection::vec(-0.2f64..0.2, n * n),
            prop::collection::vec(0.01f64..0.08, n),
        )
            .prop_map(move |(mut mu, spread, g, diag)| {
                mu[1] = mu[0] + spread;
                let rows: Vec<Vec<f64>> = (0..n)
                    .map(|i| {
                        (0..n)
                            .map(|j| {
                                let gg: f64 = (0..n).map(|k| g[i * n + k] * g[j * n + k]).sum();
                                if i == j {
                                    gg + diag[i]
                                } else {
                                    gg
                                }
                            })
                            .collect()
                    })
                    .collect();
                (
                    ReturnVector::new(mu).unwrap(),
                    CovarianceMatrix::from_rows(&rows).unwrap(),
                )
            })
    })
}

fn engine(returns: &ReturnVector, cov: &CovarianceMatrix, rf: f64) -> FrontierEngine {
    let config = EngineConfig::default().with_curve_points(200);
    FrontierEngine::with_config(config, returns, cov, RiskFreeRate::new(rf).unwrap()).unwrap()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn mvp_is_global_minimum((returns, cov) in inputs()) {
        let engine = engine(&returns, &cov, 0.0);
        let mvp = engine.minimum_variance();
        let curve = engine.risky_curve().unwrap();

        for point in &curve {
            prop_assert!(mvp.volatility <= point.volatility + 1e-12);
        }
    }

    #[test]
    fn risky_weights_sum_to_one((returns, cov) in inputs(), offset in 0.0f64..0.2) {
        let engine = engine(&returns, &cov, 0.0);
        let r = engine.coefficients().minimum_variance_return() + offset;
        let (optimal, _) = engine.optimal_risky(Target::TargetReturn(r)).unwrap();

        prop_assert!((engine.minimum_variance().total_weight() - 1.0).abs() < 1e-9);
        prop_assert!((optimal.total_weight() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn risk_free_allocation_completes_weights(
        (returns, cov) in inputs(),
        target in 0.0f64..0.3,
        rf in -0.02f64..0.03,
    ) {
        let engine = engine(&returns, &cov, rf);
        prop_assume!(engine.tangency().is_ok());

        let (blended, _) = engine
            .optimal_with_risk_free(Target::TargetReturn(target))
            .unwrap();
        let total = blended.risky.total_weight() + blended.risk_free_weight;
        prop_assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn tangency_has_highest_sharpe((returns, cov) in inputs(), rf in -0.05f64..0.05) {
        let engine = engine(&returns, &cov, rf);
        let mvp = engine.minimum_variance();
        prop_assume!(rf < mvp.expected_return - 1e-3);

        let tangency = engine.tangency().unwrap();
        let (optimal, _) = engine
            .optimal_risky(Target::TargetReturn(mvp.expected_return + 0.05))
            .unwrap();
        let tol = 1e-9 * tangency.sharpe_ratio.abs().max(1.0);

        prop_assert!(tangency.sharpe_ratio + tol >= mvp.sharpe_ratio);
        prop_assert!(tangency.sharpe_ratio + tol >= optimal.sharpe_ratio);
        for (i, mu) in returns.as_slice().iter().enumerate() {
            let sigma = cov.variance(i).unwrap().sqrt();
            prop_assert!(tangency.sharpe_ratio + tol >= (mu - rf) / sigma);
        }
    }

    #[test]
    fn volatility_targets_are_efficient((returns, cov) in inputs(), extra in 0.0f64..0.3) {
        let engine = engine(&returns, &cov, 0.0);
        let minimum = engine.coefficients().minimum_volatility();
        let r_mvp = engine.coefficients().minimum_variance_return();

        let resolved = engine
            .resolve_target(Target::TargetVolatility(minimum + extra))
            .unwrap();
        prop_assert!(resolved.target_return >= r_mvp - 1e-12);
    }

    #[test]
    fn volatility_below_minimum_is_unattainable(
        (returns, cov) in inputs(),
        fraction in 0.05f64..0.95,
    ) {
        let engine = engine(&returns, &cov, 0.0);
        let v = engine.coefficients().minimum_volatility() * fraction;
        let err = engine.resolve_target(Target::TargetVolatility(v)).unwrap_err();
        prop_assert_eq!(err.kind(), FrontierErrorKind::UnattainableTarget);
    }

    #[test]
    fn computation_is_pure((returns, cov) in inputs(), extra in 0.0f64..0.2) {
        let engine = engine(&returns, &cov, 0.01);
        let target = Target::TargetReturn(engine.coefficients().minimum_variance_return() + extra);
        prop_assume!(engine.tangency().is_ok());

        let first = engine.compute(target).unwrap();
        let second = engine.compute(target).unwrap();
        prop_assert_eq!(first, second);
    }
}

//! Cox-Ross-Rubinstein binomial tree.
//!
//! Δt = T/N, u = e^(σ√Δt), d = 1/u, p = (e^(rΔt) - d)/(u - d).
//! Terminal payoffs are rolled back one layer at a time:
//! V[j,i] = e^(-rΔt)·(p·V[j,i+1] + (1-p)·V[j+1,i+1]),
//! where j counts down-moves. Only the current layer is kept.

use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionSide, PricingError, PricingModel};
use tracing::debug;

use super::config::LatticeConfig;

/// Binomial lattice solver for European options.
///
/// # Examples
///
/// ```rust
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionSide};
/// use pricer_pricing::lattice::{LatticeConfig, LatticeSolver};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let solver = LatticeSolver::new(LatticeConfig::default());
/// let price = solver.price(&params, OptionSide::Call).unwrap();
/// assert!((price - 10.45).abs() < 0.05);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LatticeSolver {
    config: LatticeConfig,
}

impl LatticeSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: LatticeConfig) -> Self {
        Self { config }
    }

    /// The solver's configuration.
    pub fn config(&self) -> &LatticeConfig {
        &self.config
    }

    fn price_european(
        &self,
        params: &OptionParameters,
        side: OptionSide,
    ) -> Result<f64, PricingError> {
        self.config.validate()?;

        let steps = self.config.steps();
        let expiry = params.expiry();
        if expiry <= 0.0 {
            return Err(PricingError::domain(format!(
                "lattice requires positive time to maturity, got T = {}",
                expiry
            )));
        }

        let dt = expiry / steps as f64;
        let vol_sqrt_dt = params.volatility() * dt.sqrt();
        let u = vol_sqrt_dt.exp();
        let d = 1.0 / u;
        if u <= d {
            return Err(PricingError::domain(format!(
                "degenerate lattice: up and down factors coincide (σ√Δt = {:e})",
                vol_sqrt_dt
            )));
        }

        let growth = (params.rate() * dt).exp();
        let p = (growth - d) / (u - d);
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(PricingError::domain(format!(
                "risk-neutral probability {} is outside [0, 1]; increase the step count",
                p
            )));
        }

        let discount = (-params.rate() * dt).exp();
        let disc_p = discount * p;
        let disc_q = discount * (1.0 - p);

        debug!(steps, dt, u, d, p, "pricing on binomial lattice");

        // Terminal node j has N - j up-moves and j down-moves: S·u^(N-2j)
        let spot = params.spot();
        let strike = params.strike();
        let mut values: Vec<f64> = (0..=steps)
            .map(|j| {
                let ups_minus_downs = steps as f64 - 2.0 * j as f64;
                side.payoff(spot * (ups_minus_downs * vol_sqrt_dt).exp(), strike)
            })
            .collect();

        for layer in (0..steps).rev() {
            for j in 0..=layer {
                values[j] = disc_p * values[j] + disc_q * values[j + 1];
            }
        }

        Ok(values[0])
    }
}

impl OptionPricer for LatticeSolver {
    fn model(&self) -> PricingModel {
        PricingModel::Lattice
    }

    fn price(&self, params: &OptionParameters, side: OptionSide) -> Result<f64, PricingError> {
        self.price_european(params, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::DEFAULT_LATTICE_STEPS;
    use approx::assert_relative_eq;
    use pricer_models::analytical::ClosedFormSolver;

    fn solver(steps: usize) -> LatticeSolver {
        LatticeSolver::new(LatticeConfig::new(steps).unwrap())
    }

    fn scenario_a() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    // ==========================================================
    // Known values
    // ==========================================================

    #[test]
    fn test_single_step_by_hand() {
        let params = OptionParameters::new(100.0, 100.0, 1.0, 0.0, 0.2).unwrap();
        let u = 0.2_f64.exp();
        let d = 1.0 / u;
        let p = (1.0 - d) / (u - d);

        let call = solver(1).price(&params, OptionSide::Call).unwrap();
        assert_relative_eq!(call, p * (100.0 * u - 100.0), epsilon = 1e-12);

        let put = solver(1).price(&params, OptionSide::Put).unwrap();
        assert_relative_eq!(put, (1.0 - p) * (100.0 - 100.0 * d), epsilon = 1e-12);
    }

    #[test]
    fn test_default_steps_near_closed_form() {
        let params = scenario_a();
        let tree = solver(DEFAULT_LATTICE_STEPS)
            .price(&params, OptionSide::Call)
            .unwrap();
        assert!((tree - 10.45).abs() < 0.05, "tree = {}", tree);
    }

    #[test]
    fn test_converges_to_closed_form() {
        let params = scenario_a();
        for side in OptionSide::ALL {
            let exact = ClosedFormSolver.price(&params, side).unwrap();
            let tree = solver(500).price(&params, side).unwrap();
            assert!((tree - exact).abs() < 1e-2, "{}: {} vs {}", side, tree, exact);
        }
    }

    #[test]
    fn test_discrete_put_call_parity() {
        let params = OptionParameters::new(95.0, 105.0, 0.75, 0.03, 0.3).unwrap();
        let tree = solver(200);
        let call = tree.price(&params, OptionSide::Call).unwrap();
        let put = tree.price(&params, OptionSide::Put).unwrap();
        let forward = 95.0 - 105.0 * params.discount_factor();
        assert_relative_eq!(call - put, forward, epsilon = 1e-9);
    }

    #[test]
    fn test_model_tag() {
        assert_eq!(solver(10).model(), PricingModel::Lattice);
    }

    // ==========================================================
    // Degenerate inputs
    // ==========================================================

    #[test]
    fn test_zero_expiry_is_domain_error() {
        let params = scenario_a().with_expiry(0.0).unwrap();
        let err = solver(100).price(&params, OptionSide::Call).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_vanishing_volatility_is_domain_error() {
        let params = scenario_a().with_volatility(1e-20).unwrap();
        let err = solver(1).price(&params, OptionSide::Call).unwrap_err();
        assert!(err.is_domain(), "{}", err);
    }

    #[test]
    fn test_probability_above_one_is_domain_error() {
        // e^(rΔt) exceeds u when the drift dominates the spread
        let params = OptionParameters::new(100.0, 100.0, 1.0, 5.0, 0.01).unwrap();
        let err = solver(1).price(&params, OptionSide::Put).unwrap_err();
        assert!(err.is_domain());
        assert!(err.to_string().contains("outside [0, 1]"));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(32))]

            #[test]
            fn test_price_within_no_arbitrage_bounds(
                spot in 50.0f64..150.0,
                strike in 50.0f64..150.0,
                expiry in 0.1f64..2.0,
                vol in 0.1f64..0.6,
            ) {
                let params = OptionParameters::new(spot, strike, expiry, 0.03, vol).unwrap();
                let call = solver(64).price(&params, OptionSide::Call).unwrap();
                let lower = (spot - strike * params.discount_factor()).max(0.0);
                prop_assert!(call >= lower - 1e-9);
                prop_assert!(call <= spot + 1e-9);
            }
        }
    }
}

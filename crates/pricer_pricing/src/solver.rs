//! Public computational API.
//!
//! Free functions over explicit inputs, one per operation, plus
//! [`EngineSolver`] for callers that choose a model at run time.
//!
//! | Operation | Model |
//! |-----------|-------|
//! | [`solve_closed_form`] | Black-Scholes |
//! | [`solve_lattice`] | CRR binomial tree |
//! | [`solve_simulation`], [`simulate`] | Monte Carlo |
//! | [`compute_greeks`] | Black-Scholes Greeks |
//! | [`estimate_volatility`] | Close-to-close historical volatility |

use pricer_core::market_data::HistoricalPriceSeries;
use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionSide, PricingError, PricingModel};
use pricer_models::analytical::{self, ClosedFormSolver, GreeksResult};
use pricer_models::volatility::historical_volatility;

use crate::lattice::{LatticeConfig, LatticeSolver};
use crate::mc::{SimulationConfig, SimulationResult, SimulationSolver};

/// Per-model settings for [`solve`].
///
/// The closed form has no settings.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::solver::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.lattice.steps(), 100);
/// assert_eq!(config.simulation.n_paths(), 10_000);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Lattice step count.
    pub lattice: LatticeConfig,
    /// Monte Carlo path count and seed.
    pub simulation: SimulationConfig,
}

/// A solver selected by [`PricingModel`].
///
/// Static dispatch over the three solvers, so it can be stored and shared
/// without boxing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EngineSolver {
    /// Black-Scholes closed form
    ClosedForm(ClosedFormSolver),
    /// Binomial lattice
    Lattice(LatticeSolver),
    /// Monte Carlo simulation
    Simulation(SimulationSolver),
}

impl EngineSolver {
    /// Builds the solver for `model` from its section of `config`.
    pub fn for_model(model: PricingModel, config: &EngineConfig) -> Self {
        match model {
            PricingModel::ClosedForm => EngineSolver::ClosedForm(ClosedFormSolver),
            PricingModel::Lattice => EngineSolver::Lattice(LatticeSolver::new(config.lattice)),
            PricingModel::Simulation => {
                EngineSolver::Simulation(SimulationSolver::new(config.simulation))
            }
        }
    }
}

impl OptionPricer for EngineSolver {
    fn model(&self) -> PricingModel {
        match self {
            EngineSolver::ClosedForm(s) => s.model(),
            EngineSolver::Lattice(s) => s.model(),
            EngineSolver::Simulation(s) => s.model(),
        }
    }

    fn price(&self, params: &OptionParameters, side: OptionSide) -> Result<f64, PricingError> {
        match self {
            EngineSolver::ClosedForm(s) => s.price(params, side),
            EngineSolver::Lattice(s) => s.price(params, side),
            EngineSolver::Simulation(s) => s.price(params, side),
        }
    }
}

/// Black-Scholes price.
///
/// # Errors
/// `PricingError::Domain` when T = 0.
pub fn solve_closed_form(params: &OptionParameters, side: OptionSide) -> Result<f64, PricingError> {
    ClosedFormSolver.price(params, side)
}

/// Binomial lattice price with `steps` time steps.
///
/// # Errors
/// - `PricingError::Configuration` when `steps` is zero
/// - `PricingError::Domain` for T = 0 or a degenerate lattice
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionSide};
/// use pricer_pricing::lattice::DEFAULT_LATTICE_STEPS;
/// use pricer_pricing::solver::solve_lattice;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert!(solve_lattice(&params, OptionSide::Put, DEFAULT_LATTICE_STEPS).is_ok());
/// assert!(solve_lattice(&params, OptionSide::Put, 0).unwrap_err().is_configuration());
/// ```
pub fn solve_lattice(
    params: &OptionParameters,
    side: OptionSide,
    steps: usize,
) -> Result<f64, PricingError> {
    LatticeSolver::new(LatticeConfig::new(steps)?).price(params, side)
}

/// Monte Carlo price with `paths` paths and the given seed.
///
/// # Errors
/// - `PricingError::Configuration` when `paths` is zero
/// - `PricingError::Domain` if the estimate overflows
pub fn solve_simulation(
    params: &OptionParameters,
    side: OptionSide,
    paths: usize,
    seed: u64,
) -> Result<f64, PricingError> {
    Ok(simulate(params, side, &SimulationConfig::new(paths, seed)?)?.price)
}

/// Monte Carlo price together with its standard error.
pub fn simulate(
    params: &OptionParameters,
    side: OptionSide,
    config: &SimulationConfig,
) -> Result<SimulationResult, PricingError> {
    SimulationSolver::new(*config).simulate(params, side)
}

/// Closed-form Greeks.
///
/// # Errors
/// `PricingError::Domain` when T = 0.
pub fn compute_greeks(
    params: &OptionParameters,
    side: OptionSide,
) -> Result<GreeksResult, PricingError> {
    analytical::compute_greeks(params, side)
}

/// Annualised historical volatility (√252 scaling).
///
/// # Errors
/// `PricingError::InsufficientData` for fewer than two prices.
pub fn estimate_volatility(series: &HistoricalPriceSeries) -> Result<f64, PricingError> {
    historical_volatility(series)
}

/// Prices with the model chosen at run time.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionSide, PricingModel};
/// use pricer_pricing::solver::{solve, EngineConfig};
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let config = EngineConfig::default();
/// for model in PricingModel::ALL {
///     let price = solve(&params, OptionSide::Call, model, &config).unwrap();
///     assert!((price - 10.45).abs() < 0.5);
/// }
/// ```
pub fn solve(
    params: &OptionParameters,
    side: OptionSide,
    model: PricingModel,
    config: &EngineConfig,
) -> Result<f64, PricingError> {
    EngineSolver::for_model(model, config).price(params, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::DEFAULT_SEED;
    use pricer_core::types::Date;

    fn scenario_a() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    #[test]
    fn test_scenarios_a_and_b() {
        let params = scenario_a();
        let call = solve_closed_form(&params, OptionSide::Call).unwrap();
        let put = solve_closed_form(&params, OptionSide::Put).unwrap();
        assert!((call - 10.45).abs() < 0.01);
        assert!((put - 5.57).abs() < 0.01);
        assert!((call - put - (100.0 - 100.0 * (-0.05_f64).exp())).abs() < 1e-9);
    }

    #[test]
    fn test_scenario_d() {
        let price = solve_lattice(&scenario_a(), OptionSide::Call, 100).unwrap();
        assert!((price - 10.45).abs() < 0.05);
    }

    #[test]
    fn test_solve_simulation_matches_simulate() {
        let params = scenario_a();
        let price = solve_simulation(&params, OptionSide::Call, 10_000, DEFAULT_SEED).unwrap();
        let result = simulate(&params, OptionSide::Call, &SimulationConfig::default()).unwrap();
        assert_eq!(price.to_bits(), result.price.to_bits());
    }

    #[test]
    fn test_zero_counts_are_configuration_errors() {
        let params = scenario_a();
        assert!(solve_lattice(&params, OptionSide::Call, 0)
            .unwrap_err()
            .is_configuration());
        assert!(solve_simulation(&params, OptionSide::Call, 0, 1)
            .unwrap_err()
            .is_configuration());
    }

    #[test]
    fn test_zero_expiry_domain_errors() {
        let params = scenario_a().with_expiry(0.0).unwrap();
        assert!(solve_closed_form(&params, OptionSide::Call)
            .unwrap_err()
            .is_domain());
        assert!(solve_lattice(&params, OptionSide::Call, 100)
            .unwrap_err()
            .is_domain());
        assert!(compute_greeks(&params, OptionSide::Call)
            .unwrap_err()
            .is_domain());
    }

    #[test]
    fn test_scenario_c() {
        let greeks = compute_greeks(&scenario_a(), OptionSide::Call).unwrap();
        assert!((greeks.delta - 0.6368).abs() < 1e-4);
        assert!((greeks.gamma - 0.0188).abs() < 1e-4);
        assert!((greeks.vega - 37.52).abs() < 1e-2);
    }

    #[test]
    fn test_estimate_volatility_boundaries() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let two = HistoricalPriceSeries::daily(start, &[100.0, 101.0]).unwrap();
        let vol = estimate_volatility(&two).unwrap();
        assert!(vol.is_finite() && vol >= 0.0);

        let one = HistoricalPriceSeries::daily(start, &[100.0]).unwrap();
        assert_eq!(
            estimate_volatility(&one),
            Err(PricingError::InsufficientData { got: 1, need: 2 })
        );
    }

    #[test]
    fn test_dispatch_uses_config() {
        let params = scenario_a();
        let config = EngineConfig {
            lattice: LatticeConfig::new(7).unwrap(),
            simulation: SimulationConfig::new(500, 9).unwrap(),
        };
        assert_eq!(
            solve(&params, OptionSide::Put, PricingModel::Lattice, &config).unwrap(),
            solve_lattice(&params, OptionSide::Put, 7).unwrap()
        );
        assert_eq!(
            solve(&params, OptionSide::Put, PricingModel::Simulation, &config).unwrap(),
            solve_simulation(&params, OptionSide::Put, 500, 9).unwrap()
        );
        assert_eq!(
            solve(&params, OptionSide::Put, PricingModel::ClosedForm, &config).unwrap(),
            solve_closed_form(&params, OptionSide::Put).unwrap()
        );
    }

    #[test]
    fn test_engine_solver_model_tags() {
        let config = EngineConfig::default();
        for model in PricingModel::ALL {
            assert_eq!(EngineSolver::for_model(model, &config).model(), model);
        }
    }
}

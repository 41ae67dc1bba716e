//! Compare command implementation
//!
//! Prices the same option with all three models and reports each against
//! the closed form.

use pricer_core::types::{OptionParameters, OptionSide, PricingModel};
use pricer_pricing::solver::EngineConfig;
use serde::Serialize;
use tracing::info;

use super::price::PriceReport;
use super::{input_rows, OptionArgs, PricingInputs, VolatilitySource};
use crate::config::CliConfig;
use crate::output::{self, money, Report, Table};
use crate::Result;

/// One model's row in a comparison
#[derive(Debug, Clone, Serialize)]
pub struct ModelPrice {
    pub model: PricingModel,
    pub method: &'static str,
    pub price: f64,
    /// Price minus the closed-form price
    pub difference: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_error: Option<f64>,
}

/// Result of the `compare` command
#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub side: OptionSide,
    pub inputs: OptionParameters,
    pub volatility: VolatilitySource,
    pub engine: EngineConfig,
    pub models: Vec<ModelPrice>,
}

impl CompareReport {
    pub fn build(inputs: &PricingInputs, engine: &EngineConfig) -> Result<Self> {
        let reports = PricingModel::ALL
            .iter()
            .map(|&model| PriceReport::build(inputs, model, engine))
            .collect::<Result<Vec<_>>>()?;

        // ALL lists the closed form first
        let reference = reports.first().map(|r| r.price).unwrap_or(f64::NAN);
        let models = reports
            .into_iter()
            .map(|r| ModelPrice {
                model: r.model,
                method: r.method,
                price: r.price,
                difference: r.price - reference,
                std_error: r.std_error,
            })
            .collect();

        Ok(Self {
            side: inputs.side,
            inputs: inputs.params,
            volatility: inputs.volatility_source,
            engine: *engine,
            models,
        })
    }
}

impl Report for CompareReport {
    fn to_table(&self) -> Table {
        let mut table = Table::new(["Model", "Price", "Difference", "Std error"]);
        for row in &self.models {
            table = table.row([
                row.method.to_string(),
                money(row.price),
                format!("{:+.4}", row.difference),
                row.std_error.map(money).unwrap_or_default(),
            ]);
        }
        table
    }

    fn to_text(&self) -> String {
        let inputs = PricingInputs {
            params: self.inputs,
            side: self.side,
            volatility_source: self.volatility,
        };
        let settings = input_rows(Table::new(["Field", "Value"]), &inputs)
            .row(["Lattice steps".to_string(), self.engine.lattice.steps().to_string()])
            .row([
                "Simulation paths".to_string(),
                self.engine.simulation.n_paths().to_string(),
            ])
            .row(["Seed".to_string(), self.engine.simulation.seed().to_string()]);

        format!("{}\n{}", settings, self.to_table())
    }
}

/// Run the compare command
pub fn run(option: &OptionArgs, config: &CliConfig) -> Result<()> {
    let engine = config.engine_config()?;
    let inputs = option.resolve(config.rate)?;

    info!(
        steps = engine.lattice.steps(),
        paths = engine.simulation.n_paths(),
        "comparing models"
    );
    let report = CompareReport::build(&inputs, &engine)?;

    output::emit(&report, config.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_pricing::mc::SimulationConfig;

    fn inputs() -> PricingInputs {
        PricingInputs {
            params: OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap(),
            side: OptionSide::Call,
            volatility_source: VolatilitySource::Given,
        }
    }

    #[test]
    fn test_all_models_close_to_reference() {
        let report = CompareReport::build(&inputs(), &EngineConfig::default()).unwrap();
        assert_eq!(report.models.len(), 3);
        assert_eq!(report.models[0].model, PricingModel::ClosedForm);
        assert_eq!(report.models[0].difference, 0.0);
        for row in &report.models {
            assert!((row.price - 10.45).abs() < 0.5, "{}: {}", row.method, row.price);
        }
    }

    #[test]
    fn test_only_simulation_has_std_error() {
        let report = CompareReport::build(&inputs(), &EngineConfig::default()).unwrap();
        let with_error: Vec<_> = report
            .models
            .iter()
            .filter(|row| row.std_error.is_some())
            .map(|row| row.model)
            .collect();
        assert_eq!(with_error, vec![PricingModel::Simulation]);
    }

    #[test]
    fn test_seed_reaches_simulation() {
        let engine = |seed| EngineConfig {
            simulation: SimulationConfig::new(5_000, seed).unwrap(),
            ..Default::default()
        };
        let a = CompareReport::build(&inputs(), &engine(1)).unwrap();
        let b = CompareReport::build(&inputs(), &engine(2)).unwrap();
        assert_ne!(a.models[2].price, b.models[2].price);
        assert_eq!(a.models[1].price, b.models[1].price);
    }

    #[test]
    fn test_table_has_every_model() {
        let text = CompareReport::build(&inputs(), &EngineConfig::default())
            .unwrap()
            .to_table()
            .to_string();
        for name in ["Black-Scholes", "Binomial Tree", "Monte Carlo"] {
            assert!(text.contains(name), "missing {}", name);
        }
        assert!(text.contains("+0.0000"));
    }

    #[test]
    fn test_text_includes_settings() {
        let text = CompareReport::build(&inputs(), &EngineConfig::default())
            .unwrap()
            .to_text();
        assert!(text.contains("Lattice steps"));
        assert!(text.contains("10000"));
        assert!(text.contains("Monte Carlo"));
    }
}

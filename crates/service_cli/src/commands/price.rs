//! Price command implementation
//!
//! Prices one European option with the chosen model.

use pricer_core::types::{OptionParameters, OptionSide, PricingModel};
use pricer_pricing::solver::{self, EngineConfig};
use serde::Serialize;
use tracing::info;

use super::{input_rows, OptionArgs, PricingInputs, VolatilitySource};
use crate::config::CliConfig;
use crate::output::{self, money, Report, Table};
use crate::Result;

/// Result of the `price` command
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub model: PricingModel,
    pub method: &'static str,
    pub side: OptionSide,
    pub inputs: OptionParameters,
    pub volatility: VolatilitySource,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_error: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl PriceReport {
    /// Prices `inputs` with `model` under `engine`
    pub fn build(
        inputs: &PricingInputs,
        model: PricingModel,
        engine: &EngineConfig,
    ) -> Result<Self> {
        let mut report = Self {
            model,
            method: model.display_name(),
            side: inputs.side,
            inputs: inputs.params,
            volatility: inputs.volatility_source,
            price: 0.0,
            std_error: None,
            steps: None,
            paths: None,
            seed: None,
        };

        match model {
            PricingModel::ClosedForm => {
                report.price = solver::solve_closed_form(&inputs.params, inputs.side)?;
            }
            PricingModel::Lattice => {
                let steps = engine.lattice.steps();
                report.price = solver::solve_lattice(&inputs.params, inputs.side, steps)?;
                report.steps = Some(steps);
            }
            PricingModel::Simulation => {
                let result = solver::simulate(&inputs.params, inputs.side, &engine.simulation)?;
                report.price = result.price;
                report.std_error = Some(result.std_error);
                report.paths = Some(result.n_paths);
                report.seed = Some(engine.simulation.seed());
            }
        }
        Ok(report)
    }
}

impl Report for PriceReport {
    fn to_table(&self) -> Table {
        let mut table =
            Table::new(["Field", "Value"]).row(["Model".to_string(), self.method.to_string()]);
        if let Some(steps) = self.steps {
            table = table.row(["Steps".to_string(), steps.to_string()]);
        }
        if let (Some(paths), Some(seed)) = (self.paths, self.seed) {
            table = table
                .row(["Paths".to_string(), paths.to_string()])
                .row(["Seed".to_string(), seed.to_string()]);
        }

        let inputs = PricingInputs {
            params: self.inputs,
            side: self.side,
            volatility_source: self.volatility,
        };
        table = input_rows(table, &inputs).row(["Price".to_string(), money(self.price)]);
        if let Some(std_error) = self.std_error {
            table = table.row(["Std error".to_string(), money(std_error)]);
        }
        table
    }
}

/// Run the price command
pub fn run(option: &OptionArgs, model: Option<PricingModel>, config: &CliConfig) -> Result<()> {
    let model = model.unwrap_or(config.model);
    let engine = config.engine_config()?;
    let inputs = option.resolve(config.rate)?;

    info!(model = %model, "pricing option");
    let report = PriceReport::build(&inputs, model, &engine)?;
    info!(price = report.price, "pricing complete");

    output::emit(&report, config.output)
}

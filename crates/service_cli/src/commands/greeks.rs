//! Greeks command implementation
//!
//! Reports the closed-form price with its five sensitivities. Raw values
//! are partial derivatives; the table also shows the usual desk scaling
//! (theta per calendar day, vega and rho per percentage point).

use pricer_core::types::{OptionParameters, OptionSide, DAYS_PER_YEAR};
use pricer_models::analytical::GreeksResult;
use pricer_pricing::solver;
use serde::Serialize;
use tracing::info;

use super::{input_rows, OptionArgs, PricingInputs, VolatilitySource};
use crate::config::CliConfig;
use crate::output::{self, money, Report, Table};
use crate::Result;

/// Result of the `greeks` command
#[derive(Debug, Clone, Serialize)]
pub struct GreeksReport {
    pub side: OptionSide,
    pub inputs: OptionParameters,
    pub volatility: VolatilitySource,
    pub price: f64,
    pub greeks: GreeksResult,
}

impl GreeksReport {
    pub fn build(inputs: &PricingInputs) -> Result<Self> {
        Ok(Self {
            side: inputs.side,
            inputs: inputs.params,
            volatility: inputs.volatility_source,
            price: solver::solve_closed_form(&inputs.params, inputs.side)?,
            greeks: solver::compute_greeks(&inputs.params, inputs.side)?,
        })
    }
}

fn greek(value: f64) -> String {
    format!("{:.6}", value)
}

impl Report for GreeksReport {
    fn to_table(&self) -> Table {
        let inputs = PricingInputs {
            params: self.inputs,
            side: self.side,
            volatility_source: self.volatility,
        };
        let g = &self.greeks;
        input_rows(Table::new(["Field", "Value", "Scaled"]), &inputs)
            .row(["Price".to_string(), money(self.price)])
            .row(["Delta".to_string(), greek(g.delta)])
            .row(["Gamma".to_string(), greek(g.gamma)])
            .row([
                "Theta".to_string(),
                greek(g.theta),
                format!("{} / day", greek(g.theta / DAYS_PER_YEAR)),
            ])
            .row([
                "Vega".to_string(),
                greek(g.vega),
                format!("{} / 1% vol", greek(g.vega / 100.0)),
            ])
            .row([
                "Rho".to_string(),
                greek(g.rho),
                format!("{} / 1% rate", greek(g.rho / 100.0)),
            ])
    }
}

/// Run the greeks command
pub fn run(option: &OptionArgs, config: &CliConfig) -> Result<()> {
    let inputs = option.resolve(config.rate)?;

    info!("computing closed-form greeks");
    let report = GreeksReport::build(&inputs)?;

    output::emit(&report, config.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs() -> PricingInputs {
        PricingInputs {
            params: OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap(),
            side: OptionSide::Call,
            volatility_source: VolatilitySource::Given,
        }
    }

    #[test]
    fn test_reference_greeks() {
        let report = GreeksReport::build(&inputs()).unwrap();
        assert_relative_eq!(report.greeks.delta, 0.6368306511756191, epsilon = 1e-12);
        assert_relative_eq!(report.greeks.gamma, 0.018762017345846895, epsilon = 1e-12);
        assert_relative_eq!(report.greeks.vega, 37.52403469169379, epsilon = 1e-9);
        assert_relative_eq!(report.price, 10.450583572185565, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_expiry_is_domain_error() {
        let mut zero = inputs();
        zero.params = zero.params.with_expiry(0.0).unwrap();
        match GreeksReport::build(&zero) {
            Err(crate::CliError::Pricing(err)) => assert!(err.is_domain()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_table_scaling() {
        let text = GreeksReport::build(&inputs()).unwrap().to_table().to_string();
        assert!(text.contains("0.636831"));
        // vega 37.524035 per unit, 0.375240 per point
        assert!(text.contains("0.375240 / 1% vol"));
    }

    #[test]
    fn test_json_nests_greeks() {
        let report = GreeksReport::build(&inputs()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value["greeks"]["gamma"].as_f64().unwrap() > 0.0);
        assert_eq!(value["side"], "call");
    }
}

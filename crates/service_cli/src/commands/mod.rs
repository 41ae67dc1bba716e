//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The option-pricing
//! commands share [`OptionArgs`], which turns flags and an optional close
//! history into validated [`OptionParameters`].

pub mod check;
pub mod compare;
pub mod greeks;
pub mod price;
pub mod vol;

use clap::Args;
use pricer_core::market_data::HistoricalPriceSeries;
use pricer_core::types::{Date, OptionParameters, OptionSide, PricingError};
use pricer_models::volatility::MIN_OBSERVATIONS;
use pricer_pricing::solver::estimate_volatility;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, info};

use crate::history;
use crate::output::{money, percent, Table};
use crate::{CliError, Result};

/// Option inputs shared by `price`, `greeks` and `compare`
#[derive(Debug, Clone, Args)]
pub struct OptionArgs {
    /// Spot price (defaults to the last close in --history)
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price
    #[arg(short = 'k', long)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(
        short = 't',
        long,
        conflicts_with = "expiry_date",
        required_unless_present = "expiry_date"
    )]
    pub expiry: Option<f64>,

    /// Expiry date (YYYY-MM-DD), ACT/365 from the valuation date
    #[arg(long)]
    pub expiry_date: Option<Date>,

    /// Valuation date for --expiry-date (YYYY-MM-DD, defaults to today)
    #[arg(long, requires = "expiry_date")]
    pub valuation_date: Option<Date>,

    /// Option side (call or put)
    #[arg(short, long, default_value = "call")]
    pub side: OptionSide,

    /// Annualised volatility as a decimal fraction (e.g. 0.2)
    #[arg(long, required_unless_present = "history")]
    pub vol: Option<f64>,

    /// CSV file of daily closes used to estimate volatility
    #[arg(long)]
    pub history: Option<PathBuf>,

    /// Only use closes on or after this date (YYYY-MM-DD)
    #[arg(long, requires = "history")]
    pub since: Option<Date>,

    /// Only use the most recent N closes
    #[arg(long, requires = "history")]
    pub last: Option<usize>,
}

/// Where the volatility input came from
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum VolatilitySource {
    /// Passed with --vol
    Given,
    /// Estimated from a close history
    Historical {
        observations: usize,
        from: Date,
        to: Date,
    },
}

/// Validated inputs for one option
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingInputs {
    pub params: OptionParameters,
    pub side: OptionSide,
    pub volatility_source: VolatilitySource,
}

impl OptionArgs {
    /// Builds validated option parameters using `rate` as r
    ///
    /// An explicit --vol wins over --history; the history still supplies
    /// the spot when --spot is absent.
    pub fn resolve(&self, rate: f64) -> Result<PricingInputs> {
        let series = match &self.history {
            Some(path) => Some(history::window(
                &history::load_history(path)?,
                self.since,
                self.last,
            )),
            None => None,
        };

        let (volatility, volatility_source) = match (self.vol, &series) {
            (Some(vol), _) => (vol, VolatilitySource::Given),
            (None, Some(series)) => historical_volatility(series)?,
            (None, None) => {
                return Err(CliError::InvalidArgument(
                    "either --vol or --history is required".to_string(),
                ))
            }
        };

        let spot = self
            .spot
            .or_else(|| series.as_ref().and_then(|s| s.last()).map(|p| p.close))
            .ok_or_else(|| {
                CliError::InvalidArgument(
                    "--spot is required unless --history supplies a close".to_string(),
                )
            })?;

        let params = match (self.expiry, self.expiry_date) {
            (Some(expiry), _) => OptionParameters::new(spot, self.strike, expiry, rate, volatility)?,
            (None, Some(expiry_date)) => {
                let valuation = self.valuation_date.unwrap_or_else(Date::today);
                OptionParameters::from_dates(
                    spot,
                    self.strike,
                    valuation,
                    expiry_date,
                    rate,
                    volatility,
                )?
            }
            (None, None) => {
                return Err(CliError::InvalidArgument(
                    "either --expiry or --expiry-date is required".to_string(),
                ))
            }
        };

        info!(
            spot = params.spot(),
            strike = params.strike(),
            expiry = params.expiry(),
            rate = params.rate(),
            volatility = params.volatility(),
            side = %self.side,
            "resolved option inputs"
        );

        Ok(PricingInputs {
            params,
            side: self.side,
            volatility_source,
        })
    }
}

fn historical_volatility(series: &HistoricalPriceSeries) -> Result<(f64, VolatilitySource)> {
    let volatility = estimate_volatility(series)?;
    let (first, last) = series
        .first()
        .zip(series.last())
        .ok_or(PricingError::InsufficientData {
            got: series.len(),
            need: MIN_OBSERVATIONS,
        })?;
    debug!(
        volatility,
        observations = series.len(),
        "estimated volatility from history"
    );
    Ok((
        volatility,
        VolatilitySource::Historical {
            observations: series.len(),
            from: first.date,
            to: last.date,
        },
    ))
}

/// Appends the option inputs as `Field | Value` rows
pub(crate) fn input_rows(mut table: Table, inputs: &PricingInputs) -> Table {
    let params = &inputs.params;
    let vol_note = match inputs.volatility_source {
        VolatilitySource::Given => String::new(),
        VolatilitySource::Historical {
            observations,
            from,
            to,
        } => format!(" (historical, {} closes {} to {})", observations, from, to),
    };

    table = table
        .row(["Side".to_string(), inputs.side.to_string()])
        .row(["Spot".to_string(), money(params.spot())])
        .row(["Strike".to_string(), money(params.strike())])
        .row(["Expiry (years)".to_string(), format!("{:.4}", params.expiry())])
        .row(["Rate".to_string(), percent(params.rate())])
        .row([
            "Volatility".to_string(),
            format!("{}{}", percent(params.volatility()), vol_note),
        ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;

    fn args() -> OptionArgs {
        OptionArgs {
            spot: Some(100.0),
            strike: 100.0,
            expiry: Some(1.0),
            expiry_date: None,
            valuation_date: None,
            side: OptionSide::Call,
            vol: Some(0.2),
            history: None,
            since: None,
            last: None,
        }
    }

    fn history_file(closes: &[(&str, f64)]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "date,close").unwrap();
        for (date, close) in closes {
            writeln!(file, "{},{}", date, close).unwrap();
        }
        file
    }

    #[test]
    fn test_resolve_explicit_inputs() {
        let inputs = args().resolve(0.05).unwrap();
        assert_eq!(
            inputs.params,
            OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
        );
        assert_eq!(inputs.volatility_source, VolatilitySource::Given);
    }

    #[test]
    fn test_resolve_from_dates() {
        let mut a = args();
        a.expiry = None;
        a.expiry_date = Some(Date::parse("2025-07-02").unwrap());
        a.valuation_date = Some(Date::parse("2024-07-02").unwrap());
        let inputs = a.resolve(0.05).unwrap();
        assert_relative_eq!(inputs.params.expiry(), 1.0, epsilon = 1e-12);

        // Expiry before valuation is rejected, not floored
        a.valuation_date = Some(Date::parse("2026-01-01").unwrap());
        assert!(matches!(a.resolve(0.05), Err(CliError::Pricing(_))));
    }

    #[test]
    fn test_resolve_from_history() {
        let file = history_file(&[
            ("2024-01-02", 100.0),
            ("2024-01-03", 102.0),
            ("2024-01-04", 101.0),
            ("2024-01-05", 103.0),
        ]);
        let mut a = args();
        a.spot = None;
        a.vol = None;
        a.history = Some(file.path().to_path_buf());

        let inputs = a.resolve(0.05).unwrap();
        assert_eq!(inputs.params.spot(), 103.0);

        let series = history::load_history(file.path()).unwrap();
        let expected = estimate_volatility(&series).unwrap();
        assert_relative_eq!(inputs.params.volatility(), expected, epsilon = 1e-15);
        assert!(matches!(
            inputs.volatility_source,
            VolatilitySource::Historical { observations: 4, .. }
        ));
    }

    #[test]
    fn test_explicit_vol_wins_over_history() {
        let file = history_file(&[("2024-01-02", 100.0), ("2024-01-03", 110.0)]);
        let mut a = args();
        a.spot = None;
        a.history = Some(file.path().to_path_buf());

        let inputs = a.resolve(0.05).unwrap();
        assert_eq!(inputs.params.volatility(), 0.2);
        assert_eq!(inputs.params.spot(), 110.0);
        assert_eq!(inputs.volatility_source, VolatilitySource::Given);
    }

    #[test]
    fn test_short_history_is_insufficient_data() {
        let file = history_file(&[("2024-01-02", 100.0)]);
        let mut a = args();
        a.vol = None;
        a.history = Some(file.path().to_path_buf());

        assert!(matches!(
            a.resolve(0.05),
            Err(CliError::Pricing(PricingError::InsufficientData { got: 1, need: 2 }))
        ));
    }

    #[test]
    fn test_missing_vol_and_spot() {
        let mut a = args();
        a.vol = None;
        assert!(matches!(a.resolve(0.05), Err(CliError::InvalidArgument(_))));

        let mut a = args();
        a.spot = None;
        assert!(matches!(a.resolve(0.05), Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_invalid_parameters_are_domain_errors() {
        let mut a = args();
        a.vol = Some(-0.2);
        match a.resolve(0.05) {
            Err(CliError::Pricing(err)) => assert!(err.is_domain()),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_input_rows() {
        let inputs = args().resolve(0.05).unwrap();
        let text = input_rows(Table::new(["Field", "Value"]), &inputs).to_string();
        assert!(text.contains("100.0000"));
        assert!(text.contains("20.00%"));
        assert!(text.contains("call"));
    }
}

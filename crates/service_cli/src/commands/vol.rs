//! Vol command implementation
//!
//! Estimates annualised close-to-close volatility from a history file.

use pricer_core::market_data::HistoricalPriceSeries;
use pricer_core::types::{Date, PricingError};
use pricer_models::volatility::{sample_std_dev, MIN_OBSERVATIONS, TRADING_DAYS_PER_YEAR};
use pricer_pricing::solver::estimate_volatility;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::history;
use crate::output::{self, money, percent, Report, Table};
use crate::Result;

/// Result of the `vol` command
#[derive(Debug, Clone, Serialize)]
pub struct VolReport {
    pub file: String,
    pub observations: usize,
    pub from: Date,
    pub to: Date,
    pub last_close: f64,
    /// Sample standard deviation of daily log returns
    pub daily_volatility: f64,
    /// Daily volatility scaled by the square root of the trading-day count
    pub volatility: f64,
    pub periods_per_year: f64,
}

impl VolReport {
    pub fn build(file: &str, series: &HistoricalPriceSeries) -> Result<Self> {
        let volatility = estimate_volatility(series)?;
        let (first, last) = series
            .first()
            .zip(series.last())
            .ok_or(PricingError::InsufficientData {
                got: series.len(),
                need: MIN_OBSERVATIONS,
            })?;

        Ok(Self {
            file: file.to_string(),
            observations: series.len(),
            from: first.date,
            to: last.date,
            last_close: last.close,
            daily_volatility: sample_std_dev(&series.log_returns()),
            volatility,
            periods_per_year: TRADING_DAYS_PER_YEAR,
        })
    }
}

impl Report for VolReport {
    fn to_table(&self) -> Table {
        Table::new(["Field", "Value"])
            .row(["File".to_string(), self.file.clone()])
            .row(["Observations".to_string(), self.observations.to_string()])
            .row(["Window".to_string(), format!("{} to {}", self.from, self.to)])
            .row(["Last close".to_string(), money(self.last_close)])
            .row(["Daily volatility".to_string(), percent(self.daily_volatility)])
            .row(["Annualised volatility".to_string(), percent(self.volatility)])
    }
}

/// Run the vol command
pub fn run(
    file: &Path,
    since: Option<Date>,
    last: Option<usize>,
    config: &CliConfig,
) -> Result<()> {
    let series = history::window(&history::load_history(file)?, since, last);

    info!(observations = series.len(), "estimating historical volatility");
    let report = VolReport::build(&file.display().to_string(), &series)?;
    info!(volatility = report.volatility, "estimation complete");

    output::emit(&report, config.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(closes: &[f64]) -> HistoricalPriceSeries {
        HistoricalPriceSeries::daily(Date::from_ymd(2024, 1, 1).unwrap(), closes).unwrap()
    }

    #[test]
    fn test_annualisation() {
        let report = VolReport::build("inline", &series(&[100.0, 102.0, 101.0, 104.0])).unwrap();
        assert_relative_eq!(
            report.volatility,
            report.daily_volatility * 252.0_f64.sqrt(),
            epsilon = 1e-14
        );
        assert_eq!(report.observations, 4);
        assert_eq!(report.last_close, 104.0);
        assert_eq!(report.to, Date::from_ymd(2024, 1, 4).unwrap());
    }

    #[test]
    fn test_two_points_is_enough() {
        let report = VolReport::build("inline", &series(&[100.0, 101.0])).unwrap();
        assert!(report.volatility.is_finite());
        assert!(report.volatility >= 0.0);
    }

    #[test]
    fn test_too_few_points() {
        for closes in [&[][..], &[100.0][..]] {
            assert!(matches!(
                VolReport::build("inline", &series(closes)),
                Err(crate::CliError::Pricing(PricingError::InsufficientData { need: 2, .. }))
            ));
        }
    }

    #[test]
    fn test_constant_prices_have_zero_volatility() {
        let report = VolReport::build("inline", &series(&[50.0, 50.0, 50.0])).unwrap();
        assert_eq!(report.volatility, 0.0);
    }
}

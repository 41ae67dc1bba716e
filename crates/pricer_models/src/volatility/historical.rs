use pricer_core::market_data::HistoricalPriceSeries;
use pricer_core::types::PricingError;

/// Annualisation factor for daily returns.
///
/// Applied regardless of the length of the sampled window.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Fewest closing prices that yield a volatility estimate.
pub const MIN_OBSERVATIONS: usize = 2;

/// Sample standard deviation with an n - 1 denominator.
///
/// A single value has no dispersion and returns 0.0, as does an empty slice.
///
/// # Examples
/// ```
/// use pricer_models::volatility::sample_std_dev;
///
/// assert_eq!(sample_std_dev(&[0.3]), 0.0);
/// assert!((sample_std_dev(&[1.0, 2.0, 3.0]) - 1.0).abs() < 1e-15);
/// ```
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let sum_sq = values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    (sum_sq / (n - 1.0)).max(0.0).sqrt()
}

/// Annualised close-to-close volatility with a caller-chosen period count.
///
/// # Errors
/// - `PricingError::InsufficientData` for fewer than [`MIN_OBSERVATIONS`] prices
/// - `PricingError::Configuration` if `periods_per_year` is not finite and positive
pub fn annualised_volatility(
    series: &HistoricalPriceSeries,
    periods_per_year: f64,
) -> Result<f64, PricingError> {
    if !periods_per_year.is_finite() || periods_per_year <= 0.0 {
        return Err(PricingError::configuration(format!(
            "periods per year must be positive, got {}",
            periods_per_year
        )));
    }
    if series.len() < MIN_OBSERVATIONS {
        return Err(PricingError::InsufficientData {
            got: series.len(),
            need: MIN_OBSERVATIONS,
        });
    }

    let returns = series.log_returns();
    Ok(sample_std_dev(&returns) * periods_per_year.sqrt())
}

/// Annualised historical volatility using [`TRADING_DAYS_PER_YEAR`].
///
/// # Errors
/// `PricingError::InsufficientData` for fewer than two prices.
///
/// # Examples
/// ```
/// use pricer_core::market_data::HistoricalPriceSeries;
/// use pricer_core::types::{Date, PricingError};
/// use pricer_models::volatility::historical_volatility;
///
/// let start = Date::from_ymd(2024, 1, 2).unwrap();
/// let single = HistoricalPriceSeries::daily(start, &[100.0]).unwrap();
/// assert_eq!(
///     historical_volatility(&single),
///     Err(PricingError::InsufficientData { got: 1, need: 2 })
/// );
/// ```
pub fn historical_volatility(series: &HistoricalPriceSeries) -> Result<f64, PricingError> {
    annualised_volatility(series, TRADING_DAYS_PER_YEAR)
}

//! Historical volatility estimation.
//!
//! Close-to-close realised volatility: the sample standard deviation of
//! daily log returns, annualised by √252.
//!
//! ## Example
//!
//! ```rust
//! use pricer_core::market_data::HistoricalPriceSeries;
//! use pricer_core::types::Date;
//! use pricer_models::volatility::historical_volatility;
//!
//! let start = Date::from_ymd(2024, 1, 2).unwrap();
//! let series = HistoricalPriceSeries::daily(start, &[100.0, 101.0, 99.5, 100.5]).unwrap();
//! let vol = historical_volatility(&series).unwrap();
//! assert!(vol > 0.0);
//! ```

mod historical;

pub use historical::{
    annualised_volatility, historical_volatility, sample_std_dev, MIN_OBSERVATIONS,
    TRADING_DAYS_PER_YEAR,
};

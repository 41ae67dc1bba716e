//! Market data supplied by external collaborators.
//!
//! The pricer never fetches data itself. Callers hand it plain values, and the
//! only structured market data it consumes is a chronological series of
//! closing prices used to estimate historical volatility.
//!
//! # Components
//!
//! - [`series`]: `PricePoint` and `HistoricalPriceSeries`
//! - [`error`]: Market data error types (`MarketDataError`)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::HistoricalPriceSeries;
//! use pricer_core::types::Date;
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let series = HistoricalPriceSeries::daily(start, &[100.0, 101.0, 99.5]).unwrap();
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.log_returns().len(), 2);
//! ```

pub mod error;
pub mod series;

pub use error::MarketDataError;
pub use series::{HistoricalPriceSeries, PricePoint};

//! Core option, time, and error types.
//!
//! This module provides:
//! - `option`: Validated option inputs and the side/model selectors
//! - `time`: `Date` wrapper and ACT/365 time-to-maturity helpers
//! - `error`: Structured error types for pricing and date handling
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`OptionParameters`], [`OptionSide`], [`PricingModel`] from `option`
//! - [`Date`], [`time_to_maturity_dates`] from `time`
//! - [`PricingError`], [`DateError`] from `error`

pub mod error;
pub mod option;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, PricingError};
pub use option::{OptionParameters, OptionSide, PricingModel};
pub use time::{time_to_maturity_dates, Date, DAYS_PER_YEAR};

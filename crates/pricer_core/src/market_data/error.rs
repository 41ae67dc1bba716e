//! Market data error types.
//!
//! This module provides structured error handling for historical price
//! series construction and the statistics computed from them.

use crate::types::{Date, PricingError};
use thiserror::Error;

/// Market data operation errors.
///
/// # Variants
///
/// - `InvalidPrice`: Non-finite or non-positive closing price
/// - `NonChronological`: Observation dates not strictly increasing
/// - `InsufficientData`: Not enough observations for the statistic
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidPrice { index: 3, price: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Closing price is not finite and strictly positive.
    #[error("Invalid price at index {index}: P = {price}")]
    InvalidPrice {
        /// Position of the observation in the series
        index: usize,
        /// The invalid price value
        price: f64,
    },

    /// Observation dates are not strictly increasing.
    #[error("Non-chronological series at index {index}: {current} does not follow {previous}")]
    NonChronological {
        /// Position of the offending observation
        index: usize,
        /// Date of the preceding observation
        previous: Date,
        /// Date of the offending observation
        current: Date,
    },

    /// Insufficient observations.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of observations provided
        got: usize,
        /// Minimum number of observations required
        need: usize,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::InsufficientData { got, need } => {
                PricingError::InsufficientData { got, need }
            }
            MarketDataError::InvalidPrice { .. } | MarketDataError::NonChronological { .. } => {
                PricingError::Domain(err.to_string())
            }
        }
    }
}

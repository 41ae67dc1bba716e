//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to the closed-form formulas

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// `OptionParameters` already guarantees positive spot, strike and
/// volatility, so these variants cover what remains: the closed form is
/// undefined at T = 0, and extreme inputs can still overflow.
///
/// # Variants
/// - `NonPositiveExpiry`: d1 and d2 divide by σ√T
/// - `InvalidVolatility`: Non-positive volatility passed to a raw helper
/// - `NumericalInstability`: Computation produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::NonPositiveExpiry { expiry: 0.0 };
/// assert!(format!("{}", err).contains("expiry"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Time to maturity is zero, so the formula divides by zero.
    #[error("Non-positive expiry: T = {expiry}, closed form requires T > 0")]
    NonPositiveExpiry {
        /// The offending time to maturity
        expiry: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::Domain(err.to_string())
    }
}

//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The error taxonomy surfaced by every pricing operation
//! - `DateError`: Errors from date construction and parsing

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Every solver, the Greeks calculator and the volatility estimator surface
/// failures through this type. Errors are local, synchronous and
/// deterministic: the same inputs always produce the same error, and no
/// partial result is ever returned alongside one.
///
/// # Variants
/// - `Domain`: Inputs outside the domain of the formula (T ≤ 0, σ ≤ 0,
///   degenerate lattice, unknown option side)
/// - `InsufficientData`: Too few observations to estimate a statistic
/// - `Configuration`: Invalid engine configuration (zero steps or paths,
///   unknown model name)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::Domain("time to maturity must be positive".to_string());
/// assert_eq!(
///     format!("{}", err),
///     "Domain error: time to maturity must be positive"
/// );
///
/// let err = PricingError::InsufficientData { got: 1, need: 2 };
/// assert!(format!("{}", err).contains("got 1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Inputs make the requested formula undefined.
    #[error("Domain error: {0}")]
    Domain(String),

    /// Not enough observations for the requested statistic.
    #[error("Insufficient data: got {got} price points, need at least {need}")]
    InsufficientData {
        /// Number of observations provided
        got: usize,
        /// Minimum number of observations required
        need: usize,
    },

    /// Invalid engine configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PricingError {
    /// Shorthand for a [`PricingError::Domain`] error.
    pub fn domain(msg: impl Into<String>) -> Self {
        PricingError::Domain(msg.into())
    }

    /// Shorthand for a [`PricingError::Configuration`] error.
    pub fn configuration(msg: impl Into<String>) -> Self {
        PricingError::Configuration(msg.into())
    }

    /// Returns true for [`PricingError::Domain`].
    pub fn is_domain(&self) -> bool {
        matches!(self, PricingError::Domain(_))
    }

    /// Returns true for [`PricingError::Configuration`].
    pub fn is_configuration(&self) -> bool {
        matches!(self, PricingError::Configuration(_))
    }
}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

//! Error types for engine configuration.
//!
//! This module provides structured error types for lattice and
//! simulation configuration validation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Engine configuration errors.
///
/// Raised when a lattice or simulation configuration is built with values
/// that make the engine meaningless. Converted into
/// [`PricingError::Configuration`] at the solver boundary.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::error::ConfigError;
///
/// let err = ConfigError::InvalidPathCount(0);
/// assert!(err.to_string().contains("path count"));
/// ```
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Number of Monte Carlo paths is zero.
    #[error("Invalid path count {0}: must be at least 1")]
    InvalidPathCount(usize),

    /// Number of lattice steps is zero.
    #[error("Invalid step count {0}: must be at least 1")]
    InvalidStepCount(usize),

    /// Generic parameter validation error.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Description of the problem
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert_eq!(err.to_string(), "Invalid path count 0: must be at least 1");

        let err = ConfigError::InvalidStepCount(0);
        assert!(err.to_string().contains("Invalid step count 0"));

        let err = ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        };
        assert!(err.to_string().contains("n_paths"));
    }

    #[test]
    fn test_converts_to_configuration_error() {
        let err: PricingError = ConfigError::InvalidStepCount(0).into();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("step count"));
    }
}

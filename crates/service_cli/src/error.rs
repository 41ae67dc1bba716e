//! CLI error types
//!
//! Every failure a command can hit is folded into [`CliError`]; `main`
//! logs it and hands it to `anyhow` for the exit status.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `optpricer` commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid history file {path}, row {row}: {message}")]
    InvalidHistory {
        path: String,
        row: usize,
        message: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    MarketData(#[from] MarketDataError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_error_is_transparent() {
        let err: CliError = PricingError::InsufficientData { got: 1, need: 2 }.into();
        assert_eq!(
            err.to_string(),
            "Insufficient data: got 1 price points, need at least 2"
        );
    }

    #[test]
    fn test_history_error_display() {
        let err = CliError::InvalidHistory {
            path: "spy.csv".to_string(),
            row: 3,
            message: "bad date".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid history file spy.csv, row 3: bad date");
    }
}

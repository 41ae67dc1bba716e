//! CLI configuration management
//!
//! Handles loading configuration from TOML files, environment variables,
//! and command-line flags.

use pricer_core::types::PricingModel;
use pricer_pricing::error::ConfigError as EngineConfigError;
use pricer_pricing::lattice::{LatticeConfig, DEFAULT_LATTICE_STEPS};
use pricer_pricing::mc::{SimulationConfig, DEFAULT_SEED, DEFAULT_SIMULATION_PATHS};
use pricer_pricing::solver::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Risk-free rate used when none is configured (5%)
pub const DEFAULT_RISK_FREE_RATE: f64 = 0.05;

const ENV_LOG_LEVEL: &str = "OPTPRICER_LOG_LEVEL";
const ENV_OUTPUT: &str = "OPTPRICER_OUTPUT";
const ENV_RATE: &str = "OPTPRICER_RATE";
const ENV_MODEL: &str = "OPTPRICER_MODEL";
const ENV_STEPS: &str = "OPTPRICER_STEPS";
const ENV_PATHS: &str = "OPTPRICER_PATHS";
const ENV_SEED: &str = "OPTPRICER_SEED";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json")]
    InvalidOutputFormat(String),

    #[error("Invalid pricing model: {0}. Must be one of: closed-form, lattice, simulation")]
    InvalidModel(String),

    #[error("Invalid risk-free rate: {0}. Must be finite")]
    InvalidRate(f64),

    #[error(transparent)]
    Engine(#[from] EngineConfigError),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidOutputFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Output format for command results
    #[serde(deserialize_with = "deserialize_output_format")]
    pub output: OutputFormat,
    /// Risk-free rate used when a command is not given one
    pub rate: f64,
    /// Model used by `price` when `--model` is absent
    #[serde(deserialize_with = "deserialize_model")]
    pub model: PricingModel,
    /// Binomial lattice steps
    pub lattice_steps: usize,
    /// Monte Carlo paths
    pub simulation_paths: usize,
    /// Monte Carlo seed
    pub seed: u64,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_output_format<'de, D>(deserializer: D) -> Result<OutputFormat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    OutputFormat::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_model<'de, D>(deserializer: D) -> Result<PricingModel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    PricingModel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            output: OutputFormat::default(),
            rate: DEFAULT_RISK_FREE_RATE,
            model: PricingModel::default(),
            lattice_steps: DEFAULT_LATTICE_STEPS,
            simulation_paths: DEFAULT_SIMULATION_PATHS,
            seed: DEFAULT_SEED,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Overrides every field whose `OPTPRICER_*` variable `lookup` returns
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = OutputFormat::from_str(&output)?;
        }
        if let Some(model) = lookup(ENV_MODEL) {
            self.model =
                PricingModel::from_str(&model).map_err(|_| ConfigError::InvalidModel(model))?;
        }
        if let Some(rate) = lookup(ENV_RATE) {
            self.rate = parse_env(ENV_RATE, &rate)?;
        }
        if let Some(steps) = lookup(ENV_STEPS) {
            self.lattice_steps = parse_env(ENV_STEPS, &steps)?;
        }
        if let Some(paths) = lookup(ENV_PATHS) {
            self.simulation_paths = parse_env(ENV_PATHS, &paths)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = parse_env(ENV_SEED, &seed)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rate.is_finite() {
            return Err(ConfigError::InvalidRate(self.rate));
        }
        self.engine_config()?;
        Ok(())
    }

    /// Lattice and simulation settings for the pricing engine
    pub fn engine_config(&self) -> Result<EngineConfig, ConfigError> {
        Ok(EngineConfig {
            lattice: LatticeConfig::new(self.lattice_steps)?,
            simulation: SimulationConfig::new(self.simulation_paths, self.seed)?,
        })
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(output) = &cli.output {
            self.output = OutputFormat::from_str(output)?;
        }
        if let Some(rate) = cli.rate {
            self.rate = rate;
        }
        if let Some(steps) = cli.lattice_steps {
            self.lattice_steps = steps;
        }
        if let Some(paths) = cli.simulation_paths {
            self.simulation_paths = paths;
        }
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        Ok(())
    }
}

fn parse_env<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ConfigError::EnvError(format!("{}={}: {}", key, value, e)))
}

/// Configuration overrides taken from the command line
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Output format override
    pub output: Option<String>,
    /// Risk-free rate override
    pub rate: Option<f64>,
    /// Lattice step override
    pub lattice_steps: Option<usize>,
    /// Monte Carlo path override
    pub simulation_paths: Option<usize>,
    /// Monte Carlo seed override
    pub seed: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}

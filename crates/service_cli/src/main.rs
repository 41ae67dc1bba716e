//! optpricer - European option pricing from the command line
//!
//! This is the operational entry point for the option pricing engine.
//!
//! # Commands
//!
//! - `optpricer price` - Price one option with a chosen model
//! - `optpricer greeks` - Closed-form Greeks
//! - `optpricer compare` - Price with every model side by side
//! - `optpricer vol <file>` - Historical volatility from a CSV of closes
//! - `optpricer check` - Print the effective configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate resolves configuration and
//! inputs, calls `pricer_pricing::solver`, and does all formatting. The
//! engine crates never print.

use clap::{Parser, Subcommand};
use pricer_core::types::{Date, PricingModel};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod history;
mod output;

pub use error::{CliError, Result};

use commands::OptionArgs;
use config::{CliArgs, CliConfig, LogLevel};

/// European option pricer
#[derive(Parser)]
#[command(name = "optpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "OPTPRICER_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, global = true)]
    output: Option<String>,

    /// Risk-free rate as a decimal fraction
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// Binomial lattice steps
    #[arg(long, global = true)]
    steps: Option<usize>,

    /// Monte Carlo paths
    #[arg(long, global = true)]
    paths: Option<usize>,

    /// Monte Carlo seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one option with a chosen model
    Price {
        #[command(flatten)]
        option: OptionArgs,

        /// Pricing model (closed-form, lattice, simulation)
        #[arg(short, long)]
        model: Option<PricingModel>,
    },

    /// Closed-form price and Greeks
    Greeks {
        #[command(flatten)]
        option: OptionArgs,
    },

    /// Price with all three models side by side
    Compare {
        #[command(flatten)]
        option: OptionArgs,
    },

    /// Historical volatility from a CSV file with date and close columns
    Vol {
        /// Path to the history file
        file: PathBuf,

        /// Only use closes on or after this date (YYYY-MM-DD)
        #[arg(long)]
        since: Option<Date>,

        /// Only use the most recent N closes
        #[arg(long)]
        last: Option<usize>,
    },

    /// Check the effective configuration
    Check,
}

impl Cli {
    fn config_args(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            log_level: self.log_level.clone(),
            output: self.output.clone(),
            rate: self.rate,
            lattice_steps: self.steps,
            simulation_paths: self.paths,
            seed: self.seed,
        }
    }
}

/// Initialise tracing subscriber
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr
/// so that JSON output on stdout stays machine-readable.
fn init_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.as_filter_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn dispatch(cli: &Cli, config: &CliConfig) -> Result<()> {
    match &cli.command {
        Commands::Price { option, model } => commands::price::run(option, *model, config),
        Commands::Greeks { option } => commands::greeks::run(option, config),
        Commands::Compare { option } => commands::compare::run(option, config),
        Commands::Vol { file, since, last } => commands::vol::run(file, *since, *last, config),
        Commands::Check => commands::check::run(cli.config.as_deref(), config),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Configuration errors still need a subscriber to be reported through
    let config = config::build_config(&cli.config_args());
    let log_level = config.as_ref().map(|c| c.log_level).unwrap_or_default();
    init_tracing(log_level);

    let result = config
        .map_err(CliError::from)
        .and_then(|config| {
            info!(version = env!("CARGO_PKG_VERSION"), "optpricer starting");
            dispatch(&cli, &config)
        });

    if let Err(err) = &result {
        error!("{}", err);
    }
    Ok(result?)
}

//! Check command implementation
//!
//! Prints the effective configuration after defaults, config file,
//! environment and flags have been merged.

use pricer_pricing::mc::SIMULATION_BLOCK_SIZE;
use serde::Serialize;
use std::path::Path;
use tracing::info;

use crate::config::CliConfig;
use crate::output::{self, percent, Report, Table};
use crate::Result;

/// Result of the `check` command
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub version: &'static str,
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: CliConfig,
    pub simulation_block_size: usize,
}

impl CheckReport {
    pub fn build(config_file: Option<&Path>, config: &CliConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            version: env!("CARGO_PKG_VERSION"),
            config_file: config_file.map(|p| p.display().to_string()),
            config: config.clone(),
            simulation_block_size: SIMULATION_BLOCK_SIZE,
        })
    }
}

impl Report for CheckReport {
    fn to_table(&self) -> Table {
        let c = &self.config;
        Table::new(["Setting", "Value"])
            .row(["Version".to_string(), self.version.to_string()])
            .row([
                "Config file".to_string(),
                self.config_file.clone().unwrap_or_else(|| "(none)".to_string()),
            ])
            .row(["Log level".to_string(), c.log_level.to_string()])
            .row(["Output".to_string(), c.output.to_string()])
            .row(["Risk-free rate".to_string(), percent(c.rate)])
            .row([
                "Default model".to_string(),
                format!("{} ({})", c.model, c.model.display_name()),
            ])
            .row(["Lattice steps".to_string(), c.lattice_steps.to_string()])
            .row(["Simulation paths".to_string(), c.simulation_paths.to_string()])
            .row(["Seed".to_string(), c.seed.to_string()])
            .row([
                "Simulation block size".to_string(),
                self.simulation_block_size.to_string(),
            ])
    }
}

/// Run the check command
pub fn run(config_file: Option<&Path>, config: &CliConfig) -> Result<()> {
    info!("checking configuration");
    let report = CheckReport::build(config_file, config)?;
    output::emit(&report, config.output)
}

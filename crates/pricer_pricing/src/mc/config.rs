//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for simulation
//! pricing.

use crate::error::ConfigError;

/// Default number of simulated paths.
pub const DEFAULT_SIMULATION_PATHS: usize = 10_000;

/// Default random seed, fixed so that unseeded runs are reproducible.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo simulation configuration.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{SimulationConfig, DEFAULT_SEED};
///
/// let config = SimulationConfig::builder()
///     .n_paths(100_000)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.seed(), DEFAULT_SEED);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimulationConfig {
    n_paths: usize,
    seed: u64,
}

impl SimulationConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// `ConfigError::InvalidPathCount` if `n_paths` is zero.
    pub fn new(n_paths: usize, seed: u64) -> Result<Self, ConfigError> {
        let config = Self { n_paths, seed };
        config.validate()?;
        Ok(config)
    }

    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of simulated paths M.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Base random seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a copy with a different seed.
    pub fn with_seed(&self, seed: u64) -> Self {
        Self { seed, ..*self }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// `ConfigError::InvalidPathCount` if `n_paths` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_paths: DEFAULT_SIMULATION_PATHS,
            seed: DEFAULT_SEED,
        }
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields fall back to [`DEFAULT_SIMULATION_PATHS`] and [`DEFAULT_SEED`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of paths.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the random seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// `ConfigError::InvalidPathCount` if the path count is zero.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        SimulationConfig::new(
            self.n_paths.unwrap_or(DEFAULT_SIMULATION_PATHS),
            self.seed.unwrap_or(DEFAULT_SEED),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.seed(), 42);
        assert_eq!(SimulationConfig::builder().build().unwrap(), config);
    }

    #[test]
    fn test_builder_with_seed() {
        let config = SimulationConfig::builder()
            .n_paths(1000)
            .seed(7)
            .build()
            .unwrap();

        assert_eq!(config.n_paths(), 1000);
        assert_eq!(config.seed(), 7);
    }

    #[test]
    fn test_zero_paths_rejected() {
        let result = SimulationConfig::builder().n_paths(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidPathCount(0))));
        assert!(SimulationConfig::new(0, 1).is_err());
    }

    #[test]
    fn test_with_seed_keeps_paths() {
        let config = SimulationConfig::new(500, 1).unwrap().with_seed(2);
        assert_eq!(config.n_paths(), 500);
        assert_eq!(config.seed(), 2);
    }
}

//! Lattice configuration.

use crate::error::ConfigError;

/// Default number of time steps.
pub const DEFAULT_LATTICE_STEPS: usize = 100;

/// Binomial lattice configuration.
///
/// Pricing cost is O(N²) time in the step count N; memory is O(N).
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::lattice::{LatticeConfig, DEFAULT_LATTICE_STEPS};
///
/// assert_eq!(LatticeConfig::default().steps(), DEFAULT_LATTICE_STEPS);
/// assert_eq!(LatticeConfig::new(500).unwrap().steps(), 500);
/// assert!(LatticeConfig::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatticeConfig {
    steps: usize,
}

impl LatticeConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    /// `ConfigError::InvalidStepCount` if `steps` is zero.
    pub fn new(steps: usize) -> Result<Self, ConfigError> {
        let config = Self { steps };
        config.validate()?;
        Ok(config)
    }

    /// Number of time steps N.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Re-checks the invariants, for configurations obtained by deserialisation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::InvalidStepCount(self.steps));
        }
        Ok(())
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_LATTICE_STEPS,
        }
    }
}

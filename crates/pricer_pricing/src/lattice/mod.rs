//! Cox-Ross-Rubinstein binomial lattice for European options.
//!
//! - [`LatticeConfig`]: validated step count
//! - [`LatticeSolver`]: backward induction over a single O(N) layer buffer

mod binomial;
mod config;

pub use binomial::LatticeSolver;
pub use config::{LatticeConfig, DEFAULT_LATTICE_STEPS};

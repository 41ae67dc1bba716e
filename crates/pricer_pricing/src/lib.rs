//! # Pricer Pricing (Layer 3: Numerical Engines)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing hosts the numerical solvers that complement the closed form
//! in `pricer_models`:
//! - Cox-Ross-Rubinstein binomial lattice (`lattice`)
//! - Geometric Brownian motion Monte Carlo with parallel, reproducible blocks (`mc`)
//! - Seeded random number generation (`rng`)
//! - The public solver facade (`solver`) and an optional price cache (`cache`)
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `OptionParameters`, `OptionSide`, `PricingError`, `OptionPricer`
//! - Layer 2 (pricer_models): closed-form pricing, Greeks and historical volatility
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, OptionSide};
//! use pricer_pricing::solver::{solve_closed_form, solve_lattice, solve_simulation};
//! use pricer_pricing::mc::DEFAULT_SEED;
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//!
//! let exact = solve_closed_form(&params, OptionSide::Call).unwrap();
//! let tree = solve_lattice(&params, OptionSide::Call, 100).unwrap();
//! let mc = solve_simulation(&params, OptionSide::Call, 10_000, DEFAULT_SEED).unwrap();
//!
//! assert!((tree - exact).abs() < 0.05);
//! assert!((mc - exact).abs() < 0.5);
//! ```
//!
//! ## Reproducibility
//!
//! Monte Carlo paths are split into fixed-size blocks, each with its own
//! random stream derived from the seed and the block index. Block sums are
//! combined in block order, so results are bit-identical across runs and
//! independent of the rayon thread count.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

// Engine configuration errors
pub mod error;

// Random number generation
pub mod rng;

// Binomial lattice
pub mod lattice;

// Monte Carlo simulation
pub mod mc;

// Public computational API
pub mod solver;

// Optional memoization layer
pub mod cache;

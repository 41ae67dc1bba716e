//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for the Monte Carlo engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator is built from an explicit seed
//! - **Independent streams**: [`PricerRng::for_stream`] derives a distinct
//!   generator per simulation block, so blocks can run on any thread
//! - **Efficiency**: batch filling through `&mut [f64]` slices
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! let mut rng = PricerRng::from_seed(12345);
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//!
//! let mut block = vec![0.0; 64];
//! PricerRng::for_stream(12345, 3).fill_normal(&mut block);
//! ```

mod prng;

pub use prng::PricerRng;

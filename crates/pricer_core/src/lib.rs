//! # pricer_core: Foundation Types for the Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Option inputs: `OptionParameters`, `OptionSide`, `PricingModel` (`types::option`)
//! - Time types: `Date` and ACT/365 year fractions (`types::time`)
//! - Error taxonomy: `PricingError`, `DateError` (`types::error`)
//! - Historical closing-price series for volatility estimation (`market_data`)
//! - The `OptionPricer` trait implemented by every solver (`traits`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, OptionSide, PricingModel};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! assert_eq!(params.spot(), 100.0);
//!
//! let side: OptionSide = "put".parse().unwrap();
//! assert_eq!(side, OptionSide::Put);
//!
//! let model: PricingModel = "binomial".parse().unwrap();
//! assert_eq!(model, PricingModel::Lattice);
//!
//! // Invalid inputs are rejected at construction time
//! assert!(OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.0).is_err());
//! assert!("straddle".parse::<OptionSide>().is_err());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date, option inputs and price points

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod traits;
pub mod types;

//! Core traits shared by the pricing engines.
//!
//! This module defines:
//! - Price calculation for a single option (`OptionPricer` trait)
//!
//! Solvers are plain structs implementing the trait, so callers compose them
//! with static dispatch (generics) and pay no virtual-call cost in loops.

pub mod priceable;

pub use priceable::OptionPricer;

//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form valuation, analytical sensitivities and volatility estimation.
//!
//! This crate provides:
//! - Standard normal distribution functions (`analytical::distributions`)
//! - Black-Scholes pricing for European calls and puts (`analytical::black_scholes`)
//! - Analytical Greeks: delta, gamma, theta, vega, rho (`analytical::greeks`)
//! - Historical volatility from closing prices (`volatility`)
//!
//! ## Design Principles
//!
//! - **Validated inputs**: every entry point takes `pricer_core::types::OptionParameters`
//! - **Typed failures**: formulas outside their domain return errors, never NaN
//! - **Pure functions**: no shared state, safe to call from any thread
//!
//! ## Example
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, OptionSide};
//! use pricer_models::analytical::{compute_greeks, BlackScholes};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! let call = BlackScholes::new(&params).unwrap().price(OptionSide::Call);
//! assert!((call - 10.4506).abs() < 1e-4);
//!
//! let greeks = compute_greeks(&params, OptionSide::Call).unwrap();
//! assert!((greeks.delta - 0.6368).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod volatility;

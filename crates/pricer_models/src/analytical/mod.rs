//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions under Black-Scholes dynamics:
//! - Standard normal CDF and PDF
//! - Call and put prices
//! - Analytical Greeks (Delta, Gamma, Theta, Vega, Rho)
//!
//! ## Design Principles
//!
//! - **Shared intermediates**: d1, d2, √T and the discount factor are computed
//!   once per [`BlackScholes`] value and reused by price and every Greek
//! - **Numerical Stability**: the CDF is accurate to double precision and
//!   exactly symmetric, so put-call parity holds to rounding error

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod greeks;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, ClosedFormSolver};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use greeks::{compute_greeks, GreeksResult};

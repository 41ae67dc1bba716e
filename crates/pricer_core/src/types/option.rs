//! Option inputs shared by every solver.
//!
//! This module provides:
//! - [`OptionParameters`]: the five validated market inputs (S, K, T, r, σ)
//! - [`OptionSide`]: call or put, with the vanilla payoff
//! - [`PricingModel`]: which numerical method prices the option
//!
//! All three are plain values: constructed once per request, never mutated,
//! and passed to solvers by immutable reference.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;
use super::time::{time_to_maturity_dates, Date};

/// Validated European option inputs.
///
/// # Invariants
/// - All five fields are finite
/// - `spot`, `strike` and `volatility` are strictly positive
/// - `expiry` (time to maturity in years) is non-negative
/// - `rate` may take any finite value, including negative rates
///
/// Rates and volatilities are decimal fractions (`0.05` is 5%).
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
///
/// let params = OptionParameters::new(100.0, 95.0, 0.5, 0.03, 0.25).unwrap();
/// assert_eq!(params.strike(), 95.0);
/// assert!((params.discount_factor() - (-0.015_f64).exp()).abs() < 1e-15);
///
/// // Non-positive volatility is a domain error
/// assert!(OptionParameters::new(100.0, 95.0, 0.5, 0.03, -0.25).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OptionParameters {
    /// Spot price (S)
    spot: f64,
    /// Strike price (K)
    strike: f64,
    /// Time to maturity in years (T)
    expiry: f64,
    /// Risk-free rate (r)
    rate: f64,
    /// Volatility (σ)
    volatility: f64,
}

impl OptionParameters {
    /// Creates validated option inputs.
    ///
    /// # Arguments
    /// * `spot` - Current price of the underlying (> 0)
    /// * `strike` - Strike price (> 0)
    /// * `expiry` - Time to maturity in years (>= 0)
    /// * `rate` - Annualised risk-free rate
    /// * `volatility` - Annualised volatility (> 0)
    ///
    /// # Errors
    /// `PricingError::Domain` if any field is non-finite or out of range.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        check_positive("spot", spot)?;
        check_positive("strike", strike)?;
        check_positive("volatility", volatility)?;

        if !expiry.is_finite() || expiry < 0.0 {
            return Err(PricingError::domain(format!(
                "time to maturity must be finite and non-negative, got T = {}",
                expiry
            )));
        }
        if !rate.is_finite() {
            return Err(PricingError::domain(format!(
                "risk-free rate must be finite, got r = {}",
                rate
            )));
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Creates option inputs from a valuation date and an expiry date.
    ///
    /// Time to maturity is the ACT/365 year fraction between the two dates.
    /// An expiry before the valuation date is rejected rather than floored
    /// to zero, since flooring would silently change the price.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{Date, OptionParameters};
    ///
    /// let today = Date::from_ymd(2024, 1, 1).unwrap();
    /// let expiry = Date::from_ymd(2024, 12, 31).unwrap();
    /// let params = OptionParameters::from_dates(100.0, 100.0, today, expiry, 0.05, 0.2).unwrap();
    /// assert!((params.expiry() - 365.0 / 365.0).abs() < 1e-12);
    ///
    /// assert!(OptionParameters::from_dates(100.0, 100.0, expiry, today, 0.05, 0.2).is_err());
    /// ```
    pub fn from_dates(
        spot: f64,
        strike: f64,
        valuation: Date,
        expiry: Date,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        let t = time_to_maturity_dates(valuation, expiry);
        if t < 0.0 {
            return Err(PricingError::domain(format!(
                "expiry {} is before valuation date {}",
                expiry, valuation
            )));
        }
        Self::new(spot, strike, t, rate, volatility)
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> f64 {
        self.expiry
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Discount factor to maturity, e^(-rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.expiry).exp()
    }

    /// Returns a copy with a different spot, revalidated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        Self::new(spot, self.strike, self.expiry, self.rate, self.volatility)
    }

    /// Returns a copy with a different strike, revalidated.
    pub fn with_strike(&self, strike: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, strike, self.expiry, self.rate, self.volatility)
    }

    /// Returns a copy with a different time to maturity, revalidated.
    pub fn with_expiry(&self, expiry: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.strike, expiry, self.rate, self.volatility)
    }

    /// Returns a copy with a different rate, revalidated.
    pub fn with_rate(&self, rate: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.strike, self.expiry, rate, self.volatility)
    }

    /// Returns a copy with a different volatility, revalidated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        Self::new(self.spot, self.strike, self.expiry, self.rate, volatility)
    }
}

fn check_positive(name: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::domain(format!(
            "{} must be finite and positive, got {}",
            name, value
        )))
    }
}

/// Option side: determines payoff orientation and formula signs.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionSide;
///
/// assert_eq!(OptionSide::Call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(OptionSide::Put.payoff(110.0, 100.0), 0.0);
///
/// let side: OptionSide = "CALL".parse().unwrap();
/// assert!(side.is_call());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionSide {
    /// Right to buy at the strike: max(S_T - K, 0)
    Call,
    /// Right to sell at the strike: max(K - S_T, 0)
    Put,
}

impl OptionSide {
    /// Both sides, calls first.
    pub const ALL: [OptionSide; 2] = [OptionSide::Call, OptionSide::Put];

    /// Vanilla payoff at a terminal underlying price.
    #[inline]
    pub fn payoff(&self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionSide::Call => (terminal - strike).max(0.0),
            OptionSide::Put => (strike - terminal).max(0.0),
        }
    }

    /// Returns true for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionSide::Call)
    }

    /// Lowercase name used on the command line and in JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionSide::Call => "call",
            OptionSide::Put => "put",
        }
    }
}

impl FromStr for OptionSide {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(OptionSide::Call),
            "put" | "p" => Ok(OptionSide::Put),
            _ => Err(PricingError::domain(format!(
                "unknown option side '{}': expected call or put",
                s
            ))),
        }
    }
}

impl fmt::Display for OptionSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numerical method used to price an option.
///
/// All three converge to the same value for the same inputs as lattice depth
/// and simulation path count grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum PricingModel {
    /// Black-Scholes analytic formula
    #[default]
    ClosedForm,
    /// Cox-Ross-Rubinstein binomial tree
    Lattice,
    /// Monte Carlo simulation of terminal prices
    Simulation,
}

impl PricingModel {
    /// Every model, in presentation order.
    pub const ALL: [PricingModel; 3] = [
        PricingModel::ClosedForm,
        PricingModel::Lattice,
        PricingModel::Simulation,
    ];

    /// Canonical kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingModel::ClosedForm => "closed-form",
            PricingModel::Lattice => "lattice",
            PricingModel::Simulation => "simulation",
        }
    }

    /// Human-readable name of the underlying method.
    pub fn display_name(&self) -> &'static str {
        match self {
            PricingModel::ClosedForm => "Black-Scholes",
            PricingModel::Lattice => "Binomial Tree",
            PricingModel::Simulation => "Monte Carlo",
        }
    }
}

impl FromStr for PricingModel {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase().replace(['_', ' '], "-");
        match normalised.as_str() {
            "closed-form" | "closedform" | "black-scholes" | "bs" | "analytic" => {
                Ok(PricingModel::ClosedForm)
            }
            "lattice" | "binomial" | "binomial-tree" | "tree" => Ok(PricingModel::Lattice),
            "simulation" | "monte-carlo" | "montecarlo" | "mc" => Ok(PricingModel::Simulation),
            _ => Err(PricingError::configuration(format!(
                "unknown pricing model '{}': expected closed-form, lattice or simulation",
                s
            ))),
        }
    }
}

impl fmt::Display for PricingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

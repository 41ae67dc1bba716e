//! Black-Scholes pricing model for European options.
//!
//! This module provides the Black-Scholes model for pricing European
//! call and put options with analytical Greeks calculations.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::traits::OptionPricer;
use pricer_core::types::{OptionParameters, OptionSide, PricingError, PricingModel};

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::greeks::GreeksResult;

/// Black-Scholes valuation of one parameter set.
///
/// Construction evaluates d₁, d₂, √T and the discount factor once; price and
/// every Greek then reuse them.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionSide};
/// use pricer_models::analytical::BlackScholes;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let bs = BlackScholes::new(&params).unwrap();
/// let call_price = bs.price(OptionSide::Call);
/// let put_price = bs.price(OptionSide::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call_price - put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    sqrt_t: f64,
    discount: f64,
    d1: f64,
    d2: f64,
}

impl BlackScholes {
    /// Prepares a closed-form valuation.
    ///
    /// # Errors
    /// - `AnalyticalError::NonPositiveExpiry` if T = 0
    /// - `AnalyticalError::InvalidVolatility` if σ <= 0
    /// - `AnalyticalError::NumericalInstability` if d₁ is not finite
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionParameters;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let expired = OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2).unwrap();
    /// assert!(BlackScholes::new(&expired).is_err());
    /// ```
    pub fn new(params: &OptionParameters) -> Result<Self, AnalyticalError> {
        let spot = params.spot();
        let strike = params.strike();
        let expiry = params.expiry();
        let rate = params.rate();
        let volatility = params.volatility();

        if expiry <= 0.0 {
            return Err(AnalyticalError::NonPositiveExpiry { expiry });
        }
        if volatility <= 0.0 {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }

        let sqrt_t = expiry.sqrt();
        let vol_sqrt_t = volatility * sqrt_t;

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = (spot / strike).ln();
        let drift = (rate + 0.5 * volatility * volatility) * expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;

        if !d1.is_finite() {
            return Err(AnalyticalError::NumericalInstability {
                message: format!("d1 = {} for σ√T = {}", d1, vol_sqrt_t),
            });
        }

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
            sqrt_t,
            discount: (-rate * expiry).exp(),
            d1,
            d2: d1 - vol_sqrt_t,
        })
    }

    /// The d₁ term.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// The d₂ term, d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// Option price for the given side.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{OptionParameters, OptionSide};
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    /// let put = BlackScholes::new(&params).unwrap().price(OptionSide::Put);
    /// assert!((put - 5.5735).abs() < 1e-4);
    /// ```
    #[inline]
    pub fn price(&self, side: OptionSide) -> f64 {
        match side {
            // C = S·N(d₁) - K·e^(-rT)·N(d₂)
            OptionSide::Call => {
                self.spot * norm_cdf(self.d1) - self.strike * self.discount * norm_cdf(self.d2)
            }
            // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
            OptionSide::Put => {
                self.strike * self.discount * norm_cdf(-self.d2) - self.spot * norm_cdf(-self.d1)
            }
        }
    }

    /// Delta (∂V/∂S): N(d₁) for calls, N(d₁) - 1 for puts.
    #[inline]
    pub fn delta(&self, side: OptionSide) -> f64 {
        match side {
            OptionSide::Call => norm_cdf(self.d1),
            OptionSide::Put => norm_cdf(self.d1) - 1.0,
        }
    }

    /// Gamma (∂²V/∂S²) = φ(d₁) / (S·σ·√T), identical for calls and puts.
    #[inline]
    pub fn gamma(&self) -> f64 {
        norm_pdf(self.d1) / (self.spot * self.volatility * self.sqrt_t)
    }

    /// Vega (∂V/∂σ) = S·√T·φ(d₁), per unit of volatility.
    #[inline]
    pub fn vega(&self) -> f64 {
        self.spot * self.sqrt_t * norm_pdf(self.d1)
    }

    /// Computes Theta, the time decay per year.
    ///
    /// - Call Theta = -(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)
    ///
    /// This is the derivative with respect to calendar time, so it is the
    /// negative of ∂V/∂T and usually negative.
    #[inline]
    pub fn theta(&self, side: OptionSide) -> f64 {
        let decay = -(self.spot * norm_pdf(self.d1) * self.volatility) / (2.0 * self.sqrt_t);
        let carry = self.rate * self.strike * self.discount;
        match side {
            OptionSide::Call => decay - carry * norm_cdf(self.d2),
            OptionSide::Put => decay + carry * norm_cdf(-self.d2),
        }
    }

    /// Rho (∂V/∂r), per unit of rate.
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    #[inline]
    pub fn rho(&self, side: OptionSide) -> f64 {
        let scale = self.strike * self.expiry * self.discount;
        match side {
            OptionSide::Call => scale * norm_cdf(self.d2),
            OptionSide::Put => -scale * norm_cdf(-self.d2),
        }
    }

    /// All five Greeks for the given side.
    pub fn greeks(&self, side: OptionSide) -> GreeksResult {
        GreeksResult {
            delta: self.delta(side),
            gamma: self.gamma(),
            theta: self.theta(side),
            vega: self.vega(),
            rho: self.rho(side),
        }
    }
}

/// Closed-form solver behind the [`OptionPricer`] interface.
///
/// # Examples
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionSide, PricingModel};
/// use pricer_models::analytical::ClosedFormSolver;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let solver = ClosedFormSolver;
/// assert_eq!(solver.model(), PricingModel::ClosedForm);
/// assert!((solver.price(&params, OptionSide::Call).unwrap() - 10.45).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClosedFormSolver;

impl OptionPricer for ClosedFormSolver {
    fn model(&self) -> PricingModel {
        PricingModel::ClosedForm
    }

    fn price(&self, params: &OptionParameters, side: OptionSide) -> Result<f64, PricingError> {
        Ok(BlackScholes::new(params)?.price(side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scenario_a() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    fn bs(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64) -> BlackScholes {
        let params = OptionParameters::new(spot, strike, expiry, rate, vol).unwrap();
        BlackScholes::new(&params).unwrap()
    }

    // ==========================================================
    // Construction
    // ==========================================================

    #[test]
    fn test_zero_expiry_rejected() {
        let params = scenario_a().with_expiry(0.0).unwrap();
        assert_eq!(
            BlackScholes::new(&params),
            Err(AnalyticalError::NonPositiveExpiry { expiry: 0.0 })
        );
    }

    #[test]
    fn test_d1_d2_values() {
        let model = BlackScholes::new(&scenario_a()).unwrap();
        // ln(1) + (0.05 + 0.02) * 1 = 0.07, / 0.2 = 0.35
        assert_relative_eq!(model.d1(), 0.35, epsilon = 1e-12);
        assert_relative_eq!(model.d2(), 0.15, epsilon = 1e-12);
    }

    // ==========================================================
    // Prices
    // ==========================================================

    #[test]
    fn test_scenario_call_price() {
        let model = BlackScholes::new(&scenario_a()).unwrap();
        assert_relative_eq!(model.price(OptionSide::Call), 10.450583572185565, epsilon = 1e-10);
    }

    #[test]
    fn test_scenario_put_price() {
        let model = BlackScholes::new(&scenario_a()).unwrap();
        assert_relative_eq!(model.price(OptionSide::Put), 5.573526022256971, epsilon = 1e-10);
    }

    #[test]
    fn test_put_call_parity() {
        let cases = [
            (100.0, 100.0, 1.0, 0.05, 0.2),
            (80.0, 120.0, 0.25, 0.01, 0.45),
            (150.0, 90.0, 3.0, -0.01, 0.1),
            (42.0, 40.0, 0.0833, 0.08, 0.6),
        ];
        for (s, k, t, r, v) in cases {
            let model = bs(s, k, t, r, v);
            let lhs = model.price(OptionSide::Call) - model.price(OptionSide::Put);
            let rhs = s - k * (-r * t).exp();
            assert_relative_eq!(lhs, rhs, max_relative = 1e-9, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_deep_itm_call_approaches_forward_intrinsic() {
        let model = bs(200.0, 50.0, 1.0, 0.05, 0.2);
        let forward_intrinsic = 200.0 - 50.0 * (-0.05_f64).exp();
        assert_relative_eq!(model.price(OptionSide::Call), forward_intrinsic, epsilon = 1e-8);
        assert!(model.price(OptionSide::Put) < 1e-10);
    }

    #[test]
    fn test_prices_non_negative() {
        for strike in [10.0, 50.0, 100.0, 200.0, 1000.0] {
            let model = bs(100.0, strike, 0.5, 0.03, 0.3);
            assert!(model.price(OptionSide::Call) >= 0.0);
            assert!(model.price(OptionSide::Put) >= 0.0);
        }
    }

    // ==========================================================
    // Greeks
    // ==========================================================

    #[test]
    fn test_scenario_greeks() {
        let model = BlackScholes::new(&scenario_a()).unwrap();
        assert_relative_eq!(model.delta(OptionSide::Call), 0.6368306511756191, epsilon = 1e-12);
        assert_relative_eq!(model.gamma(), 0.018762017345846895, epsilon = 1e-12);
        assert_relative_eq!(model.vega(), 37.52403469169379, epsilon = 1e-9);
        assert_relative_eq!(model.theta(OptionSide::Call), -6.414027546438197, epsilon = 1e-9);
        assert_relative_eq!(model.theta(OptionSide::Put), -1.657880423934626, epsilon = 1e-9);
        assert_relative_eq!(model.rho(OptionSide::Call), 53.232481545376345, epsilon = 1e-9);
        assert_relative_eq!(model.rho(OptionSide::Put), -41.89046090469506, epsilon = 1e-9);
    }

    #[test]
    fn test_delta_put_call_relationship() {
        let model = bs(110.0, 100.0, 0.75, 0.02, 0.25);
        assert_relative_eq!(
            model.delta(OptionSide::Call) - model.delta(OptionSide::Put),
            1.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_greeks_struct_matches_methods() {
        let model = BlackScholes::new(&scenario_a()).unwrap();
        for side in OptionSide::ALL {
            let greeks = model.greeks(side);
            assert_eq!(greeks.delta, model.delta(side));
            assert_eq!(greeks.gamma, model.gamma());
            assert_eq!(greeks.theta, model.theta(side));
            assert_eq!(greeks.vega, model.vega());
            assert_eq!(greeks.rho, model.rho(side));
        }
    }

    // ==========================================================
    // OptionPricer implementation
    // ==========================================================

    #[test]
    fn test_solver_propagates_domain_error() {
        let params = scenario_a().with_expiry(0.0).unwrap();
        let err = ClosedFormSolver.price(&params, OptionSide::Call).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_solver_matches_model() {
        let params = scenario_a();
        let direct = BlackScholes::new(&params).unwrap();
        for side in OptionSide::ALL {
            assert_eq!(ClosedFormSolver.price(&params, side).unwrap(), direct.price(side));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_parity_property(
                spot in 1.0f64..500.0,
                strike in 1.0f64..500.0,
                expiry in 0.01f64..5.0,
                rate in -0.02f64..0.15,
                vol in 0.05f64..1.0,
            ) {
                let model = bs(spot, strike, expiry, rate, vol);
                let lhs = model.price(OptionSide::Call) - model.price(OptionSide::Put);
                let rhs = spot - strike * (-rate * expiry).exp();
                prop_assert!((lhs - rhs).abs() <= 1e-9 * spot.max(strike));
            }

            #[test]
            fn test_call_monotone_in_spot(
                spot in 10.0f64..200.0,
                bump in 0.1f64..10.0,
            ) {
                let low = bs(spot, 100.0, 1.0, 0.05, 0.2).price(OptionSide::Call);
                let high = bs(spot + bump, 100.0, 1.0, 0.05, 0.2).price(OptionSide::Call);
                prop_assert!(high >= low);
            }
        }
    }
}

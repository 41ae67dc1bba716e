//! Closed-form Greeks result type.
//!
//! Provides [`GreeksResult`] and [`compute_greeks`], the analytical
//! sensitivities of a European option under Black-Scholes dynamics.

use pricer_core::types::{OptionParameters, OptionSide, PricingError};

use super::black_scholes::BlackScholes;

/// The five standard Greeks of one option.
///
/// Values are raw partial derivatives:
///
/// - `delta`: ∂V/∂S
/// - `gamma`: ∂²V/∂S²
/// - `theta`: ∂V/∂t per year of calendar time (time decay)
/// - `vega`: ∂V/∂σ per 1.00 of volatility
/// - `rho`: ∂V/∂r per 1.00 of rate
///
/// Scaling to per-day or per-percentage-point conventions is left to the
/// presentation layer.
///
/// # Examples
///
/// ```rust
/// use pricer_models::analytical::GreeksResult;
///
/// let greeks = GreeksResult {
///     delta: 0.64,
///     gamma: 0.019,
///     theta: -6.41,
///     vega: 37.5,
///     rho: 53.2,
/// };
/// assert!(greeks.is_finite());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult {
    /// Delta: ∂V/∂S (sensitivity to spot price).
    pub delta: f64,
    /// Gamma: ∂²V/∂S² (convexity with respect to spot).
    pub gamma: f64,
    /// Theta: time decay per year.
    pub theta: f64,
    /// Vega: ∂V/∂σ (sensitivity to volatility).
    pub vega: f64,
    /// Rho: ∂V/∂r (sensitivity to interest rate).
    pub rho: f64,
}

impl GreeksResult {
    /// True when every sensitivity is a finite number.
    pub fn is_finite(&self) -> bool {
        [self.delta, self.gamma, self.theta, self.vega, self.rho]
            .iter()
            .all(|v| v.is_finite())
    }
}

/// Computes closed-form Greeks.
///
/// # Errors
/// `PricingError::Domain` when T = 0, where the formulas divide by zero.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionParameters, OptionSide};
/// use pricer_models::analytical::compute_greeks;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let greeks = compute_greeks(&params, OptionSide::Call).unwrap();
/// assert!((greeks.gamma - 0.0188).abs() < 1e-4);
/// assert!((greeks.vega - 37.52).abs() < 1e-2);
/// ```
pub fn compute_greeks(
    params: &OptionParameters,
    side: OptionSide,
) -> Result<GreeksResult, PricingError> {
    Ok(BlackScholes::new(params)?.greeks(side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn price(params: &OptionParameters, side: OptionSide) -> f64 {
        BlackScholes::new(params).unwrap().price(side)
    }

    fn central_difference(
        params: &OptionParameters,
        side: OptionSide,
        h: f64,
        bump: impl Fn(&OptionParameters, f64) -> OptionParameters,
    ) -> f64 {
        (price(&bump(params, h), side) - price(&bump(params, -h), side)) / (2.0 * h)
    }

    #[test]
    fn test_scenario_greeks() {
        let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let greeks = compute_greeks(&params, OptionSide::Call).unwrap();
        assert_relative_eq!(greeks.delta, 0.6368, epsilon = 1e-4);
        assert_relative_eq!(greeks.gamma, 0.0188, epsilon = 1e-4);
        assert_relative_eq!(greeks.vega, 37.52, epsilon = 1e-2);
        assert!(greeks.is_finite());
    }

    #[test]
    fn test_zero_expiry_is_domain_error() {
        let params = OptionParameters::new(100.0, 100.0, 0.0, 0.05, 0.2).unwrap();
        let err = compute_greeks(&params, OptionSide::Put).unwrap_err();
        assert!(err.is_domain());
    }

    #[test]
    fn test_side_independent_greeks() {
        let params = OptionParameters::new(95.0, 105.0, 0.4, 0.03, 0.35).unwrap();
        let call = compute_greeks(&params, OptionSide::Call).unwrap();
        let put = compute_greeks(&params, OptionSide::Put).unwrap();
        assert_eq!(call.gamma, put.gamma);
        assert_eq!(call.vega, put.vega);
    }

    #[test]
    fn test_is_finite_detects_nan() {
        let greeks = GreeksResult {
            theta: f64::NAN,
            ..GreeksResult::default()
        };
        assert!(!greeks.is_finite());
    }

    // ==========================================================
    // Finite-difference agreement
    // ==========================================================

    #[test]
    fn test_greeks_match_finite_differences() {
        let cases = [
            (100.0, 100.0, 1.0, 0.05, 0.2),
            (90.0, 110.0, 0.5, 0.02, 0.35),
            (120.0, 100.0, 2.0, 0.07, 0.15),
        ];

        for (s, k, t, r, v) in cases {
            let params = OptionParameters::new(s, k, t, r, v).unwrap();
            for side in OptionSide::ALL {
                let greeks = compute_greeks(&params, side).unwrap();

                let fd_delta = central_difference(&params, side, 1e-3 * s, |p, h| {
                    p.with_spot(p.spot() + h).unwrap()
                });
                let fd_vega = central_difference(&params, side, 1e-4, |p, h| {
                    p.with_volatility(p.volatility() + h).unwrap()
                });
                let fd_rho = central_difference(&params, side, 1e-5, |p, h| {
                    p.with_rate(p.rate() + h).unwrap()
                });
                // Theta is the derivative with respect to calendar time: -∂V/∂T
                let fd_theta = -central_difference(&params, side, 1e-5, |p, h| {
                    p.with_expiry(p.expiry() + h).unwrap()
                });

                let h = 1e-2 * s;
                let up = price(&params.with_spot(s + h).unwrap(), side);
                let mid = price(&params, side);
                let down = price(&params.with_spot(s - h).unwrap(), side);
                let fd_gamma = (up - 2.0 * mid + down) / (h * h);

                assert_relative_eq!(greeks.delta, fd_delta, epsilon = 1e-5);
                assert_relative_eq!(greeks.gamma, fd_gamma, epsilon = 1e-5);
                assert_relative_eq!(greeks.vega, fd_vega, epsilon = 1e-5);
                assert_relative_eq!(greeks.rho, fd_rho, epsilon = 1e-4);
                assert_relative_eq!(greeks.theta, fd_theta, epsilon = 1e-4);
            }
        }
    }
}

//! Trait for solvers that price a European vanilla option.

use crate::types::{OptionParameters, OptionSide, PricingError, PricingModel};

/// A solver that turns option inputs into a price.
///
/// Implementations must be pure functions of their explicit inputs and
/// their own (immutable) configuration: no shared mutable state, no I/O.
/// That keeps every implementation reentrant, so one solver value can be
/// used from many threads at once.
///
/// # Examples
/// ```
/// use pricer_core::traits::OptionPricer;
/// use pricer_core::types::{OptionParameters, OptionSide, PricingError, PricingModel};
///
/// /// Prices every option at its undiscounted intrinsic value.
/// struct Intrinsic;
///
/// impl OptionPricer for Intrinsic {
///     fn model(&self) -> PricingModel {
///         PricingModel::ClosedForm
///     }
///
///     fn price(&self, params: &OptionParameters, side: OptionSide) -> Result<f64, PricingError> {
///         Ok(side.payoff(params.spot(), params.strike()))
///     }
/// }
///
/// let params = OptionParameters::new(110.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert_eq!(Intrinsic.price(&params, OptionSide::Call).unwrap(), 10.0);
/// ```
pub trait OptionPricer {
    /// The numerical method this solver implements.
    fn model(&self) -> PricingModel;

    /// Prices one option.
    ///
    /// # Errors
    /// `PricingError::Domain` when the inputs fall outside the method's
    /// domain, `PricingError::Configuration` when the solver itself is
    /// misconfigured.
    fn price(&self, params: &OptionParameters, side: OptionSide) -> Result<f64, PricingError>;
}

impl<P: OptionPricer + ?Sized> OptionPricer for &P {
    fn model(&self) -> PricingModel {
        (**self).model()
    }

    fn price(&self, params: &OptionParameters, side: OptionSide) -> Result<f64, PricingError> {
        (**self).price(params, side)
    }
}

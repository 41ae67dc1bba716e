//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float` so they work for `f32` and `f64`.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// sqrt(2 * pi)
const SQRT_2PI: f64 = 2.506_628_274_631_000_5;

/// Beyond this |x| the tail probability underflows double precision.
const TAIL_CUTOFF: f64 = 37.0;

/// Switch point between the rational approximation and the continued fraction.
const RATIONAL_LIMIT: f64 = 7.071_067_811_865_47;

/// Hart (1968) rational approximation, numerator coefficients (highest degree first).
const HART_NUM: [f64; 7] = [
    3.526_249_659_989_11e-2,
    0.700_383_064_443_688,
    6.373_962_203_531_65,
    33.912_866_078_383,
    112.079_291_497_871,
    221.213_596_169_931,
    220.206_867_912_376,
];

/// Hart (1968) rational approximation, denominator coefficients (highest degree first).
const HART_DEN: [f64; 8] = [
    8.838_834_764_831_84e-2,
    1.755_667_163_182_64,
    16.064_177_579_207,
    86.780_732_202_946_1,
    296.564_248_779_674,
    637.333_633_378_831,
    793.826_512_519_948,
    440.413_735_824_752,
];

#[inline]
fn horner<T: Float>(coefficients: &[f64], x: T) -> T {
    coefficients
        .iter()
        .fold(T::zero(), |acc, &c| acc * x + T::from(c).unwrap())
}

/// Lower tail probability Φ(-|x|).
///
/// Uses Hart's double-precision algorithm as presented by West (2005),
/// "Better approximations to cumulative normal functions": a rational
/// approximation for |x| < 7.07 and a continued fraction beyond it.
#[inline]
fn lower_tail<T: Float>(abs_x: T) -> T {
    if abs_x > T::from(TAIL_CUTOFF).unwrap() {
        return T::zero();
    }

    let half = T::from(0.5).unwrap();
    let gauss = (-half * abs_x * abs_x).exp();

    if abs_x < T::from(RATIONAL_LIMIT).unwrap() {
        gauss * horner(&HART_NUM, abs_x) / horner(&HART_DEN, abs_x)
    } else {
        // Continued fraction x + 1/(x + 2/(x + 3/(x + 4/(x + 0.65))))
        let mut b = abs_x + T::from(0.65).unwrap();
        for k in [4.0, 3.0, 2.0, 1.0] {
            b = abs_x + T::from(k).unwrap() / b;
        }
        gauss / b / T::from(SQRT_2PI).unwrap()
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Accuracy
/// Absolute error below 1e-14 for all finite x. The implementation evaluates
/// the tail at |x| and reflects, so Φ(x) + Φ(-x) = 1 holds to rounding error.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-15);
/// assert!((norm_cdf(1.0_f64) - 0.8413447460685429).abs() < 1e-13);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let tail = lower_tail(x.abs());
    if x > T::zero() {
        T::one() - tail
    } else {
        tail
    }
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let frac_1_sqrt_2pi = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    frac_1_sqrt_2pi * (-half * x * x).exp()
}

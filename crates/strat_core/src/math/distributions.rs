//! Standard normal distribution functions.
//!
//! `norm_cdf` uses the Abramowitz & Stegun rational approximation of the
//! complementary error function (formula 7.1.26, max error ~1.5e-7). The
//! functions are free-standing and narrow on purpose: callers only ever see
//! Φ(x) and φ(x), so the approximation can be swapped for an exact
//! erf-based implementation without touching any call site.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via the Abramowitz & Stegun 7.1.26
/// polynomial, evaluated with Horner's method.
///
/// Guarantees erfc(x) ∈ [0, 2]; negative arguments use the reflection
/// erfc(-x) = 2 - erfc(x).
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let one = T::one();
    let two = T::from(2.0).unwrap();

    let a1 = T::from(0.254829592).unwrap();
    let a2 = T::from(-0.284496736).unwrap();
    let a3 = T::from(1.421413741).unwrap();
    let a4 = T::from(-1.453152027).unwrap();
    let a5 = T::from(1.061405429).unwrap();
    let p = T::from(0.3275911).unwrap();

    let abs_x = x.abs();
    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let value = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        two - value
    } else {
        value
    }
}

/// Standard normal cumulative distribution function Φ(x).
///
/// # Examples
/// ```
/// use strat_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-4.0_f64) < 1e-4);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    // Φ(x) = erfc(-x / √2) / 2
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    let half = T::from(0.5).unwrap();
    half * erfc(-x / sqrt_2)
}

/// Standard normal probability density function φ(x).
///
/// # Examples
/// ```
/// use strat_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-9);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let coeff = T::from(FRAC_1_SQRT_2PI).unwrap();
    let half = T::from(0.5).unwrap();
    coeff * (-half * x * x).exp()
}

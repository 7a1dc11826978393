//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//!
//! Both are generic over `T: Float` so they serve `f32` and `f64` callers alike.

use num_traits::Float;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun constants (7.1.26)
const A1: f64 = 0.254829592;
const A2: f64 = -0.284496736;
const A3: f64 = 1.421413741;
const A4: f64 = -1.453152027;
const A5: f64 = 1.061405429;
const P: f64 = 0.3275911;

/// Converts an `f64` constant into `T`.
#[inline]
fn lit<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1).
///
/// # Mathematical Definition
/// Φ(x) = (1/2) · (1 + sign(x) · erf(|x| / √2))
///
/// erf is evaluated with the five-term rational approximation of
/// Abramowitz and Stegun (formula 7.1.26).
///
/// # Accuracy
/// Absolute error below 7.5e-8 for all real x.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_cdf;
///
/// let cdf_0 = norm_cdf(0.0_f64);
/// assert!((cdf_0 - 0.5).abs() < 1e-7);
///
/// let cdf_neg = norm_cdf(-3.0_f64);
/// assert!(cdf_neg < 0.01);
///
/// let cdf_pos = norm_cdf(3.0_f64);
/// assert!(cdf_pos > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let one = T::one();
    let half = lit::<T>(0.5);

    let sign = if x < T::zero() { -one } else { one };
    let z = x.abs() / lit::<T>(std::f64::consts::SQRT_2);

    // t = 1 / (1 + p·z)
    let t = one / (one + lit::<T>(P) * z);

    // Horner's method for the polynomial in t
    let poly = ((((lit::<T>(A5) * t + lit::<T>(A4)) * t + lit::<T>(A3)) * t + lit::<T>(A2)) * t
        + lit::<T>(A1))
        * t;
    let erf = one - poly * (-z * z).exp();

    half * (one + sign * erf)
}

/// Standard normal probability density function.
///
/// # Mathematical Definition
/// φ(x) = (1 / sqrt(2π)) * exp(-x² / 2)
///
/// # Returns
/// The density value φ(x), always non-negative.
///
/// # Examples
/// ```
/// use pricer_models::analytical::distributions::norm_pdf;
///
/// let pdf_0 = norm_pdf(0.0_f64);
/// // φ(0) = 1 / sqrt(2π) ≈ 0.3989
/// assert!((pdf_0 - 0.3989422804).abs() < 1e-7);
///
/// let pdf_1 = norm_pdf(1.0_f64);
/// // φ(1) = exp(-0.5) / sqrt(2π) ≈ 0.2420
/// assert!((pdf_1 - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let exponent = -lit::<T>(0.5) * x * x;
    lit::<T>(FRAC_1_SQRT_2PI) * exponent.exp()
}

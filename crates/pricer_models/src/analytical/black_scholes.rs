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
//!
//! ## Degenerate Inputs
//!
//! When `T ≤ 0`, `σ ≤ 0`, `S ≤ 0` or `K ≤ 0` every quantity is reported as
//! zero. At expiry this is deliberately not the intrinsic payoff.

use pricer_core::traits::{GreeksCalculator, Valuator};
use pricer_core::types::{Greeks, LegPair, OptionValues, PricingParameters, ValuationResult};

use super::distributions::{norm_cdf, norm_pdf};

/// Calendar days used to convert annual theta into daily decay.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Scaling that expresses vega and rho per one-point (1%) move.
pub const PERCENT_POINT: f64 = 100.0;

/// Black-Scholes model for European option pricing.
///
/// The model is stateless; all market inputs travel in the
/// [`PricingParameters`] passed to each call.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingParameters;
/// use pricer_models::analytical::BlackScholes;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.2, 0.05);
/// let result = BlackScholes.valuate(&params);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = result.call_price - result.put_price - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlackScholes;

impl BlackScholes {
    /// Creates the model.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Computes the d₁ and d₂ terms.
    ///
    /// d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T), d₂ = d₁ - σ√T
    ///
    /// # Returns
    /// `(d1, d2)`, or `(0, 0)` for degenerate inputs.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::PricingParameters;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let (d1, d2) = BlackScholes.d1_d2(&PricingParameters::default());
    /// assert!((d1 - 0.35).abs() < 1e-12);
    /// assert!((d2 - 0.15).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn d1_d2(&self, params: &PricingParameters) -> (f64, f64) {
        if params.is_degenerate() {
            return (0.0, 0.0);
        }

        let vol_sqrt_t = params.volatility * params.time_to_maturity.sqrt();
        let log_moneyness = (params.spot_price / params.strike_price).ln();
        let drift = (params.risk_free_rate + 0.5 * params.volatility * params.volatility)
            * params.time_to_maturity;

        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// Values the call and put and reports d₁ and d₂.
    ///
    /// Both prices are floored at zero.
    pub fn valuate(&self, params: &PricingParameters) -> ValuationResult {
        if params.is_degenerate() {
            return ValuationResult {
                call_price: 0.0,
                put_price: 0.0,
                d1: Some(0.0),
                d2: Some(0.0),
            };
        }

        let (d1, d2) = self.d1_d2(params);
        let s = params.spot_price;
        let k = params.strike_price;
        let discount = (-params.risk_free_rate * params.time_to_maturity).exp();

        // C = S·N(d₁) - K·e^(-rT)·N(d₂)
        let call = s * norm_cdf(d1) - k * discount * norm_cdf(d2);
        // P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
        let put = k * discount * norm_cdf(-d2) - s * norm_cdf(-d1);

        ValuationResult {
            call_price: call.max(0.0),
            put_price: put.max(0.0),
            d1: Some(d1),
            d2: Some(d2),
        }
    }

    /// Computes the analytic Greeks.
    ///
    /// - Delta: N(d₁) for the call, N(d₁) - 1 for the put
    /// - Gamma: φ(d₁) / (S·σ·√T), shared by both legs
    /// - Theta: annual formula divided by 365 (daily decay)
    /// - Vega: S·√T·φ(d₁) / 100 (per one vol point)
    /// - Rho: ±K·T·e^(-rT)·N(±d₂) / 100 (per one rate point)
    pub fn analytic_greeks(&self, params: &PricingParameters) -> Greeks {
        if params.is_degenerate() {
            return Greeks::zero();
        }

        let (d1, d2) = self.d1_d2(params);
        let s = params.spot_price;
        let k = params.strike_price;
        let t = params.time_to_maturity;
        let r = params.risk_free_rate;
        let sigma = params.volatility;

        let sqrt_t = t.sqrt();
        let discount = (-r * t).exp();
        let pdf_d1 = norm_pdf(d1);

        let call_delta = norm_cdf(d1);
        let gamma = pdf_d1 / (s * sigma * sqrt_t);

        // Common term: -(S·φ(d₁)·σ)/(2√T)
        let decay = -(s * pdf_d1 * sigma) / (2.0 * sqrt_t);
        let call_theta = decay - r * k * discount * norm_cdf(d2);
        let put_theta = decay + r * k * discount * norm_cdf(-d2);

        let vega = s * sqrt_t * pdf_d1 / PERCENT_POINT;

        let call_rho = k * t * discount * norm_cdf(d2) / PERCENT_POINT;
        let put_rho = -k * t * discount * norm_cdf(-d2) / PERCENT_POINT;

        Greeks {
            delta: LegPair::new(call_delta, call_delta - 1.0),
            gamma,
            theta: LegPair::new(call_theta / DAYS_PER_YEAR, put_theta / DAYS_PER_YEAR),
            vega,
            rho: LegPair::new(call_rho, put_rho),
        }
    }
}

impl Valuator for BlackScholes {
    #[inline]
    fn price(&self, params: &PricingParameters) -> OptionValues {
        self.valuate(params).values()
    }
}

impl GreeksCalculator for BlackScholes {
    #[inline]
    fn greeks(&self, params: &PricingParameters) -> Greeks {
        self.analytic_greeks(params)
    }
}

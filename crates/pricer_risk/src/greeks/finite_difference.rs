//! Bump-and-revalue Greeks over any [`Valuator`].
//!
//! ## Difference schemes
//!
//! With spot bump `h = spot_bump_relative · S`:
//! - delta: central, `(V(S+h) - V(S-h)) / 2h`
//! - gamma: central second difference on half steps,
//!   `(C(S+h/2) - 2C(S) + C(S-h/2)) / (h/2)²`, call leg only
//! - theta: one-sided towards expiry, `(V(T-Δt) - V(T)) / Δt`
//! - vega: forward, `(C(σ+Δσ) - C(σ)) / Δσ`, call leg only
//! - rho: forward, `(V(r+Δr) - V(r)) / Δr`
//!
//! Results are raw difference quotients: theta per year, vega per unit of
//! volatility, rho per unit of rate.

use pricer_core::traits::{GreeksCalculator, Valuator};
use pricer_core::types::{Greeks, LegPair, OptionValues, PricingParameters};

use super::config::GreeksConfig;

/// Finite-difference Greeks calculator wrapping a valuator.
///
/// A full bundle costs eight valuator calls: the base price plus seven
/// bumped revaluations.
///
/// # Examples
///
/// ```
/// use pricer_core::traits::GreeksCalculator;
/// use pricer_core::types::PricingParameters;
/// use pricer_models::analytical::BlackScholes;
/// use pricer_risk::greeks::FiniteDifferenceGreeks;
///
/// let calculator = FiniteDifferenceGreeks::new(BlackScholes::new());
/// let greeks = calculator.greeks(&PricingParameters::default());
/// assert!((greeks.delta.call - 0.6368).abs() < 1e-3);
/// assert!(greeks.gamma > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct FiniteDifferenceGreeks<V> {
    valuator: V,
    config: GreeksConfig,
}

impl<V: Valuator> FiniteDifferenceGreeks<V> {
    /// Wraps `valuator` with the default bump sizes.
    pub fn new(valuator: V) -> Self {
        Self::with_config(valuator, GreeksConfig::default())
    }

    /// Wraps `valuator` with explicit bump sizes.
    pub fn with_config(valuator: V, config: GreeksConfig) -> Self {
        Self { valuator, config }
    }

    /// Returns the bump configuration.
    #[inline]
    pub fn config(&self) -> &GreeksConfig {
        &self.config
    }

    /// Returns the wrapped valuator.
    #[inline]
    pub fn valuator(&self) -> &V {
        &self.valuator
    }

    /// Call and put delta by central difference.
    pub fn delta(&self, params: &PricingParameters) -> LegPair {
        if params.is_degenerate() {
            return LegPair::default();
        }
        let h = self.config.compute_spot_bump(params.spot_price);
        let up = self.valuator.price(&params.with_spot(params.spot_price + h));
        let down = self.valuator.price(&params.with_spot(params.spot_price - h));
        LegPair::new((up.call - down.call) / (2.0 * h), (up.put - down.put) / (2.0 * h))
    }

    /// Gamma by central second difference on half-size spot bumps.
    pub fn gamma(&self, params: &PricingParameters) -> f64 {
        if params.is_degenerate() {
            return 0.0;
        }
        let base = self.valuator.price(params);
        self.gamma_from(params, &base)
    }

    /// Call and put theta by one-sided difference towards expiry, per year.
    pub fn theta(&self, params: &PricingParameters) -> LegPair {
        if params.is_degenerate() {
            return LegPair::default();
        }
        let base = self.valuator.price(params);
        self.theta_from(params, &base)
    }

    /// Vega by forward difference on the call leg, per unit volatility.
    pub fn vega(&self, params: &PricingParameters) -> f64 {
        if params.is_degenerate() {
            return 0.0;
        }
        let base = self.valuator.price(params);
        self.vega_from(params, &base)
    }

    /// Call and put rho by forward difference, per unit rate.
    pub fn rho(&self, params: &PricingParameters) -> LegPair {
        if params.is_degenerate() {
            return LegPair::default();
        }
        let base = self.valuator.price(params);
        self.rho_from(params, &base)
    }

    fn gamma_from(&self, params: &PricingParameters, base: &OptionValues) -> f64 {
        let half = self.config.compute_spot_bump(params.spot_price) / 2.0;
        let mid_up = self.valuator.price(&params.with_spot(params.spot_price + half));
        let mid_down = self.valuator.price(&params.with_spot(params.spot_price - half));
        (mid_up.call - 2.0 * base.call + mid_down.call) / (half * half)
    }

    // Only the shorter maturity is evaluated
    fn theta_from(&self, params: &PricingParameters, base: &OptionValues) -> LegPair {
        let dt = self.config.time_bump_years;
        let shorter = self.valuator.price(&params.with_time(params.time_to_maturity - dt));
        LegPair::new((shorter.call - base.call) / dt, (shorter.put - base.put) / dt)
    }

    fn vega_from(&self, params: &PricingParameters, base: &OptionValues) -> f64 {
        let dv = self.config.vol_bump_absolute;
        let bumped = self.valuator.price(&params.with_volatility(params.volatility + dv));
        (bumped.call - base.call) / dv
    }

    fn rho_from(&self, params: &PricingParameters, base: &OptionValues) -> LegPair {
        let dr = self.config.rate_bump_absolute;
        let bumped = self.valuator.price(&params.with_rate(params.risk_free_rate + dr));
        LegPair::new((bumped.call - base.call) / dr, (bumped.put - base.put) / dr)
    }
}

impl<V: Valuator> GreeksCalculator for FiniteDifferenceGreeks<V> {
    fn greeks(&self, params: &PricingParameters) -> Greeks {
        if params.is_degenerate() {
            return Greeks::zero();
        }
        let base = self.valuator.price(params);
        Greeks {
            delta: self.delta(params),
            gamma: self.gamma_from(params, &base),
            theta: self.theta_from(params, &base),
            vega: self.vega_from(params, &base),
            rho: self.rho_from(params, &base),
        }
    }
}

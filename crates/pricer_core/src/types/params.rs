//! Market parameter records for option valuation.
//!
//! Every valuator consumes a [`PricingParameters`] value and never mutates it.
//! Sweeps and finite-difference calculations derive perturbed copies through
//! the `with_*` overrides.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default lattice depth used by the binomial model.
pub const DEFAULT_LATTICE_STEPS: usize = 50;

/// Market inputs for a single European option valuation.
///
/// Fields are plain values; economically invalid combinations (non-positive
/// spot, strike, maturity or volatility) are representable and are handled by
/// each valuator's degenerate-input guard rather than rejected here.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.2, 0.05);
/// assert!(!params.is_degenerate());
///
/// let expired = params.with_time(0.0);
/// assert!(expired.is_degenerate());
/// assert_eq!(params.time_to_maturity, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PricingParameters {
    /// Current price of the underlying (S)
    pub spot_price: f64,
    /// Strike price (K)
    pub strike_price: f64,
    /// Time to maturity in years (T)
    pub time_to_maturity: f64,
    /// Annualised volatility as a decimal (σ)
    pub volatility: f64,
    /// Continuously compounded risk-free rate as a decimal (r); may be zero or negative
    pub risk_free_rate: f64,
}

impl Default for PricingParameters {
    fn default() -> Self {
        Self {
            spot_price: 100.0,
            strike_price: 100.0,
            time_to_maturity: 1.0,
            volatility: 0.2,
            risk_free_rate: 0.05,
        }
    }
}

impl PricingParameters {
    /// Creates a new parameter record.
    ///
    /// # Arguments
    /// * `spot_price` - Current underlying price
    /// * `strike_price` - Strike price
    /// * `time_to_maturity` - Time to maturity in years
    /// * `volatility` - Annualised volatility
    /// * `risk_free_rate` - Risk-free rate
    #[inline]
    pub fn new(
        spot_price: f64,
        strike_price: f64,
        time_to_maturity: f64,
        volatility: f64,
        risk_free_rate: f64,
    ) -> Self {
        Self {
            spot_price,
            strike_price,
            time_to_maturity,
            volatility,
            risk_free_rate,
        }
    }

    /// Returns true when the inputs fall outside the valuation domain.
    ///
    /// Degenerate inputs are `T ≤ 0`, `σ ≤ 0`, `S ≤ 0` or `K ≤ 0`. Valuators
    /// return a flat zero result for them instead of an error.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.time_to_maturity <= 0.0
            || self.volatility <= 0.0
            || self.spot_price <= 0.0
            || self.strike_price <= 0.0
    }

    /// Returns a copy with the spot price replaced.
    #[inline]
    pub fn with_spot(self, spot_price: f64) -> Self {
        Self { spot_price, ..self }
    }

    /// Returns a copy with the time to maturity replaced.
    #[inline]
    pub fn with_time(self, time_to_maturity: f64) -> Self {
        Self {
            time_to_maturity,
            ..self
        }
    }

    /// Returns a copy with the volatility replaced.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with the risk-free rate replaced.
    #[inline]
    pub fn with_rate(self, risk_free_rate: f64) -> Self {
        Self {
            risk_free_rate,
            ..self
        }
    }
}

/// Market inputs plus the lattice depth for the binomial model.
///
/// On the wire the market fields sit at the top level next to `steps`.
///
/// # Examples
/// ```
/// use pricer_core::types::{BinomialParameters, PricingParameters};
///
/// let params = BinomialParameters::new(PricingParameters::default(), 0);
/// assert!(params.is_degenerate());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BinomialParameters {
    /// Market inputs shared with every other valuator
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub market: PricingParameters,
    /// Number of time steps in the lattice (n)
    #[cfg_attr(feature = "serde", serde(default = "default_steps"))]
    pub steps: usize,
}

#[cfg(feature = "serde")]
fn default_steps() -> usize {
    DEFAULT_LATTICE_STEPS
}

impl Default for BinomialParameters {
    fn default() -> Self {
        Self {
            market: PricingParameters::default(),
            steps: DEFAULT_LATTICE_STEPS,
        }
    }
}

impl BinomialParameters {
    /// Creates binomial parameters from market inputs and a lattice depth.
    #[inline]
    pub fn new(market: PricingParameters, steps: usize) -> Self {
        Self { market, steps }
    }

    /// Returns true for degenerate market inputs or a zero-depth lattice.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.market.is_degenerate() || self.steps == 0
    }
}

impl From<BinomialParameters> for PricingParameters {
    fn from(params: BinomialParameters) -> Self {
        params.market
    }
}

//! Cox-Ross-Rubinstein binomial lattice.
//!
//! ## Mathematical Formulas
//!
//! With `n` steps over maturity `T`:
//! - Δt = T / n
//! - u = e^(σ√Δt), d = 1/u
//! - p = (e^(rΔt) - d) / (u - d) (risk-neutral up-probability)
//! - per-step discount = e^(-rΔt)
//!
//! Node `(i, j)` carries `S·u^(i-j)·d^j`. Terminal nodes hold the intrinsic
//! payoffs; earlier nodes hold the discounted risk-neutral expectation of
//! their two successors.

use pricer_core::traits::Valuator;
use pricer_core::types::{BinomialParameters, OptionValues, PricingParameters};

use super::tree::{Lattice, LatticeNode};

/// Per-step quantities of a CRR lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrrParameters {
    /// Length of one time step in years
    pub dt: f64,
    /// Up-move multiplier
    pub up: f64,
    /// Down-move multiplier (1/u)
    pub down: f64,
    /// Risk-neutral probability of an up-move
    pub up_probability: f64,
    /// One-step discount factor
    pub discount: f64,
}

impl CrrParameters {
    /// Derives the lattice quantities for `params` split into `steps` steps.
    ///
    /// Callers must have checked that the inputs are not degenerate.
    pub fn new(params: &PricingParameters, steps: usize) -> Self {
        let dt = params.time_to_maturity / steps as f64;
        let up = (params.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let growth = (params.risk_free_rate * dt).exp();

        Self {
            dt,
            up,
            down,
            up_probability: (growth - down) / (up - down),
            discount: (-params.risk_free_rate * dt).exp(),
        }
    }

    /// Underlying price after `level` steps of which `downs` were down-moves.
    #[inline]
    pub fn stock_price(&self, spot: f64, level: usize, downs: usize) -> f64 {
        spot * self.up.powi((level - downs) as i32) * self.down.powi(downs as i32)
    }

    /// Probability of reaching node `(level, downs)` from the root.
    ///
    /// C(level, downs) · p^(level-downs) · (1-p)^downs
    ///
    /// Past roughly 1030 levels the central coefficients no longer fit in an
    /// `f64`; those nodes are evaluated in log space instead.
    #[inline]
    pub fn reach_probability(&self, level: usize, downs: usize) -> f64 {
        let p = self.up_probability;
        let ups = level - downs;
        let coefficient = binomial_coefficient(level, downs);
        if coefficient.is_finite() {
            coefficient * p.powi(ups as i32) * (1.0 - p).powi(downs as i32)
        } else {
            (ln_binomial_coefficient(level, downs) + ln_power(p, ups) + ln_power(1.0 - p, downs))
                .exp()
        }
    }

    /// Discounted expectation of an up and a down successor value.
    #[inline]
    fn roll_back(&self, up_value: f64, down_value: f64) -> f64 {
        let p = self.up_probability;
        self.discount * (p * up_value + (1.0 - p) * down_value)
    }
}

/// Binomial coefficient C(n, k) as a float.
///
/// Uses the multiplicative form over `min(k, n - k)` factors, keeping the
/// intermediate values as small as the result allows.
///
/// # Examples
/// ```
/// use pricer_models::lattice::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(5, 2), 10.0);
/// assert_eq!(binomial_coefficient(5, 6), 0.0);
/// ```
pub fn binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    if k == 0 || k == n {
        return 1.0;
    }

    let k = k.min(n - k);
    (0..k).fold(1.0, |acc, i| acc * (n - i) as f64 / (i + 1) as f64)
}

/// Natural log of C(n, k), summed term by term so it never overflows.
fn ln_binomial_coefficient(n: usize, k: usize) -> f64 {
    if k > n {
        return f64::NEG_INFINITY;
    }
    let k = k.min(n - k);
    (0..k)
        .map(|i| ((n - i) as f64).ln() - ((i + 1) as f64).ln())
        .sum()
}

/// `exponent · ln(base)`, with a zero exponent contributing nothing even when
/// `base` is zero.
#[inline]
fn ln_power(base: f64, exponent: usize) -> f64 {
    if exponent == 0 {
        0.0
    } else {
        exponent as f64 * base.ln()
    }
}

/// Output of a full lattice valuation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BinomialResult {
    /// European call value at the root
    pub call_price: f64,
    /// European put value at the root
    pub put_price: f64,
    /// Every node of the tree, empty for degenerate inputs
    pub tree: Lattice,
}

impl BinomialResult {
    /// Returns the call/put pair without the tree.
    #[inline]
    pub fn values(&self) -> OptionValues {
        OptionValues::new(self.call_price, self.put_price)
    }
}

/// Cox-Ross-Rubinstein binomial lattice valuator.
///
/// # Examples
/// ```
/// use pricer_core::traits::Valuator;
/// use pricer_core::types::PricingParameters;
/// use pricer_models::lattice::BinomialLattice;
///
/// let lattice = BinomialLattice::new(50);
/// let values = lattice.price(&PricingParameters::default());
/// assert!((values.call - 10.4506).abs() < 0.05);
///
/// let result = lattice.valuate(&PricingParameters::default());
/// assert_eq!(result.tree.depth(), Some(50));
/// assert_eq!(result.values(), values);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BinomialLattice {
    steps: usize,
}

impl Default for BinomialLattice {
    fn default() -> Self {
        Self {
            steps: pricer_core::types::DEFAULT_LATTICE_STEPS,
        }
    }
}

impl BinomialLattice {
    /// Creates a lattice valuator with `steps` time steps.
    #[inline]
    pub fn new(steps: usize) -> Self {
        Self { steps }
    }

    /// Returns the number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Returns true when the valuation would hit the degenerate guard.
    #[inline]
    fn is_degenerate(&self, params: &PricingParameters) -> bool {
        params.is_degenerate() || self.steps == 0
    }

    /// Values the option and returns the full tree.
    ///
    /// Every node carries its underlying price, call and put values and
    /// reach probability. Degenerate inputs return zero prices and an empty
    /// tree.
    pub fn valuate(&self, params: &PricingParameters) -> BinomialResult {
        if self.is_degenerate(params) {
            return BinomialResult::default();
        }

        let n = self.steps;
        let crr = CrrParameters::new(params, n);
        let spot = params.spot_price;
        let strike = params.strike_price;
        let mut tree = Lattice::filled(n, LatticeNode::default());

        // Forward pass: underlying prices
        for level in 0..=n {
            if let Some(nodes) = tree.level_mut(level) {
                for (downs, node) in nodes.iter_mut().enumerate() {
                    node.stock_price = crr.stock_price(spot, level, downs);
                }
            }
        }

        // Terminal payoffs
        if let Some(nodes) = tree.level_mut(n) {
            for (downs, node) in nodes.iter_mut().enumerate() {
                node.call_value = (node.stock_price - strike).max(0.0);
                node.put_value = (strike - node.stock_price).max(0.0);
                node.reach_probability = crr.reach_probability(n, downs);
            }
        }

        // Backward induction, reading successors in place
        for level in (0..n).rev() {
            if let Some((nodes, successors)) = tree.level_with_successors(level) {
                for (downs, node) in nodes.iter_mut().enumerate() {
                    let up = &successors[downs];
                    let down = &successors[downs + 1];
                    node.call_value = crr.roll_back(up.call_value, down.call_value);
                    node.put_value = crr.roll_back(up.put_value, down.put_value);
                    node.reach_probability = if level > 0 {
                        crr.reach_probability(level, downs)
                    } else {
                        1.0
                    };
                }
            }
        }

        let root = tree.root().copied().unwrap_or_default();
        BinomialResult {
            call_price: root.call_value,
            put_price: root.put_value,
            tree,
        }
    }
}

impl Valuator for BinomialLattice {
    /// Values the option without materialising the tree.
    ///
    /// Runs the same recurrence as [`BinomialLattice::valuate`] over a single
    /// rolling buffer, so results are bit-identical to the root of the full
    /// tree.
    fn price(&self, params: &PricingParameters) -> OptionValues {
        if self.is_degenerate(params) {
            return OptionValues::zero();
        }

        let n = self.steps;
        let crr = CrrParameters::new(params, n);
        let spot = params.spot_price;
        let strike = params.strike_price;

        let mut values: Vec<(f64, f64)> = (0..=n)
            .map(|downs| {
                let stock = crr.stock_price(spot, n, downs);
                ((stock - strike).max(0.0), (strike - stock).max(0.0))
            })
            .collect();

        for level in (0..n).rev() {
            for downs in 0..=level {
                let (up_call, up_put) = values[downs];
                let (down_call, down_put) = values[downs + 1];
                values[downs] = (crr.roll_back(up_call, down_call), crr.roll_back(up_put, down_put));
            }
        }

        let (call, put) = values[0];
        OptionValues::new(call, put)
    }
}

/// Values a lattice described by [`BinomialParameters`] and returns the tree.
pub fn price_binomial(params: &BinomialParameters) -> BinomialResult {
    BinomialLattice::new(params.steps).valuate(&params.market)
}

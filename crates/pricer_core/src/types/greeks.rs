//! Sensitivity bundle types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value reported separately for the call and put legs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LegPair {
    /// Call leg
    pub call: f64,
    /// Put leg
    pub put: f64,
}

impl LegPair {
    /// Creates a call/put pair.
    #[inline]
    pub fn new(call: f64, put: f64) -> Self {
        Self { call, put }
    }
}

/// Option sensitivities for one parameter set.
///
/// Units depend on the producer. The closed-form calculator reports theta per
/// day and vega/rho per one-point move; the finite-difference calculator
/// reports the raw difference quotients.
///
/// # Examples
/// ```
/// use pricer_core::types::Greeks;
///
/// let greeks = Greeks::zero();
/// assert_eq!(greeks.gamma, 0.0);
/// assert_eq!(greeks.delta.call, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Greeks {
    /// ∂V/∂S per leg
    pub delta: LegPair,
    /// ∂²V/∂S², shared by both legs
    pub gamma: f64,
    /// Time decay per leg
    pub theta: LegPair,
    /// Sensitivity to volatility, shared by both legs
    pub vega: f64,
    /// Sensitivity to the risk-free rate per leg
    pub rho: LegPair,
}

impl Greeks {
    /// All sensitivities zero, returned for degenerate inputs.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_bundle() {
        let greeks = Greeks::zero();
        assert_eq!(greeks.delta, LegPair::new(0.0, 0.0));
        assert_eq!(greeks.theta, LegPair::default());
        assert_eq!(greeks.rho, LegPair::default());
        assert_eq!(greeks.vega, 0.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_nested_wire_shape() {
        let greeks = Greeks {
            delta: LegPair::new(0.6, -0.4),
            gamma: 0.02,
            theta: LegPair::new(-0.01, -0.005),
            vega: 0.4,
            rho: LegPair::new(0.5, -0.4),
        };
        let value = serde_json::to_value(greeks).unwrap();
        assert_eq!(value["delta"]["call"], 0.6);
        assert_eq!(value["delta"]["put"], -0.4);
        assert_eq!(value["gamma"], 0.02);
        assert_eq!(value["rho"]["put"], -0.4);
    }
}

//! Valuation result types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Call and put values produced by a single valuator invocation.
///
/// This is the payload of the uniform valuator contract; it serialises as
/// `{"callPrice": .., "putPrice": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionValues {
    /// European call value
    #[cfg_attr(feature = "serde", serde(rename = "callPrice"))]
    pub call: f64,
    /// European put value
    #[cfg_attr(feature = "serde", serde(rename = "putPrice"))]
    pub put: f64,
}

impl OptionValues {
    /// Creates a call/put pair.
    #[inline]
    pub fn new(call: f64, put: f64) -> Self {
        Self { call, put }
    }

    /// The zero result returned for degenerate inputs.
    #[inline]
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Full valuation response.
///
/// Closed-form models also report `d1` and `d2`; lattice models leave them
/// empty and they are omitted from the serialised form.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionValues, ValuationResult};
///
/// let result = ValuationResult::from(OptionValues::new(10.0, 5.0));
/// assert_eq!(result.call_price, 10.0);
/// assert!(result.d1.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ValuationResult {
    /// European call value
    pub call_price: f64,
    /// European put value
    pub put_price: f64,
    /// Black-Scholes d1 term
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub d1: Option<f64>,
    /// Black-Scholes d2 term
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub d2: Option<f64>,
}

impl ValuationResult {
    /// Returns the call/put pair without the auxiliary terms.
    #[inline]
    pub fn values(&self) -> OptionValues {
        OptionValues::new(self.call_price, self.put_price)
    }
}

impl From<OptionValues> for ValuationResult {
    fn from(values: OptionValues) -> Self {
        Self {
            call_price: values.call,
            put_price: values.put,
            d1: None,
            d2: None,
        }
    }
}

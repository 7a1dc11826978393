//! The uniform valuator contract.
//!
//! Every pricing model, built in or supplied by the host, answers one
//! question: given a full parameter set, what are the call and put values?
//! Sensitivity calculators and sweep generators are written against this
//! contract only, so any model can be swapped in.

use crate::types::{Greeks, OptionValues, PricingParameters};

/// Single-point option valuator.
///
/// # Invariants
/// - `price` must be pure: identical inputs give bit-identical outputs
/// - `price` must not fail; out-of-domain inputs return [`OptionValues::zero`]
///
/// `Send + Sync` is required so sweeps can evaluate samples on worker threads.
///
/// # Examples
/// ```
/// use pricer_core::traits::Valuator;
/// use pricer_core::types::{OptionValues, PricingParameters};
///
/// struct Forward;
///
/// impl Valuator for Forward {
///     fn price(&self, params: &PricingParameters) -> OptionValues {
///         let df = (-params.risk_free_rate * params.time_to_maturity).exp();
///         OptionValues::new(params.spot_price - params.strike_price * df, 0.0)
///     }
/// }
///
/// let value = Forward.price(&PricingParameters::default());
/// assert!(value.call > 0.0);
/// ```
pub trait Valuator: Send + Sync {
    /// Values the European call and put for `params`.
    fn price(&self, params: &PricingParameters) -> OptionValues;
}

impl<V: Valuator + ?Sized> Valuator for &V {
    #[inline]
    fn price(&self, params: &PricingParameters) -> OptionValues {
        (**self).price(params)
    }
}

impl<V: Valuator + ?Sized> Valuator for Box<V> {
    #[inline]
    fn price(&self, params: &PricingParameters) -> OptionValues {
        (**self).price(params)
    }
}

/// Adapts a pricing closure to the [`Valuator`] contract.
///
/// Intended for externally implemented models (for example a Monte-Carlo
/// service) that the host wants to plug into a sweep.
///
/// # Examples
/// ```
/// use pricer_core::traits::{FnValuator, Valuator};
/// use pricer_core::types::{OptionValues, PricingParameters};
///
/// let flat = FnValuator::new(|_: &PricingParameters| OptionValues::new(1.0, 2.0));
/// assert_eq!(flat.price(&PricingParameters::default()).put, 2.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnValuator<F>(F);

impl<F> FnValuator<F>
where
    F: Fn(&PricingParameters) -> OptionValues + Send + Sync,
{
    /// Wraps a pricing function.
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Valuator for FnValuator<F>
where
    F: Fn(&PricingParameters) -> OptionValues + Send + Sync,
{
    #[inline]
    fn price(&self, params: &PricingParameters) -> OptionValues {
        (self.0)(params)
    }
}

/// Producer of a full sensitivity bundle.
///
/// Implemented by closed-form models with analytic Greeks and by the
/// finite-difference calculator that wraps any [`Valuator`].
pub trait GreeksCalculator: Send + Sync {
    /// Computes all sensitivities for `params`.
    ///
    /// Returns [`Greeks::zero`] for degenerate inputs.
    fn greeks(&self, params: &PricingParameters) -> Greeks;
}

impl<G: GreeksCalculator + ?Sized> GreeksCalculator for &G {
    #[inline]
    fn greeks(&self, params: &PricingParameters) -> Greeks {
        (**self).greeks(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Intrinsic;

    impl Valuator for Intrinsic {
        fn price(&self, params: &PricingParameters) -> OptionValues {
            if params.is_degenerate() {
                return OptionValues::zero();
            }
            OptionValues::new(
                (params.spot_price - params.strike_price).max(0.0),
                (params.strike_price - params.spot_price).max(0.0),
            )
        }
    }

    fn price_generic<V: Valuator>(valuator: V, params: &PricingParameters) -> OptionValues {
        valuator.price(params)
    }

    #[test]
    fn test_reference_and_box_forwarding() {
        let params = PricingParameters::default().with_spot(120.0);
        let direct = Intrinsic.price(&params);
        assert_eq!(price_generic(&Intrinsic, &params), direct);

        let boxed: Box<dyn Valuator> = Box::new(Intrinsic);
        assert_eq!(price_generic(boxed, &params), direct);
    }

    #[test]
    fn test_fn_valuator_forwards_parameters() {
        let spot_echo = FnValuator::new(|p: &PricingParameters| OptionValues::new(p.spot_price, 0.0));
        let value = spot_echo.price(&PricingParameters::default().with_spot(42.0));
        assert_eq!(value.call, 42.0);
    }

    #[test]
    fn test_valuator_is_object_safe() {
        let models: Vec<Box<dyn Valuator>> = vec![
            Box::new(Intrinsic),
            Box::new(FnValuator::new(|_: &PricingParameters| OptionValues::zero())),
        ];
        let params = PricingParameters::default().with_spot(90.0);
        assert_eq!(models[0].price(&params).put, 10.0);
        assert_eq!(models[1].price(&params), OptionValues::zero());
    }
}

//! One-dimensional parameter sweeps.
//!
//! A curve fixes every parameter but one, samples the free one over a
//! [`SweepRange`] and records a scalar per sample. Samples are evaluated
//! independently and written back by index.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pricer_core::traits::{GreeksCalculator, Valuator};
use pricer_core::types::PricingParameters;

use super::error::SweepError;
use super::range::SweepRange;
use crate::parallel::ParallelConfig;

/// Parameter varied across a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SweepAxis {
    /// Underlying spot price
    Spot,
    /// Time to maturity in years
    Time,
    /// Volatility
    Volatility,
    /// Risk-free rate
    Rate,
}

impl SweepAxis {
    /// Returns a copy of `params` with this axis set to `value`.
    #[inline]
    pub fn apply(&self, params: &PricingParameters, value: f64) -> PricingParameters {
        match self {
            SweepAxis::Spot => params.with_spot(value),
            SweepAxis::Time => params.with_time(value),
            SweepAxis::Volatility => params.with_volatility(value),
            SweepAxis::Rate => params.with_rate(value),
        }
    }
}

/// Sampled `(x, y)` curve with equal-length, index-aligned arrays.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Curve {
    /// Sample points
    pub x_values: Vec<f64>,
    /// Value at each sample point
    pub y_values: Vec<f64>,
}

impl Curve {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x_values.len()
    }

    /// Returns true if the curve has no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty()
    }

    /// Iterates over `(x, y)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_values.iter().copied().zip(self.y_values.iter().copied())
    }
}

/// Sensitivity plotted by a Greeks curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveType {
    /// Gamma against spot
    Gamma,
    /// Vega against spot
    Vega,
    /// Call theta against time to maturity
    Theta,
}

impl CurveType {
    /// Returns the wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveType::Gamma => "gamma",
            CurveType::Vega => "vega",
            CurveType::Theta => "theta",
        }
    }

    /// Parameter swept for this curve.
    pub fn axis(&self) -> SweepAxis {
        match self {
            CurveType::Gamma | CurveType::Vega => SweepAxis::Spot,
            CurveType::Theta => SweepAxis::Time,
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CurveType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gamma" => Ok(CurveType::Gamma),
            "vega" => Ok(CurveType::Vega),
            "theta" => Ok(CurveType::Theta),
            other => Err(format!("unknown curve type '{other}' (expected gamma, vega or theta)")),
        }
    }
}

/// Call and put deltas against spot.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct DeltaCurve {
    /// Spot sample points
    pub spot_prices: Vec<f64>,
    /// Call delta per sample
    pub call_deltas: Vec<f64>,
    /// Put delta per sample
    pub put_deltas: Vec<f64>,
}

/// Call and put prices against spot.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CallPutCurve {
    /// Spot sample points
    pub spot_prices: Vec<f64>,
    /// Call price per sample
    pub call_prices: Vec<f64>,
    /// Put price per sample
    pub put_prices: Vec<f64>,
}

/// Curve sweep driver.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingParameters;
/// use pricer_models::analytical::BlackScholes;
/// use pricer_risk::sweeps::{CurveGenerator, CurveType, SweepRange};
///
/// let generator = CurveGenerator::default();
/// let range = SweepRange::new(50.0, 150.0, 100).unwrap();
/// let curve = generator
///     .greeks_curve(&PricingParameters::default(), range, CurveType::Gamma, &BlackScholes::new())
///     .unwrap();
/// assert_eq!(curve.len(), 101);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CurveGenerator {
    parallel: ParallelConfig,
}

impl CurveGenerator {
    /// Creates a generator with explicit parallel settings.
    pub fn new(parallel: ParallelConfig) -> Self {
        Self { parallel }
    }

    /// Returns the parallel settings.
    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Samples `sample` over `range` on `axis`, starting from `base`.
    ///
    /// # Errors
    /// Returns [`SweepError`] if the range is malformed.
    pub fn generate<F>(
        &self,
        base: &PricingParameters,
        range: SweepRange,
        axis: SweepAxis,
        sample: F,
    ) -> Result<Curve, SweepError>
    where
        F: Fn(&PricingParameters) -> f64 + Sync + Send,
    {
        range.validate()?;
        let x_values = range.points();
        let y_values = self
            .parallel
            .map(&x_values, |&x| sample(&axis.apply(base, x)));
        Ok(Curve { x_values, y_values })
    }

    /// Gamma or vega against spot, or call theta against time.
    pub fn greeks_curve<G: GreeksCalculator>(
        &self,
        base: &PricingParameters,
        range: SweepRange,
        curve_type: CurveType,
        calculator: &G,
    ) -> Result<Curve, SweepError> {
        self.generate(base, range, curve_type.axis(), |params| {
            let greeks = calculator.greeks(params);
            match curve_type {
                CurveType::Gamma => greeks.gamma,
                CurveType::Vega => greeks.vega,
                CurveType::Theta => greeks.theta.call,
            }
        })
    }

    /// Call and put deltas against spot.
    pub fn delta_curve<G: GreeksCalculator>(
        &self,
        base: &PricingParameters,
        range: SweepRange,
        calculator: &G,
    ) -> Result<DeltaCurve, SweepError> {
        range.validate()?;
        let spot_prices = range.points();
        let deltas = self.parallel.map(&spot_prices, |&spot| {
            calculator.greeks(&base.with_spot(spot)).delta
        });
        Ok(DeltaCurve {
            call_deltas: deltas.iter().map(|d| d.call).collect(),
            put_deltas: deltas.iter().map(|d| d.put).collect(),
            spot_prices,
        })
    }

    /// Call and put prices against spot.
    pub fn call_put_curve<V: Valuator>(
        &self,
        base: &PricingParameters,
        range: SweepRange,
        valuator: &V,
    ) -> Result<CallPutCurve, SweepError> {
        range.validate()?;
        let spot_prices = range.points();
        let values = self
            .parallel
            .map(&spot_prices, |&spot| valuator.price(&base.with_spot(spot)));
        Ok(CallPutCurve {
            call_prices: values.iter().map(|v| v.call).collect(),
            put_prices: values.iter().map(|v| v.put).collect(),
            spot_prices,
        })
    }
}

/// Samples `sample` over `range` on `axis` with default parallel settings.
pub fn generate_curve<F>(
    base: &PricingParameters,
    range: SweepRange,
    axis: SweepAxis,
    sample: F,
) -> Result<Curve, SweepError>
where
    F: Fn(&PricingParameters) -> f64 + Sync + Send,
{
    CurveGenerator::default().generate(base, range, axis, sample)
}

/// See [`CurveGenerator::greeks_curve`].
pub fn generate_greeks_curve<G: GreeksCalculator>(
    base: &PricingParameters,
    range: SweepRange,
    curve_type: CurveType,
    calculator: &G,
) -> Result<Curve, SweepError> {
    CurveGenerator::default().greeks_curve(base, range, curve_type, calculator)
}

/// See [`CurveGenerator::delta_curve`].
pub fn generate_delta_curve<G: GreeksCalculator>(
    base: &PricingParameters,
    range: SweepRange,
    calculator: &G,
) -> Result<DeltaCurve, SweepError> {
    CurveGenerator::default().delta_curve(base, range, calculator)
}

/// See [`CurveGenerator::call_put_curve`].
pub fn generate_call_put_curve<V: Valuator>(
    base: &PricingParameters,
    range: SweepRange,
    valuator: &V,
) -> Result<CallPutCurve, SweepError> {
    CurveGenerator::default().call_put_curve(base, range, valuator)
}

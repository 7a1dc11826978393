//! Two-dimensional spot × time sweeps.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pricer_core::traits::Valuator;
use pricer_core::types::PricingParameters;

use super::error::SweepError;
use super::range::SweepRange;
use crate::parallel::ParallelConfig;

/// Price grid over spot and time to maturity.
///
/// `call_prices[i][j]` is the call value at `spot_prices[i]` and `times[j]`;
/// rows follow spot, columns follow time.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Surface {
    /// Spot sample points (rows)
    pub spot_prices: Vec<f64>,
    /// Time sample points (columns)
    pub times: Vec<f64>,
    /// Call values, one row per spot
    pub call_prices: Vec<Vec<f64>>,
    /// Put values, one row per spot
    pub put_prices: Vec<Vec<f64>>,
}

impl Surface {
    /// Grid shape as `(rows, columns)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.spot_prices.len(), self.times.len())
    }
}

/// Surface sweep driver.
///
/// Accepts any [`Valuator`], including host-supplied ones.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingParameters;
/// use pricer_models::analytical::BlackScholes;
/// use pricer_risk::sweeps::{SurfaceGenerator, SweepRange};
///
/// let surface = SurfaceGenerator::default()
///     .generate(
///         &PricingParameters::default(),
///         SweepRange::new(80.0, 120.0, 4).unwrap(),
///         SweepRange::new(0.25, 1.0, 3).unwrap(),
///         &BlackScholes::new(),
///     )
///     .unwrap();
/// assert_eq!(surface.dimensions(), (5, 4));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SurfaceGenerator {
    parallel: ParallelConfig,
}

impl SurfaceGenerator {
    /// Creates a generator with explicit parallel settings.
    pub fn new(parallel: ParallelConfig) -> Self {
        Self { parallel }
    }

    /// Values every `(spot, time)` cell of the two ranges.
    ///
    /// # Errors
    /// Returns [`SweepError`] if either range is malformed.
    pub fn generate<V: Valuator>(
        &self,
        base: &PricingParameters,
        spot_range: SweepRange,
        time_range: SweepRange,
        valuator: &V,
    ) -> Result<Surface, SweepError> {
        spot_range.validate()?;
        time_range.validate()?;

        let spot_prices = spot_range.points();
        let times = time_range.points();
        let columns = times.len();

        // Row-major cell list keeps results addressable by index
        let cells: Vec<(f64, f64)> = spot_prices
            .iter()
            .flat_map(|&spot| times.iter().map(move |&time| (spot, time)))
            .collect();
        let values = self.parallel.map(&cells, |&(spot, time)| {
            valuator.price(&base.with_spot(spot).with_time(time))
        });

        let call_prices: Vec<Vec<f64>> = values
            .chunks(columns)
            .map(|row| row.iter().map(|v| v.call).collect())
            .collect();
        let put_prices: Vec<Vec<f64>> = values
            .chunks(columns)
            .map(|row| row.iter().map(|v| v.put).collect())
            .collect();

        Ok(Surface {
            spot_prices,
            times,
            call_prices,
            put_prices,
        })
    }
}

/// See [`SurfaceGenerator::generate`].
pub fn generate_surface<V: Valuator>(
    base: &PricingParameters,
    spot_range: SweepRange,
    time_range: SweepRange,
    valuator: &V,
) -> Result<Surface, SweepError> {
    SurfaceGenerator::default().generate(base, spot_range, time_range, valuator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::traits::FnValuator;
    use pricer_core::types::OptionValues;
    use pricer_models::lattice::BinomialLattice;

    #[test]
    fn test_grid_orientation() {
        // call = spot, put = time
        let cell_echo = FnValuator::new(|p: &PricingParameters| {
            OptionValues::new(p.spot_price, p.time_to_maturity)
        });
        let surface = generate_surface(
            &PricingParameters::default(),
            SweepRange::new(10.0, 30.0, 2).unwrap(),
            SweepRange::new(1.0, 4.0, 3).unwrap(),
            &cell_echo,
        )
        .unwrap();

        assert_eq!(surface.dimensions(), (3, 4));
        assert_eq!(surface.call_prices.len(), 3);
        for (i, row) in surface.call_prices.iter().enumerate() {
            assert_eq!(row.len(), 4);
            assert!(row.iter().all(|&c| c == surface.spot_prices[i]));
        }
        for row in &surface.put_prices {
            assert_eq!(row, &surface.times);
        }
    }

    #[test]
    fn test_rejects_malformed_ranges() {
        let good = SweepRange::new(1.0, 2.0, 2).unwrap();
        let inverted = SweepRange {
            min: 2.0,
            max: 1.0,
            steps: 2,
        };
        let model = BinomialLattice::new(10);
        let base = PricingParameters::default();
        assert!(generate_surface(&base, inverted, good, &model).is_err());
        assert!(generate_surface(&base, good, inverted, &model).is_err());
    }

    #[test]
    fn test_zero_time_column_is_degenerate() {
        let surface = generate_surface(
            &PricingParameters::default(),
            SweepRange::new(90.0, 110.0, 2).unwrap(),
            SweepRange::new(0.0, 1.0, 2).unwrap(),
            &BinomialLattice::new(20),
        )
        .unwrap();
        for i in 0..3 {
            assert_eq!(surface.call_prices[i][0], 0.0);
            assert_eq!(surface.put_prices[i][0], 0.0);
            assert!(surface.call_prices[i][2] > 0.0);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let spot = SweepRange::new(50.0, 150.0, 20).unwrap();
        let time = SweepRange::new(0.1, 2.0, 10).unwrap();
        let model = BinomialLattice::new(30);
        let base = PricingParameters::default();

        let parallel = SurfaceGenerator::new(ParallelConfig::new(2, 1))
            .generate(&base, spot, time, &model)
            .unwrap();
        let sequential = SurfaceGenerator::new(ParallelConfig::sequential())
            .generate(&base, spot, time, &model)
            .unwrap();
        assert_eq!(parallel, sequential);
    }
}

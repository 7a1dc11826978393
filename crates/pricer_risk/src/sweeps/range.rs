//! Linearly spaced sample ranges.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::SweepError;

/// Number of intervals in the default chart range.
pub const DEFAULT_CURVE_STEPS: usize = 100;

/// Inclusive, linearly spaced range of `steps + 1` sample points.
///
/// Point `i` is `min + i · (max - min) / steps` for `i = 0..=steps`.
///
/// # Examples
/// ```
/// use pricer_risk::sweeps::SweepRange;
///
/// let range = SweepRange::new(50.0, 150.0, 100).unwrap();
/// let points = range.points();
/// assert_eq!(points.len(), 101);
/// assert_eq!(points[0], 50.0);
/// assert_eq!(points[10], 60.0);
///
/// assert!(SweepRange::new(1.0, 2.0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SweepRange {
    /// First sample point
    pub min: f64,
    /// Last sample point
    pub max: f64,
    /// Number of intervals between `min` and `max`
    pub steps: usize,
}

impl SweepRange {
    /// Creates a validated range.
    ///
    /// # Errors
    /// See [`SweepRange::validate`].
    pub fn new(min: f64, max: f64, steps: usize) -> Result<Self, SweepError> {
        let range = Self { min, max, steps };
        range.validate()?;
        Ok(range)
    }

    /// Default chart range around a strike: `[max(1, K/2), 1.5K]` in 100 steps.
    ///
    /// The result is not validated; a non-positive strike yields an inverted
    /// range that sweep generators reject.
    pub fn around_strike(strike: f64) -> Self {
        Self {
            min: (0.5 * strike).max(1.0),
            max: 1.5 * strike,
            steps: DEFAULT_CURVE_STEPS,
        }
    }

    /// Checks the range can be sampled.
    ///
    /// # Errors
    /// - [`SweepError::ZeroSteps`] if `steps == 0`
    /// - [`SweepError::NonFiniteBound`] if a bound is NaN or infinite
    /// - [`SweepError::InvertedRange`] if `min > max`
    pub fn validate(&self) -> Result<(), SweepError> {
        if self.steps == 0 {
            return Err(SweepError::ZeroSteps);
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(SweepError::NonFiniteBound {
                min: self.min,
                max: self.max,
            });
        }
        if self.min > self.max {
            return Err(SweepError::InvertedRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Number of sample points, `steps + 1`.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.steps + 1
    }

    /// Spacing between consecutive points.
    #[inline]
    pub fn step_size(&self) -> f64 {
        (self.max - self.min) / self.steps as f64
    }

    /// Sample point `index`.
    #[inline]
    pub fn point(&self, index: usize) -> f64 {
        self.min + index as f64 * self.step_size()
    }

    /// All sample points in ascending index order.
    pub fn points(&self) -> Vec<f64> {
        (0..self.sample_count()).map(|i| self.point(i)).collect()
    }
}

//! Sweep error types.

use thiserror::Error;

/// Errors reported for malformed sweep requests.
///
/// Economically invalid parameters inside a sweep never error; each sample
/// simply degrades to zero. Only the shape of the sweep itself is checked.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    /// A range with zero steps has no spacing.
    #[error("Sweep range must have at least one step")]
    ZeroSteps,

    /// A bound is NaN or infinite.
    #[error("Sweep bounds must be finite: min={min}, max={max}")]
    NonFiniteBound {
        /// Lower bound as given
        min: f64,
        /// Upper bound as given
        max: f64,
    },

    /// The lower bound exceeds the upper bound.
    #[error("Sweep range is inverted: min={min} > max={max}")]
    InvertedRange {
        /// Lower bound as given
        min: f64,
        /// Upper bound as given
        max: f64,
    },
}

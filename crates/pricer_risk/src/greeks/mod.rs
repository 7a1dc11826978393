//! Greeks by bump-and-revalue.
//!
//! - [`GreeksConfig`]: bump sizes with a validating builder
//! - [`FiniteDifferenceGreeks`]: Greeks for any [`Valuator`](pricer_core::traits::Valuator)

pub mod config;
pub mod finite_difference;

pub use config::{
    GreeksConfig, GreeksConfigBuilder, GreeksConfigError, DEFAULT_RATE_BUMP_ABSOLUTE,
    DEFAULT_SPOT_BUMP_RELATIVE, DEFAULT_TIME_BUMP_YEARS, DEFAULT_VOL_BUMP_ABSOLUTE,
};
pub use finite_difference::FiniteDifferenceGreeks;

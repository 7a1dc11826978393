//! Curve and surface sweeps over valuators and Greeks calculators.
//!
//! - [`SweepRange`]: inclusive linearly spaced sample points
//! - [`CurveGenerator`]: one free parameter, scalar output per sample
//! - [`SurfaceGenerator`]: spot × time grid of call and put prices
//!
//! All generators return results in sample-index order regardless of
//! whether the samples were evaluated in parallel.

pub mod curve;
pub mod error;
pub mod range;
pub mod surface;

pub use curve::{
    generate_call_put_curve, generate_curve, generate_delta_curve, generate_greeks_curve,
    CallPutCurve, Curve, CurveGenerator, CurveType, DeltaCurve, SweepAxis,
};
pub use error::SweepError;
pub use range::{SweepRange, DEFAULT_CURVE_STEPS};
pub use surface::{generate_surface, Surface, SurfaceGenerator};

//! Core traits for valuation and sensitivity calculation.
//!
//! This module defines the abstractions every pricing model satisfies:
//! - Generic floating-point operations (`Float` trait)
//! - Single-point pricing (`Valuator` trait)
//! - Sensitivity bundles (`GreeksCalculator` trait)
//!
//! Built-in models are dispatched statically through an enum in `pricer_models`;
//! the traits are the seam where externally implemented models plug in.

/// Generic floating-point trait for numeric computations.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod valuator;

pub use valuator::{FnValuator, GreeksCalculator, Valuator};

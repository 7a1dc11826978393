//! Parameter, result, and error types.
//!
//! This module provides:
//! - `params`: Immutable market parameter records for a single valuation
//! - `valuation`: Call/put value pairs and the closed-form result with d1/d2
//! - `greeks`: Sensitivity bundles with per-leg values
//! - `error`: Structured error types for boundary-level failures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod error;
pub mod greeks;
pub mod params;
pub mod valuation;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use greeks::{Greeks, LegPair};
pub use params::{BinomialParameters, PricingParameters, DEFAULT_LATTICE_STEPS};
pub use valuation::{OptionValues, ValuationResult};

//! # pricer_core: Foundation Types for Option Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the workspace, providing:
//! - Market parameter records: `PricingParameters`, `BinomialParameters` (`types::params`)
//! - Valuation results: `OptionValues`, `ValuationResult` (`types::valuation`)
//! - Sensitivity bundles: `Greeks`, `LegPair` (`types::greeks`)
//! - The uniform valuator contract: `Valuator`, `GreeksCalculator` (`traits`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::traits::Valuator;
//! use pricer_core::types::{OptionValues, PricingParameters};
//!
//! // A trivial valuator returning intrinsic value
//! struct Intrinsic;
//!
//! impl Valuator for Intrinsic {
//!     fn price(&self, params: &PricingParameters) -> OptionValues {
//!         OptionValues::new(
//!             (params.spot_price - params.strike_price).max(0.0),
//!             (params.strike_price - params.spot_price).max(0.0),
//!         )
//!     }
//! }
//!
//! let params = PricingParameters::new(110.0, 100.0, 1.0, 0.2, 0.05);
//! assert_eq!(Intrinsic.price(&params).call, 10.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): camelCase serialisation matching the host application's JSON keys

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod traits;
pub mod types;

//! Built-in valuation model selection.
//!
//! - [`ModelKind`]: the wire-level model name (`black-scholes`, `binomial`,
//!   `monte-carlo`)
//! - [`PricingModel`]: static dispatch over the built-in valuators
//!
//! Monte-Carlo is named on the wire but has no built-in valuator; hosts supply
//! their own through the [`pricer_core::traits::Valuator`] trait.
//!
//! ## Example
//!
//! ```
//! use pricer_core::traits::Valuator;
//! use pricer_core::types::PricingParameters;
//! use pricer_models::models::{ModelKind, PricingModel};
//!
//! let kind: ModelKind = "binomial".parse().unwrap();
//! let model = PricingModel::from_kind(kind, 50).unwrap();
//! assert_eq!(model.name(), "binomial");
//!
//! let values = model.price(&PricingParameters::default());
//! assert!(values.call > values.put);
//! ```

pub mod model_enum;

pub use model_enum::{ModelKind, PricingModel};

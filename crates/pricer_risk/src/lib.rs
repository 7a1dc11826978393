//! # Pricer Risk (L3: Sensitivities and Sweeps)
//!
//! Bump-and-revalue Greeks and parameter sweeps over any valuator.
//!
//! This crate provides:
//! - Finite-difference Greeks with configurable bump sizes
//! - Linearly spaced sweep ranges
//! - Curve generation (Greeks, deltas, call/put prices against one parameter)
//! - Spot × time price surfaces
//! - Rayon-based parallel sample evaluation
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! ├─────────────────────────────────────────┤
//! │  greeks/    - GreeksConfig,            │
//! │               FiniteDifferenceGreeks    │
//! │  sweeps/    - SweepRange, curves,      │
//! │               surfaces                  │
//! │  parallel/  - Rayon utilities          │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes, CRR binomial lattice    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::PricingParameters;
//! use pricer_models::lattice::BinomialLattice;
//! use pricer_risk::greeks::FiniteDifferenceGreeks;
//! use pricer_risk::sweeps::{generate_greeks_curve, CurveType, SweepRange};
//!
//! let calculator = FiniteDifferenceGreeks::new(BinomialLattice::new(50));
//! let params = PricingParameters::default();
//!
//! let curve = generate_greeks_curve(
//!     &params,
//!     SweepRange::around_strike(params.strike_price),
//!     CurveType::Vega,
//!     &calculator,
//! )
//! .unwrap();
//! assert_eq!(curve.x_values.len(), 101);
//! ```

#![deny(missing_docs)]

pub mod greeks;
pub mod parallel;
pub mod sweeps;

//! # Pricer Models (L2: Valuation Models)
//!
//! European option valuators built on the `pricer_core` contract.
//!
//! This crate provides:
//! - Standard normal distribution primitives
//! - The closed-form Black-Scholes model with analytic Greeks
//! - The Cox-Ross-Rubinstein binomial lattice with an inspectable tree
//! - A static-dispatch model enum selecting between the built-in valuators
//!
//! ## Design Principles
//!
//! - **Stateless valuators**: every model is a pure function of its inputs
//! - **Degrade to zero**: out-of-domain inputs return zero values, never errors
//! - **Enum-based dispatch** for the built-in models, trait objects only at the
//!   seam where the host supplies its own valuator

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod lattice;
pub mod models;

//! Binomial lattice valuation.
//!
//! - [`BinomialLattice`]: Cox-Ross-Rubinstein valuator for European options
//! - [`Lattice`]: flat triangular storage of the full tree for inspection

pub mod binomial;
pub mod tree;

pub use binomial::{
    binomial_coefficient, price_binomial, BinomialLattice, BinomialResult, CrrParameters,
};
pub use tree::{node_count, Lattice, LatticeNode};

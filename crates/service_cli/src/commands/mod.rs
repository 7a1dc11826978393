//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands read a JSON
//! request, run the engine and print the JSON response to stdout.

pub mod curve;
pub mod defaults;
pub mod greeks;
pub mod price;
pub mod surface;

use std::io::Read;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use pricer_core::traits::GreeksCalculator;
use pricer_core::types::{Greeks, PricingParameters};
use pricer_models::analytical::BlackScholes;
use pricer_models::lattice::BinomialLattice;
use pricer_models::models::PricingModel;
use pricer_risk::greeks::{FiniteDifferenceGreeks, GreeksConfig};

use crate::{CliError, Result};

/// Reads and parses a request from a file path, or stdin when `input` is `-`.
pub fn read_request<T: DeserializeOwned>(input: &str) -> Result<T> {
    let body = if input == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        if !std::path::Path::new(input).exists() {
            return Err(CliError::FileNotFound(input.to_string()));
        }
        std::fs::read_to_string(input)?
    };
    debug!(input, bytes = body.len(), "Request read");
    Ok(serde_json::from_str(&body)?)
}

/// Prints `value` as pretty JSON on stdout.
pub fn write_response<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Greeks source for a built-in model.
///
/// The closed-form model reports analytic Greeks; the lattice is wrapped in
/// the finite-difference calculator.
pub enum ModelGreeks {
    /// Analytic Black-Scholes Greeks
    Analytic(BlackScholes),
    /// Bump-and-revalue over the lattice
    FiniteDifference(FiniteDifferenceGreeks<BinomialLattice>),
}

impl ModelGreeks {
    /// Selects the Greeks source for `model`.
    pub fn new(model: PricingModel, config: GreeksConfig) -> Self {
        match model {
            PricingModel::BlackScholes(bs) => ModelGreeks::Analytic(bs),
            PricingModel::Binomial(lattice) => {
                ModelGreeks::FiniteDifference(FiniteDifferenceGreeks::with_config(lattice, config))
            }
        }
    }
}

impl GreeksCalculator for ModelGreeks {
    fn greeks(&self, params: &PricingParameters) -> Greeks {
        match self {
            ModelGreeks::Analytic(bs) => bs.greeks(params),
            ModelGreeks::FiniteDifference(fd) => fd.greeks(params),
        }
    }
}

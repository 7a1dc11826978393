//! Price command implementation
//!
//! Values a single European call/put pair with the requested model.

use tracing::info;

use pricer_core::types::ValuationResult;

use super::{read_request, write_response};
use crate::config::CliConfig;
use crate::requests::ValuationRequest;
use crate::Result;

/// Values the request.
pub fn execute(request: &ValuationRequest, config: &CliConfig) -> Result<ValuationResult> {
    let model = request.pricing_model(config.default_steps)?;
    info!(model = model.name(), "Pricing");
    Ok(model.valuate(&request.params))
}

/// Run the price command
pub fn run(input: &str, config: &CliConfig) -> Result<()> {
    let request: ValuationRequest = read_request(input)?;
    let result = execute(&request, config)?;
    write_response(&result)
}

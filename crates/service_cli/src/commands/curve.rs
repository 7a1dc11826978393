//! Curve command implementation
//!
//! Sweeps spot (gamma, vega) or time to maturity (theta) and reports one
//! Greek per sample.

use tracing::info;

use pricer_risk::sweeps::{Curve, CurveGenerator};

use super::{read_request, write_response, ModelGreeks};
use crate::config::CliConfig;
use crate::requests::CurveRequest;
use crate::Result;

/// Generates the curve for the request.
pub fn execute(request: &CurveRequest, config: &CliConfig) -> Result<Curve> {
    let range = request.range(config.curve_steps)?;
    let model = request.pricing_model(config.default_steps)?;
    info!(
        model = model.name(),
        curve_type = %request.curve_type,
        samples = range.sample_count(),
        "Generating curve"
    );

    let calculator = ModelGreeks::new(model, config.greeks_config()?);
    let generator = CurveGenerator::new(config.parallel_config());
    Ok(generator.greeks_curve(&request.params, range, request.curve_type, &calculator)?)
}

/// Run the curve command
pub fn run(input: &str, config: &CliConfig) -> Result<()> {
    let request: CurveRequest = read_request(input)?;
    let curve = execute(&request, config)?;
    write_response(&curve)
}

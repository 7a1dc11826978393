//! Surface command implementation

use tracing::{info, warn};

use pricer_risk::sweeps::{Surface, SurfaceGenerator};

use super::{read_request, write_response};
use crate::config::CliConfig;
use crate::requests::SurfaceRequest;
use crate::Result;

/// Generates the price surface for the request.
pub fn execute(request: &SurfaceRequest, config: &CliConfig) -> Result<Surface> {
    let spot_range = request.spot_range()?;
    let time_range = request.time_range()?;
    let model = request.pricing_model(config.default_steps)?;
    if request.simulations.is_some() {
        warn!(model = model.name(), "Ignoring simulations for a built-in model");
    }
    info!(
        model = model.name(),
        rows = spot_range.sample_count(),
        columns = time_range.sample_count(),
        "Generating surface"
    );

    let generator = SurfaceGenerator::new(config.parallel_config());
    Ok(generator.generate(&request.params, spot_range, time_range, &model)?)
}

/// Run the surface command
pub fn run(input: &str, config: &CliConfig) -> Result<()> {
    let request: SurfaceRequest = read_request(input)?;
    let surface = execute(&request, config)?;
    write_response(&surface)
}

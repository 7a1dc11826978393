//! Greeks command implementation

use tracing::info;

use pricer_core::traits::GreeksCalculator;
use pricer_core::types::Greeks;

use super::{read_request, write_response, ModelGreeks};
use crate::config::CliConfig;
use crate::requests::ValuationRequest;
use crate::Result;

/// Computes the Greeks bundle for the request.
pub fn execute(request: &ValuationRequest, config: &CliConfig) -> Result<Greeks> {
    let model = request.pricing_model(config.default_steps)?;
    info!(model = model.name(), "Computing Greeks");
    let calculator = ModelGreeks::new(model, config.greeks_config()?);
    Ok(calculator.greeks(&request.params))
}

/// Run the greeks command
pub fn run(input: &str, config: &CliConfig) -> Result<()> {
    let request: ValuationRequest = read_request(input)?;
    let greeks = execute(&request, config)?;
    write_response(&greeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pricer_core::types::PricingParameters;
    use pricer_models::models::ModelKind;

    #[test]
    fn test_closed_form_greeks_are_analytic() {
        let request = ValuationRequest {
            params: PricingParameters::default(),
            steps: None,
            model: None,
        };
        let greeks = execute(&request, &CliConfig::default()).unwrap();
        assert_abs_diff_eq!(greeks.delta.call, 0.636831, epsilon = 1e-5);
        assert_abs_diff_eq!(greeks.vega, 0.375240, epsilon = 1e-5);
    }

    #[test]
    fn test_lattice_greeks_are_finite_difference() {
        let request = ValuationRequest {
            params: PricingParameters::default(),
            steps: Some(100),
            model: Some(ModelKind::Binomial),
        };
        let greeks = execute(&request, &CliConfig::default()).unwrap();
        assert_abs_diff_eq!(greeks.delta.call, 0.6365, epsilon = 0.01);
        // Raw quotient: per unit volatility
        assert!(greeks.vega > 30.0);
    }

    #[test]
    fn test_invalid_bumps_are_reported() {
        let request = ValuationRequest {
            params: PricingParameters::default(),
            steps: None,
            model: Some(ModelKind::Binomial),
        };
        let config = CliConfig {
            spot_bump_relative: 0.0,
            ..CliConfig::default()
        };
        assert!(matches!(
            execute(&request, &config),
            Err(crate::CliError::Greeks(_))
        ));
    }
}

//! Defaults command implementation
//!
//! Prints the effective configuration and the default market inputs.

use serde::Serialize;

use pricer_core::types::PricingParameters;

use super::write_response;
use crate::config::CliConfig;
use crate::Result;

/// Effective settings as printed by `optiscope defaults`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsReport<'a> {
    /// Configuration after merging every source
    pub config: &'a CliConfig,
    /// Market inputs used when a host has none
    pub parameters: PricingParameters,
}

impl<'a> DefaultsReport<'a> {
    /// Builds the report for `config`.
    pub fn new(config: &'a CliConfig) -> Self {
        Self {
            config,
            parameters: PricingParameters::default(),
        }
    }
}

/// Run the defaults command
pub fn run(config: &CliConfig) -> Result<()> {
    write_response(&DefaultsReport::new(config))
}

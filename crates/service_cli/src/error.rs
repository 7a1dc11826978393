//! CLI error types.

use pricer_core::types::PricingError;
use pricer_risk::greeks::GreeksConfigError;
use pricer_risk::sweeps::SweepError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `optiscope` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Request file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request body is not valid JSON for the command.
    #[error("Invalid request: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Model selection failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Sweep request is malformed.
    #[error(transparent)]
    Sweep(#[from] SweepError),

    /// Greeks bump configuration is invalid.
    #[error(transparent)]
    Greeks(#[from] GreeksConfigError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

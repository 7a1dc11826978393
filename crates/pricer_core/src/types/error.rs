//! Error types for boundary-level failures.
//!
//! Pricing itself never fails: out-of-domain economic inputs degrade to a zero
//! result. `PricingError` covers the requests a host can get wrong before any
//! valuation runs, such as naming a model that is not built in.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidInput`: Structurally invalid request data
/// - `UnknownModel`: Model name not recognised
/// - `ExternalModel`: Model is recognised but must be supplied by the host
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::UnknownModel("heston".to_string());
/// assert_eq!(format!("{}", err), "Unknown model: heston");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model name not recognised
    #[error("Unknown model: {0}")]
    UnknownModel(String),

    /// Model has no built-in valuator and must be supplied externally
    #[error("Model requires an external valuator: {0}")]
    ExternalModel(String),
}

//! Static dispatch enum for the built-in valuators.
//!
//! `PricingModel` wraps each built-in model in an enum variant so callers pick
//! a model at runtime without boxing. Every variant satisfies the same
//! [`Valuator`] contract.

use std::fmt;
use std::str::FromStr;

use pricer_core::traits::Valuator;
use pricer_core::types::{OptionValues, PricingError, PricingParameters, ValuationResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::analytical::BlackScholes;
use crate::lattice::BinomialLattice;

/// Model name as it appears in requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ModelKind {
    /// Closed-form Black-Scholes
    #[default]
    BlackScholes,
    /// Cox-Ross-Rubinstein lattice
    Binomial,
    /// Simulation valuator supplied by the host
    MonteCarlo,
}

impl ModelKind {
    /// Returns the canonical wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::BlackScholes => "black-scholes",
            ModelKind::Binomial => "binomial",
            ModelKind::MonteCarlo => "monte-carlo",
        }
    }

    /// Returns true if a built-in valuator exists for this model.
    pub fn is_builtin(&self) -> bool {
        !matches!(self, ModelKind::MonteCarlo)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "black-scholes" | "blackscholes" | "bs" => Ok(ModelKind::BlackScholes),
            "binomial" | "crr" => Ok(ModelKind::Binomial),
            "monte-carlo" | "montecarlo" | "mc" => Ok(ModelKind::MonteCarlo),
            _ => Err(PricingError::UnknownModel(s.to_string())),
        }
    }
}

/// Built-in valuation model.
///
/// # Example
///
/// ```
/// use pricer_core::types::PricingParameters;
/// use pricer_models::models::{ModelKind, PricingModel};
///
/// let model = PricingModel::from_kind(ModelKind::BlackScholes, 50).unwrap();
/// let result = model.valuate(&PricingParameters::default());
/// assert!(result.d1.is_some());
///
/// assert!(PricingModel::from_kind(ModelKind::MonteCarlo, 50).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PricingModel {
    /// Closed-form Black-Scholes
    BlackScholes(BlackScholes),
    /// CRR binomial lattice
    Binomial(BinomialLattice),
}

impl Default for PricingModel {
    fn default() -> Self {
        PricingModel::BlackScholes(BlackScholes::new())
    }
}

impl PricingModel {
    /// Creates the built-in model for `kind`.
    ///
    /// `steps` sets the lattice depth and is ignored by closed-form models.
    ///
    /// # Errors
    /// Returns [`PricingError::ExternalModel`] for models without a built-in
    /// valuator.
    pub fn from_kind(kind: ModelKind, steps: usize) -> Result<Self, PricingError> {
        match kind {
            ModelKind::BlackScholes => Ok(PricingModel::BlackScholes(BlackScholes::new())),
            ModelKind::Binomial => Ok(PricingModel::Binomial(BinomialLattice::new(steps))),
            ModelKind::MonteCarlo => Err(PricingError::ExternalModel(kind.to_string())),
        }
    }

    /// Parses a model name and creates the built-in model.
    pub fn from_name(name: &str, steps: usize) -> Result<Self, PricingError> {
        Self::from_kind(name.parse()?, steps)
    }

    /// Returns the wire-level kind of this model.
    pub fn kind(&self) -> ModelKind {
        match self {
            PricingModel::BlackScholes(_) => ModelKind::BlackScholes,
            PricingModel::Binomial(_) => ModelKind::Binomial,
        }
    }

    /// Returns the model name.
    pub fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Values the option, including `d1`/`d2` for the closed-form model.
    pub fn valuate(&self, params: &PricingParameters) -> ValuationResult {
        match self {
            PricingModel::BlackScholes(model) => model.valuate(params),
            PricingModel::Binomial(model) => ValuationResult::from(model.price(params)),
        }
    }
}

impl Valuator for PricingModel {
    fn price(&self, params: &PricingParameters) -> OptionValues {
        match self {
            PricingModel::BlackScholes(model) => model.price(params),
            PricingModel::Binomial(model) => model.price(params),
        }
    }
}

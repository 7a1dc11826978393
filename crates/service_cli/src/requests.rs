//! JSON request bodies accepted by the commands.
//!
//! Field names are camelCase to match the host application's wire format.

use serde::Deserialize;

use pricer_core::types::{PricingError, PricingParameters};
use pricer_models::models::{ModelKind, PricingModel};
use pricer_risk::sweeps::{CurveType, SweepError, SweepRange};

/// Grid intervals per axis when a surface request omits them.
pub const DEFAULT_SURFACE_STEPS: usize = 20;

/// Single valuation or Greeks request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRequest {
    /// Market inputs
    #[serde(flatten)]
    pub params: PricingParameters,
    /// Lattice depth for the binomial model
    #[serde(default)]
    pub steps: Option<i64>,
    /// Model name, Black-Scholes when absent
    #[serde(default)]
    pub model: Option<ModelKind>,
}

impl ValuationRequest {
    /// Resolves the requested built-in model.
    pub fn pricing_model(&self, default_steps: usize) -> Result<PricingModel, PricingError> {
        resolve_model(self.model, self.steps, default_steps)
    }
}

/// Greeks curve request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurveRequest {
    /// Base market inputs
    #[serde(flatten)]
    pub params: PricingParameters,
    /// First sample of the swept parameter
    pub range_min: f64,
    /// Last sample of the swept parameter
    pub range_max: f64,
    /// Number of intervals, configured default when absent
    #[serde(default)]
    pub steps: Option<i64>,
    /// Sensitivity to plot
    pub curve_type: CurveType,
    /// Model name, Black-Scholes when absent
    #[serde(default)]
    pub model: Option<ModelKind>,
    /// Lattice depth for the binomial model
    #[serde(default)]
    pub lattice_steps: Option<i64>,
}

impl CurveRequest {
    /// Sweep range of the request.
    pub fn range(&self, default_steps: usize) -> Result<SweepRange, SweepError> {
        SweepRange::new(
            self.range_min,
            self.range_max,
            step_count(self.steps, default_steps),
        )
    }

    /// Resolves the requested built-in model.
    pub fn pricing_model(&self, default_steps: usize) -> Result<PricingModel, PricingError> {
        resolve_model(self.model, self.lattice_steps, default_steps)
    }
}

/// Price surface request.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceRequest {
    /// Base market inputs
    #[serde(flatten)]
    pub params: PricingParameters,
    /// Lowest spot sample
    pub spot_min: f64,
    /// Highest spot sample
    pub spot_max: f64,
    /// Shortest maturity sample
    pub time_min: f64,
    /// Longest maturity sample
    pub time_max: f64,
    /// Spot intervals
    #[serde(default)]
    pub spot_steps: Option<i64>,
    /// Time intervals
    #[serde(default)]
    pub time_steps: Option<i64>,
    /// Model used for every cell
    pub model: ModelKind,
    /// Lattice depth for the binomial model
    #[serde(default)]
    pub steps: Option<i64>,
    /// Path count for simulation models
    #[serde(default)]
    pub simulations: Option<usize>,
}

impl SurfaceRequest {
    /// Spot axis of the grid.
    pub fn spot_range(&self) -> Result<SweepRange, SweepError> {
        SweepRange::new(
            self.spot_min,
            self.spot_max,
            step_count(self.spot_steps, DEFAULT_SURFACE_STEPS),
        )
    }

    /// Time axis of the grid.
    pub fn time_range(&self) -> Result<SweepRange, SweepError> {
        SweepRange::new(
            self.time_min,
            self.time_max,
            step_count(self.time_steps, DEFAULT_SURFACE_STEPS),
        )
    }

    /// Resolves the requested built-in model.
    pub fn pricing_model(&self, default_steps: usize) -> Result<PricingModel, PricingError> {
        resolve_model(Some(self.model), self.steps, default_steps)
    }
}

/// Step count from the wire. Non-positive values become zero, which the
/// lattice prices as a degenerate input and sweeps reject.
fn step_count(steps: Option<i64>, default_steps: usize) -> usize {
    match steps {
        Some(steps) => usize::try_from(steps.max(0)).unwrap_or(usize::MAX),
        None => default_steps,
    }
}

fn resolve_model(
    kind: Option<ModelKind>,
    steps: Option<i64>,
    default_steps: usize,
) -> Result<PricingModel, PricingError> {
    PricingModel::from_kind(kind.unwrap_or_default(), step_count(steps, default_steps))
}

//! Finite-difference bump configuration.
//!
//! Provides [`GreeksConfig`] for configuring the perturbation sizes used by
//! [`FiniteDifferenceGreeks`](super::FiniteDifferenceGreeks).

use thiserror::Error;

/// Default relative spot bump (1% of spot).
pub const DEFAULT_SPOT_BUMP_RELATIVE: f64 = 0.01;
/// Default absolute volatility bump (1 vol point).
pub const DEFAULT_VOL_BUMP_ABSOLUTE: f64 = 0.01;
/// Default time bump in years (one calendar day).
pub const DEFAULT_TIME_BUMP_YEARS: f64 = 1.0 / 365.0;
/// Default absolute rate bump (1 rate point).
pub const DEFAULT_RATE_BUMP_ABSOLUTE: f64 = 0.01;

/// Configuration for finite-difference Greeks.
///
/// Use the builder pattern via [`GreeksConfig::builder()`] for validated
/// construction.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `spot_bump_relative` | 0.01 (1%) | Relative bump for spot price |
/// | `vol_bump_absolute` | 0.01 | Absolute bump for volatility |
/// | `time_bump_years` | 1/365 | Time bump in years (1 calendar day) |
/// | `rate_bump_absolute` | 0.01 | Absolute bump for interest rate |
///
/// # Examples
///
/// ```rust
/// use pricer_risk::greeks::GreeksConfig;
///
/// let config = GreeksConfig::default();
/// assert_eq!(config.spot_bump_relative, 0.01);
///
/// let config = GreeksConfig::builder()
///     .spot_bump_relative(0.005)
///     .time_bump_years(1.0 / 252.0)
///     .build()
///     .unwrap();
/// assert_eq!(config.vol_bump_absolute, 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreeksConfig {
    /// Relative bump for spot price.
    ///
    /// The actual bump is `spot_bump_relative * spot_price`.
    pub spot_bump_relative: f64,

    /// Absolute bump for volatility.
    pub vol_bump_absolute: f64,

    /// Time bump in years, applied towards expiry.
    pub time_bump_years: f64,

    /// Absolute bump for interest rate.
    pub rate_bump_absolute: f64,
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self {
            spot_bump_relative: DEFAULT_SPOT_BUMP_RELATIVE,
            vol_bump_absolute: DEFAULT_VOL_BUMP_ABSOLUTE,
            time_bump_years: DEFAULT_TIME_BUMP_YEARS,
            rate_bump_absolute: DEFAULT_RATE_BUMP_ABSOLUTE,
        }
    }
}

impl GreeksConfig {
    /// Creates a new builder for constructing a `GreeksConfig`.
    pub fn builder() -> GreeksConfigBuilder {
        GreeksConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// Returns an error if any bump is non-finite, non-positive or
    /// unreasonably large.
    pub fn validate(&self) -> Result<(), GreeksConfigError> {
        check_bump(self.spot_bump_relative, 1.0, "spot_bump_relative", "100%")
            .map_err(GreeksConfigError::InvalidSpotBump)?;
        check_bump(self.vol_bump_absolute, 0.5, "vol_bump_absolute", "50 vol points")
            .map_err(GreeksConfigError::InvalidVolBump)?;
        check_bump(self.time_bump_years, 1.0, "time_bump_years", "1 year")
            .map_err(GreeksConfigError::InvalidTimeBump)?;
        check_bump(self.rate_bump_absolute, 0.1, "rate_bump_absolute", "10%")
            .map_err(GreeksConfigError::InvalidRateBump)?;
        Ok(())
    }

    /// Computes the absolute spot bump for a given spot price.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_risk::greeks::GreeksConfig;
    ///
    /// let config = GreeksConfig::default(); // 1% bump
    /// let bump = config.compute_spot_bump(100.0);
    /// assert!((bump - 1.0).abs() < 1e-10);
    /// ```
    #[inline]
    pub fn compute_spot_bump(&self, spot: f64) -> f64 {
        self.spot_bump_relative * spot
    }
}

fn check_bump(value: f64, upper: f64, name: &str, label: &str) -> Result<(), String> {
    if !value.is_finite() || value <= 0.0 {
        return Err(format!("{name} must be positive and finite"));
    }
    if value > upper {
        return Err(format!("{name} must be <= {upper} ({label})"));
    }
    Ok(())
}

/// Builder for [`GreeksConfig`].
#[derive(Debug, Default)]
pub struct GreeksConfigBuilder {
    spot_bump_relative: Option<f64>,
    vol_bump_absolute: Option<f64>,
    time_bump_years: Option<f64>,
    rate_bump_absolute: Option<f64>,
}

impl GreeksConfigBuilder {
    /// Sets the relative spot bump (default: 0.01 = 1%).
    pub fn spot_bump_relative(mut self, bump: f64) -> Self {
        self.spot_bump_relative = Some(bump);
        self
    }

    /// Sets the absolute volatility bump (default: 0.01).
    pub fn vol_bump_absolute(mut self, bump: f64) -> Self {
        self.vol_bump_absolute = Some(bump);
        self
    }

    /// Sets the time bump in years (default: 1/365).
    pub fn time_bump_years(mut self, bump: f64) -> Self {
        self.time_bump_years = Some(bump);
        self
    }

    /// Sets the absolute rate bump (default: 0.01).
    pub fn rate_bump_absolute(mut self, bump: f64) -> Self {
        self.rate_bump_absolute = Some(bump);
        self
    }

    /// Builds the configuration, validating all parameters.
    ///
    /// # Errors
    ///
    /// Returns [`GreeksConfigError`] if any parameter is invalid.
    pub fn build(self) -> Result<GreeksConfig, GreeksConfigError> {
        let config = GreeksConfig {
            spot_bump_relative: self.spot_bump_relative.unwrap_or(DEFAULT_SPOT_BUMP_RELATIVE),
            vol_bump_absolute: self.vol_bump_absolute.unwrap_or(DEFAULT_VOL_BUMP_ABSOLUTE),
            time_bump_years: self.time_bump_years.unwrap_or(DEFAULT_TIME_BUMP_YEARS),
            rate_bump_absolute: self.rate_bump_absolute.unwrap_or(DEFAULT_RATE_BUMP_ABSOLUTE),
        };

        config.validate()?;
        Ok(config)
    }
}

/// Error type for [`GreeksConfig`] validation.
#[derive(Debug, Clone, PartialEq, Error)]
#[allow(clippy::enum_variant_names)]
pub enum GreeksConfigError {
    /// Invalid spot bump value.
    #[error("Invalid spot bump: {0}")]
    InvalidSpotBump(String),
    /// Invalid volatility bump value.
    #[error("Invalid vol bump: {0}")]
    InvalidVolBump(String),
    /// Invalid time bump value.
    #[error("Invalid time bump: {0}")]
    InvalidTimeBump(String),
    /// Invalid rate bump value.
    #[error("Invalid rate bump: {0}")]
    InvalidRateBump(String),
}

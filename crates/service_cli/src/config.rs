//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and
//! command-line flags.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use pricer_core::types::DEFAULT_LATTICE_STEPS;
use pricer_risk::greeks::{
    GreeksConfig, GreeksConfigError, DEFAULT_RATE_BUMP_ABSOLUTE, DEFAULT_SPOT_BUMP_RELATIVE,
    DEFAULT_TIME_BUMP_YEARS, DEFAULT_VOL_BUMP_ABSOLUTE,
};
use pricer_risk::parallel::{ParallelConfig, DEFAULT_BATCH_SIZE, DEFAULT_PARALLEL_THRESHOLD};
use pricer_risk::sweeps::DEFAULT_CURVE_STEPS;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "OPTISCOPE_";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("{0} must be at least 1")]
    ZeroSteps(&'static str),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error(transparent)]
    Greeks(#[from] GreeksConfigError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Effective CLI configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Lattice depth when a request does not name one
    pub default_steps: usize,
    /// Curve intervals when a request does not name them
    pub curve_steps: usize,
    /// Sample count at which sweeps go parallel
    pub parallel_threshold: usize,
    /// Relative spot bump for finite-difference Greeks
    pub spot_bump_relative: f64,
    /// Absolute volatility bump for finite-difference Greeks
    pub vol_bump_absolute: f64,
    /// Time bump in years for finite-difference Greeks
    pub time_bump_years: f64,
    /// Absolute rate bump for finite-difference Greeks
    pub rate_bump_absolute: f64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            default_steps: DEFAULT_LATTICE_STEPS,
            curve_steps: DEFAULT_CURVE_STEPS,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            spot_bump_relative: DEFAULT_SPOT_BUMP_RELATIVE,
            vol_bump_absolute: DEFAULT_VOL_BUMP_ABSOLUTE,
            time_bump_years: DEFAULT_TIME_BUMP_YEARS,
            rate_bump_absolute: DEFAULT_RATE_BUMP_ABSOLUTE,
        }
    }
}

fn parse_env<T: FromStr>(key: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value,
        })
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Overrides fields from `OPTISCOPE_*` variables.
    ///
    /// `lookup` resolves a variable name to its value, normally
    /// `std::env::var`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            let key = format!("{ENV_PREFIX}{name}");
            lookup(&key).map(|value| (key, value))
        };

        if let Some((_, value)) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(value.trim())?;
        }
        if let Some((key, value)) = var("DEFAULT_STEPS") {
            self.default_steps = parse_env(&key, value)?;
        }
        if let Some((key, value)) = var("CURVE_STEPS") {
            self.curve_steps = parse_env(&key, value)?;
        }
        if let Some((key, value)) = var("PARALLEL_THRESHOLD") {
            self.parallel_threshold = parse_env(&key, value)?;
        }
        if let Some((key, value)) = var("SPOT_BUMP_RELATIVE") {
            self.spot_bump_relative = parse_env(&key, value)?;
        }
        if let Some((key, value)) = var("VOL_BUMP_ABSOLUTE") {
            self.vol_bump_absolute = parse_env(&key, value)?;
        }
        if let Some((key, value)) = var("TIME_BUMP_YEARS") {
            self.time_bump_years = parse_env(&key, value)?;
        }
        if let Some((key, value)) = var("RATE_BUMP_ABSOLUTE") {
            self.rate_bump_absolute = parse_env(&key, value)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_steps == 0 {
            return Err(ConfigError::ZeroSteps("default_steps"));
        }
        if self.curve_steps == 0 {
            return Err(ConfigError::ZeroSteps("curve_steps"));
        }
        self.greeks_config()?;
        Ok(())
    }

    /// Bump sizes for finite-difference Greeks
    pub fn greeks_config(&self) -> Result<GreeksConfig, GreeksConfigError> {
        GreeksConfig::builder()
            .spot_bump_relative(self.spot_bump_relative)
            .vol_bump_absolute(self.vol_bump_absolute)
            .time_bump_years(self.time_bump_years)
            .rate_bump_absolute(self.rate_bump_absolute)
            .build()
    }

    /// Parallel settings for sweeps
    pub fn parallel_config(&self) -> ParallelConfig {
        ParallelConfig::new(DEFAULT_BATCH_SIZE, self.parallel_threshold)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(steps) = cli.steps {
            self.default_steps = steps;
        }
        if let Some(threshold) = cli.parallel_threshold {
            self.parallel_threshold = threshold;
        }
    }
}

/// Configuration overrides taken from command-line flags
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<LogLevel>,
    /// Lattice depth override
    pub steps: Option<usize>,
    /// Parallel threshold override
    pub parallel_threshold: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config<F>(cli: &CliArgs, env_lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => CliConfig::from_file(path)?,
        None => CliConfig::default(),
    };

    config.apply_env(env_lookup)?;
    config.merge_with_cli(cli);

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.default_steps, 50);
        assert_eq!(config.curve_steps, 100);
        assert_eq!(config.parallel_threshold, 64);
        assert_eq!(config.spot_bump_relative, 0.01);
        assert_eq!(config.time_bump_years, 1.0 / 365.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Info").unwrap(), LogLevel::Info);
        assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel::Warn);
        assert_eq!(LogLevel::from_str("error").unwrap(), LogLevel::Error);

        assert!(LogLevel::from_str("invalid").is_err());
    }

    #[test]
    fn test_toml_partial_overrides() {
        let config = CliConfig::from_toml_str(
            r#"
            log_level = "debug"
            default_steps = 200
            time_bump_years = 0.00396825
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.default_steps, 200);
        assert_eq!(config.time_bump_years, 0.00396825);
        assert_eq!(config.curve_steps, 100);
    }

    #[test]
    fn test_toml_rejects_invalid_values() {
        assert!(matches!(
            CliConfig::from_toml_str("default_steps = 0"),
            Err(ConfigError::ZeroSteps("default_steps"))
        ));
        assert!(matches!(
            CliConfig::from_toml_str("vol_bump_absolute = -1.0"),
            Err(ConfigError::Greeks(GreeksConfigError::InvalidVolBump(_)))
        ));
        assert!(matches!(
            CliConfig::from_toml_str("log_level = \"loud\""),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = CliConfig::default();
        config
            .apply_env(env(&[
                ("OPTISCOPE_LOG_LEVEL", "trace"),
                ("OPTISCOPE_CURVE_STEPS", " 40 "),
                ("OPTISCOPE_RATE_BUMP_ABSOLUTE", "0.001"),
                ("UNRELATED", "1"),
            ]))
            .unwrap();
        assert_eq!(config.log_level, LogLevel::Trace);
        assert_eq!(config.curve_steps, 40);
        assert_eq!(config.rate_bump_absolute, 0.001);
        assert_eq!(config.default_steps, 50);
    }

    #[test]
    fn test_env_rejects_unparseable_value() {
        let mut config = CliConfig::default();
        let err = config
            .apply_env(env(&[("OPTISCOPE_DEFAULT_STEPS", "many")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for OPTISCOPE_DEFAULT_STEPS: many");
    }

    #[test]
    fn test_priority_cli_over_env_over_file() {
        let path = std::env::temp_dir().join(format!("optiscope-config-{}.toml", std::process::id()));
        std::fs::write(&path, "default_steps = 10\ncurve_steps = 20\nparallel_threshold = 5\n").unwrap();

        let cli = CliArgs {
            config_file: Some(path.clone()),
            steps: Some(30),
            ..CliArgs::default()
        };
        let config = build_config(&cli, env(&[("OPTISCOPE_CURVE_STEPS", "25")])).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.default_steps, 30);
        assert_eq!(config.curve_steps, 25);
        assert_eq!(config.parallel_threshold, 5);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let cli = CliArgs {
            config_file: Some(PathBuf::from("/nonexistent/optiscope.toml")),
            ..CliArgs::default()
        };
        assert!(matches!(
            build_config(&cli, env(&[])),
            Err(ConfigError::FileError(_))
        ));
    }

    #[test]
    fn test_cli_override_is_validated() {
        let cli = CliArgs {
            steps: Some(0),
            ..CliArgs::default()
        };
        assert!(build_config(&cli, env(&[])).is_err());
    }

    #[test]
    fn test_derived_configs() {
        let config = CliConfig {
            parallel_threshold: 8,
            spot_bump_relative: 0.02,
            ..CliConfig::default()
        };
        assert_eq!(config.parallel_config().parallel_threshold, 8);
        assert_eq!(config.greeks_config().unwrap().spot_bump_relative, 0.02);
    }
}

//! Optiscope CLI - Command Line Front End for Option Valuation
//!
//! This is the operational entry point for the optiscope pricing engine.
//!
//! # Commands
//!
//! - `optiscope price <request>` - Value a European call/put pair
//! - `optiscope greeks <request>` - Compute the Greeks bundle
//! - `optiscope curve <request>` - Sweep one parameter and plot a Greek
//! - `optiscope surface <request>` - Price a spot × time grid
//! - `optiscope defaults` - Print the effective configuration
//!
//! Requests are JSON files; pass `-` to read from stdin. Responses are
//! printed as JSON on stdout, logs go to stderr.
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate marshals requests into the
//! pricer crates and owns configuration and logging.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod requests;

use config::{build_config, CliArgs, LogLevel};
pub use error::{CliError, Result};

/// Optiscope option pricing CLI
#[derive(Parser, Debug)]
#[command(name = "optiscope")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "OPTISCOPE_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<LogLevel>,

    /// Lattice depth used when a request does not set one
    #[arg(long, global = true)]
    steps: Option<usize>,

    /// Sample count at which sweeps run in parallel
    #[arg(long, global = true)]
    parallel_threshold: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Value a European call and put
    Price {
        /// Request file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Compute delta, gamma, theta, vega and rho
    Greeks {
        /// Request file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Generate a Greeks curve
    Curve {
        /// Request file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Generate a spot × time price surface
    Surface {
        /// Request file, or - for stdin
        #[arg(default_value = "-")]
        input: String,
    },

    /// Print the effective configuration and default inputs
    Defaults,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level,
            steps: cli.steps,
            parallel_threshold: cli.parallel_threshold,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli), |key| std::env::var(key).ok())?;

    init_tracing(config.log_level.as_filter_str());
    info!(
        log_level = %config.log_level,
        default_steps = config.default_steps,
        curve_steps = config.curve_steps,
        parallel_threshold = config.parallel_threshold,
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Price { input } => commands::price::run(input, &config),
        Commands::Greeks { input } => commands::greeks::run(input, &config),
        Commands::Curve { input } => commands::curve::run(input, &config),
        Commands::Surface { input } => commands::surface::run(input, &config),
        Commands::Defaults => commands::defaults::run(&config),
    }
}

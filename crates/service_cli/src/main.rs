//! Variates CLI - Command Line Sampling of Random Variates
//!
//! This is the operational entry point for the variates sampler library.
//!
//! # Commands
//!
//! - `variates sample <dist> [params...]` - Draw variates and print them
//! - `variates summary <dist> [params...]` - Print sample moments and range
//! - `variates list` - List the available distributions
//!
//! # Configuration
//!
//! Settings are layered CLI > environment (`VARIATES_*`) > `--config` TOML
//! file > defaults. `RUST_LOG` overrides the configured log level.
//!
//! # Architecture
//!
//! As part of the **Service** layer, this crate wires the samplers in
//! `variate_samplers` to a generator from `variate_core` and formats the
//! output.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

use config::{build_config, CliArgs};
use error::Result;

/// Variates random variate sampler CLI
#[derive(Parser, Debug)]
#[command(name = "variates")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Generator seed (drawn from OS entropy when omitted)
    #[arg(short, long, global = true, env = "VARIATES_SEED")]
    seed: Option<u64>,

    /// Number of variates to draw
    #[arg(short = 'n', long, global = true, env = "VARIATES_COUNT")]
    count: Option<usize>,

    /// Output format (plain, json, csv)
    #[arg(short, long, global = true, env = "VARIATES_FORMAT")]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "VARIATES_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Draw variates from a distribution
    Sample {
        /// Distribution name (see `variates list`)
        distribution: String,

        /// Distribution parameters, in catalogue order
        #[arg(allow_negative_numbers = true)]
        params: Vec<f64>,
    },

    /// Draw variates and print count, mean, variance, min and max
    Summary {
        /// Distribution name (see `variates list`)
        distribution: String,

        /// Distribution parameters, in catalogue order
        #[arg(allow_negative_numbers = true)]
        params: Vec<f64>,
    },

    /// List the available distributions and their parameters
    List,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            seed: cli.seed,
            count: cli.count,
            format: cli.format.clone(),
            log_level: cli.log_level.clone(),
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

fn run(cli: Cli) -> Result<()> {
    let config = build_config(&CliArgs::from(&cli))?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());
    debug!(
        seed = ?config.seed,
        count = config.count,
        format = %config.format,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Sample {
            distribution,
            params,
        } => commands::sample::run(&distribution, &params, &config),
        Commands::Summary {
            distribution,
            params,
        } => commands::summary::run(&distribution, &params, &config),
        Commands::List => commands::list::run(),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

//! Command line interface for Solarbench

use bevy::log::info;
use clap::Parser;
use std::fmt;
use std::path::PathBuf;

use crate::config::SimulationConfig;
use crate::physics::advancers::AdvancerRegistry;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("BUILD_DATE"),
    ")"
);

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Configuration file could not be loaded
    ConfigLoad(String),
    /// Invalid advancer variant name provided
    InvalidVariant(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::ConfigLoad(msg) => write!(f, "Failed to load configuration: {msg}"),
            CliError::InvalidVariant(msg) => write!(f, "Invalid variant: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Solarbench - outer solar system N-body benchmark
///
/// Prints the system's total energy after each outer loop.
#[derive(Parser, Debug)]
#[command(version, long_version = LONG_VERSION, about, long_about = None)]
pub struct Args {
    /// Path to configuration file (TOML format)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of outer loops (overrides config file)
    #[arg(short, long, value_name = "COUNT")]
    pub loops: Option<usize>,

    /// Time steps per outer loop (overrides config file)
    #[arg(short = 'n', long, value_name = "COUNT")]
    pub iterations: Option<usize>,

    /// Body at the center of the system (overrides config file)
    #[arg(short, long, value_name = "BODY")]
    pub reference: Option<String>,

    /// Advancer variant to run (e.g. sequential, deferred)
    #[arg(long, value_name = "NAME")]
    pub variant: Option<String>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// List available advancer variants and exit
    #[arg(long)]
    pub list_variants: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

/// Handles the --list-variants flag by printing available advancers
pub fn handle_list_variants() {
    let registry = AdvancerRegistry::default();
    println!("Available variants:");
    for name in registry.list_available() {
        println!("  - {name}");
    }

    let aliases = registry.list_aliases();
    if !aliases.is_empty() {
        println!("\nAliases:");
        for (alias, target) in aliases {
            println!("  - {alias} -> {target}");
        }
    }
}

/// Loads configuration from file or defaults, then applies command-line overrides
pub fn load_and_apply_config(args: &Args) -> Result<SimulationConfig, CliError> {
    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        SimulationConfig::load(config_path).map_err(|err| {
            CliError::ConfigLoad(format!("{}: {err}", config_path.display()))
        })?
    } else {
        SimulationConfig::load_from_user_config()
    };

    if let Some(loops) = args.loops {
        info!("Overriding loop count to: {loops}");
        config.run.loops = loops;
    }

    if let Some(iterations) = args.iterations {
        info!("Overriding iterations per loop to: {iterations}");
        config.run.iterations = iterations;
    }

    if let Some(reference) = &args.reference {
        info!("Overriding reference body to: {reference}");
        config.run.reference_body = reference.clone();
    }

    if let Some(variant) = &args.variant {
        info!("Overriding advancer variant to: {variant}");
        config.run.advancer = variant.clone();
    }

    // File-provided names are checked too, so a bad config fails here
    AdvancerRegistry::default()
        .create(&config.run.advancer)
        .map_err(CliError::InvalidVariant)?;

    Ok(config)
}

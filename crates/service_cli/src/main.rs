//! simrand CLI - Command Line Operations for the simrand Workspace
//!
//! This is the operational entry point for the simrand sampling library.
//!
//! # Commands
//!
//! - `simrand sample --dist <name>` - Draw from a distribution and summarise
//! - `simrand stream --engine <name>` - Emit a raw engine stream
//! - `simrand scenario --file <file>` - Run a batch of sampling jobs in parallel
//! - `simrand check` - Self-test the engines and samplers
//!
//! # Architecture
//!
//! This crate is the service layer over the core/engines/deviates stack: it
//! owns flag parsing, configuration, and output formatting, and leaves all
//! numerical behaviour to the library crates.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod dist;
mod error;

pub use error::{CliError, Result};

/// simrand sampling toolkit CLI
#[derive(Parser)]
#[command(name = "simrand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "simrand.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw from a distribution and summarise the sample
    Sample(commands::sample::SampleArgs),

    /// Emit a raw engine stream
    Stream(commands::stream::StreamArgs),

    /// Run a scenario file of sampling jobs in parallel
    Scenario(commands::scenario::ScenarioArgs),

    /// Check engines, samplers, and the parallel environment
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialise tracing; --verbose floors the filter at debug.
    let filter = if cli.verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    // Warm the factorial and log-factorial tables before any command runs.
    simrand_core::special::init_tables();

    let config = config::load_or_default(&cli.config)?;
    config.validate()?;

    match cli.command {
        Commands::Sample(args) => commands::sample::run(&args, &config),
        Commands::Stream(args) => commands::stream::run(&args, &config),
        Commands::Scenario(args) => commands::scenario::run(&args, &config),
        Commands::Check => commands::check::run(),
    }
}

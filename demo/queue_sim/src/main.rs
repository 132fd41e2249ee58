//! Queueing Demo CLI
//!
//! Entry point for running the M/M/1 queueing demo.

use std::path::PathBuf;

use anyhow::Result;
use queue_sim::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("queue_sim=info".parse()?))
        .init();

    tracing::info!("M/M/1 queueing demo starting...");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("queue_sim.toml"));
    let config = SimConfig::load_or_default(&path)?;
    config.validate()?;

    let report = run(&config)?;

    println!("========================================");
    println!("M/M/1 queue, {} customers", report.customers);
    println!("========================================");
    println!("  {:<16}{:>10}{:>11}", "metric", "simulated", "analytic");
    println!(
        "  {:<16}{:>10.4}{:>11.4}",
        "utilisation", report.utilisation, report.analytic.utilisation
    );
    println!(
        "  {:<16}{:>10.4}{:>11.4}",
        "mean in system", report.mean_in_system, report.analytic.mean_in_system
    );
    println!(
        "  {:<16}{:>10.4}{:>11.4}",
        "mean sojourn", report.mean_sojourn, report.analytic.mean_sojourn
    );
    println!("  {:<16}{:>10.2}", "horizon", report.horizon);

    tracing::info!("Demo complete");
    Ok(())
}

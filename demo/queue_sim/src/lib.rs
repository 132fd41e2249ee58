//! # M/M/1 Queueing Demo
//!
//! A small queueing simulation that exercises the simrand sampling stack end
//! to end. Interarrival and service times come from two independently seeded
//! [`simrand_deviates::Exponential`] samplers, the queue is played forward
//! through the Lindley recurrence, and the observed time averages are
//! reported next to the closed-form M/M/1 values.
//!
//! ## Features
//!
//! - **Competing clocks**: arrival and service streams derive their seeds
//!   from one master seed through the stateless hash
//! - **Theory check**: utilisation, mean number in system, and mean sojourn
//!   time against `rho`, `rho / (1 - rho)`, and `1 / (mu - lambda)`
//! - **TOML configuration**: rates, customer count, and seed with defaults

pub mod config;
pub mod error;
pub mod sim;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::SimConfig;
    pub use crate::error::SimError;
    pub use crate::sim::{analytic_metrics, run, AnalyticMetrics, QueueReport};
}

//! Simulation configuration management.
//!
//! Loads the queue parameters from a TOML file with per-field defaults. The
//! stability condition `arrival_rate < service_rate` is enforced up front;
//! an unstable queue has no stationary metrics to compare against.

use std::path::Path;

use serde::Deserialize;

use crate::error::SimError;

/// Ceiling on the configured customer count.
pub const MAX_CUSTOMERS: usize = 100_000_000;

/// Queue simulation parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Mean arrival rate (customers per unit time).
    pub arrival_rate: f64,

    /// Mean service rate (customers per unit time).
    pub service_rate: f64,

    /// Number of customers pushed through the queue.
    pub customers: usize,

    /// Master seed; each exponential clock derives its own from it.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arrival_rate: 2.0,
            service_rate: 3.0,
            customers: 100_000,
            seed: 42,
        }
    }
}

impl SimConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| SimError::Parse(e.to_string()))
    }

    /// Load configuration from the given path or return the default config
    pub fn load_or_default(path: &Path) -> Result<Self, SimError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), SimError> {
        let mut errors = Vec::new();

        if !(self.arrival_rate.is_finite() && self.arrival_rate > 0.0) {
            errors.push(format!(
                "arrival_rate must be finite and positive, got {}",
                self.arrival_rate
            ));
        }
        if !(self.service_rate.is_finite() && self.service_rate > 0.0) {
            errors.push(format!(
                "service_rate must be finite and positive, got {}",
                self.service_rate
            ));
        }
        if self.arrival_rate >= self.service_rate {
            errors.push(format!(
                "queue is unstable: arrival_rate {} >= service_rate {}",
                self.arrival_rate, self.service_rate
            ));
        }
        if self.customers == 0 {
            errors.push("customers must be greater than 0".to_string());
        }
        if self.customers > MAX_CUSTOMERS {
            errors.push(format!(
                "customers {} exceeds maximum allowed ({MAX_CUSTOMERS})",
                self.customers
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SimError::Validation(errors))
        }
    }
}

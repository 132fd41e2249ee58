//! Configuration file handling.
//!
//! `simrand.toml` supplies defaults for flags the user leaves off. A
//! missing file is not an error; every field has a built-in default. The
//! environment variables `SIMRAND_SEED` and `SIMRAND_THREADS` override the
//! file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{CliError, Result};

/// Formats accepted by `sample --format` and the config default.
pub const SAMPLE_FORMATS: [&str; 3] = ["table", "csv", "json"];

/// Ceiling on the configured worker count.
pub const MAX_THREADS: usize = 4096;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Defaults applied when flags are omitted.
    pub defaults: Defaults,
    /// Scenario runner settings.
    pub scenario: ScenarioSettings,
}

/// Flag defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Defaults {
    /// Engine seed when `--seed` is omitted.
    pub seed: u64,
    /// Draw count when `-n` is omitted.
    pub count: usize,
    /// Sample output format when `--format` is omitted.
    pub format: String,
}

/// Scenario runner settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioSettings {
    /// Worker threads for scenario jobs; 0 lets rayon size the pool.
    pub threads: usize,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            seed: 42,
            count: 10,
            format: "table".to_string(),
        }
    }
}

impl Default for ScenarioSettings {
    fn default() -> Self {
        Self { threads: 0 }
    }
}

impl CliConfig {
    /// Rejects values no command could act on.
    pub fn validate(&self) -> Result<()> {
        if !SAMPLE_FORMATS.contains(&self.defaults.format.as_str()) {
            return Err(CliError::Config(format!(
                "unknown default format: {}. Supported: table, csv, json",
                self.defaults.format
            )));
        }
        if self.defaults.count == 0 {
            return Err(CliError::Config(
                "default count must be at least 1".to_string(),
            ));
        }
        if self.scenario.threads > MAX_THREADS {
            return Err(CliError::Config(format!(
                "thread count {} exceeds the {MAX_THREADS} ceiling",
                self.scenario.threads
            )));
        }
        Ok(())
    }
}

/// Loads the config file, falling back to defaults when it is absent.
pub fn load_or_default(path: &str) -> Result<CliConfig> {
    let mut config = if Path::new(path).exists() {
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| CliError::Config(format!("{path}: {e}")))?
    } else {
        debug!("no config at {}, using defaults", path);
        CliConfig::default()
    };
    apply_overrides(&mut config, |key| std::env::var(key).ok())?;
    Ok(config)
}

fn apply_overrides(
    config: &mut CliConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<()> {
    if let Some(value) = lookup("SIMRAND_SEED") {
        config.defaults.seed = value
            .parse()
            .map_err(|_| CliError::Config(format!("SIMRAND_SEED is not an integer: {value}")))?;
    }
    if let Some(value) = lookup("SIMRAND_THREADS") {
        config.scenario.threads = value
            .parse()
            .map_err(|_| CliError::Config(format!("SIMRAND_THREADS is not an integer: {value}")))?;
    }
    Ok(())
}

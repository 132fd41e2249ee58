//! CLI error taxonomy.

use thiserror::Error;

/// Result alias used across the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by the `simrand` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file missing from disk.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Flag value or combination the commands cannot act on.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file or environment override rejected.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scenario file rejected.
    #[error("Scenario error: {0}")]
    Scenario(String),

    /// One or more self-test checks failed.
    #[error("Self-test failed: {0}")]
    SelfTest(String),

    /// Sampler construction rejected the parameters.
    #[error("Sampler error: {0}")]
    Sampler(#[from] simrand_deviates::DeviateError),

    /// Underlying I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV writing failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON writing failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

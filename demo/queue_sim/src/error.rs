//! Error types for the queueing demo.

use thiserror::Error;

/// Demo error type
#[derive(Debug, Error)]
pub enum SimError {
    /// IO error reading the config file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error in the config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// Sampler construction error
    #[error("Sampler error: {0}")]
    Sampler(#[from] simrand_deviates::DeviateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_errors() {
        let err = SimError::Validation(vec!["first".to_string(), "second".to_string()]);
        let display = err.to_string();
        assert!(display.contains("first"));
        assert!(display.contains("second"));
    }
}

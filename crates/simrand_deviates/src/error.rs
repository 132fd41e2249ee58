//! Error types for sampler construction.

use thiserror::Error;

/// Parameter validation errors raised by the sampler constructors.
///
/// Constructors validate eagerly so that `dev()` can stay infallible; a
/// sampler that exists always produces finite deviates.
///
/// # Examples
///
/// ```rust
/// use simrand_deviates::{DeviateError, Exponential};
///
/// let err = Exponential::new(-1.0, 42).unwrap_err();
/// assert!(matches!(err, DeviateError::InvalidRate { .. }));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DeviateError {
    /// Rate parameter was non-finite or not strictly positive.
    #[error("invalid rate {value}: must be finite and strictly positive")]
    InvalidRate {
        /// The rejected rate.
        value: f64,
    },

    /// Location parameter was non-finite.
    #[error("invalid location {value}: must be finite")]
    InvalidLocation {
        /// The rejected location.
        value: f64,
    },

    /// Scale parameter was non-finite or not strictly positive.
    #[error("invalid scale {value}: must be finite and strictly positive")]
    InvalidScale {
        /// The rejected scale.
        value: f64,
    },

    /// Shape parameter was non-finite or not strictly positive.
    #[error("invalid shape {value}: must be finite and strictly positive")]
    InvalidShape {
        /// The rejected shape.
        value: f64,
    },

    /// Success probability was outside `[0, 1]` or non-finite.
    #[error("invalid probability {value}: must lie in [0, 1]")]
    InvalidProbability {
        /// The rejected probability.
        value: f64,
    },

    /// Trial count was negative.
    #[error("invalid trial count {value}: must be non-negative")]
    InvalidTrialCount {
        /// The rejected trial count.
        value: i32,
    },

    /// Mean rate was non-finite or negative.
    #[error("invalid mean rate {value}: must be finite and non-negative")]
    InvalidLambda {
        /// The rejected mean rate.
        value: f64,
    },

    /// Mean rate was too large for the 32-bit count surface.
    #[error("mean rate {value} exceeds the supported range (max {max})")]
    LambdaOutOfRange {
        /// The rejected mean rate.
        value: f64,
        /// Largest supported mean rate.
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    // ======================
    // Display formatting
    // ======================

    #[test]
    fn test_error_messages_carry_offending_value() {
        let err = DeviateError::InvalidRate { value: -1.5 };
        assert_eq!(
            err.to_string(),
            "invalid rate -1.5: must be finite and strictly positive"
        );

        let err = DeviateError::InvalidProbability { value: 1.25 };
        assert_eq!(err.to_string(), "invalid probability 1.25: must lie in [0, 1]");

        let err = DeviateError::LambdaOutOfRange {
            value: 3000000000.0,
            max: 2000000000.0,
        };
        assert_eq!(
            err.to_string(),
            "mean rate 3000000000 exceeds the supported range (max 2000000000)"
        );
    }
}

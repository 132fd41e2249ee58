//! Error types for structured error handling.
//!
//! This module provides:
//! - `MathError`: Errors from special-function evaluation

use thiserror::Error;

/// Categorised special-function errors.
///
/// Every validation failure is surfaced eagerly at the call site; there is
/// no internal recovery or retry inside the special functions.
///
/// # Variants
/// - `Domain`: Argument outside the mathematical domain of the function
/// - `Range`: Argument valid mathematically but outside the tabulated or
///   representable range
///
/// # Examples
/// ```
/// use simrand_core::MathError;
///
/// let err = MathError::Domain { function: "ln_gamma", value: -1.0 };
/// assert!(format!("{}", err).contains("ln_gamma"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Argument lies outside the mathematical domain of the function.
    #[error("invalid argument {value} to {function}: outside the mathematical domain")]
    Domain {
        /// Name of the function that rejected the argument
        function: &'static str,
        /// The offending argument value
        value: f64,
    },

    /// Argument is mathematically valid but exceeds the supported range.
    #[error("argument {value} to {function} exceeds the supported range (max {max})")]
    Range {
        /// Name of the function that rejected the argument
        function: &'static str,
        /// The offending argument value
        value: f64,
        /// Largest supported argument
        max: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_display() {
        let err = MathError::Domain {
            function: "factorial",
            value: -3.0,
        };
        assert_eq!(
            format!("{}", err),
            "invalid argument -3 to factorial: outside the mathematical domain"
        );
    }

    #[test]
    fn test_range_display() {
        let err = MathError::Range {
            function: "factorial",
            value: 171.0,
            max: 170.0,
        };
        assert_eq!(
            format!("{}", err),
            "argument 171 to factorial exceeds the supported range (max 170)"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        let a = MathError::Domain {
            function: "ln_gamma",
            value: 0.0,
        };
        let b = MathError::Domain {
            function: "ln_gamma",
            value: 0.0,
        };
        assert_eq!(a, b);
    }
}

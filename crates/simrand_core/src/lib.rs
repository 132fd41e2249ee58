//! # simrand_core: Special-Function Foundation for the Simrand Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! simrand_core is the bottom layer of the workspace, providing:
//! - Numerically stable log-gamma via the Lanczos approximation (`special::gamma`)
//! - Memoised factorial and log-factorial tables (`special::factorial`)
//! - Binomial coefficients and the beta function (`special`)
//! - Error types: `MathError` (`error`)
//!
//! The distribution samplers in `simrand_deviates` consult these functions for
//! their acceptance ratios; the functions are equally usable on their own.
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 depends on no other simrand crate and carries a single external
//! dependency (`thiserror` for the error taxonomy). It builds on stable Rust.
//!
//! ## Table Initialisation
//!
//! The factorial and log-factorial tables are populated exactly once per
//! process behind `std::sync::OnceLock`, so concurrent first use is safe.
//! Call [`special::init_tables`] at startup to pay the population cost
//! eagerly instead of on first use.
//!
//! ## Usage Examples
//!
//! ```rust
//! use simrand_core::special::{binomial_coefficient, factorial, ln_gamma};
//!
//! let lg = ln_gamma(10.0).unwrap();
//! assert!((lg - 12.801827480081469).abs() < 1e-10);
//!
//! assert_eq!(factorial(5).unwrap(), 120.0);
//! assert_eq!(binomial_coefficient(5, 2).unwrap(), 10.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod special;

pub use error::MathError;

//! Numerically stable special functions.
//!
//! The log-gamma function (Lanczos approximation), memoised factorial and
//! log-factorial tables, binomial coefficients, and the beta function.
//!
//! Two surfaces are provided for the hot-loop functions:
//! - checked entry points returning [`Result`](std::result::Result) with a
//!   [`MathError`](crate::MathError), used at API boundaries;
//! - infallible `*_raw` variants with a documented positive-argument
//!   contract, used inside sampling loops whose arguments are positive by
//!   construction.

mod factorial;
mod gamma;

pub use factorial::{binomial_coefficient, factorial, init_tables, ln_factorial, ln_factorial_raw};
pub use gamma::{beta, ln_gamma, ln_gamma_raw};

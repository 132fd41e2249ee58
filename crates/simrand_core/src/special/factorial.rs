//! Memoised factorial tables and binomial coefficients.

use std::sync::OnceLock;

use crate::error::MathError;
use crate::special::gamma::ln_gamma_raw;

/// `170!` is the largest factorial representable as a finite `f64`.
const MAX_FACTORIAL_ARG: i32 = 170;

/// Number of tabulated log-factorials; larger arguments fall back to
/// `ln_gamma(n + 1)`.
const LN_FACTORIAL_TABLE_LEN: usize = 2000;

static FACTORIALS: OnceLock<[f64; MAX_FACTORIAL_ARG as usize + 1]> = OnceLock::new();
static LN_FACTORIALS: OnceLock<Vec<f64>> = OnceLock::new();

fn factorials() -> &'static [f64; MAX_FACTORIAL_ARG as usize + 1] {
    FACTORIALS.get_or_init(|| {
        let mut table = [1.0_f64; MAX_FACTORIAL_ARG as usize + 1];
        for i in 1..table.len() {
            table[i] = i as f64 * table[i - 1];
        }
        table
    })
}

fn ln_factorials() -> &'static [f64] {
    LN_FACTORIALS.get_or_init(|| {
        (0..LN_FACTORIAL_TABLE_LEN)
            .map(|i| ln_gamma_raw(i as f64 + 1.0))
            .collect()
    })
}

/// Populates both memoised tables immediately.
///
/// The tables are otherwise filled on first use behind a one-time
/// initialisation guard; calling this at startup moves that cost to a
/// point of the caller's choosing. Idempotent and safe to call from any
/// thread.
pub fn init_tables() {
    let _ = factorials();
    let _ = ln_factorials();
}

/// Computes `n!` as a double.
///
/// Backed by a 171-entry table populated once per process.
///
/// # Errors
///
/// - [`MathError::Domain`] when `n < 0`
/// - [`MathError::Range`] when `n > 170` (the result would overflow `f64`)
///
/// # Examples
///
/// ```rust
/// use simrand_core::special::factorial;
///
/// assert_eq!(factorial(0).unwrap(), 1.0);
/// assert_eq!(factorial(5).unwrap(), 120.0);
/// assert!(factorial(171).is_err());
/// ```
pub fn factorial(n: i32) -> Result<f64, MathError> {
    if n < 0 {
        return Err(MathError::Domain {
            function: "factorial",
            value: n as f64,
        });
    }
    if n > MAX_FACTORIAL_ARG {
        return Err(MathError::Range {
            function: "factorial",
            value: n as f64,
            max: MAX_FACTORIAL_ARG as f64,
        });
    }
    Ok(factorials()[n as usize])
}

/// Computes `ln(n!)`.
///
/// The first 2000 values come from a table populated once per process;
/// larger arguments fall back to `ln_gamma(n + 1)`.
///
/// # Errors
///
/// Returns [`MathError::Domain`] when `n < 0`.
///
/// # Examples
///
/// ```rust
/// use simrand_core::special::ln_factorial;
///
/// let lf = ln_factorial(3).unwrap();
/// assert!((lf - 6.0_f64.ln()).abs() < 1e-12);
/// ```
pub fn ln_factorial(n: i32) -> Result<f64, MathError> {
    if n < 0 {
        return Err(MathError::Domain {
            function: "ln_factorial",
            value: n as f64,
        });
    }
    Ok(ln_factorial_raw(n))
}

/// Infallible `ln(n!)` for arguments non-negative by construction.
///
/// # Panics
///
/// Debug builds panic when `n < 0`.
#[inline]
pub fn ln_factorial_raw(n: i32) -> f64 {
    debug_assert!(n >= 0, "ln_factorial_raw requires n >= 0, got {n}");
    let idx = n as usize;
    if idx < LN_FACTORIAL_TABLE_LEN {
        ln_factorials()[idx]
    } else {
        ln_gamma_raw(n as f64 + 1.0)
    }
}

/// Computes the binomial coefficient `C(n, k)` as a double.
///
/// Uses the exact factorial ratio (rounded to the nearest integer) while
/// `n < 171`, and a log-domain evaluation beyond. The result is exact as
/// long as it is below about `1e15`; far beyond that it carries the
/// rounding error of the log-domain path.
///
/// # Errors
///
/// Returns [`MathError::Domain`] when `n < 0`, `k < 0`, or `k > n`.
///
/// # Examples
///
/// ```rust
/// use simrand_core::special::binomial_coefficient;
///
/// assert_eq!(binomial_coefficient(5, 2).unwrap(), 10.0);
/// assert!(binomial_coefficient(3, 5).is_err());
/// ```
pub fn binomial_coefficient(n: i32, k: i32) -> Result<f64, MathError> {
    if n < 0 || k < 0 || k > n {
        return Err(MathError::Domain {
            function: "binomial_coefficient",
            value: if k > n { k as f64 } else { n.min(k) as f64 },
        });
    }
    if n <= MAX_FACTORIAL_ARG {
        let table = factorials();
        let ratio = table[n as usize] / (table[k as usize] * table[(n - k) as usize]);
        Ok((0.5 + ratio).floor())
    } else {
        let ln = ln_factorial_raw(n) - ln_factorial_raw(k) - ln_factorial_raw(n - k);
        Ok((0.5 + ln.exp()).floor())
    }
}

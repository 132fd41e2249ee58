//! Poisson deviates by the product method and ratio-of-uniforms rejection.

use simrand_core::special::ln_gamma_raw;
use simrand_engines::Xorshift64Engine;

use crate::error::DeviateError;
use crate::MAX_REJECTION_ROUNDS;

/// Largest accepted mean rate.
///
/// Deviates are returned as `i32`, and the rejection step positions
/// candidates within a few thousand standard deviations of the mean, so
/// rates beyond this limit could overflow the count.
pub const MAX_LAMBDA: f64 = 2_000_000_000.0;

const LOG_FACTORIAL_CACHE_LEN: usize = 1024;

/// Sampler for the Poisson distribution with mean rate `lambda`.
///
/// Below a rate of 5 the sampler multiplies uniforms until the product
/// drops under `exp(-lambda)`, which costs about `lambda + 1` uniforms per
/// deviate. From 5 upward it switches to ratio-of-uniforms rejection with
/// quadratic squeezes, costing a near-constant two uniforms per candidate
/// regardless of rate. Log-factorials for the acceptance ratio are cached
/// the first time each count is seen.
///
/// The rate can be retuned between draws with [`dev_with`](Self::dev_with);
/// the derived quantities are refreshed lazily when the rate changes, so a
/// sweep over many rates reuses one sampler and one engine stream.
///
/// A rate of zero is valid and every draw returns 0.
///
/// # Algorithm Reference
///
/// - Press, W. H., Teukolsky, S. A., Vetterling, W. T. & Flannery, B. P.
///   (2007). *Numerical Recipes*, 3rd ed., §7.3.
/// - Stadlober, E. (1990). "The ratio of uniforms approach for generating
///   discrete random variates". Journal of Computational and Applied
///   Mathematics 31(1).
///
/// # Examples
///
/// ```rust
/// use simrand_deviates::Poisson;
///
/// let mut sampler = Poisson::new(3.0, 42)?;
/// assert!(sampler.dev() >= 0);
/// # Ok::<(), simrand_deviates::DeviateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Poisson {
    lambda: f64,
    last_lambda: Option<f64>,
    exp_neg_lambda: f64,
    sqrt_lambda: f64,
    ln_lambda: f64,
    log_factorials: Vec<f64>,
    engine: Xorshift64Engine,
}

impl Poisson {
    /// Creates a sampler with the given mean rate.
    ///
    /// # Errors
    ///
    /// - [`DeviateError::InvalidLambda`] unless `lambda` is finite and
    ///   non-negative
    /// - [`DeviateError::LambdaOutOfRange`] when `lambda` exceeds
    ///   [`MAX_LAMBDA`]
    pub fn new(lambda: f64, seed: u64) -> Result<Self, DeviateError> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(DeviateError::InvalidLambda { value: lambda });
        }
        if lambda > MAX_LAMBDA {
            return Err(DeviateError::LambdaOutOfRange {
                value: lambda,
                max: MAX_LAMBDA,
            });
        }
        Ok(Self {
            lambda,
            last_lambda: None,
            exp_neg_lambda: 0.0,
            sqrt_lambda: 0.0,
            ln_lambda: 0.0,
            // Sentinel entries; filled on first use of each count.
            log_factorials: vec![-1.0; LOG_FACTORIAL_CACHE_LEN],
            engine: Xorshift64Engine::new(seed),
        })
    }

    /// Returns the next Poisson deviate.
    ///
    /// # Panics
    ///
    /// Panics if the rejection step fails to accept a candidate after an
    /// astronomically improbable number of rounds, which turns an engine
    /// stuck in a degenerate state into a diagnostic rather than a hang.
    pub fn dev(&mut self) -> i32 {
        let k = if self.lambda < 5.0 {
            self.dev_product()
        } else {
            self.dev_rejection()
        };
        self.last_lambda = Some(self.lambda);
        k
    }

    /// Retunes the mean rate, then draws.
    ///
    /// The new rate must satisfy the same bounds as [`new`](Self::new);
    /// this is checked by a debug assertion only, as retuning sits inside
    /// callers' hot loops.
    pub fn dev_with(&mut self, lambda: f64) -> i32 {
        debug_assert!(
            lambda.is_finite() && (0.0..=MAX_LAMBDA).contains(&lambda),
            "invalid rate {lambda} passed to dev_with"
        );
        self.lambda = lambda;
        self.dev()
    }

    /// The current mean rate.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    // Product of uniforms; the count of factors needed to fall below
    // exp(-lambda) is Poisson distributed.
    fn dev_product(&mut self) -> i32 {
        if self.last_lambda != Some(self.lambda) {
            self.exp_neg_lambda = (-self.lambda).exp();
        }
        let mut k: i32 = -1;
        let mut t = 1.0;
        loop {
            k += 1;
            t *= self.engine.next_double();
            if t <= self.exp_neg_lambda {
                return k;
            }
        }
    }

    fn dev_rejection(&mut self) -> i32 {
        if self.last_lambda != Some(self.lambda) {
            self.sqrt_lambda = self.lambda.sqrt();
            self.ln_lambda = self.lambda.ln();
        }
        for _ in 0..MAX_REJECTION_ROUNDS {
            let u = 0.64 * self.engine.next_double();
            let v = -0.68 + 1.28 * self.engine.next_double();
            let v2 = v * v;
            // Outer squeeze: discard before the floor and the exp.
            if self.lambda > 13.5 {
                if v >= 0.0 {
                    if v2 > 6.5 * u * (0.64 - u) * (u + 0.2) {
                        continue;
                    }
                } else if v2 > 9.6 * u * (0.66 - u) * (u + 0.07) {
                    continue;
                }
            }
            let k = (self.sqrt_lambda * (v / u) + self.lambda + 0.5).floor() as i32;
            if k < 0 {
                continue;
            }
            let u2 = u * u;
            // Inner squeeze: accept before the exp.
            if self.lambda > 13.5 {
                if v >= 0.0 {
                    if v2 < 15.2 * u2 * (0.61 - u) * (0.8 - u) {
                        return k;
                    }
                } else if v2 < 6.76 * u2 * (0.62 - u) * (1.4 - u) {
                    return k;
                }
            }
            let lfac = self.cached_ln_factorial(k);
            let p = self.sqrt_lambda * (-self.lambda + k as f64 * self.ln_lambda - lfac).exp();
            if u2 < p {
                return k;
            }
        }
        panic!("poisson sampler rejected {MAX_REJECTION_ROUNDS} candidates in a row");
    }

    fn cached_ln_factorial(&mut self, k: i32) -> f64 {
        let idx = k as usize;
        if idx < LOG_FACTORIAL_CACHE_LEN {
            if self.log_factorials[idx] < 0.0 {
                self.log_factorials[idx] = ln_gamma_raw(k as f64 + 1.0);
            }
            self.log_factorials[idx]
        } else {
            ln_gamma_raw(k as f64 + 1.0)
        }
    }
}

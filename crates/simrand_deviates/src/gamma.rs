//! Gamma deviates by the Marsaglia-Tsang squeeze method.

use crate::error::DeviateError;
use crate::normal::Normal;
use crate::MAX_REJECTION_ROUNDS;

/// Sampler for the gamma distribution with shape `alpha` and rate `beta`.
///
/// A candidate is the cube of a shifted normal deviate, accepted by a
/// quartic squeeze that evaluates a logarithm only near the boundary.
/// Acceptance exceeds 95% at every shape, and shapes below one are handled
/// by sampling at `alpha + 1` and shrinking the result by a uniform raised
/// to `1/alpha`.
///
/// The mean is `alpha / beta` and the variance `alpha / beta^2`; `beta` is
/// a rate, so doubling it halves the scale of the deviates.
///
/// # Algorithm Reference
///
/// - Marsaglia, G. and Tsang, W. W. (2000). "A Simple Method for
///   Generating Gamma Variables". ACM Transactions on Mathematical
///   Software 26(3).
///
/// # Examples
///
/// ```rust
/// use simrand_deviates::Gamma;
///
/// let mut sampler = Gamma::new(2.5, 1.5, 5)?;
/// assert!(sampler.dev() > 0.0);
/// # Ok::<(), simrand_deviates::DeviateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Gamma {
    shape: f64,
    rate: f64,
    boosted_shape: f64,
    a1: f64,
    a2: f64,
    normal: Normal,
}

impl Gamma {
    /// Creates a sampler with the given shape and rate.
    ///
    /// # Errors
    ///
    /// - [`DeviateError::InvalidShape`] unless `shape` is finite and
    ///   strictly positive
    /// - [`DeviateError::InvalidRate`] unless `rate` is finite and
    ///   strictly positive
    pub fn new(shape: f64, rate: f64, seed: u64) -> Result<Self, DeviateError> {
        if !shape.is_finite() || shape <= 0.0 {
            return Err(DeviateError::InvalidShape { value: shape });
        }
        if !rate.is_finite() || rate <= 0.0 {
            return Err(DeviateError::InvalidRate { value: rate });
        }
        let boosted_shape = if shape < 1.0 { shape + 1.0 } else { shape };
        let a1 = boosted_shape - 1.0 / 3.0;
        let a2 = 1.0 / (9.0 * a1).sqrt();
        Ok(Self {
            shape,
            rate,
            boosted_shape,
            a1,
            a2,
            normal: Normal::standard(seed),
        })
    }

    /// Returns the next gamma deviate.
    ///
    /// # Panics
    ///
    /// Panics if the squeeze rejects more candidates in a row than any
    /// well-seeded engine can produce. The bound exists to turn an engine
    /// stuck in a degenerate state into a diagnostic rather than a hang.
    pub fn dev(&mut self) -> f64 {
        for _ in 0..MAX_REJECTION_ROUNDS {
            let (x, v) = loop {
                let x = self.normal.dev();
                let v = 1.0 + self.a2 * x;
                if v > 0.0 {
                    break (x, v);
                }
            };
            let v = v * v * v;
            let u = self.normal.next_uniform();
            let x2 = x * x;
            if u <= 1.0 - 0.331 * x2 * x2
                || u.ln() <= 0.5 * x2 + self.a1 * (1.0 - v + v.ln())
            {
                if self.boosted_shape == self.shape {
                    return self.a1 * v / self.rate;
                }
                let u = loop {
                    let u = self.normal.next_uniform();
                    if u != 0.0 {
                        break u;
                    }
                };
                return u.powf(1.0 / self.shape) * self.a1 * v / self.rate;
            }
        }
        panic!("gamma sampler rejected {MAX_REJECTION_ROUNDS} candidates in a row");
    }

    /// The shape parameter.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// The rate parameter.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

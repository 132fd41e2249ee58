//! Exponential deviates.

use simrand_engines::Xorshift64Engine;

use crate::error::DeviateError;

/// Sampler for the exponential distribution `p(x) = rate * exp(-rate * x)`.
///
/// Inverse transform: `-ln(U) / rate` with `U` uniform on `(0, 1)`. A zero
/// uniform draw is resampled so the logarithm never sees it.
///
/// # Examples
///
/// ```rust
/// use simrand_deviates::Exponential;
///
/// let mut sampler = Exponential::new(1.5, 42)?;
/// let x = sampler.dev();
/// assert!(x >= 0.0 && x.is_finite());
/// # Ok::<(), simrand_deviates::DeviateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Exponential {
    rate: f64,
    engine: Xorshift64Engine,
}

impl Exponential {
    /// Creates a sampler with the given rate, drawing from an engine seeded
    /// with `seed`.
    ///
    /// # Errors
    ///
    /// Returns [`DeviateError::InvalidRate`] unless `rate` is finite and
    /// strictly positive.
    pub fn new(rate: f64, seed: u64) -> Result<Self, DeviateError> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(DeviateError::InvalidRate { value: rate });
        }
        Ok(Self {
            rate,
            engine: Xorshift64Engine::new(seed),
        })
    }

    /// Returns the next exponential deviate.
    #[inline]
    pub fn dev(&mut self) -> f64 {
        let mut u = self.engine.next_double();
        while u == 0.0 {
            u = self.engine.next_double();
        }
        -u.ln() / self.rate
    }

    /// The rate parameter.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }
}

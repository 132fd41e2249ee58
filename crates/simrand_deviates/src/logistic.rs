//! Logistic deviates.

use simrand_engines::Xorshift64Engine;

use crate::error::DeviateError;

/// `sqrt(3)/pi`, scaling `sigma` so it is the standard deviation rather
/// than the conventional logistic scale parameter.
const SCALE_FACTOR: f64 = 0.551328895421792050;

/// Sampler for the logistic distribution with mean `mu` and standard
/// deviation `sigma`.
///
/// Inverse transform: `mu + sqrt(3)/pi * sigma * ln(u / (1 - u))`. Draws
/// with `u * (1 - u) == 0` are resampled, closing both endpoints at once.
///
/// # Examples
///
/// ```rust
/// use simrand_deviates::Logistic;
///
/// let mut sampler = Logistic::new(2.0, 3.0, 11)?;
/// assert!(sampler.dev().is_finite());
/// # Ok::<(), simrand_deviates::DeviateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Logistic {
    mu: f64,
    sigma: f64,
    engine: Xorshift64Engine,
}

impl Logistic {
    /// Creates a sampler with the given mean and standard deviation.
    ///
    /// # Errors
    ///
    /// - [`DeviateError::InvalidLocation`] when `mu` is non-finite
    /// - [`DeviateError::InvalidScale`] unless `sigma` is finite and
    ///   strictly positive
    pub fn new(mu: f64, sigma: f64, seed: u64) -> Result<Self, DeviateError> {
        if !mu.is_finite() {
            return Err(DeviateError::InvalidLocation { value: mu });
        }
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(DeviateError::InvalidScale { value: sigma });
        }
        Ok(Self {
            mu,
            sigma,
            engine: Xorshift64Engine::new(seed),
        })
    }

    /// Returns the next logistic deviate.
    #[inline]
    pub fn dev(&mut self) -> f64 {
        let mut u = self.engine.next_double();
        while u * (1.0 - u) == 0.0 {
            u = self.engine.next_double();
        }
        self.mu + SCALE_FACTOR * self.sigma * (u / (1.0 - u)).ln()
    }

    /// The mean.
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// The standard deviation.
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

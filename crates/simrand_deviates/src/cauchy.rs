//! Cauchy deviates by the rejection form of the tangent method.

use simrand_engines::Xorshift64Engine;

use crate::error::DeviateError;

/// Sampler for the Cauchy distribution with location `mu` and scale `sigma`.
///
/// A point is drawn uniformly from the upper half-disc and the ratio of its
/// coordinates is the tangent of a uniform angle, so no trigonometric call
/// is needed. The distribution has no mean or variance; `mu` is the median
/// and `sigma` the half-width at half-maximum.
///
/// # Examples
///
/// ```rust
/// use simrand_deviates::Cauchy;
///
/// let mut sampler = Cauchy::new(0.0, 1.0, 3)?;
/// assert!(sampler.dev().is_finite());
/// # Ok::<(), simrand_deviates::DeviateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Cauchy {
    mu: f64,
    sigma: f64,
    engine: Xorshift64Engine,
}

impl Cauchy {
    /// Creates a sampler with the given location and scale.
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

    /// Returns the next Cauchy deviate.
    ///
    /// A zero denominator is rejected along with points outside the disc,
    /// so the heavy tails come out arbitrarily long but never infinite.
    pub fn dev(&mut self) -> f64 {
        loop {
            let v1 = 2.0 * self.engine.next_double() - 1.0;
            let v2 = self.engine.next_double();
            if v1 * v1 + v2 * v2 >= 1.0 || v2 == 0.0 {
                continue;
            }
            return self.mu + self.sigma * v1 / v2;
        }
    }

    /// The location (median).
    #[inline]
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// The scale (half-width at half-maximum).
    #[inline]
    pub fn sigma(&self) -> f64 {
        self.sigma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ======================
    // Construction
    // ======================

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            Cauchy::new(f64::NAN, 1.0, 1),
            Err(DeviateError::InvalidLocation { .. })
        ));
        assert!(matches!(
            Cauchy::new(0.0, 0.0, 1),
            Err(DeviateError::InvalidScale { .. })
        ));
        assert!(Cauchy::new(0.0, -1.0, 1).is_err());
        assert!(Cauchy::new(0.0, f64::INFINITY, 1).is_err());
    }

    // ======================
    // Sampling
    // ======================

    #[test]
    fn test_deviates_are_finite() {
        let mut sampler = Cauchy::new(0.0, 1.0, 3).unwrap();
        for _ in 0..10_000 {
            assert!(sampler.dev().is_finite());
        }
    }

    #[test]
    fn test_same_seed_reproduces_stream() {
        let mut a = Cauchy::new(2.0, 0.5, 19).unwrap();
        let mut b = Cauchy::new(2.0, 0.5, 19).unwrap();
        for _ in 0..1_000 {
            assert_eq!(a.dev(), b.dev());
        }
    }

    #[test]
    fn test_location_is_the_median() {
        let mut sampler = Cauchy::new(0.0, 1.0, 3).unwrap();
        let above = (0..10_000).filter(|_| sampler.dev() > 0.0).count();
        let fraction = above as f64 / 10_000.0;
        assert!((fraction - 0.5).abs() < 0.025, "fraction above: {fraction}");
    }

    #[test]
    fn test_location_shifts_deviates_exactly() {
        let mut centred = Cauchy::new(0.0, 1.0, 8).unwrap();
        let mut shifted = Cauchy::new(-3.0, 1.0, 8).unwrap();
        for _ in 0..1_000 {
            assert_eq!(shifted.dev(), -3.0 + centred.dev());
        }
    }
}

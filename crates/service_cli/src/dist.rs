//! Distribution specification shared by `sample` and `scenario`.
//!
//! The same parameter set arrives either as command-line flags or as keys
//! of a scenario job table, so it is parsed into one struct and resolved
//! into a sampler in one place. Parameters a distribution does not take
//! are ignored, mirroring how unused flags behave.

use serde::{Deserialize, Serialize};
use simrand_deviates::{
    Binomial, Cauchy, Exponential, Gamma, Logistic, Normal, NormalBoxMuller, Poisson,
};

use crate::{CliError, Result};

/// Distribution names accepted by `--dist` and scenario jobs.
pub const DIST_NAMES: [&str; 8] = [
    "exponential",
    "logistic",
    "normal",
    "normal-bm",
    "cauchy",
    "gamma",
    "poisson",
    "binomial",
];

/// A distribution name plus whichever parameters it takes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistSpec {
    /// Distribution name.
    pub dist: String,
    /// Rate for exponential and gamma, mean rate for poisson.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    /// Location for logistic, normal, normal-bm and cauchy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mu: Option<f64>,
    /// Scale for logistic, normal, normal-bm and cauchy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
    /// Shape for gamma.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<f64>,
    /// Trial count for binomial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trials: Option<i32>,
    /// Success probability for binomial.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prob: Option<f64>,
}

impl DistSpec {
    /// Resolves the spec into a sampler seeded with `seed`.
    pub fn build(&self, seed: u64) -> Result<AnySampler> {
        let mu = self.mu.unwrap_or(0.0);
        let sigma = self.sigma.unwrap_or(1.0);
        let sampler = match self.dist.as_str() {
            "exponential" => {
                AnySampler::Exponential(Exponential::new(self.rate.unwrap_or(1.0), seed)?)
            }
            "logistic" => AnySampler::Logistic(Logistic::new(mu, sigma, seed)?),
            "normal" => AnySampler::Normal(Normal::new(mu, sigma, seed)?),
            "normal-bm" => AnySampler::NormalBm(NormalBoxMuller::new(mu, sigma, seed)?),
            "cauchy" => AnySampler::Cauchy(Cauchy::new(mu, sigma, seed)?),
            "gamma" => {
                let shape = self
                    .shape
                    .ok_or_else(|| CliError::InvalidArgument("gamma requires --shape".to_string()))?;
                AnySampler::Gamma(Gamma::new(shape, self.rate.unwrap_or(1.0), seed)?)
            }
            "poisson" => {
                let rate = self
                    .rate
                    .ok_or_else(|| CliError::InvalidArgument("poisson requires --rate".to_string()))?;
                AnySampler::Poisson(Poisson::new(rate, seed)?)
            }
            "binomial" => {
                let trials = self.trials.ok_or_else(|| {
                    CliError::InvalidArgument("binomial requires --trials".to_string())
                })?;
                let prob = self.prob.ok_or_else(|| {
                    CliError::InvalidArgument("binomial requires --prob".to_string())
                })?;
                AnySampler::Binomial(Binomial::new(trials, prob, seed)?)
            }
            other => {
                return Err(CliError::InvalidArgument(format!(
                    "Unknown distribution: {other}. Supported: {}",
                    DIST_NAMES.join(", ")
                )))
            }
        };
        Ok(sampler)
    }
}

/// A sampler of any supported distribution, drawing as `f64`.
#[derive(Debug, Clone)]
pub enum AnySampler {
    /// Exponential deviates.
    Exponential(Exponential),
    /// Logistic deviates.
    Logistic(Logistic),
    /// Normal deviates, ratio-of-uniforms method.
    Normal(Normal),
    /// Normal deviates, polar Box-Muller method.
    NormalBm(NormalBoxMuller),
    /// Cauchy deviates.
    Cauchy(Cauchy),
    /// Gamma deviates.
    Gamma(Gamma),
    /// Poisson counts.
    Poisson(Poisson),
    /// Binomial counts.
    Binomial(Binomial),
}

impl AnySampler {
    /// Draws the next deviate; discrete counts are widened to `f64`.
    pub fn dev(&mut self) -> f64 {
        match self {
            AnySampler::Exponential(s) => s.dev(),
            AnySampler::Logistic(s) => s.dev(),
            AnySampler::Normal(s) => s.dev(),
            AnySampler::NormalBm(s) => s.dev(),
            AnySampler::Cauchy(s) => s.dev(),
            AnySampler::Gamma(s) => s.dev(),
            AnySampler::Poisson(s) => f64::from(s.dev()),
            AnySampler::Binomial(s) => f64::from(s.dev()),
        }
    }

    /// Whether draws are integer counts.
    pub fn is_discrete(&self) -> bool {
        matches!(self, AnySampler::Poisson(_) | AnySampler::Binomial(_))
    }
}

/// Moment summary of a batch of draws.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of draws.
    pub count: usize,
    /// Sample mean.
    pub mean: f64,
    /// Unbiased sample variance; zero for fewer than two draws.
    pub variance: f64,
    /// Smallest draw.
    pub min: f64,
    /// Largest draw.
    pub max: f64,
}

/// Summarises a non-empty batch of draws.
pub fn summarise(values: &[f64]) -> Summary {
    let count = values.len();
    let n = count as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = if count < 2 {
        0.0
    } else {
        values.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / (n - 1.0)
    };
    let (mut min, mut max) = (f64::INFINITY, f64::NEG_INFINITY);
    for &x in values {
        min = min.min(x);
        max = max.max(x);
    }
    Summary {
        count,
        mean,
        variance,
        min,
        max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(dist: &str) -> DistSpec {
        DistSpec {
            dist: dist.to_string(),
            rate: None,
            mu: None,
            sigma: None,
            shape: None,
            trials: None,
            prob: None,
        }
    }

    // ======================
    // Spec resolution
    // ======================

    #[test]
    fn test_every_supported_name_resolves() {
        for name in DIST_NAMES {
            let mut spec = bare(name);
            spec.rate = Some(2.0);
            spec.shape = Some(1.5);
            spec.trials = Some(20);
            spec.prob = Some(0.25);
            assert!(spec.build(1).is_ok(), "{name} failed to build");
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = bare("weibull").build(1).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_missing_required_parameters() {
        assert!(bare("gamma").build(1).is_err());
        assert!(bare("poisson").build(1).is_err());
        assert!(bare("binomial").build(1).is_err());
    }

    #[test]
    fn test_invalid_parameter_maps_to_sampler_error() {
        let mut spec = bare("exponential");
        spec.rate = Some(-1.0);
        assert!(matches!(spec.build(1), Err(CliError::Sampler(_))));
    }

    #[test]
    fn test_deterministic_across_builds() {
        let mut spec = bare("normal");
        spec.mu = Some(1.0);
        let mut a = spec.build(9).unwrap();
        let mut b = spec.build(9).unwrap();
        for _ in 0..100 {
            assert_eq!(a.dev(), b.dev());
        }
    }

    #[test]
    fn test_discrete_classification() {
        let mut poisson = bare("poisson");
        poisson.rate = Some(4.0);
        assert!(poisson.build(1).unwrap().is_discrete());
        assert!(!bare("cauchy").build(1).unwrap().is_discrete());
    }

    // ======================
    // Summaries
    // ======================

    #[test]
    fn test_summary_of_known_values() {
        let summary = summarise(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.mean, 2.5);
        assert!((summary.variance - 5.0 / 3.0).abs() < 1e-12);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 4.0);
    }

    #[test]
    fn test_single_value_has_zero_variance() {
        let summary = summarise(&[7.0]);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.min, 7.0);
        assert_eq!(summary.max, 7.0);
    }
}

//! Binomial deviates across three regimes keyed to trial count and mean.

use simrand_core::special::ln_gamma_raw;
use simrand_engines::Xorshift64Engine;

use crate::error::DeviateError;
use crate::MAX_REJECTION_ROUNDS;

const BIT_PARALLEL_MAX_TRIALS: i32 = 64;
const CDF_MAX_MEAN: f64 = 30.0;
const BIT_PLANES: usize = 5;
const CDF_LEN: usize = 64;
const EAGER_TABLE_MAX_TRIALS: i32 = 1024;

/// Precomputed state for the rejection regime.
#[derive(Debug, Clone)]
struct RejectionState {
    mean: f64,
    ln_n_factorial: f64,
    ln_p: f64,
    ln_q: f64,
    std_dev: f64,
    /// Eager log-factorial table for `0..=n`, absent for large `n`.
    ln_factorials: Option<Vec<f64>>,
}

#[derive(Debug, Clone)]
enum Regime {
    /// Up to 64 trials: all trials in parallel across the bits of a word.
    BitParallel {
        bit_planes: [bool; BIT_PLANES],
        tail_probability: f64,
    },
    /// Small mean: direct inversion of the cumulative distribution.
    CdfLookup { cdf: [f64; CDF_LEN] },
    /// Large mean: ratio-of-uniforms rejection with quadratic squeezes.
    Rejection(RejectionState),
}

/// Sampler for the binomial distribution with `n` trials of probability `p`.
///
/// The constructor folds `p` above one half down to `1 - p` and reflects
/// each deviate back, then fixes one of three strategies for the life of
/// the sampler:
///
/// - `n <= 64`: every trial occupies one bit of a 64-bit word. Five words
///   of engine output resolve each trial against the leading binary digits
///   of `p`; only trials still undecided after that (about one in 32) pay
///   for an individual uniform.
/// - `n > 64` with mean below 30: a 64-entry cumulative table is built once
///   and each deviate is one uniform plus a binary search.
/// - otherwise: ratio-of-uniforms rejection in the same shape as the
///   Poisson sampler, with log-factorials taken from an eager table when
///   `n < 1024`.
///
/// # Algorithm Reference
///
/// - Press, W. H., Teukolsky, S. A., Vetterling, W. T. & Flannery, B. P.
///   (2007). *Numerical Recipes*, 3rd ed., §7.3.
///
/// # Examples
///
/// ```rust
/// use simrand_deviates::Binomial;
///
/// let mut sampler = Binomial::new(50, 0.3, 42)?;
/// let k = sampler.dev();
/// assert!((0..=50).contains(&k));
/// # Ok::<(), simrand_deviates::DeviateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Binomial {
    n: i32,
    p: f64,
    folded_p: f64,
    regime: Regime,
    engine: Xorshift64Engine,
}

impl Binomial {
    /// Creates a sampler for `n` trials of probability `p`.
    ///
    /// Both endpoints of `p` are valid: a zero probability always draws 0
    /// and a unit probability always draws `n`.
    ///
    /// # Errors
    ///
    /// - [`DeviateError::InvalidTrialCount`] when `n` is negative
    /// - [`DeviateError::InvalidProbability`] unless `p` lies in `[0, 1]`
    pub fn new(n: i32, p: f64, seed: u64) -> Result<Self, DeviateError> {
        if n < 0 {
            return Err(DeviateError::InvalidTrialCount { value: n });
        }
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(DeviateError::InvalidProbability { value: p });
        }
        let folded_p = if p <= 0.5 { p } else { 1.0 - p };
        let nf = n as f64;
        let regime = if n <= BIT_PARALLEL_MAX_TRIALS {
            let mut pb = folded_p;
            let mut bit_planes = [false; BIT_PLANES];
            for bit in &mut bit_planes {
                pb *= 2.0;
                *bit = ((pb as i32) & 1) == 1;
            }
            pb -= pb.floor();
            Regime::BitParallel {
                bit_planes,
                tail_probability: pb,
            }
        } else if nf * folded_p < CDF_MAX_MEAN {
            let ln_n_factorial = ln_gamma_raw(nf + 1.0);
            let ln_p = folded_p.ln();
            let ln_q = (1.0 - folded_p).ln();
            let mut cdf = [0.0; CDF_LEN];
            cdf[0] = (nf * ln_q).exp();
            for j in 1..CDF_LEN {
                let jf = j as f64;
                cdf[j] = cdf[j - 1]
                    + (ln_n_factorial - ln_gamma_raw(jf + 1.0) - ln_gamma_raw(nf - jf + 1.0)
                        + jf * ln_p
                        + (nf - jf) * ln_q)
                        .exp();
            }
            Regime::CdfLookup { cdf }
        } else {
            let mean = nf * folded_p;
            let ln_factorials = (n < EAGER_TABLE_MAX_TRIALS)
                .then(|| (0..=n).map(|j| ln_gamma_raw(j as f64 + 1.0)).collect());
            Regime::Rejection(RejectionState {
                mean,
                ln_n_factorial: ln_gamma_raw(nf + 1.0),
                ln_p: folded_p.ln(),
                ln_q: (1.0 - folded_p).ln(),
                std_dev: (mean * (1.0 - folded_p)).sqrt(),
                ln_factorials,
            })
        };
        Ok(Self {
            n,
            p,
            folded_p,
            regime,
            engine: Xorshift64Engine::new(seed),
        })
    }

    /// Returns the next binomial deviate, in `0..=n`.
    ///
    /// # Panics
    ///
    /// Panics if the rejection regime fails to accept a candidate after an
    /// astronomically improbable number of rounds, which turns an engine
    /// stuck in a degenerate state into a diagnostic rather than a hang.
    pub fn dev(&mut self) -> i32 {
        let raw = match &self.regime {
            Regime::BitParallel {
                bit_planes,
                tail_probability,
            } => Self::dev_bit_parallel(&mut self.engine, self.n, bit_planes, *tail_probability),
            Regime::CdfLookup { cdf } => Self::dev_cdf_lookup(&mut self.engine, cdf),
            Regime::Rejection(state) => Self::dev_rejection(&mut self.engine, self.n, state),
        };
        if self.folded_p != self.p {
            self.n - raw
        } else {
            raw
        }
    }

    /// The trial count.
    #[inline]
    pub fn n(&self) -> i32 {
        self.n
    }

    /// The success probability.
    #[inline]
    pub fn p(&self) -> f64 {
        self.p
    }

    // Each plane compares one binary digit of the probability against a
    // word of engine bits; the first digit where they differ decides the
    // trial. Surviving trials fall through to the folded tail probability.
    fn dev_bit_parallel(
        engine: &mut Xorshift64Engine,
        n: i32,
        bit_planes: &[bool; BIT_PLANES],
        tail_probability: f64,
    ) -> i32 {
        let mut unfinished = u64::MAX;
        let mut outcome = 0u64;
        for &plane in bit_planes {
            let mask = if plane { u64::MAX } else { 0 };
            let diff = unfinished & (engine.next_u64() ^ mask);
            if plane {
                outcome |= diff;
            } else {
                outcome &= !diff;
            }
            unfinished &= !diff;
        }
        let mut k = 0;
        for _ in 0..n {
            if unfinished & 1 != 0 {
                if engine.next_double() < tail_probability {
                    k += 1;
                }
            } else if outcome & 1 != 0 {
                k += 1;
            }
            unfinished >>= 1;
            outcome >>= 1;
        }
        k
    }

    fn dev_cdf_lookup(engine: &mut Xorshift64Engine, cdf: &[f64; CDF_LEN]) -> i32 {
        let y = engine.next_double();
        let mut kl: i32 = -1;
        let mut k: i32 = CDF_LEN as i32;
        while k - kl > 1 {
            let km = (kl + k) / 2;
            if y < cdf[km as usize] {
                k = km;
            } else {
                kl = km;
            }
        }
        k
    }

    fn dev_rejection(engine: &mut Xorshift64Engine, n: i32, state: &RejectionState) -> i32 {
        for _ in 0..MAX_REJECTION_ROUNDS {
            let u = 0.645 * engine.next_double();
            let v = -0.63 + 1.25 * engine.next_double();
            let v2 = v * v;
            // Outer squeeze: discard before the floor and the exp.
            if v >= 0.0 {
                if v2 > 6.5 * u * (0.645 - u) * (u + 0.2) {
                    continue;
                }
            } else if v2 > 8.4 * u * (0.645 - u) * (u + 0.1) {
                continue;
            }
            let k = (state.std_dev * (v / u) + state.mean + 0.5).floor() as i32;
            // The pmf is zero outside 0..=n; a candidate past either end
            // would otherwise index past the factorial tables.
            if k < 0 || k > n {
                continue;
            }
            let u2 = u * u;
            // Inner squeeze: accept before the exp.
            if v >= 0.0 {
                if v2 < 12.25 * u2 * (0.615 - u) * (0.92 - u) {
                    return k;
                }
            } else if v2 < 7.84 * u2 * (0.615 - u) * (1.2 - u) {
                return k;
            }
            let ln_k_factorials = match &state.ln_factorials {
                Some(table) => table[k as usize] + table[(n - k) as usize],
                None => ln_gamma_raw(k as f64 + 1.0) + ln_gamma_raw((n - k) as f64 + 1.0),
            };
            let bound = state.std_dev
                * (state.ln_n_factorial + k as f64 * state.ln_p + (n - k) as f64 * state.ln_q
                    - ln_k_factorials)
                    .exp();
            if u2 < bound {
                return k;
            }
        }
        panic!("binomial sampler rejected {MAX_REJECTION_ROUNDS} candidates in a row");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ======================
    // Construction
    // ======================

    #[test]
    fn test_rejects_invalid_parameters() {
        assert!(matches!(
            Binomial::new(-1, 0.5, 1),
            Err(DeviateError::InvalidTrialCount { value: -1 })
        ));
        assert!(matches!(
            Binomial::new(10, -0.1, 1),
            Err(DeviateError::InvalidProbability { .. })
        ));
        assert!(matches!(
            Binomial::new(10, 1.5, 1),
            Err(DeviateError::InvalidProbability { .. })
        ));
        assert!(Binomial::new(10, f64::NAN, 1).is_err());
    }

    #[test]
    fn test_regime_selection() {
        let bit = Binomial::new(64, 0.5, 1).unwrap();
        assert!(matches!(bit.regime, Regime::BitParallel { .. }));

        // 65 trials at 0.3 give a mean of 19.5, below the lookup cutoff.
        let cdf = Binomial::new(65, 0.3, 1).unwrap();
        assert!(matches!(cdf.regime, Regime::CdfLookup { .. }));

        let rej = Binomial::new(65, 0.5, 1).unwrap();
        assert!(matches!(rej.regime, Regime::Rejection(_)));

        // Table policy flips at 1024 trials.
        let tabled = Binomial::new(300, 0.4, 1).unwrap();
        let direct = Binomial::new(2_000, 0.4, 1).unwrap();
        match (&tabled.regime, &direct.regime) {
            (Regime::Rejection(a), Regime::Rejection(b)) => {
                assert_eq!(a.ln_factorials.as_ref().map(Vec::len), Some(301));
                assert!(b.ln_factorials.is_none());
            }
            _ => panic!("expected rejection regimes"),
        }
    }

    #[test]
    fn test_probability_bit_extraction() {
        // 0.5 is exactly one binary digit with nothing left over.
        let sampler = Binomial::new(10, 0.5, 1).unwrap();
        match sampler.regime {
            Regime::BitParallel {
                bit_planes,
                tail_probability,
            } => {
                assert_eq!(bit_planes, [true, false, false, false, false]);
                assert_eq!(tail_probability, 0.0);
            }
            _ => panic!("expected bit-parallel regime"),
        }
    }

    // ======================
    // Sampling
    // ======================

    #[test]
    fn test_degenerate_probabilities() {
        let mut never = Binomial::new(10, 0.0, 3).unwrap();
        let mut always = Binomial::new(10, 1.0, 3).unwrap();
        for _ in 0..1_000 {
            assert_eq!(never.dev(), 0);
            assert_eq!(always.dev(), 10);
        }
    }

    #[test]
    fn test_deviates_stay_in_support() {
        for (n, p, seed) in [(50, 0.3, 2), (200, 0.1, 3), (300, 0.4, 4), (2_000, 0.45, 5)] {
            let mut sampler = Binomial::new(n, p, seed).unwrap();
            for _ in 0..5_000 {
                let k = sampler.dev();
                assert!((0..=n).contains(&k), "k={k} outside 0..={n}");
            }
        }
    }

    #[test]
    fn test_reflection_is_exact() {
        // 0.25 and 0.75 fold to bit-identical internal state, so on a
        // shared seed the two samplers draw complementary counts.
        for n in [40, 200, 500] {
            let mut low = Binomial::new(n, 0.25, 77).unwrap();
            let mut high = Binomial::new(n, 0.75, 77).unwrap();
            for _ in 0..500 {
                assert_eq!(low.dev() + high.dev(), n);
            }
        }
    }

    #[test]
    fn test_same_seed_reproduces_stream() {
        for (n, p) in [(30, 0.25), (100, 0.2), (150, 0.5)] {
            let mut a = Binomial::new(n, p, 11).unwrap();
            let mut b = Binomial::new(n, p, 11).unwrap();
            for _ in 0..500 {
                assert_eq!(a.dev(), b.dev());
            }
        }
    }

    // ======================
    // Property tests
    // ======================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_bit_parallel_draws_stay_in_support(seed in any::<u64>(), p in 0.0_f64..=1.0) {
            let mut sampler = Binomial::new(40, p, seed).unwrap();
            for _ in 0..32 {
                let k = sampler.dev();
                prop_assert!((0..=40).contains(&k));
            }
        }

        #[test]
        fn prop_large_n_draws_stay_in_support(
            n in 65_i32..400,
            p in 0.05_f64..0.95,
            seed in any::<u64>(),
        ) {
            let mut sampler = Binomial::new(n, p, seed).unwrap();
            for _ in 0..16 {
                let k = sampler.dev();
                prop_assert!((0..=n).contains(&k));
            }
        }
    }
}

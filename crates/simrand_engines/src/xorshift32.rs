//! Combined engine built from 32-bit operations only.

use rand_core::impls::{fill_bytes_via_next, next_u64_via_u32};
use rand_core::{Error, RngCore, SeedableRng};

use crate::U32_SCALE;

const V_INIT: u32 = 2244614371;
const W1_INIT: u32 = 521288629;
const W2_INIT: u32 = 362436069;
const LCG_MULT: u32 = 2891336453;
const LCG_ADD: u32 = 1640531513;
const MWC1_MULT: u32 = 33378;
const MWC2_MULT: u32 = 57225;

/// Combined generator using only 32-bit arithmetic (four state words).
///
/// Combines a 32-bit LCG, a xorshift word and two 16-bit multiply-with-carry
/// updates, for targets where 64-bit multiplies are slow. Period is about
/// 3.11e37. On 64-bit hardware prefer [`Xorshift64Engine`].
///
/// [`Xorshift64Engine`]: crate::Xorshift64Engine
///
/// # Examples
///
/// ```rust
/// use simrand_engines::Xorshift32Engine;
///
/// let mut engine = Xorshift32Engine::new(42);
/// let word = engine.next_u32();
/// let coarse = engine.next_double();       // 32 bits of mantissa
/// let fine = engine.next_double_full();    // two draws, full mantissa
/// assert!(coarse >= 0.0 && coarse < 1.0);
/// assert!(fine >= 0.0 && fine < 1.0);
/// # let _ = word;
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xorshift32Engine {
    u: u32,
    v: u32,
    w1: u32,
    w2: u32,
}

impl Xorshift32Engine {
    /// Creates an engine from a 32-bit seed (any value except 2244614371).
    ///
    /// Two warm-up draws move the state away from the seed before the first
    /// output.
    pub fn new(seed: u32) -> Self {
        let mut engine = Self {
            u: seed ^ V_INIT,
            v: V_INIT,
            w1: W1_INIT,
            w2: W2_INIT,
        };
        engine.next_u32();
        engine.v = engine.u;
        engine.next_u32();
        engine
    }

    /// Returns the next 32-bit word of the stream.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.u = self.u.wrapping_mul(LCG_MULT).wrapping_add(LCG_ADD);
        self.v ^= self.v >> 13;
        self.v ^= self.v << 17;
        self.v ^= self.v >> 5;
        self.w1 = MWC1_MULT
            .wrapping_mul(self.w1 & 0xffff)
            .wrapping_add(self.w1 >> 16);
        self.w2 = MWC2_MULT
            .wrapping_mul(self.w2 & 0xffff)
            .wrapping_add(self.w2 >> 16);
        let mut x = self.u ^ (self.u << 9);
        x ^= x >> 17;
        x ^= x << 6;
        let mut y = self.w1 ^ (self.w1 << 17);
        y ^= y >> 15;
        y ^= y << 5;
        x.wrapping_add(self.v) ^ y.wrapping_add(self.w2)
    }

    /// Returns a uniform double in `[0, 1)` carrying 32 bits of resolution.
    ///
    /// One draw, scaled by 2^-32. Cheap, but every value is a multiple of
    /// 2^-32; use [`next_double_full`](Self::next_double_full) when the full
    /// 53-bit mantissa matters.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        U32_SCALE * self.next_u32() as f64
    }

    /// Returns a uniform double in `[0, 1)` with a fully populated mantissa.
    ///
    /// Folds two draws: the first supplies the high 32 bits, the second the
    /// low bits.
    #[inline]
    pub fn next_double_full(&mut self) -> f64 {
        let hi = self.next_u32() as f64;
        let lo = self.next_u32() as f64;
        U32_SCALE * (hi + U32_SCALE * lo)
    }
}

impl RngCore for Xorshift32Engine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        Xorshift32Engine::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        next_u64_via_u32(self)
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        fill_bytes_via_next(self, dest);
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Xorshift32Engine {
    type Seed = [u8; 4];

    #[inline]
    fn from_seed(seed: [u8; 4]) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Truncates the seed to 32 bits and routes through
    /// [`Xorshift32Engine::new`].
    #[inline]
    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ======================
    // Reference streams
    // ======================

    #[test]
    fn test_reference_stream() {
        // Verified against an independent emulation of the generator.
        let mut engine = Xorshift32Engine::new(42);
        let expected = [2169804313, 867787840, 4063545028, 131286362, 1394022084];
        for &word in &expected {
            assert_eq!(engine.next_u32(), word);
        }
    }

    #[test]
    fn test_reference_doubles() {
        let mut engine = Xorshift32Engine::new(42);
        let expected = [0.5051969347987324, 0.20204760134220123, 0.9461178043857217];
        for &value in &expected {
            assert_eq!(engine.next_double(), value);
        }
    }

    #[test]
    fn test_reference_full_doubles() {
        let mut engine = Xorshift32Engine::new(42);
        assert_eq!(engine.next_double_full(), 0.5051969348457753);
        assert_eq!(engine.next_double_full(), 0.9461178043928388);
    }

    #[test]
    fn test_full_double_consumes_two_draws() {
        let mut words = Xorshift32Engine::new(6);
        let mut fine = Xorshift32Engine::new(6);
        fine.next_double_full();
        words.next_u32();
        words.next_u32();
        assert_eq!(fine.next_u32(), words.next_u32());
    }

    // ======================
    // rand interop
    // ======================

    #[test]
    fn test_seedable_rng_truncates_to_native_seed() {
        let mut native = Xorshift32Engine::new(42);
        let mut seeded = Xorshift32Engine::seed_from_u64(42);
        let mut wrapped = Xorshift32Engine::seed_from_u64(42 + (1_u64 << 32));
        for _ in 0..4 {
            let word = native.next_u32();
            assert_eq!(seeded.next_u32(), word);
            assert_eq!(wrapped.next_u32(), word);
        }
    }

    // ======================
    // Property tests
    // ======================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_doubles_stay_in_unit_interval(seed in any::<u32>()) {
            let mut engine = Xorshift32Engine::new(seed);
            for _ in 0..32 {
                let x = engine.next_double();
                prop_assert!((0.0..1.0).contains(&x));
                let y = engine.next_double_full();
                prop_assert!((0.0..1.0).contains(&y));
            }
        }

        #[test]
        fn prop_same_seed_reproduces_stream(seed in any::<u32>()) {
            let mut a = Xorshift32Engine::new(seed);
            let mut b = Xorshift32Engine::new(seed);
            for _ in 0..16 {
                prop_assert_eq!(a.next_u32(), b.next_u32());
            }
        }
    }
}

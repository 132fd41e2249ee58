//! Stateless avalanche hash.

use crate::U64_SCALE;

const PHASE1_MULT: u64 = 3935559000370003845;
const PHASE1_ADD: u64 = 2691343689449507681;
const PHASE2_MULT: u64 = 4768777513237032717;

/// Stateless 64-bit avalanche hash.
///
/// Maps any 64-bit key to a value that behaves like an independent uniform
/// draw: flipping one input bit flips each output bit with probability close
/// to one half. Because there is no state, the same key always maps to the
/// same value, which makes this the tool of choice for deriving reproducible
/// per-stream seeds (hash a base seed combined with a stream index) or for
/// random access into a virtual random sequence.
///
/// The hash is a fixed composition of two multiply rounds and two xorshift
/// scrambles. It is not cryptographic.
///
/// # Examples
///
/// ```rust
/// use simrand_engines::HashEngine;
///
/// // Derive per-worker seeds from a base seed.
/// let base = 42_u64;
/// let seeds: Vec<u64> = (0..4).map(|i| HashEngine::hash_u64(base ^ i)).collect();
/// assert_eq!(seeds[0], HashEngine::hash_u64(42));
///
/// let u = HashEngine::hash_double(7);
/// assert!(u >= 0.0 && u < 1.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct HashEngine;

impl HashEngine {
    /// Hashes a 64-bit key to a 64-bit value.
    #[inline]
    pub fn hash_u64(key: u64) -> u64 {
        let mut v = key.wrapping_mul(PHASE1_MULT).wrapping_add(PHASE1_ADD);
        v ^= v >> 21;
        v ^= v << 37;
        v ^= v >> 4;
        v = v.wrapping_mul(PHASE2_MULT);
        v ^= v << 20;
        v ^= v >> 41;
        v ^= v << 5;
        v
    }

    /// Hashes a 64-bit key to a 32-bit value (low half of [`Self::hash_u64`]).
    #[inline]
    pub fn hash_u32(key: u64) -> u32 {
        Self::hash_u64(key) as u32
    }

    /// Hashes a 64-bit key to a double in `[0, 1)` (2^-64 scaling).
    #[inline]
    pub fn hash_double(key: u64) -> f64 {
        U64_SCALE * Self::hash_u64(key) as f64
    }
}

//! Byte-oriented stream cipher engine.

use rand_core::impls::next_u64_via_u32;
use rand_core::{Error, RngCore, SeedableRng};

use crate::U32_SCALE;

const KEY_INIT: u32 = 2244614371;

/// Byte-stream generator built on an RC4-style cipher.
///
/// Holds a 256-entry byte permutation that is shuffled one swap per output
/// byte. The natural output unit is [`next_byte`](Self::next_byte); 32-bit
/// words accumulate four bytes (big-endian) and doubles fold two words into
/// a 64-bit mantissa. Throughput per bit is well below the xorshift engines,
/// so this engine earns its keep only where a byte stream is the actual
/// requirement.
///
/// # Algorithm Reference
///
/// - Schneier, B. (1996). *Applied Cryptography*, 2nd ed., §17.1 (the
///   alleged-RC4 keystream).
/// - Press, W. H. et al. (2007). *Numerical Recipes*, 3rd ed., §7.1.
///
/// The key schedule XORs the seed into a rotating 32-bit key word and
/// discards the first 256 output bytes. Despite the cipher ancestry, this
/// generator is not cryptographically secure.
///
/// # Examples
///
/// ```rust
/// use simrand_engines::ByteCipherEngine;
///
/// let mut engine = ByteCipherEngine::new(42);
/// let byte = engine.next_byte();
/// let word = engine.next_u32();
/// let uniform = engine.next_double();
/// assert!(uniform >= 0.0 && uniform < 1.0);
/// # let _ = (byte, word);
/// ```
#[derive(Debug, Clone)]
pub struct ByteCipherEngine {
    table: [u8; 256],
    i: u8,
    j: u8,
}

impl ByteCipherEngine {
    /// Creates an engine from a 32-bit seed.
    ///
    /// Runs the key schedule (one pass over the table, consuming the top
    /// byte of the rotating key word per swap), then discards 256 bytes so
    /// the output starts well away from the keyed permutation.
    pub fn new(seed: u32) -> Self {
        let mut key = KEY_INIT ^ seed;
        let mut table = [0u8; 256];
        for (k, slot) in table.iter_mut().enumerate() {
            *slot = k as u8;
        }
        let mut j: u8 = 0;
        for i in 0..256 {
            let current = table[i];
            j = j.wrapping_add(current).wrapping_add((key >> 24) as u8);
            table[i] = table[j as usize];
            table[j as usize] = current;
            key = key.rotate_left(24);
        }
        let mut engine = Self { table, i: 0, j: 0 };
        for _ in 0..256 {
            engine.next_byte();
        }
        engine
    }

    /// Returns the next byte of the keystream.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let current = self.table[self.i as usize];
        self.j = self.j.wrapping_add(current);
        self.table[self.i as usize] = self.table[self.j as usize];
        self.table[self.j as usize] = current;
        let idx = self.table[self.i as usize].wrapping_add(self.table[self.j as usize]);
        self.table[idx as usize]
    }

    /// Returns a 32-bit word accumulated from four bytes, first byte in the
    /// high position.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut word = 0u32;
        for _ in 0..4 {
            word = (word << 8) | self.next_byte() as u32;
        }
        word
    }

    /// Returns a uniform double in `[0, 1)` built from two words.
    ///
    /// The first word supplies the high 32 mantissa bits, the second the
    /// low bits, so the full double precision is populated.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        let hi = self.next_u32() as f64;
        let lo = self.next_u32() as f64;
        U32_SCALE * (hi + U32_SCALE * lo)
    }
}

impl RngCore for ByteCipherEngine {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        ByteCipherEngine::next_u32(self)
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        next_u64_via_u32(self)
    }

    /// Fills the buffer with keystream bytes directly, one cipher step per
    /// byte.
    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest.iter_mut() {
            *byte = self.next_byte();
        }
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for ByteCipherEngine {
    type Seed = [u8; 4];

    #[inline]
    fn from_seed(seed: [u8; 4]) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Truncates the seed to 32 bits and routes through
    /// [`ByteCipherEngine::new`].
    #[inline]
    fn seed_from_u64(seed: u64) -> Self {
        Self::new(seed as u32)
    }
}

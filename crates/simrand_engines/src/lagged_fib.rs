//! Subtractive lagged Fibonacci engine.

use crate::xorshift64::Xorshift64Fast;

const LAG_TABLE_LEN: usize = 55;

/// Subtractive lagged Fibonacci generator with lags (55, 24).
///
/// Updates `x[n] = x[n-55] - x[n-24] mod 1.0` entirely in floating point,
/// which made it the generator of choice on hardware where 64-bit integer
/// multiplies were slow. The natural output is a double; the 32-bit surface
/// rescales it. The lag table is seeded from a [`Xorshift64Fast`] stream, so
/// a 64-bit seed selects the starting point.
///
/// Unlike the word-state engines this type keeps a 55-entry table plus two
/// cursors, so it does not participate in the serde state-snapshot feature
/// or the `rand` trait interop.
///
/// # Algorithm Reference
///
/// - Knuth, D. E. (1997). *The Art of Computer Programming*, vol. 2,
///   §3.2.2 (the subtractive method).
///
/// # Examples
///
/// ```rust
/// use simrand_engines::LaggedFibonacciEngine;
///
/// let mut engine = LaggedFibonacciEngine::new(42);
/// let x = engine.next_double();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct LaggedFibonacciEngine {
    table: [f64; LAG_TABLE_LEN],
    cursor: usize,
    lag_cursor: usize,
}

impl LaggedFibonacciEngine {
    /// Creates an engine from a 64-bit seed.
    ///
    /// Fills the lag table with 55 uniform doubles drawn from a
    /// [`Xorshift64Fast`] seeded with the same value.
    pub fn new(seed: u64) -> Self {
        let mut filler = Xorshift64Fast::new(seed);
        let mut table = [0.0_f64; LAG_TABLE_LEN];
        for slot in table.iter_mut() {
            *slot = filler.next_double();
        }
        Self {
            table,
            cursor: 0,
            lag_cursor: 31,
        }
    }

    /// Returns the next double in `[0, 1)`.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        self.cursor += 1;
        if self.cursor == LAG_TABLE_LEN {
            self.cursor = 0;
        }
        self.lag_cursor += 1;
        if self.lag_cursor == LAG_TABLE_LEN {
            self.lag_cursor = 0;
        }
        let mut difference = self.table[self.cursor] - self.table[self.lag_cursor];
        if difference < 0.0 {
            difference += 1.0;
        }
        self.table[self.cursor] = difference;
        difference
    }

    /// Returns the next double rescaled onto the 32-bit range.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_double() * 4294967295.0) as u32
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
    fn test_reference_doubles() {
        // Verified against an independent emulation of the generator.
        let mut engine = LaggedFibonacciEngine::new(42);
        let expected = [
            0.2896194246532149,
            0.2724901302964729,
            0.2988951116028464,
            0.5856085744144941,
            0.18526183116813166,
        ];
        for &value in &expected {
            assert_eq!(engine.next_double(), value);
        }
    }

    #[test]
    fn test_reference_words() {
        let mut engine = LaggedFibonacciEngine::new(42);
        let expected = [1243905956, 1170336197, 1283744728];
        for &word in &expected {
            assert_eq!(engine.next_u32(), word);
        }
    }

    // ======================
    // Update behaviour
    // ======================

    #[test]
    fn test_long_run_stays_in_unit_interval() {
        // Run well past several table wraps.
        let mut engine = LaggedFibonacciEngine::new(123);
        for _ in 0..10_000 {
            let x = engine.next_double();
            assert!((0.0..1.0).contains(&x), "escaped unit interval: {}", x);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_same_seed_reproduces_stream(seed in any::<u64>()) {
            let mut a = LaggedFibonacciEngine::new(seed);
            let mut b = LaggedFibonacciEngine::new(seed);
            for _ in 0..60 {
                prop_assert_eq!(a.next_double(), b.next_double());
            }
        }
    }
}

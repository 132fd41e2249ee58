//! # simrand_engines: Deterministic Bit Engines for the Simrand Workspace
//!
//! ## Layer 2 (Generator) Role
//!
//! simrand_engines provides the raw pseudo-random bit streams that the
//! distribution samplers in `simrand_deviates` consume:
//! - [`Xorshift64Engine`]: the recommended general-purpose generator, a
//!   combined xorshift/LCG/multiply-with-carry engine with period about 3.138e57
//! - [`Xorshift64Fast`]: a single-word xorshift engine for speed-critical inner
//!   loops (period 1.8e19)
//! - [`Xorshift64Dual`]: a two-word engine of intermediate quality (period 8.5e37)
//! - [`HashEngine`]: a stateless avalanche hash mapping any 64-bit key to an
//!   independent-looking value, useful for deriving stream seeds
//! - [`ByteCipherEngine`]: a byte-stream cipher generator
//! - [`LaggedFibonacciEngine`]: a subtractive lagged Fibonacci generator
//!   producing doubles directly, with no integer arithmetic in its update
//! - [`Xorshift32Engine`]: a combined generator built entirely from 32-bit
//!   operations, for targets where 64-bit arithmetic is slow
//!
//! All engines are deterministic: the same seed always reproduces the same
//! stream. None of them is cryptographically secure.
//!
//! ## `rand` Interop
//!
//! The five stateful integer engines implement [`rand_core::RngCore`] and
//! [`rand_core::SeedableRng`], so they can drive any consumer written against
//! the `rand` ecosystem.
//!
//! ## State Snapshots
//!
//! With the `serde` cargo feature enabled, the word-state engines derive
//! `Serialize`/`Deserialize` so a stream position can be checkpointed and
//! restored.
//!
//! ## Usage Examples
//!
//! ```rust
//! use simrand_engines::Xorshift64Engine;
//!
//! let mut engine = Xorshift64Engine::new(42);
//! let word = engine.next_u64();
//! let uniform = engine.next_double();
//! assert!(uniform >= 0.0 && uniform < 1.0);
//!
//! // Same seed, same stream.
//! assert_eq!(Xorshift64Engine::new(42).next_u64(), word);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod byte_cipher;
pub mod hash;
pub mod lagged_fib;
pub mod xorshift32;
pub mod xorshift64;

pub use byte_cipher::ByteCipherEngine;
pub use hash::HashEngine;
pub use lagged_fib::LaggedFibonacciEngine;
pub use xorshift32::Xorshift32Engine;
pub use xorshift64::{Xorshift64Dual, Xorshift64Engine, Xorshift64Fast};

/// Scale factor mapping a `u64` onto `[0, 1)`; equal to 2^-64.
pub(crate) const U64_SCALE: f64 = 5.421010862427522e-20;

/// Scale factor mapping a `u32` onto `[0, 1)`; equal to 2^-32.
pub(crate) const U32_SCALE: f64 = 2.3283064365386963e-10;

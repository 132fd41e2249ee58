//! Stream command implementation
//!
//! Emits raw engine output, one value per line, for piping into external
//! statistical test suites.

use std::io::{self, BufWriter, Write};

use clap::Args;
use simrand_engines::{
    ByteCipherEngine, LaggedFibonacciEngine, Xorshift32Engine, Xorshift64Dual, Xorshift64Engine,
    Xorshift64Fast,
};
use tracing::info;

use crate::config::CliConfig;
use crate::{CliError, Result};

/// Engine names accepted by `--engine`.
pub const ENGINE_NAMES: [&str; 6] = [
    "xorshift64",
    "xorshift64-fast",
    "xorshift64-dual",
    "byte-cipher",
    "lagged-fib",
    "xorshift32",
];

/// Flags for `simrand stream`.
#[derive(Debug, Args)]
pub struct StreamArgs {
    /// Engine to draw from; byte-cipher and xorshift32 use the low 32 seed bits
    #[arg(short, long)]
    pub engine: String,

    /// Engine seed (config default when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of outputs (config default when omitted)
    #[arg(short = 'n', long = "count")]
    pub count: Option<usize>,

    /// Output format: u64, hex or double
    #[arg(short, long, default_value = "u64")]
    pub format: String,
}

enum StreamEngine {
    Xorshift64(Xorshift64Engine),
    Xorshift64Fast(Xorshift64Fast),
    Xorshift64Dual(Xorshift64Dual),
    ByteCipher(ByteCipherEngine),
    LaggedFib(LaggedFibonacciEngine),
    Xorshift32(Xorshift32Engine),
}

impl StreamEngine {
    fn build(name: &str, seed: u64) -> Result<Self> {
        match name {
            "xorshift64" => Ok(Self::Xorshift64(Xorshift64Engine::new(seed))),
            "xorshift64-fast" => Ok(Self::Xorshift64Fast(Xorshift64Fast::new(seed))),
            "xorshift64-dual" => Ok(Self::Xorshift64Dual(Xorshift64Dual::new(seed))),
            "byte-cipher" => Ok(Self::ByteCipher(ByteCipherEngine::new(seed as u32))),
            "lagged-fib" => Ok(Self::LaggedFib(LaggedFibonacciEngine::new(seed))),
            "xorshift32" => Ok(Self::Xorshift32(Xorshift32Engine::new(seed as u32))),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown engine: {other}. Supported: {}",
                ENGINE_NAMES.join(", ")
            ))),
        }
    }

    fn next_u64(&mut self) -> Result<u64> {
        match self {
            Self::Xorshift64(e) => Ok(e.next_u64()),
            Self::Xorshift64Fast(e) => Ok(e.next_u64()),
            Self::Xorshift64Dual(e) => Ok(e.next_u64()),
            // Low half first, matching next_u64_via_u32.
            Self::ByteCipher(e) => {
                let lo = u64::from(e.next_u32());
                let hi = u64::from(e.next_u32());
                Ok((hi << 32) | lo)
            }
            Self::Xorshift32(e) => {
                let lo = u64::from(e.next_u32());
                let hi = u64::from(e.next_u32());
                Ok((hi << 32) | lo)
            }
            Self::LaggedFib(_) => Err(CliError::InvalidArgument(
                "lagged-fib produces doubles only; use --format double".to_string(),
            )),
        }
    }

    fn next_double(&mut self) -> f64 {
        match self {
            Self::Xorshift64(e) => e.next_double(),
            Self::Xorshift64Fast(e) => e.next_double(),
            Self::Xorshift64Dual(e) => e.next_double(),
            Self::ByteCipher(e) => e.next_double(),
            Self::LaggedFib(e) => e.next_double(),
            Self::Xorshift32(e) => e.next_double(),
        }
    }
}

/// Run the stream command
pub fn run(args: &StreamArgs, config: &CliConfig) -> Result<()> {
    let seed = args.seed.unwrap_or(config.defaults.seed);
    let count = args.count.unwrap_or(config.defaults.count);

    info!("Streaming...");
    info!("  Engine: {}", args.engine);
    info!("  Seed: {}", seed);
    info!("  Count: {}", count);
    info!("  Output format: {}", args.format);

    let mut engine = StreamEngine::build(&args.engine, seed)?;
    let stdout = io::stdout().lock();
    let mut writer = BufWriter::new(stdout);

    match args.format.as_str() {
        "u64" => {
            for _ in 0..count {
                writeln!(writer, "{}", engine.next_u64()?)?;
            }
        }
        "hex" => {
            for _ in 0..count {
                writeln!(writer, "{:016x}", engine.next_u64()?)?;
            }
        }
        "double" => {
            for _ in 0..count {
                writeln!(writer, "{}", engine.next_double())?;
            }
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {other}. Supported: u64, hex, double"
            )));
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ======================
    // Engine selection
    // ======================

    #[test]
    fn test_every_supported_engine_builds() {
        for name in ENGINE_NAMES {
            assert!(StreamEngine::build(name, 42).is_ok(), "{name} failed");
        }
    }

    #[test]
    fn test_unknown_engine_is_rejected() {
        assert!(matches!(
            StreamEngine::build("mersenne", 1),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_lagged_fib_has_no_word_output() {
        let mut engine = StreamEngine::build("lagged-fib", 1).unwrap();
        assert!(engine.next_u64().is_err());
        assert!(engine.next_double().is_finite());
    }

    #[test]
    fn test_word_stream_matches_engine_output() {
        let mut streamed = StreamEngine::build("xorshift64", 42).unwrap();
        let mut direct = Xorshift64Engine::new(42);
        for _ in 0..100 {
            assert_eq!(streamed.next_u64().unwrap(), direct.next_u64());
        }
    }

    #[test]
    fn test_wide_words_compose_low_half_first() {
        let mut streamed = StreamEngine::build("xorshift32", 7).unwrap();
        let mut direct = Xorshift32Engine::new(7);
        let lo = u64::from(direct.next_u32());
        let hi = u64::from(direct.next_u32());
        assert_eq!(streamed.next_u64().unwrap(), (hi << 32) | lo);
    }
}

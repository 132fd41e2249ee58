//! Sample command implementation
//!
//! Draws deviates from one distribution, writes them in the requested
//! format and appends a moment summary.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::config::CliConfig;
use crate::dist::{summarise, DistSpec, Summary};
use crate::{CliError, Result};

/// Flags for `simrand sample`.
#[derive(Debug, Args)]
pub struct SampleArgs {
    /// Distribution to sample
    #[arg(short, long)]
    pub dist: String,

    /// Rate (exponential, gamma) or mean rate (poisson)
    #[arg(long)]
    pub rate: Option<f64>,

    /// Location (logistic, normal, normal-bm, cauchy)
    #[arg(long)]
    pub mu: Option<f64>,

    /// Scale (logistic, normal, normal-bm, cauchy)
    #[arg(long)]
    pub sigma: Option<f64>,

    /// Shape (gamma)
    #[arg(long)]
    pub shape: Option<f64>,

    /// Trial count (binomial)
    #[arg(long)]
    pub trials: Option<i32>,

    /// Success probability (binomial)
    #[arg(long)]
    pub prob: Option<f64>,

    /// Engine seed (config default when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of deviates (config default when omitted)
    #[arg(short = 'n', long = "count")]
    pub count: Option<usize>,

    /// Output format: table, csv or json (config default when omitted)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<String>,
}

impl SampleArgs {
    fn spec(&self) -> DistSpec {
        DistSpec {
            dist: self.dist.clone(),
            rate: self.rate,
            mu: self.mu,
            sigma: self.sigma,
            shape: self.shape,
            trials: self.trials,
            prob: self.prob,
        }
    }
}

#[derive(Serialize)]
struct SampleReport<'a> {
    dist: &'a str,
    seed: u64,
    summary: &'a Summary,
    values: &'a [f64],
}

/// Run the sample command
pub fn run(args: &SampleArgs, config: &CliConfig) -> Result<()> {
    let seed = args.seed.unwrap_or(config.defaults.seed);
    let count = args.count.unwrap_or(config.defaults.count);
    let format = args.format.as_deref().unwrap_or(&config.defaults.format);
    if count == 0 {
        return Err(CliError::InvalidArgument(
            "count must be at least 1".to_string(),
        ));
    }

    info!("Sampling...");
    info!("  Distribution: {}", args.dist);
    info!("  Seed: {}", seed);
    info!("  Count: {}", count);
    info!("  Output format: {}", format);

    let mut sampler = args.spec().build(seed)?;
    let discrete = sampler.is_discrete();
    let values: Vec<f64> = (0..count).map(|_| sampler.dev()).collect();
    let summary = summarise(&values);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    match format {
        "table" => write_table(&mut writer, &values, &summary, discrete)?,
        "csv" => write_csv(&mut writer, &values, &summary, discrete)?,
        "json" => {
            let report = SampleReport {
                dist: &args.dist,
                seed,
                summary: &summary,
                values: &values,
            };
            serde_json::to_writer_pretty(&mut writer, &report)?;
            writeln!(writer)?;
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {other}. Supported: table, csv, json"
            )));
        }
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        info!("Wrote {} values to {}", summary.count, path);
    }
    info!("Sampling complete");
    Ok(())
}

fn format_value(value: f64, discrete: bool) -> String {
    if discrete {
        format!("{}", value as i64)
    } else {
        format!("{value:.6}")
    }
}

fn write_table(
    w: &mut dyn Write,
    values: &[f64],
    summary: &Summary,
    discrete: bool,
) -> Result<()> {
    writeln!(w, "┌────────────┬──────────────────────┐")?;
    writeln!(w, "│ index      │ value                │")?;
    writeln!(w, "├────────────┼──────────────────────┤")?;
    for (index, value) in values.iter().enumerate() {
        writeln!(w, "│ {index:<10} │ {:>20} │", format_value(*value, discrete))?;
    }
    writeln!(w, "└────────────┴──────────────────────┘")?;
    writeln!(w)?;
    writeln!(w, "  count     {}", summary.count)?;
    writeln!(w, "  mean      {:.6}", summary.mean)?;
    writeln!(w, "  variance  {:.6}", summary.variance)?;
    writeln!(w, "  min       {}", format_value(summary.min, discrete))?;
    writeln!(w, "  max       {}", format_value(summary.max, discrete))?;
    Ok(())
}

fn write_csv(w: &mut dyn Write, values: &[f64], summary: &Summary, discrete: bool) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(w);
    csv_writer.write_record(["index", "value"])?;
    for (index, value) in values.iter().enumerate() {
        csv_writer.write_record([index.to_string(), format_value(*value, discrete)])?;
    }
    csv_writer.flush()?;
    // The summary goes to the log so the CSV body stays machine-readable.
    info!(
        "  mean {:.6}  variance {:.6}  min {:.6}  max {:.6}",
        summary.mean, summary.variance, summary.min, summary.max
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(dist: &str, format: &str) -> SampleArgs {
        SampleArgs {
            dist: dist.to_string(),
            rate: None,
            mu: None,
            sigma: None,
            shape: None,
            trials: None,
            prob: None,
            seed: Some(1),
            count: Some(3),
            format: Some(format.to_string()),
            output: None,
        }
    }

    // ======================
    // Argument handling
    // ======================

    #[test]
    fn test_unknown_format_is_rejected() {
        let config = CliConfig::default();
        let result = run(&args("normal", "xml"), &config);
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));
    }

    #[test]
    fn test_zero_count_is_rejected() {
        let config = CliConfig::default();
        let mut bad = args("normal", "json");
        bad.count = Some(0);
        assert!(run(&bad, &config).is_err());
    }

    // ======================
    // Writers
    // ======================

    #[test]
    fn test_table_output_shape() {
        let values = [1.25, 2.5];
        let summary = summarise(&values);
        let mut buffer = Vec::new();
        write_table(&mut buffer, &values, &summary, false).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("1.250000"));
        assert!(text.contains("mean      1.875000"));
    }

    #[test]
    fn test_csv_output_shape() {
        let values = [4.0, 6.0];
        let summary = summarise(&values);
        let mut buffer = Vec::new();
        write_csv(&mut buffer, &values, &summary, true).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, "index,value\n0,4\n1,6\n");
    }
}

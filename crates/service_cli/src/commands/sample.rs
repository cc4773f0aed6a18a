//! Sample command implementation
//!
//! Draws variates from a named distribution and writes them to stdout.

use std::io::{self, BufWriter, Write};

use tracing::info;
use variate_core::RandomSource;
use variate_samplers::{Distribution, Variate};

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Run the sample command
pub fn run(name: &str, params: &[f64], config: &CliConfig) -> Result<()> {
    let dist = Distribution::parse(name, params)?;
    let mut rng = super::generator(config.seed);
    info!(distribution = %dist, count = config.count, format = %config.format, "Sampling");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_samples(&mut out, &dist, &mut rng, config.count, config.format)?;
    out.flush()?;
    Ok(())
}

/// Draw `count` variates and write them in `format`
pub fn write_samples<W, S>(
    out: &mut W,
    dist: &Distribution,
    src: &mut S,
    count: usize,
    format: OutputFormat,
) -> Result<()>
where
    W: Write,
    S: RandomSource + ?Sized,
{
    match format {
        OutputFormat::Plain => {
            for _ in 0..count {
                writeln!(out, "{}", dist.sample(src))?;
            }
        }
        OutputFormat::Csv => {
            writeln!(out, "index,value")?;
            for i in 0..count {
                writeln!(out, "{},{}", i, dist.sample(src))?;
            }
        }
        OutputFormat::Json => {
            let draws: Vec<Variate> = (0..count).map(|_| dist.sample(src)).collect();
            serde_json::to_writer(&mut *out, &draws)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

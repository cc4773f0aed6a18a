//! Summary command implementation
//!
//! Draws variates and reports count, mean, variance and range without
//! keeping the draws in memory.

use std::io::{self, Write};

use serde::Serialize;
use tracing::info;
use variate_core::RandomSource;
use variate_samplers::Distribution;

use crate::config::{CliConfig, OutputFormat};
use crate::Result;

/// Running moments (Welford's algorithm)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    count: u64,
    mean: f64,
    m2: f64,
    min: f64,
    max: f64,
}

impl Default for Accumulator {
    fn default() -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Accumulator {
    /// Add one observation
    pub fn push(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
        self.min = self.min.min(x);
        self.max = self.max.max(x);
    }

    /// Number of observations
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sample mean, NaN when empty
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            f64::NAN
        } else {
            self.mean
        }
    }

    /// Unbiased sample variance, 0 for a single observation
    pub fn variance(&self) -> f64 {
        match self.count {
            0 => f64::NAN,
            1 => 0.0,
            n => self.m2 / (n - 1) as f64,
        }
    }
}

/// Summary statistics of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Sampled distribution
    pub distribution: Distribution,
    /// Number of variates drawn
    pub count: u64,
    /// Sample mean
    pub mean: f64,
    /// Unbiased sample variance
    pub variance: f64,
    /// Smallest variate
    pub min: f64,
    /// Largest variate
    pub max: f64,
}

impl Summary {
    /// Draw `count` variates from `dist` and summarise them
    pub fn collect<S>(dist: &Distribution, src: &mut S, count: usize) -> Self
    where
        S: RandomSource + ?Sized,
    {
        let mut acc = Accumulator::default();
        for _ in 0..count {
            acc.push(dist.sample(src).as_f64());
        }
        Self {
            distribution: *dist,
            count: acc.count(),
            mean: acc.mean(),
            variance: acc.variance(),
            min: acc.min,
            max: acc.max,
        }
    }

    /// Write the summary in `format`
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Plain => {
                writeln!(out, "distribution: {}", self.distribution)?;
                writeln!(out, "count: {}", self.count)?;
                writeln!(out, "mean: {}", self.mean)?;
                writeln!(out, "variance: {}", self.variance)?;
                writeln!(out, "min: {}", self.min)?;
                writeln!(out, "max: {}", self.max)?;
            }
            OutputFormat::Csv => {
                writeln!(out, "distribution,count,mean,variance,min,max")?;
                writeln!(
                    out,
                    "\"{}\",{},{},{},{},{}",
                    self.distribution, self.count, self.mean, self.variance, self.min, self.max
                )?;
            }
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, self)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

/// Run the summary command
pub fn run(name: &str, params: &[f64], config: &CliConfig) -> Result<()> {
    let dist = Distribution::parse(name, params)?;
    let mut rng = super::generator(config.seed);
    info!(distribution = %dist, count = config.count, "Summarising");

    let summary = Summary::collect(&dist, &mut rng, config.count);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    summary.write(&mut out, config.format)?;
    Ok(())
}

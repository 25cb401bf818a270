//! Monte Carlo estimate of the percolation threshold.
//!
//! Each trial opens uniformly random sites of a fresh grid until it
//! percolates and records the open fraction at that moment. The sample of
//! thresholds is fixed once the run is over; every statistic below is a
//! pure function of it.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::percolation::Percolation;

/// z-score of a two-sided 95% normal interval.
pub const CONFIDENCE_95: f64 = 1.96;

/// Uniform integer draws from `[lo, hi_exclusive)`.
pub trait UniformSource {
    fn uniform(&mut self, lo: usize, hi_exclusive: usize) -> usize;
}

impl<R: Rng + ?Sized> UniformSource for R {
    fn uniform(&mut self, lo: usize, hi_exclusive: usize) -> usize {
        self.gen_range(lo..hi_exclusive)
    }
}

/// Runs one trial on a fresh `n`x`n` grid and returns its threshold.
///
/// Draws that land on an already open site are simply drawn again; they
/// neither count as an open nor end the trial. Terminates after at most n²
/// opens, since a fully open grid always percolates.
pub fn run_trial<S: UniformSource + ?Sized>(n: usize, source: &mut S) -> Result<f64> {
    let mut perc = Percolation::new(n)?;
    let mut opened = 0usize;
    while !perc.percolates() {
        let row = source.uniform(1, n + 1);
        let col = source.uniform(1, n + 1);
        if !perc.is_open(row, col)? {
            perc.open(row, col)?;
            opened += 1;
        }
    }
    Ok(opened as f64 / (n * n) as f64)
}

#[derive(Debug, Clone, PartialEq)]
pub struct PercolationStats {
    n: usize,
    thresholds: Vec<f64>,
}

fn check(n: usize, trials: usize) -> Result<()> {
    if n == 0 {
        return Err(Error::InvalidArgument { name: "grid size", value: 0 });
    }
    if trials == 0 {
        return Err(Error::InvalidArgument { name: "trial count", value: 0 });
    }
    Ok(())
}

impl PercolationStats {
    /// `trials` sequential experiments drawing from the thread-local RNG.
    pub fn run(n: usize, trials: usize) -> Result<PercolationStats> {
        PercolationStats::run_with(n, trials, &mut rand::thread_rng())
    }

    /// `trials` sequential experiments sharing one random source.
    pub fn run_with<S: UniformSource + ?Sized>(
        n: usize,
        trials: usize,
        source: &mut S,
    ) -> Result<PercolationStats> {
        check(n, trials)?;
        let mut thresholds = Vec::with_capacity(trials);
        for trial in 0..trials {
            let threshold = run_trial(n, source)?;
            debug!("trial {}: threshold {}", trial, threshold);
            thresholds.push(threshold);
        }
        let stats = PercolationStats { n, thresholds };
        info!("{} trials on a {}x{} grid, mean {}", trials, n, n, stats.mean());
        Ok(stats)
    }

    /// Runs the trials across the rayon pool. Trial `i` draws from a
    /// ChaCha8 generator seeded with `seed` on stream `i`, so the sample
    /// depends only on `(n, trials, seed)` and not on scheduling.
    pub fn run_seeded(n: usize, trials: usize, seed: u64) -> Result<PercolationStats> {
        check(n, trials)?;
        let thresholds = (0..trials)
            .into_par_iter()
            .map(|trial| -> Result<f64> {
                let mut rng = trial_rng(seed, trial);
                let threshold = run_trial(n, &mut rng)?;
                debug!("trial {}: threshold {}", trial, threshold);
                Ok(threshold)
            })
            .collect::<Result<Vec<f64>>>()?;
        let stats = PercolationStats { n, thresholds };
        info!(
            "{} trials on a {}x{} grid (seed {}), mean {}",
            trials, n, n, seed, stats.mean()
        );
        Ok(stats)
    }

    /// Wraps an existing sample of thresholds.
    pub fn from_thresholds(n: usize, thresholds: Vec<f64>) -> Result<PercolationStats> {
        check(n, thresholds.len())?;
        Ok(PercolationStats { n, thresholds })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn mean(&self) -> f64 {
        kahan_sum(self.thresholds.iter().copied()) / self.trials() as f64
    }

    /// Sample standard deviation (divides by T-1). NaN for a single trial.
    pub fn stddev(&self) -> f64 {
        let t = self.trials();
        if t < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        let squares = kahan_sum(self.thresholds.iter().map(|x| (x - mean) * (x - mean)));
        (squares / (t - 1) as f64).sqrt()
    }

    fn half_width(&self) -> f64 {
        CONFIDENCE_95 * self.stddev() / (self.trials() as f64).sqrt()
    }

    /// Low end of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - self.half_width()
    }

    /// High end of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + self.half_width()
    }
}

pub fn trial_rng(seed: u64, trial: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(trial as u64);
    rng
}

// Kahan compensated summation.
fn kahan_sum<I: Iterator<Item = f64>>(values: I) -> f64 {
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for x in values {
        let y = x - compensation;
        let t = sum + y;
        compensation = (t - sum) - y;
        sum = t;
    }
    sum
}

#[macro_use] extern crate log;

use std::fs::File;
use std::time::Instant;

use clap::Parser;
use serde_json::json;
use simplelog::*;

use percolation::config::{positive, Settings};
use percolation::PercolationStats;

/// Estimates the percolation threshold of an N-by-N grid by Monte Carlo
/// simulation.
#[derive(Parser, Debug)]
#[command(version, about, allow_negative_numbers = true)]
struct Args {
    /// Grid size N
    n: i64,
    /// Number of independent trials T
    trials: i64,
}

fn init_logging(settings: &Settings) -> anyhow::Result<()> {
    let config = ConfigBuilder::new().set_time_level(LevelFilter::Off).build();
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        settings.log_level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let Some(path) = &settings.log_file {
        loggers.push(WriteLogger::new(settings.file_log_level(), config, File::create(path)?));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let timer = Instant::now();
    let args = Args::parse();
    let settings = Settings::from_env()?;
    init_logging(&settings)?;

    let n = positive("grid size", args.n)?;
    let trials = positive("trial count", args.trials)?;
    let seed = settings.seed.unwrap_or_else(rand::random);
    let stats = PercolationStats::run_seeded(n, trials, seed)?;

    println!("mean                    = {}", stats.mean());
    println!("stddev                  = {}", stats.stddev());
    println!("95% confidence interval = {}, {}", stats.confidence_lo(), stats.confidence_hi());
    info!("{}", json!({
        "n": n,
        "trials": trials,
        "seed": seed,
        "mean": stats.mean(),
        "stddev": stats.stddev(),
        "confidence_lo": stats.confidence_lo(),
        "confidence_hi": stats.confidence_hi(),
    }));
    println!("{}", timer.elapsed().as_secs_f64());
    Ok(())
}

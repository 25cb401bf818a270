#[macro_use] extern crate log;

mod error;
mod disjoint_set;
mod site;
mod percolation;
mod stats;
pub mod config;

pub use error::{Error, Result};
pub use disjoint_set::DisjointSet;
pub use site::{Site, Direction};
pub use percolation::Percolation;
pub use stats::{PercolationStats, UniformSource, run_trial, trial_rng, CONFIDENCE_95};

use bubbles_core::*;
use bubbles_metric::Metric;
use clap::Parser;
use std::path::PathBuf;

/// Environment variable consulted for the seed when `--seed` is absent.
pub const SEED_VAR: &str = "BUBBLES_SEED";

#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Cluster a random 2D point cloud under every distance metric",
    long_about = None
)]
pub struct Args {
    /// Number of random points in the unit square
    #[arg(short = 'n', long, default_value_t = N)]
    pub points: usize,
    /// Number of clusters per run
    #[arg(short = 'k', long, default_value_t = K)]
    pub clusters: usize,
    /// Iteration budget per run
    #[arg(short = 't', long, default_value_t = ITERATIONS)]
    pub iterations: usize,
    /// Seed for both the point cloud and centroid initialization [default: $BUBBLES_SEED, else unix time]
    #[arg(short = 's', long)]
    pub seed: Option<u64>,
    /// Directory for charts and summaries
    #[arg(short = 'o', long, default_value = "out")]
    pub output: PathBuf,
    /// Metric to run, by name or alias; repeatable [default: all]
    #[arg(short = 'm', long = "metric")]
    pub metrics: Vec<Metric>,
    /// Worker threads
    #[arg(long, default_value_t = num_cpus::get())]
    pub threads: usize,
}

impl Args {
    /// The explicit seed, else a parseable `BUBBLES_SEED`, else the clock.
    pub fn seed(&self) -> u64 {
        self.seed
            .or_else(|| {
                std::env::var(SEED_VAR)
                    .ok()
                    .and_then(|s| s.trim().parse().ok())
            })
            .unwrap_or_else(now)
    }
    /// Requested metrics in registry order without repeats; all of them when
    /// none were named.
    pub fn metrics(&self) -> Vec<Metric> {
        Metric::all()
            .into_iter()
            .filter(|m| self.metrics.is_empty() || self.metrics.contains(m))
            .collect()
    }
}

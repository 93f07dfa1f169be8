//! Bubbles Binary
//!
//! Draws a random cloud, clusters it under every distance metric, and
//! writes one chart and one summary per metric.
//!
//! Options: --points, --clusters, --iterations, --seed, --output, --metric, --threads

use bubbles::*;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log();
    rayon::ThreadPoolBuilder::new()
        .num_threads(args.threads)
        .build_global()?;
    let summaries = Run::from(&args).start()?;
    println!("{}", Table(&summaries));
    Ok(())
}

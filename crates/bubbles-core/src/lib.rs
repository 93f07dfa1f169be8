//! Core type aliases, errors, traits, and constants for bubbles.
//!
//! This crate provides the foundational types and configuration parameters
//! shared by the metric set, the clustering engine, and the renderer.
#![allow(dead_code)]

mod error;

pub use error::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// A single feature value of a point (an X or a Y).
pub type Coordinate = f64;
/// Distances, inertia, and anything else a metric returns.
pub type Energy = f64;
/// Cluster identifier in [0, K).
pub type Label = usize;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation from an explicit source of randomness.
///
/// There is no process-wide generator: whoever wants randomness owns an rng
/// and threads it through.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random<R: rand::Rng>(rng: &mut R) -> Self;
}

// ============================================================================
// POINT CLOUD
// ============================================================================
/// Number of features per generated point (X and Y).
pub const DIMENSION: usize = 2;
/// Number of points in the generated cloud.
pub const N: usize = 1000;

// ============================================================================
// K-MEANS CLUSTERING
// Lloyd iterations under a pluggable metric, one run per metric.
// ============================================================================
/// Number of clusters per run.
pub const K: usize = 7;
/// Hard ceiling on update+assign iterations per run.
pub const ITERATIONS: usize = 10;
/// Seed used when a caller does not care about the initialization draw.
pub const SEED: u64 = 0x5EED;

// ============================================================================
// RENDERING
// 4in x 4in charts at 72pt per inch.
// ============================================================================
/// Chart width and height in points.
pub const CHART_SIZE: f64 = 288.;
/// Bubble radius for the raw, unclustered cloud.
pub const RAW_RADIUS: f64 = 2.;
/// Bubble radius for clustered points.
pub const CLUSTER_RADIUS: f64 = 5.;
/// Channel budget split across cluster colors.
pub const COLOR_SPAN: u8 = 250;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Seconds since the unix epoch, used as the default initialization seed.
pub fn now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(SEED)
}

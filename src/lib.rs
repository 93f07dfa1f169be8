//! Metric-pluggable k-means over a synthetic 2D point cloud.
//!
//! One uniform cloud is drawn, charted, and then clustered once per distance
//! metric, in parallel. Each run gets its own chart and JSON summary.
//!
//! ## Crates
//!
//! - [`bubbles_core`] — Aliases, constants, the error type, logging setup
//! - [`bubbles_metric`] — The seven named distance functions
//! - [`bubbles_kmeans`] — Lloyd's algorithm over any [`Distance`]
//! - [`bubbles_render`] — SVG bubble charts
pub use bubbles_core::*;
pub use bubbles_kmeans::*;
pub use bubbles_metric::*;
pub use bubbles_render::*;

#[cfg(feature = "cli")]
mod cli;
#[cfg(feature = "cli")]
mod run;
#[cfg(feature = "cli")]
mod summary;

#[cfg(feature = "cli")]
pub use cli::*;
#[cfg(feature = "cli")]
pub use run::*;
#[cfg(feature = "cli")]
pub use summary::*;

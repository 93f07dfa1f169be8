//! SVG bubble charts for point clouds and their clusterings.
//!
//! ## Core Types
//!
//! - [`ClusterSet`] — Points grouped by cluster label
//! - [`Palette`] — Cluster label to color
//! - [`Bubbles`] — One series: points drawn as equal-radius discs of one color
//! - [`Chart`] — A titled, axis-labelled plot of bubble series
//!
//! Charts are 4in × 4in documents written as standalone SVG.
mod bubbles;
mod chart;
mod clusterset;
mod palette;

pub use bubbles::*;
pub use chart::*;
pub use clusterset::*;
pub use palette::*;

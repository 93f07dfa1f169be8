//! Lloyd k-means generalized to an arbitrary distance function.
//!
//! Given a [`Dataset`] of equal-length points, a cluster count K, a
//! [`Distance`](bubbles_metric::Distance) and an iteration budget, the engine
//! labels every point with a cluster id in [0, K).
//!
//! ## Algorithm
//!
//! 1. **Seed** — K distinct points drawn without replacement from a seeded rng
//! 2. **Assign** — Every point goes to its nearest centroid (lowest id on ties)
//! 3. **Update** — Every centroid moves to the mean of its points; empty
//!    clusters stay where they were
//! 4. **Stop** — When no label changes, or after the iteration budget
//!
//! ## Core Types
//!
//! - [`KMeans`] — Configured run with stepwise and one-shot entry points
//! - [`Lloyd`] — The assign/update kernel shared by anything holding centroids
//! - [`Assignment`] — One label per point, the engine's sole output
//! - [`Clustering`] — Assignment plus run metadata (iterations, inertia)
//!
//! The engine has no global state and does no I/O; independent runs can
//! proceed concurrently over the same dataset.
mod absorb;
mod assignment;
mod clustering;
mod dataset;
mod fixture;
mod kmeans;
mod lloyd;
mod point;

pub use absorb::*;
pub use assignment::*;
pub use clustering::*;
pub use dataset::*;
pub use fixture::*;
pub use kmeans::*;
pub use lloyd::*;
pub use point::*;

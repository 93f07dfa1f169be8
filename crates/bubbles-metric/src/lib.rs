//! Distance metrics for metric-pluggable clustering.
//!
//! Every metric is a pure function of two equal-length vectors returning a
//! non-negative scalar that is exactly zero for identical inputs. None of them
//! is required to be symmetric or to satisfy the triangle inequality, so the
//! clustering engine never relies on either.
//!
//! ## Core Types
//!
//! - [`Distance`] — The capability: one kernel method plus a checked wrapper
//! - [`Metric`] — The fixed, named registry of the seven metrics below
//!
//! ## Metrics
//!
//! - [`SquaredEuclidean`], [`Euclidean`], [`Manhattan`], [`Chebyshev`]
//! - [`Hamming`] — Bit-exact positional mismatch count
//! - [`BrayCurtis`], [`Canberra`] — Ratio metrics from ecology
mod braycurtis;
mod canberra;
mod chebyshev;
mod distance;
mod euclidean;
mod hamming;
mod manhattan;
mod metric;
mod squared;

pub use braycurtis::*;
pub use canberra::*;
pub use chebyshev::*;
pub use distance::*;
pub use euclidean::*;
pub use hamming::*;
pub use manhattan::*;
pub use metric::*;
pub use squared::*;

use super::*;
use bubbles_core::*;

/// [Euclidean Distance](https://en.wikipedia.org/wiki/Euclidean_distance)
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Distance for Euclidean {
    #[inline]
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        SquaredEuclidean.measure(a, b).sqrt()
    }
}

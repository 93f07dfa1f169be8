use super::*;
use bubbles_core::*;

/// [Squared Euclidean Distance](https://en.wikipedia.org/wiki/Euclidean_distance#Squared_Euclidean_distance)
///
/// Sum of squared per-feature differences. The metric Lloyd's update step
/// actually minimizes, so it is the reference for convergence properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquaredEuclidean;

impl Distance for SquaredEuclidean {
    #[inline]
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| x - y)
            .map(|d| d * d)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squared_euclidean_sums_squares() {
        let d = SquaredEuclidean.measure(&[1., 2., 3.], &[4., 5., 6.]);
        assert!((d - 27.).abs() < 1e-12);
    }
}

use super::*;
use bubbles_core::*;

/// [Hamming Distance](https://en.wikipedia.org/wiki/Hamming_distance)
///
/// Number of positions whose values are not bit-for-bit identical. On
/// continuous coordinates two distinct points almost never share a feature,
/// so this collapses to "every other point is maximally far". No epsilon is
/// applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming;

impl Distance for Hamming {
    #[inline]
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter()
            .zip(b.iter())
            .filter(|(x, y)| x.to_bits() != y.to_bits())
            .count() as Energy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hamming_counts_mismatched_positions() {
        assert_eq!(Hamming.measure(&[1., 2., 3.], &[1., 5., 6.]), 2.);
        assert_eq!(Hamming.measure(&[1., 2.], &[1., 2.]), 0.);
    }

    #[test]
    fn hamming_ignores_magnitude() {
        let near = Hamming.measure(&[0.5, 0.5], &[0.5 + 1e-12, 0.5 + 1e-12]);
        let far = Hamming.measure(&[0.5, 0.5], &[1e9, -1e9]);
        assert_eq!(near, far);
    }

    #[test]
    fn hamming_compares_bits_not_values() {
        assert_eq!(Hamming.measure(&[0.], &[-0.]), 1.);
    }
}

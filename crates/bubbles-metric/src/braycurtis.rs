use super::*;
use bubbles_core::*;

/// [Bray-Curtis Dissimilarity](https://en.wikipedia.org/wiki/Bray%E2%80%93Curtis_dissimilarity)
///
/// Σ|aᵢ - bᵢ| / Σ|aᵢ + bᵢ|. When the denominator vanishes the vectors are
/// either both zero (distance 0) or exact negations of each other, which is
/// treated as infinitely far rather than producing NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrayCurtis;

impl Distance for BrayCurtis {
    #[inline]
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        let (num, den) = a
            .iter()
            .zip(b.iter())
            .map(|(x, y)| ((x - y).abs(), (x + y).abs()))
            .fold((0., 0.), |(n, d), (dn, dd)| (n + dn, d + dd));
        match (num == 0., den == 0.) {
            (true, _) => 0.,
            (false, true) => Energy::INFINITY,
            (false, false) => num / den,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn braycurtis_ratio_of_differences_to_sums() {
        // |1-3| + |2-2| = 2 over |1+3| + |2+2| = 8
        let d = BrayCurtis.measure(&[1., 2.], &[3., 2.]);
        assert!((d - 0.25).abs() < 1e-12);
    }

    #[test]
    fn braycurtis_zero_vectors() {
        assert_eq!(BrayCurtis.measure(&[0., 0.], &[0., 0.]), 0.);
    }

    #[test]
    fn braycurtis_negations_are_infinitely_far() {
        assert_eq!(BrayCurtis.measure(&[1., -2.], &[-1., 2.]), Energy::INFINITY);
    }
}

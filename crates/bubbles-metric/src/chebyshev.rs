use super::*;
use bubbles_core::*;

/// [Chebyshev Distance](https://en.wikipedia.org/wiki/Chebyshev_distance)
#[derive(Debug, Clone, Copy, Default)]
pub struct Chebyshev;

impl Distance for Chebyshev {
    #[inline]
    fn measure(&self, a: &[Coordinate], b: &[Coordinate]) -> Energy {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y).abs())
            .fold(0., Energy::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_takes_largest_gap() {
        assert_eq!(Chebyshev.measure(&[1., 2., 3.], &[4., 5., 7.]), 4.);
        assert_eq!(Chebyshev.measure(&[], &[]), 0.);
    }
}

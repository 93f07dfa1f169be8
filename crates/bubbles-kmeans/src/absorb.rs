use super::*;
use bubbles_core::*;

/// Incremental aggregation of points into a centroid.
///
/// The "absorb" pattern generalizes mean computation: points are folded in one
/// at a time, and the centroid is read out once every point has been seen.
///
/// # Invariant
///
/// After absorbing N points, [`Absorb::collapse`] yields their centroid, or
/// `None` if N = 0.
pub trait Absorb<P> {
    /// Folds one more point into the aggregate.
    fn absorb(&mut self, point: &P);
    /// Reads the centroid out of the aggregate.
    fn collapse(&self) -> Option<P>;
}

/// Running per-feature sum and count; collapses to the arithmetic mean.
#[derive(Debug, Clone)]
pub struct Mean {
    sum: Vec<Coordinate>,
    n: usize,
}

impl Mean {
    /// Empty aggregate over points of the given dimension.
    pub fn empty(dimension: usize) -> Self {
        Self {
            sum: vec![0.; dimension],
            n: 0,
        }
    }
}

impl Absorb<Point> for Mean {
    fn absorb(&mut self, point: &Point) {
        debug_assert_eq!(self.sum.len(), point.dimension());
        self.sum
            .iter_mut()
            .zip(point.features())
            .for_each(|(s, c)| *s += c);
        self.n += 1;
    }
    fn collapse(&self) -> Option<Point> {
        match self.n {
            0 => None,
            n => Some(Point::from(
                self.sum
                    .iter()
                    .map(|s| s / n as Coordinate)
                    .collect::<Vec<Coordinate>>(),
            )),
        }
    }
}

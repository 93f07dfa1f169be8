use bubbles_core::*;

/// An immutable, fixed-length vector of features.
///
/// Points generated by this system are 2D (X, Y), but nothing here assumes
/// it: the engine works for whatever dimensionality the caller supplies.
#[derive(Debug, Clone, PartialEq)]
pub struct Point(Vec<Coordinate>);

impl Point {
    /// Number of features.
    pub fn dimension(&self) -> usize {
        self.0.len()
    }
    /// Feature slice, as handed to distance functions.
    pub fn features(&self) -> &[Coordinate] {
        &self.0
    }
    /// First feature. Panics on a zero-dimensional point.
    pub fn x(&self) -> Coordinate {
        self.0[0]
    }
    /// Second feature. Panics on a point with fewer than two features.
    pub fn y(&self) -> Coordinate {
        self.0[1]
    }
    /// True when no feature is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|c| c.is_finite())
    }
    /// Bit pattern of every feature, with `-0.0` folded into `0.0`. Two
    /// points are the same point exactly when their keys are equal, which
    /// agrees with `==` on finite points.
    pub fn key(&self) -> Vec<u64> {
        self.0.iter().map(|c| (c + 0.).to_bits()).collect()
    }
}

impl AsRef<[Coordinate]> for Point {
    fn as_ref(&self) -> &[Coordinate] {
        self.features()
    }
}

impl From<Vec<Coordinate>> for Point {
    fn from(features: Vec<Coordinate>) -> Self {
        Self(features)
    }
}
impl<const D: usize> From<[Coordinate; D]> for Point {
    fn from(features: [Coordinate; D]) -> Self {
        Self(features.to_vec())
    }
}
impl From<(Coordinate, Coordinate)> for Point {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self(vec![x, y])
    }
}
impl From<Point> for Vec<Coordinate> {
    fn from(point: Point) -> Self {
        point.0
    }
}

/// Uniform in the unit square (unit hypercube of [`DIMENSION`]).
impl Arbitrary for Point {
    fn random<R: rand::Rng>(rng: &mut R) -> Self {
        Self((0..DIMENSION).map(|_| rng.random::<Coordinate>()).collect())
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:.4}", c)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn random_points_live_in_unit_square() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..256 {
            let p = Point::random(rng);
            assert_eq!(p.dimension(), DIMENSION);
            assert!(p.features().iter().all(|c| (0. ..1.).contains(c)));
        }
    }

    #[test]
    fn keys_fold_signed_zero() {
        assert_eq!(Point::from((0., 1.)).key(), Point::from((-0., 1.)).key());
        assert_ne!(Point::from((0., 1.)).key(), Point::from((1e-300, 1.)).key());
        assert_eq!(Point::from((0.5, 1.)).key(), Point::from([0.5, 1.]).key());
    }

    #[test]
    fn non_finite_points_are_flagged() {
        assert!(Point::from((0.5, 1.)).is_finite());
        assert!(!Point::from((Coordinate::NAN, 1.)).is_finite());
        assert!(!Point::from((0.5, Coordinate::INFINITY)).is_finite());
    }
}

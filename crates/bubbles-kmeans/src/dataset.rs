use super::*;
use bubbles_core::*;
use std::collections::HashSet;

/// A validated, ordered, read-only collection of points.
///
/// Construction guarantees the invariants the engine depends on:
/// - at least one point
/// - every point has the same, non-zero dimension
/// - every feature is finite
///
/// Indices are stable for the dataset's lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    points: Vec<Point>,
    dimension: usize,
}

impl Dataset {
    /// Draws n points uniformly from the unit square.
    pub fn random<R: rand::Rng>(n: usize, rng: &mut R) -> Result<Self> {
        Self::try_from((0..n).map(|_| Point::random(rng)).collect::<Vec<Point>>())
    }
    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }
    /// Never true for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
    /// Shared dimension of every point.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    pub fn point(&self, i: usize) -> &Point {
        &self.points[i]
    }
    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
    /// Number of bit-distinct points.
    pub fn distinct(&self) -> usize {
        self.points
            .iter()
            .map(Point::key)
            .collect::<HashSet<Vec<u64>>>()
            .len()
    }
}

impl TryFrom<Vec<Point>> for Dataset {
    type Error = Error;
    fn try_from(points: Vec<Point>) -> Result<Self> {
        let dimension = points
            .first()
            .map(Point::dimension)
            .ok_or_else(|| Error::invalid("empty dataset"))?;
        if dimension == 0 {
            return Err(Error::invalid("points must have at least one feature"));
        }
        if let Some(p) = points.iter().find(|p| p.dimension() != dimension) {
            return Err(Error::DimensionMismatch {
                expected: dimension,
                found: p.dimension(),
            });
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::invalid(format!("point {} has a non-finite feature", i)));
        }
        Ok(Self { points, dimension })
    }
}

impl TryFrom<Vec<Vec<Coordinate>>> for Dataset {
    type Error = Error;
    fn try_from(rows: Vec<Vec<Coordinate>>) -> Result<Self> {
        Self::try_from(rows.into_iter().map(Point::from).collect::<Vec<Point>>())
    }
}

impl TryFrom<&[(Coordinate, Coordinate)]> for Dataset {
    type Error = Error;
    fn try_from(pairs: &[(Coordinate, Coordinate)]) -> Result<Self> {
        Self::try_from(pairs.iter().copied().map(Point::from).collect::<Vec<Point>>())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

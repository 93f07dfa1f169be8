use super::*;
use bubbles_core::*;

/// A series of equal-radius discs sharing one color.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubbles {
    points: Vec<(Coordinate, Coordinate)>,
    color: Rgb,
    radius: f64,
}

impl Bubbles {
    pub fn new(points: Vec<(Coordinate, Coordinate)>, color: Rgb, radius: f64) -> Self {
        Self {
            points,
            color,
            radius,
        }
    }
    pub fn points(&self) -> &[(Coordinate, Coordinate)] {
        &self.points
    }
    pub fn color(&self) -> Rgb {
        self.color
    }
    /// Radius in chart points, independent of the data scale.
    pub fn radius(&self) -> f64 {
        self.radius
    }
    pub fn len(&self) -> usize {
        self.points.len()
    }
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

use super::*;
use bubbles_core::*;

/// Test fixture: square blobs of points around known centers.
///
/// Every blob holds the same number of points, drawn uniformly from a square
/// of half-width `spread` around its center by a seeded rng, and laid out
/// blob after blob. With centers far apart relative to `spread`, the true
/// partition is known, which is what the convergence tests and benchmarks
/// compare against.
#[derive(Debug, Clone)]
pub struct Blobs {
    centers: Vec<(Coordinate, Coordinate)>,
    per: usize,
    spread: Coordinate,
    seed: u64,
}

impl Blobs {
    pub fn new(centers: Vec<(Coordinate, Coordinate)>, per: usize) -> Self {
        Self {
            centers,
            per,
            spread: 0.5,
            seed: SEED,
        }
    }
    pub fn with_spread(mut self, spread: Coordinate) -> Self {
        self.spread = spread;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
    /// Number of blobs.
    pub fn k(&self) -> usize {
        self.centers.len()
    }
    /// Generates the points.
    pub fn dataset(&self) -> Result<Dataset> {
        use rand::Rng;
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        let ref mut rng = SmallRng::seed_from_u64(self.seed);
        let spread = self.spread;
        let points = self
            .centers
            .iter()
            .flat_map(|&center| std::iter::repeat(center).take(self.per))
            .map(|(x, y)| {
                let dx = rng.random_range(-spread..=spread);
                let dy = rng.random_range(-spread..=spread);
                Point::from((x + dx, y + dy))
            })
            .collect::<Vec<Point>>();
        Dataset::try_from(points)
    }
    /// Blob index of every generated point.
    pub fn truth(&self) -> Vec<Label> {
        (0..self.k())
            .flat_map(|j| std::iter::repeat(j).take(self.per))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blobs_stay_within_spread() {
        let blobs = Blobs::new(vec![(0., 0.), (10., 10.)], 20).with_spread(1.);
        let data = blobs.dataset().expect("valid");
        assert_eq!(data.len(), 40);
        for (p, j) in data.iter().zip(blobs.truth()) {
            let (cx, cy) = [(0., 0.), (10., 10.)][j];
            assert!((p.x() - cx).abs() <= 1.);
            assert!((p.y() - cy).abs() <= 1.);
        }
    }
}

use super::*;
use bubbles_core::*;
use rayon::prelude::*;

/// The assign/update kernel of Lloyd's algorithm.
///
/// Implementors expose their points, their current centroids, and a distance
/// between a point and a centroid. The assignment pass and the mean update
/// are derived from those three.
///
/// No metric property beyond `d(a, a) = 0` is assumed, so there is no
/// triangle-inequality pruning here: every point is compared against every
/// centroid on every pass.
///
/// # Complexity
///
/// O(N × K × D) distance work per assignment pass, O(N × D) per update.
pub trait Lloyd: Sync {
    /// Returns the data points to cluster.
    fn points(&self) -> &[Point];
    /// Returns current centroid positions.
    fn kmeans(&self) -> &[Point];
    /// Distance from a point to a centroid, in that order.
    fn distance(&self, x: &Point, c: &Point) -> Result<Energy>;

    /// Gets point by index.
    fn point(&self, i: usize) -> &Point {
        &self.points()[i]
    }
    /// Gets centroid by index.
    fn kmean(&self, j: usize) -> &Point {
        &self.kmeans()[j]
    }
    /// Finds nearest centroid for a point (K distance calls).
    ///
    /// Ties resolve to the lowest cluster id: a later centroid only wins on a
    /// strictly smaller distance. A NaN distance never wins; a point with no
    /// comparable distance at all lands in cluster 0.
    fn neighbor(&self, i: usize) -> Result<(Label, Energy)> {
        let x = self.point(i);
        let mut best = (0, Energy::INFINITY);
        for (j, c) in self.kmeans().iter().enumerate() {
            let d = self.distance(x, c)?;
            if d < best.1 {
                best = (j, d);
            }
        }
        Ok(best)
    }
    /// Labels every point with its nearest centroid.
    ///
    /// Runs in parallel across points; the returned vector is a complete
    /// snapshot, so the update step never sees a partial assignment.
    fn assign(&self) -> Result<Vec<Label>> {
        (0..self.points().len())
            .into_par_iter()
            .map(|i| self.neighbor(i).map(|(j, _)| j))
            .collect()
    }
    /// Computes new centroids from an assignment.
    ///
    /// Each centroid becomes the mean of its points. A cluster that lost all
    /// of its points keeps its previous centroid.
    fn centroids(&self, labels: &[Label]) -> Vec<Point> {
        let dimension = self.kmean(0).dimension();
        labels
            .iter()
            .zip(self.points())
            .fold(
                vec![Mean::empty(dimension); self.kmeans().len()],
                |mut means, (&j, x)| {
                    means[j].absorb(x);
                    means
                },
            )
            .iter()
            .enumerate()
            .map(|(j, mean)| mean.collapse().unwrap_or_else(|| self.kmean(j).clone()))
            .collect()
    }
    /// Sum of each point's distance to its assigned centroid.
    fn inertia(&self, labels: &[Label]) -> Result<Energy> {
        labels
            .iter()
            .enumerate()
            .map(|(i, &j)| self.distance(self.point(i), self.kmean(j)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bubbles_metric::*;

    struct Frozen {
        points: Vec<Point>,
        kmeans: Vec<Point>,
    }

    impl Lloyd for Frozen {
        fn points(&self) -> &[Point] {
            &self.points
        }
        fn kmeans(&self) -> &[Point] {
            &self.kmeans
        }
        fn distance(&self, x: &Point, c: &Point) -> Result<Energy> {
            Euclidean.distance(x.features(), c.features())
        }
    }

    fn frozen(points: &[(Coordinate, Coordinate)], kmeans: &[(Coordinate, Coordinate)]) -> Frozen {
        Frozen {
            points: points.iter().copied().map(Point::from).collect(),
            kmeans: kmeans.iter().copied().map(Point::from).collect(),
        }
    }

    #[test]
    fn ties_go_to_lowest_cluster() {
        let km = frozen(&[(0., 0.)], &[(5., 5.), (-1., 0.), (1., 0.), (0., -1.)]);
        assert_eq!(km.neighbor(0), Ok((1, 1.)));
    }

    #[test]
    fn assign_picks_nearest() {
        let km = frozen(&[(0., 0.), (9., 9.), (1., 1.)], &[(10., 10.), (0., 0.)]);
        assert_eq!(km.assign(), Ok(vec![1, 0, 1]));
    }

    #[test]
    fn empty_clusters_keep_their_centroid() {
        let km = frozen(&[(0., 0.), (2., 2.)], &[(1., 1.), (7., 7.)]);
        let next = km.centroids(&[0, 0]);
        assert_eq!(next, vec![Point::from((1., 1.)), Point::from((7., 7.))]);
    }

    #[test]
    fn centroids_are_means() {
        let km = frozen(&[(0., 0.), (2., 4.), (10., 10.)], &[(0., 0.), (10., 10.)]);
        let next = km.centroids(&[0, 0, 1]);
        assert_eq!(next, vec![Point::from((1., 2.)), Point::from((10., 10.))]);
    }

    #[test]
    fn inertia_sums_assigned_distances() {
        let km = frozen(&[(0., 3.), (4., 0.)], &[(0., 0.)]);
        assert_eq!(km.inertia(&[0, 0]), Ok(7.));
    }

    #[test]
    fn nan_distances_never_win() {
        struct Broken(Frozen);
        impl Lloyd for Broken {
            fn points(&self) -> &[Point] {
                self.0.points()
            }
            fn kmeans(&self) -> &[Point] {
                self.0.kmeans()
            }
            fn distance(&self, _: &Point, c: &Point) -> Result<Energy> {
                Ok(if c.x() < 0. { Energy::NAN } else { 1. })
            }
        }
        let km = Broken(frozen(&[(0., 0.)], &[(-1., 0.), (1., 0.)]));
        assert_eq!(km.neighbor(0), Ok((1, 1.)));
        let km = Broken(frozen(&[(0., 0.)], &[(-1., 0.), (-2., 0.)]));
        assert_eq!(km.neighbor(0).map(|(j, _)| j), Ok(0));
    }
}

use bubbles_core::*;
use bubbles_kmeans::Assignment;
use bubbles_kmeans::Dataset;
use std::collections::BTreeMap;

/// Dataset points grouped by their cluster label.
///
/// Only labels that actually own a point appear. Iteration is in label
/// order, and points keep their dataset order within a cluster.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterSet(BTreeMap<Label, Vec<(Coordinate, Coordinate)>>);

impl ClusterSet {
    /// Number of non-empty clusters.
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn get(&self, label: Label) -> Option<&[(Coordinate, Coordinate)]> {
        self.0.get(&label).map(Vec::as_slice)
    }
    pub fn iter(&self) -> impl Iterator<Item = (Label, &[(Coordinate, Coordinate)])> {
        self.0.iter().map(|(j, xy)| (*j, xy.as_slice()))
    }
    /// Total points across all clusters.
    pub fn size(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

impl TryFrom<(&Dataset, &Assignment)> for ClusterSet {
    type Error = Error;
    fn try_from((dataset, assignment): (&Dataset, &Assignment)) -> Result<Self> {
        if dataset.dimension() != DIMENSION {
            return Err(Error::invalid(format!(
                "can only draw {}D points, got {}D",
                DIMENSION,
                dataset.dimension()
            )));
        }
        if dataset.len() != assignment.len() {
            return Err(Error::invalid(format!(
                "{} labels for {} points",
                assignment.len(),
                dataset.len()
            )));
        }
        Ok(Self(dataset.iter().zip(assignment.iter()).fold(
            BTreeMap::new(),
            |mut groups, (p, j)| {
                groups.entry(j).or_insert_with(Vec::new).push((p.x(), p.y()));
                groups
            },
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_points_by_label() {
        let data = Dataset::try_from(&[(0., 0.), (1., 1.), (2., 2.)][..]).expect("valid");
        let labels = Assignment::try_from((vec![2, 0, 2], 3)).expect("valid");
        let set = ClusterSet::try_from((&data, &labels)).expect("2D");
        assert_eq!(set.len(), 2);
        assert_eq!(set.size(), 3);
        assert_eq!(set.get(0), Some(&[(1., 1.)][..]));
        assert_eq!(set.get(1), None);
        assert_eq!(set.get(2), Some(&[(0., 0.), (2., 2.)][..]));
    }

    #[test]
    fn rejects_points_that_are_not_planar() {
        let data = Dataset::try_from(vec![vec![0., 0., 0.], vec![1., 1., 1.]]).expect("valid");
        let labels = Assignment::try_from((vec![0, 0], 1)).expect("valid");
        assert!(matches!(
            ClusterSet::try_from((&data, &labels)),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn rejects_mismatched_lengths() {
        let data = Dataset::try_from(&[(0., 0.), (1., 1.)][..]).expect("valid");
        let labels = Assignment::try_from((vec![0], 1)).expect("valid");
        assert!(ClusterSet::try_from((&data, &labels)).is_err());
    }
}

use bubbles_core::*;
use std::collections::BTreeMap;

/// One cluster label per dataset point, in dataset order.
///
/// This is the only thing the engine hands back to its caller. Labels are
/// arbitrary names: two assignments describe the same partition whenever
/// they agree up to a relabeling (see [`Assignment::canonical`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    labels: Vec<Label>,
    k: usize,
}

impl Assignment {
    /// Wraps labels that are already known to lie in [0, k).
    pub(crate) fn new(labels: Vec<Label>, k: usize) -> Self {
        debug_assert!(labels.iter().all(|&j| j < k));
        Self { labels, k }
    }
    /// Number of labelled points.
    pub fn len(&self) -> usize {
        self.labels.len()
    }
    /// Never true for an assignment produced by the engine.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
    /// Number of clusters the labels range over.
    pub fn k(&self) -> usize {
        self.k
    }
    /// Label of point i.
    pub fn get(&self, i: usize) -> Option<Label> {
        self.labels.get(i).copied()
    }
    /// Labels in dataset order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.labels.iter().copied()
    }
    /// Points per cluster, indexed by label. Empty clusters count zero.
    pub fn sizes(&self) -> Vec<usize> {
        self.labels.iter().fold(vec![0; self.k], |mut sizes, &j| {
            sizes[j] += 1;
            sizes
        })
    }
    /// Indices of the points carrying each label.
    pub fn members(&self) -> BTreeMap<Label, Vec<usize>> {
        self.labels
            .iter()
            .enumerate()
            .fold(BTreeMap::new(), |mut members, (i, &j)| {
                members.entry(j).or_insert_with(Vec::new).push(i);
                members
            })
    }
    /// Relabels clusters in order of first appearance, so that equal
    /// partitions compare equal regardless of which ids they were given.
    pub fn canonical(&self) -> Vec<Label> {
        let mut names = BTreeMap::new();
        self.labels
            .iter()
            .map(|j| {
                let next = names.len();
                *names.entry(*j).or_insert(next)
            })
            .collect()
    }
}

/// Checked construction from raw labels and a cluster count.
impl TryFrom<(Vec<Label>, usize)> for Assignment {
    type Error = Error;
    fn try_from((labels, k): (Vec<Label>, usize)) -> Result<Self> {
        match labels.iter().find(|&&j| j >= k) {
            Some(j) => Err(Error::invalid(format!("label {} out of range for k = {}", j, k))),
            None => Ok(Self { labels, k }),
        }
    }
}

impl From<Assignment> for Vec<Label> {
    fn from(assignment: Assignment) -> Self {
        assignment.labels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_include_empty_clusters() {
        let a = Assignment::new(vec![0, 2, 2, 0, 2], 4);
        assert_eq!(a.sizes(), vec![2, 0, 3, 0]);
        assert_eq!(a.sizes().iter().sum::<usize>(), a.len());
    }

    #[test]
    fn canonical_ignores_label_names() {
        let a = Assignment::new(vec![1, 1, 0, 2], 3);
        let b = Assignment::new(vec![2, 2, 1, 0], 3);
        assert_eq!(a.canonical(), vec![0, 0, 1, 2]);
        assert_eq!(a.canonical(), b.canonical());
    }

    #[test]
    fn out_of_range_labels_are_rejected() {
        assert!(Assignment::try_from((vec![0, 1, 2], 3)).is_ok());
        assert!(Assignment::try_from((vec![0, 3], 3)).is_err());
    }

    #[test]
    fn members_group_indices() {
        let a = Assignment::new(vec![1, 0, 1], 2);
        let members = a.members();
        assert_eq!(members[&0], vec![1]);
        assert_eq!(members[&1], vec![0, 2]);
    }
}

use super::*;
use bubbles_core::*;

/// The result of one finished run: the assignment plus what the run saw.
///
/// Callers that only need labels take [`Clustering::assignment`]; the rest is
/// there to tell an early convergence apart from an exhausted budget.
#[derive(Debug, Clone)]
pub struct Clustering {
    assignment: Assignment,
    centroids: Vec<Point>,
    iterations: usize,
    converged: bool,
    inertia: Energy,
}

impl Clustering {
    pub(crate) fn new(
        assignment: Assignment,
        centroids: Vec<Point>,
        iterations: usize,
        converged: bool,
        inertia: Energy,
    ) -> Self {
        Self {
            assignment,
            centroids,
            iterations,
            converged,
            inertia,
        }
    }
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }
    /// Centroids the final labels were assigned against, indexed by label.
    ///
    /// On convergence these are also the means of the final clusters. When
    /// the budget runs out they are the means of the labels one iteration
    /// earlier, since the run stops right after reassigning.
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }
    /// Update+assign iterations actually run (never above the budget).
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// Whether the last iteration left every label unchanged.
    pub fn converged(&self) -> bool {
        self.converged
    }
    /// Sum of each point's distance to the centroid it was assigned against,
    /// under the run's metric.
    pub fn inertia(&self) -> Energy {
        self.inertia
    }
    pub fn into_assignment(self) -> Assignment {
        self.assignment
    }
}

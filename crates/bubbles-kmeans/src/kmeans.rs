use super::*;
use bubbles_core::*;
use bubbles_metric::Distance;
use std::collections::HashSet;

/// One k-means run over a borrowed dataset under a borrowed metric.
///
/// The run owns its centroids and its label buffer and nothing else, so any
/// number of runs may share one [`Dataset`] across threads.
///
/// # Lifecycle
///
/// - [`KMeans::fit`] runs to completion and returns a [`Clustering`]
/// - [`KMeans::init`] then [`KMeans::step`] drives the same run by hand
///
/// # Defaults
///
/// [`ITERATIONS`] iterations and the fixed [`SEED`]; override with
/// [`KMeans::with_iterations`] and [`KMeans::with_seed`].
pub struct KMeans<'a, D: Distance + ?Sized> {
    /// Points to cluster, read-only for the whole run.
    dataset: &'a Dataset,
    /// Distance from a point to a centroid.
    metric: &'a D,
    /// Number of clusters.
    k: usize,
    /// Iteration budget.
    t: usize,
    /// Seed for the initial centroid draw.
    seed: u64,
    /// Current centroids, indexed by label. Empty until initialized.
    kmeans: Vec<Point>,
    /// Current label of every point, in dataset order.
    labels: Vec<Label>,
}

impl<'a, D: Distance + ?Sized> KMeans<'a, D> {
    pub fn new(dataset: &'a Dataset, metric: &'a D, k: usize) -> Self {
        Self {
            dataset,
            metric,
            k,
            t: ITERATIONS,
            seed: SEED,
            kmeans: Vec::new(),
            labels: Vec::new(),
        }
    }
    /// Sets the hard ceiling on update+assign iterations.
    pub fn with_iterations(mut self, t: usize) -> Self {
        self.t = t;
        self
    }
    /// Sets the seed of the initial centroid draw.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
    /// Current labels; empty before [`KMeans::init`].
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
    /// Inertia of the current labels against the current centroids.
    pub fn inertia(&self) -> Result<Energy> {
        <Self as Lloyd>::inertia(self, &self.labels)
    }

    /// Rejects arguments no run could succeed with.
    pub fn validate(&self) -> Result<()> {
        let n = self.dataset.len();
        if self.k == 0 {
            return Err(Error::invalid("k must be positive"));
        }
        if n == 0 {
            return Err(Error::invalid("empty dataset"));
        }
        if self.k > n {
            return Err(Error::invalid(format!("k = {} exceeds {} points", self.k, n)));
        }
        let distinct = self.dataset.distinct();
        if self.k > distinct {
            return Err(Error::invalid(format!(
                "k = {} exceeds {} distinct points",
                self.k, distinct
            )));
        }
        Ok(())
    }

    /// Draws K distinct points uniformly without replacement.
    ///
    /// Indices are shuffled by a rng seeded from `self.seed` and walked in
    /// order, skipping any point equal to one already taken.
    fn seeds(&self) -> Vec<Point> {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        use rand::seq::SliceRandom;
        let ref mut rng = SmallRng::seed_from_u64(self.seed);
        let mut order = (0..self.dataset.len()).collect::<Vec<usize>>();
        order.shuffle(rng);
        let mut taken = HashSet::new();
        order
            .into_iter()
            .map(|i| self.dataset.point(i))
            .filter(|p| taken.insert(p.key()))
            .take(self.k)
            .cloned()
            .collect()
    }

    /// Validates, seeds the centroids, and runs the first assignment.
    pub fn init(&mut self) -> Result<()> {
        self.validate()?;
        self.kmeans = self.seeds();
        self.labels = self.assign()?;
        Ok(())
    }

    /// One update+assign iteration. Returns whether any label changed.
    ///
    /// Initializes instead if the run has not been initialized yet.
    pub fn step(&mut self) -> Result<bool> {
        if self.kmeans.is_empty() {
            self.init()?;
            return Ok(true);
        }
        self.kmeans = self.centroids(&self.labels);
        let labels = self.assign()?;
        let moved = labels
            .iter()
            .zip(self.labels.iter())
            .filter(|(a, b)| a != b)
            .count();
        self.labels = labels;
        log::trace!("{:<32}{:<32}", "kmeans relabelled", moved);
        Ok(moved > 0)
    }

    /// Runs to convergence or to the iteration budget, whichever comes first.
    pub fn fit(mut self) -> Result<Clustering> {
        log::debug!("{:<32}{:<32}", "kmeans initializing", self.k);
        self.init()?;
        let mut iterations = 0;
        let mut converged = false;
        while iterations < self.t {
            iterations += 1;
            if !self.step()? {
                converged = true;
                break;
            }
        }
        let inertia = self.inertia()?;
        log::debug!(
            "{:<32}{:<32}",
            "kmeans finished",
            format!("{} iterations, converged {}", iterations, converged)
        );
        Ok(Clustering::new(
            Assignment::new(self.labels, self.k),
            self.kmeans,
            iterations,
            converged,
            inertia,
        ))
    }
}

impl<D: Distance + ?Sized> Lloyd for KMeans<'_, D> {
    fn points(&self) -> &[Point] {
        self.dataset.points()
    }
    fn kmeans(&self) -> &[Point] {
        &self.kmeans
    }
    fn distance(&self, x: &Point, c: &Point) -> Result<Energy> {
        self.metric.distance(x.features(), c.features())
    }
}

/// Partitions `dataset` into `k` clusters under `metric`.
///
/// Fails with [`Error::InvalidArgument`] before doing any work when `k` is
/// zero, exceeds the number of points, or exceeds the number of distinct
/// points. Otherwise always returns a total assignment, whether the run
/// converged or ran out of its `t` iterations.
pub fn cluster<D: Distance + ?Sized>(
    dataset: &Dataset,
    k: usize,
    metric: &D,
    t: usize,
    seed: u64,
) -> Result<Assignment> {
    KMeans::new(dataset, metric, k)
        .with_iterations(t)
        .with_seed(seed)
        .fit()
        .map(Clustering::into_assignment)
}

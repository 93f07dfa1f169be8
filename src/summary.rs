use anyhow::Context;
use bubbles_kmeans::Clustering;
use bubbles_metric::Metric;
use colored::Colorize;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// What one metric's run produced, as written next to its chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub metric: String,
    pub n: usize,
    pub k: usize,
    pub seed: u64,
    pub iterations: usize,
    pub converged: bool,
    /// Sum of point-to-centroid distances under the run's own metric.
    /// Absent when it is not finite.
    pub inertia: Option<f64>,
    pub sizes: Vec<usize>,
}

impl Summary {
    pub fn new(metric: Metric, seed: u64, clustering: &Clustering) -> Self {
        let assignment = clustering.assignment();
        let inertia = clustering.inertia();
        Self {
            metric: metric.name().to_string(),
            n: assignment.len(),
            k: assignment.k(),
            seed,
            iterations: clustering.iterations(),
            converged: clustering.converged(),
            inertia: inertia.is_finite().then_some(inertia),
            sizes: assignment.sizes(),
        }
    }
    /// Writes the summary as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("serialize summary")?;
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        log::debug!("{:<32}{:<32}", "summary saved", path.display());
        Ok(())
    }
    /// Clusters that ended up with no points.
    pub fn empty(&self) -> usize {
        self.sizes.iter().filter(|&&s| s == 0).count()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let inertia = self
            .inertia
            .map(|e| format!("{:>12.4}", e))
            .unwrap_or_else(|| format!("{:>12}", "inf"));
        let converged = if self.converged {
            format!("{:<5}", "yes").green()
        } else {
            format!("{:<5}", "no").yellow()
        };
        let empty = match self.empty() {
            0 => format!("{:>5}", 0).normal(),
            e => format!("{:>5}", e).red(),
        };
        write!(
            f,
            "{} {:>5} {} {} {}  {:?}",
            format!("{:<26}", self.metric).bold(),
            self.iterations,
            converged,
            inertia,
            empty,
            self.sizes
        )
    }
}

/// A header plus one row per summary, for the terminal.
pub struct Table<'a>(pub &'a [Summary]);

impl std::fmt::Display for Table<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "{}",
            format!(
                "{:<26} {:>5} {:<5} {:>12} {:>5}  {}",
                "metric", "iters", "conv", "inertia", "empty", "sizes"
            )
            .dimmed()
        )?;
        for summary in self.0 {
            writeln!(f, "{}", summary)?;
        }
        Ok(())
    }
}

use super::*;
use anyhow::Context;
use rayon::prelude::*;
use std::path::PathBuf;

/// One invocation: a point cloud, its chart, and one clustering per metric.
#[derive(Debug, Clone)]
pub struct Run {
    n: usize,
    k: usize,
    t: usize,
    seed: u64,
    output: PathBuf,
    metrics: Vec<Metric>,
}

impl From<&Args> for Run {
    fn from(args: &Args) -> Self {
        Self {
            n: args.points,
            k: args.clusters,
            t: args.iterations,
            seed: args.seed(),
            output: args.output.clone(),
            metrics: args.metrics(),
        }
    }
}

impl Run {
    /// Generates, charts, and clusters the cloud under every metric.
    ///
    /// Setup failures (no points, unwritable output) abort the run. A metric
    /// that fails is logged and left out of the returned summaries, which
    /// otherwise follow registry order.
    pub fn start(&self) -> anyhow::Result<Vec<Summary>> {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;
        log::info!("{:<32}{:<32}", "seed", self.seed);
        log::info!("{:<32}{:<32}", "points", self.n);
        log::info!("{:<32}{:<32}", "clusters", self.k);
        std::fs::create_dir_all(&self.output)
            .with_context(|| format!("create directory {}", self.output.display()))?;
        let ref mut rng = SmallRng::seed_from_u64(self.seed);
        let dataset = Dataset::random(self.n, rng).context("generate points")?;
        Chart::raw(&dataset)?.save(self.output.join("bubble.svg"))?;
        let summaries = self
            .metrics
            .par_iter()
            .filter_map(|&metric| match self.trial(&dataset, metric) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    log::error!("{:<32}{:<32}", metric.name(), format!("{:#}", e));
                    None
                }
            })
            .collect::<Vec<Summary>>();
        log::info!(
            "{:<32}{:<32}",
            "metrics clustered",
            format!("{} of {}", summaries.len(), self.metrics.len())
        );
        Ok(summaries)
    }

    /// Clusters under one metric and writes its chart and summary.
    fn trial(&self, dataset: &Dataset, metric: Metric) -> anyhow::Result<Summary> {
        log::info!("{:<32}{:<32}", "clustering", metric.name());
        let clustering = KMeans::new(dataset, &metric, self.k)
            .with_iterations(self.t)
            .with_seed(self.seed)
            .fit()?;
        let set = ClusterSet::try_from((dataset, clustering.assignment()))?;
        Chart::clusters(&set, &Palette::new(self.k))
            .save(self.output.join(format!("bubble_{}.svg", metric.name())))?;
        let summary = Summary::new(metric, self.seed, &clustering);
        summary.save(self.output.join(format!("bubble_{}.json", metric.name())))?;
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bubbles-{}-{}", name, std::process::id()))
    }

    fn args(output: &Path, extra: &[&str]) -> Args {
        let output = output.to_string_lossy().into_owned();
        let base = ["bubbles", "-s", "9", "-o", output.as_str()];
        Args::try_parse_from(base.iter().chain(extra.iter()).copied()).expect("valid flags")
    }

    #[test]
    fn writes_a_chart_and_summary_per_metric() {
        let dir = scratch("all");
        let summaries = Run::from(&args(&dir, &["-n", "120"])).start().expect("writable temp dir");
        assert_eq!(summaries.len(), Metric::all().len());
        assert!(dir.join("bubble.svg").is_file());
        for metric in Metric::all() {
            assert!(dir.join(format!("bubble_{}.svg", metric.name())).is_file());
            let json = std::fs::read_to_string(dir.join(format!("bubble_{}.json", metric.name())))
                .expect("summary written");
            let summary = serde_json::from_str::<Summary>(&json).expect("valid summary");
            assert_eq!(summary.metric, metric.name());
            assert_eq!(summary.n, 120);
            assert_eq!(summary.k, K);
            assert_eq!(summary.seed, 9);
            assert_eq!(summary.sizes.iter().sum::<usize>(), 120);
        }
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn failing_metrics_are_skipped() {
        let dir = scratch("skip");
        // more clusters than points fails every run, but setup still succeeds
        let summaries = Run::from(&args(&dir, &["-n", "120", "-k", "500", "-m", "manhattan"]))
            .start()
            .expect("setup succeeds");
        assert!(summaries.is_empty());
        assert!(dir.join("bubble.svg").is_file());
        assert!(!dir.join("bubble_ManhattanDistance.svg").exists());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn empty_clouds_fail_setup() {
        let dir = scratch("empty");
        assert!(Run::from(&args(&dir, &["-n", "0"])).start().is_err());
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn same_seed_same_summaries() {
        let (a, b) = (scratch("a"), scratch("b"));
        let x = Run::from(&args(&a, &["-n", "120", "-m", "euclidean"])).start().expect("valid");
        let y = Run::from(&args(&b, &["-n", "120", "-m", "euclidean"])).start().expect("valid");
        assert_eq!(x, y);
        std::fs::remove_dir_all(&a).ok();
        std::fs::remove_dir_all(&b).ok();
    }
}

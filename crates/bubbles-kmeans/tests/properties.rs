use bubbles_core::DIMENSION;
use bubbles_core::Error;
use bubbles_core::ITERATIONS;
use bubbles_kmeans::*;
use bubbles_metric::*;
use proptest::prelude::*;

fn metric() -> impl Strategy<Value = Metric> {
    prop::sample::select(Metric::all().to_vec())
}

fn dataset() -> impl Strategy<Value = Dataset> {
    prop::collection::vec(prop::collection::vec(-10.0f64..10.0, DIMENSION), 1..40)
        .prop_map(|rows| Dataset::try_from(rows).expect("finite rows"))
}

proptest! {
    #[test]
    fn every_point_gets_a_label_in_range(
        data in dataset(),
        k in 1usize..6,
        metric in metric(),
        seed in any::<u64>(),
    ) {
        // too few distinct points is its own error case
        if k <= data.distinct() {
            let labels = cluster(&data, k, &metric, ITERATIONS, seed).unwrap();
            prop_assert_eq!(labels.len(), data.len());
            prop_assert_eq!(labels.k(), k);
            for l in labels.iter() {
                prop_assert!(l < k);
            }
        } else {
            prop_assert!(matches!(
                cluster(&data, k, &metric, ITERATIONS, seed),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn reruns_are_deterministic(
        data in dataset(),
        k in 1usize..6,
        metric in metric(),
        seed in any::<u64>(),
    ) {
        if k <= data.distinct() {
            let a = cluster(&data, k, &metric, ITERATIONS, seed).unwrap();
            let b = cluster(&data, k, &metric, ITERATIONS, seed).unwrap();
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn iterations_never_exceed_budget(
        data in dataset(),
        t in 0usize..8,
        seed in any::<u64>(),
    ) {
        let clustering = KMeans::new(&data, &SquaredEuclidean, 1)
            .with_iterations(t)
            .with_seed(seed)
            .fit()
            .unwrap();
        prop_assert!(clustering.iterations() <= t);
        prop_assert_eq!(clustering.assignment().sizes(), vec![data.len()]);
    }

    #[test]
    fn metrics_are_zero_on_identical_points(
        x in prop::collection::vec(-10.0f64..10.0, 1..8),
        metric in metric(),
    ) {
        prop_assert_eq!(metric.distance(&x, &x), Ok(0.));
    }

    #[test]
    fn metrics_are_non_negative(
        pair in (1usize..8).prop_flat_map(|d| (
            prop::collection::vec(-10.0f64..10.0, d),
            prop::collection::vec(-10.0f64..10.0, d),
        )),
        metric in metric(),
    ) {
        let (a, b) = pair;
        let d = metric.distance(&a, &b).unwrap();
        prop_assert!(d >= 0., "{} gave {}", metric, d);
    }
}

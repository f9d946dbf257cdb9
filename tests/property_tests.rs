use kpart::cluster::{Assigner, Backend, Clustering, Dataset, Kmeans, Kmedoids, NearestCenter};
use proptest::prelude::*;

fn points(max: usize) -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 2), 1..max)
}

proptest! {
    #[test]
    fn prop_kmeans_all_assigned(data in points(20), k in 1usize..5, seed in any::<u64>()) {
        // Skip if k > n
        if k <= data.len() {
            for backend in [Backend::Scalar, Backend::Ndarray] {
                let fit = Kmeans::new(k).with_seed(seed).with_backend(backend).fit(&data).unwrap();

                prop_assert_eq!(fit.labels.len(), data.len());
                prop_assert_eq!(fit.centroids.len(), k);
                for &l in &fit.labels {
                    prop_assert!(l < k);
                }
                prop_assert!(fit.iterations >= 1 && fit.iterations <= 100);
            }
        }
    }

    #[test]
    fn prop_kmedoids_all_assigned(data in points(20), k in 1usize..5, seed in any::<u64>()) {
        if k <= data.len() {
            let fit = Kmedoids::new(k).with_seed(seed).fit(&data).unwrap();

            prop_assert_eq!(fit.labels.len(), data.len());
            prop_assert_eq!(fit.medoids.len(), k);
            for &l in &fit.labels {
                prop_assert!(l < k);
            }
        }
    }

    #[test]
    fn prop_medoids_are_dataset_points(data in points(25), k in 1usize..5, seed in any::<u64>()) {
        if k <= data.len() {
            let fit = Kmedoids::new(k).with_seed(seed).fit(&data).unwrap();
            for (idx, m) in fit.medoid_indices.iter().zip(&fit.medoids) {
                prop_assert!(*idx < data.len());
                prop_assert_eq!(&data[*idx], m);
            }
        }
    }

    #[test]
    fn prop_labels_match_returned_centers(data in points(30), k in 1usize..6, seed in any::<u64>()) {
        if k <= data.len() {
            let fit = Kmeans::new(k).with_seed(seed).with_max_iter(2).fit(&data).unwrap();
            prop_assert_eq!(fit.predict(&data).unwrap(), fit.labels);
        }
    }

    #[test]
    fn prop_assign_idempotent(
        data in points(30),
        centers in prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 2), 1..6),
    ) {
        let ds = Dataset::new(&data).unwrap();
        let first = NearestCenter.assign(&ds, &centers).unwrap();
        let second = NearestCenter.assign(&ds, &centers).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_kmeans_objective_non_increasing(data in points(40), k in 1usize..5, seed in any::<u64>()) {
        // Each budget replays the same random stream, so a run capped at t
        // iterations ends exactly where a longer run is after t iterations.
        if k <= data.len() {
            let mut previous = f64::INFINITY;
            for t in 1..=8 {
                let fit = Kmeans::new(k)
                    .with_seed(seed)
                    .with_tol(1e-6)
                    .with_max_iter(t)
                    .fit(&data)
                    .unwrap();
                prop_assert!(
                    fit.inertia <= previous + 1e-4 * (1.0 + previous.min(1e12)),
                    "inertia rose from {} to {} at iteration {}",
                    previous,
                    fit.inertia,
                    t
                );
                previous = fit.inertia;
            }
        }
    }
}

#[test]
fn separated_pairs_scenario() {
    let data = vec![
        vec![0.0, 0.0],
        vec![0.0, 1.0],
        vec![10.0, 0.0],
        vec![10.0, 1.0],
    ];

    let fit = Kmeans::new(2).with_seed(42).fit(&data).unwrap();
    assert_eq!(fit.labels[0], fit.labels[1]);
    assert_eq!(fit.labels[2], fit.labels[3]);
    assert_ne!(fit.labels[0], fit.labels[2]);

    let mut centroids = fit.centroids.clone();
    centroids.sort_by(|a, b| a[0].total_cmp(&b[0]));
    assert_eq!(centroids, vec![vec![0.0, 0.5], vec![10.0, 0.5]]);

    let labels = Kmedoids::new(2).with_seed(42).fit_predict(&data).unwrap();
    assert_eq!(labels[0], labels[1]);
    assert_ne!(labels[0], labels[2]);
}

#[test]
fn k_equals_n_gives_singletons() {
    let data: Vec<Vec<f32>> = (0..6).map(|i| vec![i as f32 * 3.0, (i % 2) as f32]).collect();

    let kmeans = Kmeans::new(6).with_seed(9).fit_predict(&data).unwrap();
    let kmedoids = Kmedoids::new(6).with_seed(9).fit_predict(&data).unwrap();
    for labels in [kmeans, kmedoids] {
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), 6);
    }
}

#[test]
fn identical_points_single_cluster() {
    let data = vec![vec![-1.5, 2.5, 0.0]; 5];
    let fit = Kmeans::new(1).with_seed(0).fit(&data).unwrap();

    assert_eq!(fit.labels, vec![0; 5]);
    assert_eq!(fit.centroids, vec![vec![-1.5, 2.5, 0.0]]);
    assert_eq!(fit.iterations, 1);
    assert!(fit.converged);
}

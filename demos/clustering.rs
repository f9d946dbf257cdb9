//! K-means (both backends) and k-medoids on a simple 2D dataset.

use kpart::{Backend, Kmeans, Kmedoids};

fn main() {
    // Three well-separated clusters in 2D, plus one outlier.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
        // Outlier pulling on cluster C
        vec![14.0, -3.0],
    ];

    for backend in [Backend::Scalar, Backend::Ndarray] {
        let fit = Kmeans::new(3)
            .with_seed(42)
            .with_backend(backend)
            .fit(&data)
            .unwrap();
        println!(
            "=== K-means (k=3, {:?}): {} iterations, converged={}, inertia={:.4} ===",
            backend, fit.iterations, fit.converged, fit.inertia
        );
        for (i, label) in fit.labels.iter().enumerate() {
            println!("  point {:2} ({:5.1}, {:5.1}) => cluster {}", i, data[i][0], data[i][1], label);
        }
        for (c, centroid) in fit.centroids.iter().enumerate() {
            println!("  centroid {} = ({:6.3}, {:6.3})", c, centroid[0], centroid[1]);
        }
    }

    let fit = Kmedoids::new(3).with_seed(42).fit(&data).unwrap();
    println!(
        "\n=== K-medoids (k=3): {} iterations, converged={}, cost={:.4} ===",
        fit.iterations, fit.converged, fit.cost
    );
    for (i, label) in fit.labels.iter().enumerate() {
        println!("  point {:2} ({:5.1}, {:5.1}) => cluster {}", i, data[i][0], data[i][1], label);
    }
    for (c, (idx, m)) in fit.medoid_indices.iter().zip(&fit.medoids).enumerate() {
        println!("  medoid {} = point {} ({:5.1}, {:5.1})", c, idx, m[0], m[1]);
    }
}

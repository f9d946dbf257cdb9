//! Partitioning algorithms for dense vectors.
//!
//! Every algorithm here splits a dataset into exactly `k` groups by
//! alternating two steps until the partition stabilizes.
//!
//! ## The refinement skeleton
//!
//! ```text
//! seed k centers ─┬─> assign each point to nearest center
//!                 │   recompute centers from assignments
//!                 └── until centers stop changing or budget runs out
//! ```
//!
//! The loop ([`Refinement`]) is generic over four capabilities, each a trait
//! in this module:
//!
//! | Capability            | Implementations                                   |
//! |-----------------------|---------------------------------------------------|
//! | [`Seeder`]            | [`Init::KmeansPlusPlus`], [`Init::Random`]        |
//! | [`Assigner`]          | [`NearestCenter`], [`BroadcastNearest`]           |
//! | [`CenterUpdater`]     | [`MeanUpdate`], [`BroadcastMean`], [`MedoidUpdate`] |
//! | [`ConvergenceChecker`]| [`Tolerance`], [`BroadcastTolerance`], [`ExactMatch`] |
//!
//! ## Algorithms
//!
//! ### K-means
//!
//! Centers are synthetic centroids (coordinate-wise means).
//!
//! **Objective**: Minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - You know k in advance
//!
//! ### K-medoids
//!
//! Centers are actual dataset points. More robust to outliers than k-means,
//! quadratic in cluster size per update.
//!
//! ## Usage
//!
//! ```rust
//! use kpart::cluster::{Backend, Clustering, Kmeans, Kmedoids};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let fit = Kmeans::new(2).with_seed(42).fit(&data).unwrap();
//! assert_eq!(fit.labels[0], fit.labels[1]);  // First two together
//! assert_ne!(fit.labels[0], fit.labels[2]);  // Separate from last two
//!
//! // Same partition through the ndarray backend
//! let labels = Kmeans::new(2)
//!     .with_seed(42)
//!     .with_backend(Backend::Ndarray)
//!     .fit_predict(&data)
//!     .unwrap();
//! assert_eq!(labels.len(), data.len());
//!
//! // Medoids are always dataset points
//! let fit = Kmedoids::new(2).with_seed(42).fit(&data).unwrap();
//! for m in &fit.medoids {
//!     assert!(data.contains(m));
//! }
//! ```

mod assign;
mod converge;
mod dataset;
mod kmeans;
mod kmedoids;
mod refine;
mod seed;
mod traits;
mod update;
mod util;

pub use assign::{BroadcastNearest, NearestCenter};
pub use converge::{BroadcastTolerance, ExactMatch, Tolerance};
pub use dataset::Dataset;
pub use kmeans::{Backend, Kmeans, KmeansFit};
pub use kmedoids::{Kmedoids, KmedoidsFit};
pub use refine::{inertia, total_distance, Fit, Refinement};
pub use seed::Init;
pub use traits::{Assigner, Center, CenterUpdater, Clustering, ConvergenceChecker, Medoid, Seeder};
pub use update::{BroadcastMean, MeanUpdate, MedoidUpdate};
pub use util::{euclidean, squared_euclidean_checked};

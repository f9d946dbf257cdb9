//! Centroid and medoid partitioning.
//!
//! `kpart` splits a set of dense vectors into `k` groups by iterative
//! refinement.
//!
//! The primary public API is under [`cluster`], which provides:
//! - k-means (k-means++ seeding, Lloyd iterations, scalar or `ndarray` backend)
//! - k-medoids (medoid updates, exact convergence)
//! - the generic refinement loop and the traits it is built from

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    Backend, Clustering, Dataset, Init, Kmeans, KmeansFit, Kmedoids, KmedoidsFit, Medoid,
};
pub use error::{Error, Result};

//! K-means clustering.
//!
//! Partitions data into k clusters by minimizing **within-cluster sum of squares**
//! (WCSS).
//!
//! # The Objective
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # Lloyd's Algorithm
//!
//! 1. Initialize k centroids (k-means++ by default)
//! 2. **Assign**: each point to its nearest centroid
//! 3. **Update**: each centroid to the mean of its assigned points
//! 4. Repeat until no centroid moves by `tol` or more, or `max_iter` is reached
//!
//! WCSS never increases across iterations: reassignment can only lower each
//! point's cost, and the mean is the minimizer of squared distance within a
//! cluster. An empty cluster is re-seeded with a random dataset point, which
//! cannot raise WCSS either since nothing was assigned to it.
//!
//! # Backends
//!
//! [`Backend::Scalar`] walks points one at a time. [`Backend::Ndarray`] runs
//! assignment, update and the convergence test as `ndarray` array
//! expressions. Both produce the same partition up to floating-point
//! rounding in the means.

use super::assign::{BroadcastNearest, NearestCenter};
use super::converge::{BroadcastTolerance, Tolerance};
use super::dataset::Dataset;
use super::refine::{Fit, Refinement};
use super::seed::Init;
use super::traits::{Assigner, Clustering};
use super::update::{BroadcastMean, MeanUpdate};
use crate::error::{Error, Result};
use rand::prelude::*;

/// Numeric backend for the k-means phases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Plain loops over slices.
    #[default]
    Scalar,
    /// Vectorized `ndarray` expressions.
    Ndarray,
}

/// K-means clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum iterations.
    max_iter: usize,
    /// Convergence tolerance on centroid movement.
    tol: f32,
    /// Random seed.
    seed: Option<u64>,
    /// Initialization strategy.
    init: Init,
    /// Numeric backend.
    backend: Backend,
}

/// Result of fitting k-means.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Cluster id per point, computed against `centroids`.
    pub labels: Vec<usize>,
    /// One centroid per cluster.
    pub centroids: Vec<Vec<f32>>,
    /// Iterations run.
    pub iterations: usize,
    /// Whether centroid movement fell below tolerance before the budget ran out.
    pub converged: bool,
    /// Within-cluster sum of squares.
    pub inertia: f64,
}

impl Kmeans {
    /// Create a new K-means clusterer.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            tol: 1e-4,
            seed: None,
            init: Init::KmeansPlusPlus,
            backend: Backend::Scalar,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set convergence tolerance.
    pub fn with_tol(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the initialization strategy.
    pub fn with_init(mut self, init: Init) -> Self {
        self.init = init;
        self
    }

    /// Set the numeric backend.
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Fit on `data`, drawing randomness from the configured seed (or the
    /// thread-local generator when no seed is set).
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmeansFit> {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };
        self.fit_with_rng(data, &mut rng)
    }

    /// Fit on `data` with an injected random number generator.
    pub fn fit_with_rng<R: Rng + ?Sized>(
        &self,
        data: &[Vec<f32>],
        rng: &mut R,
    ) -> Result<KmeansFit> {
        if !(self.tol.is_finite() && self.tol > 0.0) {
            return Err(Error::InvalidParameter {
                name: "tol",
                message: "must be positive and finite",
            });
        }
        let ds = Dataset::new(data)?;

        let fit = match self.backend {
            Backend::Scalar => Refinement {
                seeder: self.init,
                assigner: NearestCenter,
                updater: MeanUpdate,
                checker: Tolerance::new(self.tol),
                max_iter: self.max_iter,
            }
            .run(&ds, self.k, rng)?,
            Backend::Ndarray => Refinement {
                seeder: self.init,
                assigner: BroadcastNearest,
                updater: BroadcastMean,
                checker: BroadcastTolerance::new(self.tol),
                max_iter: self.max_iter,
            }
            .run(&ds, self.k, rng)?,
        };

        Ok(KmeansFit::from_fit(fit))
    }
}

impl KmeansFit {
    fn from_fit(fit: Fit<Vec<f32>>) -> Self {
        Self {
            labels: fit.labels,
            centroids: fit.centers,
            iterations: fit.iterations,
            converged: fit.converged,
            inertia: fit.inertia,
        }
    }

    /// Assign new points to the nearest fitted centroid.
    pub fn predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let ds = Dataset::new(data)?;
        NearestCenter.assign(&ds, &self.centroids)
    }
}

impl Default for Kmeans {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Clustering for Kmeans {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

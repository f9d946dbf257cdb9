//! K-medoids clustering (PAM-style alternating refinement).
//!
//! Like k-means, but every cluster is represented by one of its own members:
//! the **medoid**, the point with the smallest summed distance to the rest of
//! its cluster.
//!
//! ```text
//! cost = Σₖ Σᵢ∈Cₖ ||xᵢ - mₖ||,   mₖ ∈ Cₖ
//! ```
//!
//! Because the representative is chosen by summed (not squared) distance, a
//! single far outlier cannot drag it away the way it drags a mean. The price
//! is O(m²) distance evaluations per cluster of m members on every update.
//!
//! Medoids are discrete, so convergence is exact: the loop stops once an
//! update returns the same medoid sequence it was given.

use super::assign::NearestCenter;
use super::converge::ExactMatch;
use super::dataset::Dataset;
use super::refine::{total_distance, Refinement};
use super::seed::Init;
use super::traits::{Assigner, Clustering, Medoid};
use super::update::MedoidUpdate;
use crate::error::Result;
use rand::prelude::*;

/// K-medoids clustering algorithm.
#[derive(Debug, Clone)]
pub struct Kmedoids {
    k: usize,
    max_iter: usize,
    seed: Option<u64>,
    init: Init,
}

/// Result of fitting k-medoids.
#[derive(Debug, Clone)]
pub struct KmedoidsFit {
    /// Cluster id per point, computed against `medoids`.
    pub labels: Vec<usize>,
    /// Dataset index of each medoid.
    pub medoid_indices: Vec<usize>,
    /// Coordinates of each medoid (copies of dataset points).
    pub medoids: Vec<Vec<f32>>,
    /// Iterations run.
    pub iterations: usize,
    /// Whether the medoid set stopped changing before the budget ran out.
    pub converged: bool,
    /// Sum of distances from each point to its medoid.
    pub cost: f64,
}

impl Kmedoids {
    /// Create a new k-medoids clusterer.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            seed: None,
            init: Init::KmeansPlusPlus,
        }
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
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

    /// Fit on `data` using the configured seed.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<KmedoidsFit> {
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
    ) -> Result<KmedoidsFit> {
        let ds = Dataset::new(data)?;
        let fit = Refinement {
            seeder: self.init,
            assigner: NearestCenter,
            updater: MedoidUpdate,
            checker: ExactMatch,
            max_iter: self.max_iter,
        }
        .run(&ds, self.k, rng)?;

        let cost = total_distance(&ds, &fit.labels, &fit.centers)?;
        Ok(KmedoidsFit {
            medoid_indices: fit.centers.iter().map(|m| m.0).collect(),
            medoids: fit.centers.iter().map(|m| ds.point(m.0).to_vec()).collect(),
            labels: fit.labels,
            iterations: fit.iterations,
            converged: fit.converged,
            cost,
        })
    }
}

impl KmedoidsFit {
    /// Assign new points to the nearest fitted medoid.
    pub fn predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let ds = Dataset::new(data)?;
        NearestCenter.assign(&ds, &self.medoids)
    }

    /// Medoids as typed centers.
    pub fn centers(&self) -> Vec<Medoid> {
        self.medoid_indices.iter().copied().map(Medoid).collect()
    }
}

impl Default for Kmedoids {
    fn default() -> Self {
        Self::new(8)
    }
}

impl Clustering for Kmedoids {
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        Ok(self.fit(data)?.labels)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

use super::dataset::Dataset;
use crate::error::{Error, Result};
use rand::Rng;
use std::fmt::Debug;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster label per input point.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;

    /// The configured number of clusters.
    fn n_clusters(&self) -> usize;
}

/// A cluster representative.
///
/// The kind of center is fixed per algorithm: k-means uses synthetic
/// centroids (`Vec<f32>`), k-medoids uses dataset members ([`Medoid`]).
pub trait Center: Clone + PartialEq + Debug {
    /// Build a center from dataset point `index`.
    fn from_member(data: &Dataset, index: usize) -> Self;

    /// Coordinates of this center.
    ///
    /// Only valid once [`Center::check`] has passed for `data`.
    fn coords<'a>(&'a self, data: &'a Dataset) -> &'a [f32];

    /// Fail if this center cannot be measured against `data`.
    fn check(&self, data: &Dataset) -> Result<()>;
}

impl Center for Vec<f32> {
    fn from_member(data: &Dataset, index: usize) -> Self {
        data.point(index).to_vec()
    }

    #[inline]
    fn coords<'a>(&'a self, _data: &'a Dataset) -> &'a [f32] {
        self
    }

    fn check(&self, data: &Dataset) -> Result<()> {
        data.check_dim(self)
    }
}

/// A center that is an existing dataset point, identified by its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Medoid(pub usize);

impl Center for Medoid {
    fn from_member(_data: &Dataset, index: usize) -> Self {
        Medoid(index)
    }

    #[inline]
    fn coords<'a>(&'a self, data: &'a Dataset) -> &'a [f32] {
        data.point(self.0)
    }

    fn check(&self, data: &Dataset) -> Result<()> {
        if self.0 >= data.len() {
            return Err(Error::InvalidParameter {
                name: "centers",
                message: "medoid index out of range",
            });
        }
        Ok(())
    }
}

/// Picks the initial `k` centers from the dataset.
pub trait Seeder {
    /// Return exactly `k` dataset indices. Callers guarantee `1 <= k <= data.len()`.
    fn seed_indices<R: Rng + ?Sized>(&self, data: &Dataset, k: usize, rng: &mut R) -> Vec<usize>;

    /// Seed and materialize centers of kind `C`.
    fn seed<C: Center, R: Rng + ?Sized>(&self, data: &Dataset, k: usize, rng: &mut R) -> Vec<C> {
        self.seed_indices(data, k, rng)
            .into_iter()
            .map(|i| C::from_member(data, i))
            .collect()
    }
}

/// Maps every point to the index of its nearest center.
pub trait Assigner<C: Center> {
    /// One label per point in `[0, centers.len())`. Ties go to the lowest index.
    fn assign(&self, data: &Dataset, centers: &[C]) -> Result<Vec<usize>>;
}

/// Recomputes centers from the current labels.
pub trait CenterUpdater {
    /// The kind of center this updater produces.
    type Center: Center;

    /// Return exactly `k` centers. `rng` is used for empty clusters.
    fn update<R: Rng + ?Sized>(
        &self,
        data: &Dataset,
        labels: &[usize],
        k: usize,
        rng: &mut R,
    ) -> Result<Vec<Self::Center>>;
}

/// Decides whether refinement has stabilized.
pub trait ConvergenceChecker<C: Center> {
    /// `old` and `new` have the same length.
    fn converged(&self, old: &[C], new: &[C]) -> bool;
}

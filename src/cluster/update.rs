//! Center recomputation from labels.
//!
//! An empty cluster (no point carries its label) has no mean and no medoid.
//! Every updater here handles it the same way: the cluster is re-seeded with
//! a uniformly random dataset point so it can recapture points on the next
//! assignment.

use super::dataset::Dataset;
use super::traits::{CenterUpdater, Medoid};
use super::util::squared_euclidean_f64;
use crate::error::{Error, Result};
use ndarray::Axis;
use rand::Rng;

/// Group point indices by label, validating length and range.
pub(crate) fn members_by_cluster(
    data: &Dataset,
    labels: &[usize],
    k: usize,
) -> Result<Vec<Vec<usize>>> {
    if labels.len() != data.len() {
        return Err(Error::InvalidParameter {
            name: "labels",
            message: "must contain one label per point",
        });
    }
    let mut members: Vec<Vec<usize>> = vec![Vec::new(); k];
    for (i, &label) in labels.iter().enumerate() {
        members
            .get_mut(label)
            .ok_or(Error::InvalidParameter {
                name: "labels",
                message: "label out of range [0, k)",
            })?
            .push(i);
    }
    Ok(members)
}

fn reseed<R: Rng + ?Sized>(data: &Dataset, cluster: usize, rng: &mut R) -> usize {
    let idx = rng.random_range(0..data.len());
    log::trace!("cluster {} is empty, reseeding from point {}", cluster, idx);
    idx
}

/// Coordinate-wise mean of members (scalar, f64 accumulation).
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanUpdate;

impl CenterUpdater for MeanUpdate {
    type Center = Vec<f32>;

    fn update<R: Rng + ?Sized>(
        &self,
        data: &Dataset,
        labels: &[usize],
        k: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<f32>>> {
        let members = members_by_cluster(data, labels, k)?;
        let d = data.dim();

        let mut centers = Vec::with_capacity(k);
        for (cluster, idx) in members.iter().enumerate() {
            if idx.is_empty() {
                centers.push(data.point(reseed(data, cluster, rng)).to_vec());
                continue;
            }
            let mut sum = vec![0.0f64; d];
            for &i in idx {
                for (s, &x) in sum.iter_mut().zip(data.point(i)) {
                    *s += x as f64;
                }
            }
            let count = idx.len() as f64;
            centers.push(sum.into_iter().map(|s| (s / count) as f32).collect());
        }
        Ok(centers)
    }
}

/// Coordinate-wise mean of members over `ndarray` (`select` + `mean_axis`).
#[derive(Debug, Clone, Copy, Default)]
pub struct BroadcastMean;

impl CenterUpdater for BroadcastMean {
    type Center = Vec<f32>;

    fn update<R: Rng + ?Sized>(
        &self,
        data: &Dataset,
        labels: &[usize],
        k: usize,
        rng: &mut R,
    ) -> Result<Vec<Vec<f32>>> {
        let members = members_by_cluster(data, labels, k)?;
        let points = data.view()?;

        let mut centers = Vec::with_capacity(k);
        for (cluster, idx) in members.iter().enumerate() {
            match points.select(Axis(0), idx).mean_axis(Axis(0)) {
                Some(mean) => centers.push(mean.to_vec()),
                None => centers.push(data.point(reseed(data, cluster, rng)).to_vec()),
            }
        }
        Ok(centers)
    }
}

/// In-cluster medoid: the member with the smallest summed Euclidean distance
/// to the other members. Ties go to the lowest dataset index.
///
/// Costs O(m²) distance evaluations for a cluster of m members.
#[derive(Debug, Clone, Copy, Default)]
pub struct MedoidUpdate;

impl MedoidUpdate {
    fn medoid_of(data: &Dataset, members: &[usize]) -> usize {
        let mut best = members[0];
        let mut best_sum = f64::INFINITY;
        for &i in members {
            let p = data.point(i);
            let sum: f64 = members
                .iter()
                .map(|&j| squared_euclidean_f64(p, data.point(j)).sqrt())
                .sum();
            if sum < best_sum {
                best_sum = sum;
                best = i;
            }
        }
        best
    }
}

impl CenterUpdater for MedoidUpdate {
    type Center = Medoid;

    fn update<R: Rng + ?Sized>(
        &self,
        data: &Dataset,
        labels: &[usize],
        k: usize,
        rng: &mut R,
    ) -> Result<Vec<Medoid>> {
        let members = members_by_cluster(data, labels, k)?;
        Ok(members
            .iter()
            .enumerate()
            .map(|(cluster, idx)| {
                if idx.is_empty() {
                    Medoid(reseed(data, cluster, rng))
                } else {
                    Medoid(Self::medoid_of(data, idx))
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn four_corners() -> Dataset {
        Dataset::new(&[
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![10.0, 0.0],
            vec![10.0, 1.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_mean_update() {
        let ds = four_corners();
        let mut rng = StdRng::seed_from_u64(0);
        let labels = [0, 0, 1, 1];

        let scalar = MeanUpdate.update(&ds, &labels, 2, &mut rng).unwrap();
        assert_eq!(scalar, vec![vec![0.0, 0.5], vec![10.0, 0.5]]);

        let vectorized = BroadcastMean.update(&ds, &labels, 2, &mut rng).unwrap();
        assert_eq!(vectorized, scalar);
    }

    #[test]
    fn test_mean_empty_cluster_reseeds_with_dataset_point() {
        let ds = four_corners();
        let mut rng = StdRng::seed_from_u64(9);
        let labels = [0, 0, 0, 0];

        for centers in [
            MeanUpdate.update(&ds, &labels, 3, &mut rng).unwrap(),
            BroadcastMean.update(&ds, &labels, 3, &mut rng).unwrap(),
        ] {
            assert_eq!(centers.len(), 3);
            assert_eq!(centers[0], vec![5.0, 0.5]);
            for c in &centers[1..] {
                assert!(ds.iter().any(|p| p == c.as_slice()), "{:?} is not a dataset point", c);
            }
        }
    }

    #[test]
    fn test_medoid_update_picks_central_member() {
        // Points 1.0 and 2.0 both have summed distance 11.
        let ds = Dataset::new(&[vec![0.0], vec![1.0], vec![2.0], vec![10.0]]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let medoids = MedoidUpdate.update(&ds, &[0, 0, 0, 0], 1, &mut rng).unwrap();
        assert_eq!(medoids, vec![Medoid(1)], "tie must go to the lower index");
    }

    #[test]
    fn test_medoid_update_robust_to_outlier() {
        let ds = Dataset::new(&[vec![0.0], vec![1.0], vec![2.0], vec![100.0]]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        let medoids = MedoidUpdate.update(&ds, &[0, 0, 0, 0], 1, &mut rng).unwrap();
        assert_eq!(medoids, vec![Medoid(1)]);
    }

    #[test]
    fn test_medoid_update_cluster_order() {
        // Cluster 1 appears first in the data; output is still ordered by cluster id.
        let ds = four_corners();
        let mut rng = StdRng::seed_from_u64(0);

        let medoids = MedoidUpdate.update(&ds, &[1, 1, 0, 0], 2, &mut rng).unwrap();
        assert_eq!(medoids, vec![Medoid(2), Medoid(0)]);
    }

    #[test]
    fn test_medoid_empty_cluster() {
        let ds = four_corners();
        let mut rng = StdRng::seed_from_u64(5);

        let medoids = MedoidUpdate.update(&ds, &[0, 0, 0, 0], 2, &mut rng).unwrap();
        assert_eq!(medoids.len(), 2);
        assert!(medoids[1].0 < ds.len());
    }

    #[test]
    fn test_update_rejects_bad_labels() {
        let ds = four_corners();
        let mut rng = StdRng::seed_from_u64(0);

        assert!(MeanUpdate.update(&ds, &[0, 0, 2, 1], 2, &mut rng).is_err());
        assert!(MedoidUpdate.update(&ds, &[0, 0, 1], 2, &mut rng).is_err());
    }
}

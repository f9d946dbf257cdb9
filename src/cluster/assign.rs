//! Nearest-center assignment.
//!
//! Both assigners scan centers left to right and keep the first minimum, so
//! ties always resolve to the lowest cluster id.

use super::dataset::Dataset;
use super::traits::{Assigner, Center};
use super::util::squared_euclidean;
use crate::error::{Error, Result};
use ndarray::{Array2, Axis};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Rows per broadcast block in [`BroadcastNearest`].
const BLOCK_ROWS: usize = 256;

pub(crate) fn check_centers<C: Center>(data: &Dataset, centers: &[C]) -> Result<()> {
    if centers.is_empty() {
        return Err(Error::InvalidParameter {
            name: "centers",
            message: "must contain at least one center",
        });
    }
    for c in centers {
        c.check(data)?;
    }
    Ok(())
}

#[inline]
fn nearest<C: Center>(data: &Dataset, point: &[f32], centers: &[C]) -> usize {
    let mut best_cluster = 0;
    let mut best_dist = f32::INFINITY;
    for (k, c) in centers.iter().enumerate() {
        let dist = squared_euclidean(point, c.coords(data));
        if dist < best_dist {
            best_dist = dist;
            best_cluster = k;
        }
    }
    best_cluster
}

/// Scalar point-by-point scan. Works for any center kind.
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestCenter;

impl<C: Center + Sync> Assigner<C> for NearestCenter {
    fn assign(&self, data: &Dataset, centers: &[C]) -> Result<Vec<usize>> {
        check_centers(data, centers)?;

        #[cfg(feature = "parallel")]
        let labels = (0..data.len())
            .into_par_iter()
            .map(|i| nearest(data, data.point(i), centers))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let labels = data.iter().map(|p| nearest(data, p, centers)).collect();

        Ok(labels)
    }
}

/// Vectorized scan over `ndarray`.
///
/// Broadcasts a block of point rows `(b, 1, d)` against the center matrix
/// `(k, d)` and reduces over the coordinate axis to get a `(b, k)` block of
/// squared distances.
#[derive(Debug, Clone, Copy, Default)]
pub struct BroadcastNearest;

impl BroadcastNearest {
    pub(crate) fn center_matrix(data: &Dataset, centers: &[Vec<f32>]) -> Result<Array2<f32>> {
        let flat: Vec<f32> = centers.iter().flatten().copied().collect();
        Array2::from_shape_vec((centers.len(), data.dim()), flat)
            .map_err(|e| Error::Other(e.to_string()))
    }
}

impl Assigner<Vec<f32>> for BroadcastNearest {
    fn assign(&self, data: &Dataset, centers: &[Vec<f32>]) -> Result<Vec<usize>> {
        check_centers(data, centers)?;
        let points = data.view()?;
        let cmat = Self::center_matrix(data, centers)?;

        let mut labels = Vec::with_capacity(data.len());
        for block in points.axis_chunks_iter(Axis(0), BLOCK_ROWS) {
            let diff = &block.insert_axis(Axis(1)) - &cmat;
            let dist = diff.mapv(|v| v * v).sum_axis(Axis(2));
            for row in dist.rows() {
                let mut best_cluster = 0;
                let mut best_dist = f32::INFINITY;
                for (k, &d) in row.iter().enumerate() {
                    if d < best_dist {
                        best_dist = d;
                        best_cluster = k;
                    }
                }
                labels.push(best_cluster);
            }
        }
        Ok(labels)
    }
}

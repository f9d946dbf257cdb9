use crate::error::{Error, Result};
use ndarray::ArrayView2;

/// A validated, read-only collection of points stored row-major in one buffer.
///
/// Construction checks everything the refinement phases rely on: at least one
/// point, a common non-zero dimensionality, and finite coordinates.
#[derive(Debug, Clone)]
pub struct Dataset {
    flat: Vec<f32>,
    n: usize,
    dim: usize,
}

impl Dataset {
    /// Validate and copy `data`.
    pub fn new(data: &[Vec<f32>]) -> Result<Self> {
        let first = data.first().ok_or(Error::EmptyInput)?;
        let dim = first.len();
        if dim == 0 {
            return Err(Error::InvalidParameter {
                name: "data",
                message: "points must have at least one coordinate",
            });
        }

        let mut flat: Vec<f32> = Vec::with_capacity(data.len() * dim);
        for (index, point) in data.iter().enumerate() {
            if point.len() != dim {
                return Err(Error::DimensionMismatch {
                    expected: dim,
                    found: point.len(),
                });
            }
            if point.iter().any(|x| !x.is_finite()) {
                return Err(Error::NonFinite { index });
            }
            flat.extend_from_slice(point);
        }

        Ok(Self {
            flat,
            n: data.len(),
            dim,
        })
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always false: construction rejects empty input.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Dimensionality shared by every point.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Coordinates of point `i`.
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn point(&self, i: usize) -> &[f32] {
        &self.flat[i * self.dim..(i + 1) * self.dim]
    }

    /// Iterate over points in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &[f32]> + '_ {
        self.flat.chunks_exact(self.dim)
    }

    /// The points as an `(n, dim)` matrix view.
    pub fn view(&self) -> Result<ArrayView2<'_, f32>> {
        ArrayView2::from_shape((self.n, self.dim), self.flat.as_slice())
            .map_err(|e| Error::Other(e.to_string()))
    }

    /// Check that a caller-supplied vector lives in this dataset's space.
    pub(crate) fn check_dim(&self, v: &[f32]) -> Result<()> {
        if v.len() != self.dim {
            return Err(Error::DimensionMismatch {
                expected: self.dim,
                found: v.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_layout() {
        let ds = Dataset::new(&[vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]]).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.dim(), 2);
        assert_eq!(ds.point(1), &[3.0, 4.0]);
        assert_eq!(ds.iter().count(), 3);

        let view = ds.view().unwrap();
        assert_eq!(view.shape(), &[3, 2]);
        assert_eq!(view[[2, 1]], 6.0);
    }

    #[test]
    fn test_dataset_rejects_empty() {
        let data: Vec<Vec<f32>> = vec![];
        assert!(matches!(Dataset::new(&data), Err(Error::EmptyInput)));
    }

    #[test]
    fn test_dataset_rejects_ragged() {
        let data = vec![vec![0.0, 0.0], vec![1.0]];
        assert!(matches!(
            Dataset::new(&data),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_dataset_rejects_nan() {
        let data = vec![vec![0.0, 0.0], vec![f32::NAN, 1.0]];
        assert!(matches!(Dataset::new(&data), Err(Error::NonFinite { index: 1 })));
    }

    #[test]
    fn test_dataset_rejects_zero_dim() {
        let data = vec![vec![], vec![]];
        assert!(matches!(
            Dataset::new(&data),
            Err(Error::InvalidParameter { name: "data", .. })
        ));
    }
}

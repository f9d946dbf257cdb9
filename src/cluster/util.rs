//! Distance primitives.
//!
//! Every phase of refinement measures points with the Euclidean metric. The
//! unchecked kernel is used in hot loops once dimensionality has been
//! validated; the checked variants are the public entry points.

use crate::error::{Error, Result};

#[inline]
pub(crate) fn squared_euclidean(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

/// Squared Euclidean distance accumulated in `f64`.
///
/// Coordinates are widened before subtracting, so points near the `f32`
/// range limits still give a finite result.
#[inline]
pub(crate) fn squared_euclidean_f64(a: &[f32], b: &[f32]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&x, &y)| {
            let d = x as f64 - y as f64;
            d * d
        })
        .sum()
}

/// Squared Euclidean distance, failing if the vectors differ in length.
pub fn squared_euclidean_checked(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(squared_euclidean(a, b))
}

/// Euclidean distance between two points of equal dimensionality.
///
/// ```rust
/// let d = kpart::cluster::euclidean(&[0.0, 0.0], &[3.0, 4.0]).unwrap();
/// assert_eq!(d, 5.0);
///
/// assert!(kpart::cluster::euclidean(&[0.0], &[1.0, 2.0]).is_err());
/// ```
pub fn euclidean(a: &[f32], b: &[f32]) -> Result<f32> {
    squared_euclidean_checked(a, b).map(f32::sqrt)
}

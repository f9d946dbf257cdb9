//! Stopping rules for the refinement loop.
//!
//! Centroids converge once every center moved strictly less than the
//! tolerance between two iterations. Medoids are dataset indices and only
//! converge when the new medoid sequence equals the old one, position by
//! position.

use super::traits::{ConvergenceChecker, Medoid};
use super::util::squared_euclidean;
use ndarray::ArrayView1;

/// Centroids have converged when every center moved strictly less than `tol`.
///
/// Compares squared shifts against `tol²`, so a shift of exactly `tol` does
/// not count as converged.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    tol: f32,
}

impl Tolerance {
    /// Create a checker with movement threshold `tol`.
    pub fn new(tol: f32) -> Self {
        Self { tol }
    }
}

impl ConvergenceChecker<Vec<f32>> for Tolerance {
    fn converged(&self, old: &[Vec<f32>], new: &[Vec<f32>]) -> bool {
        let limit = self.tol * self.tol;
        old.iter()
            .zip(new.iter())
            .all(|(a, b)| squared_euclidean(a, b) < limit)
    }
}

/// [`Tolerance`] evaluated with `ndarray` vector arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct BroadcastTolerance {
    tol: f32,
}

impl BroadcastTolerance {
    /// Create a checker with movement threshold `tol`.
    pub fn new(tol: f32) -> Self {
        Self { tol }
    }
}

impl ConvergenceChecker<Vec<f32>> for BroadcastTolerance {
    fn converged(&self, old: &[Vec<f32>], new: &[Vec<f32>]) -> bool {
        let limit = self.tol * self.tol;
        old.iter().zip(new.iter()).all(|(a, b)| {
            let diff = &ArrayView1::from(a.as_slice()) - &ArrayView1::from(b.as_slice());
            diff.dot(&diff) < limit
        })
    }
}

/// Medoids have converged when the sequence is unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatch;

impl ConvergenceChecker<Medoid> for ExactMatch {
    fn converged(&self, old: &[Medoid], new: &[Medoid]) -> bool {
        old == new
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_strict() {
        let old = vec![vec![0.0, 0.0], vec![5.0, 5.0]];

        let moved_less = vec![vec![0.0, 0.25], vec![5.0, 5.0]];
        assert!(Tolerance::new(0.5).converged(&old, &moved_less));
        assert!(BroadcastTolerance::new(0.5).converged(&old, &moved_less));

        // Shift of exactly tol is not converged.
        let moved_exact = vec![vec![0.0, 0.5], vec![5.0, 5.0]];
        assert!(!Tolerance::new(0.5).converged(&old, &moved_exact));
        assert!(!BroadcastTolerance::new(0.5).converged(&old, &moved_exact));
    }

    #[test]
    fn test_tolerance_every_pair() {
        let old = vec![vec![0.0], vec![0.0], vec![0.0]];
        let new = vec![vec![0.0], vec![0.0], vec![3.0]];
        assert!(!Tolerance::new(1.0).converged(&old, &new));
        assert!(!BroadcastTolerance::new(1.0).converged(&old, &new));
    }

    #[test]
    fn test_exact_match() {
        assert!(ExactMatch.converged(&[Medoid(2), Medoid(7)], &[Medoid(2), Medoid(7)]));
        assert!(!ExactMatch.converged(&[Medoid(2), Medoid(7)], &[Medoid(7), Medoid(2)]));
    }
}

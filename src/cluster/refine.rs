//! The shared refinement loop.
//!
//! ```text
//! SEEDING -> ITERATING -> CONVERGED | EXHAUSTED
//! ```
//!
//! Each iteration assigns points to the current centers, recomputes centers
//! from those labels, and asks the convergence checker whether the new
//! centers differ from the old ones. The loop stops on convergence or once
//! `max_iter` iterations have run.
//!
//! Labels returned from [`Refinement::run`] are always computed against the
//! returned centers, in both terminal states.

use super::assign::check_centers;
use super::dataset::Dataset;
use super::traits::{Assigner, Center, CenterUpdater, ConvergenceChecker, Seeder};
use super::util::squared_euclidean_f64;
use crate::error::{Error, Result};
use rand::Rng;

/// Outcome of a refinement run.
#[derive(Debug, Clone)]
pub struct Fit<C> {
    /// One cluster id per point, in `[0, k)`.
    pub labels: Vec<usize>,
    /// Exactly `k` centers; index is the cluster id.
    pub centers: Vec<C>,
    /// Iterations run (assign + update + check), at least 1.
    pub iterations: usize,
    /// `false` when the iteration budget ran out first.
    pub converged: bool,
    /// Sum of squared distances from each point to its assigned center.
    pub inertia: f64,
}

/// One seeder, assigner, updater and convergence checker, plus a budget.
#[derive(Debug, Clone)]
pub struct Refinement<S, A, U, V> {
    /// Initial center selection.
    pub seeder: S,
    /// Nearest-center assignment.
    pub assigner: A,
    /// Center recomputation.
    pub updater: U,
    /// Stopping rule.
    pub checker: V,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl<S, A, U, V> Refinement<S, A, U, V>
where
    S: Seeder,
    U: CenterUpdater,
    A: Assigner<U::Center>,
    V: ConvergenceChecker<U::Center>,
{
    /// Run the loop on `data` with `k` clusters.
    pub fn run<R: Rng + ?Sized>(
        &self,
        data: &Dataset,
        k: usize,
        rng: &mut R,
    ) -> Result<Fit<U::Center>> {
        validate(data, k, self.max_iter)?;

        let mut centers: Vec<U::Center> = self.seeder.seed(data, k, rng);
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iter {
            iterations += 1;
            let labels = self.assigner.assign(data, &centers)?;
            let next = self.updater.update(data, &labels, k, rng)?;
            converged = self.checker.converged(&centers, &next);
            centers = next;
            log::trace!("iteration {}: converged={}", iterations, converged);
            if converged {
                break;
            }
        }

        let labels = self.assigner.assign(data, &centers)?;
        let inertia = inertia(data, &labels, &centers)?;
        log::debug!(
            "refinement {} after {} iteration(s) (n={}, k={}, inertia={:.6})",
            if converged { "converged" } else { "exhausted" },
            iterations,
            data.len(),
            k,
            inertia,
        );

        Ok(Fit {
            labels,
            centers,
            iterations,
            converged,
            inertia,
        })
    }
}

fn validate(data: &Dataset, k: usize, max_iter: usize) -> Result<()> {
    if k == 0 {
        return Err(Error::InvalidParameter {
            name: "k",
            message: "must be at least 1",
        });
    }
    if k > data.len() {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: data.len(),
        });
    }
    if max_iter == 0 {
        return Err(Error::InvalidParameter {
            name: "max_iter",
            message: "must be at least 1",
        });
    }
    Ok(())
}

/// Squared distance from each point to its assigned center, after checking
/// that every label names one of `centers`.
fn assigned_squared<C: Center>(
    data: &Dataset,
    labels: &[usize],
    centers: &[C],
) -> Result<Vec<f64>> {
    check_centers(data, centers)?;
    if labels.len() != data.len() {
        return Err(Error::InvalidParameter {
            name: "labels",
            message: "must contain one label per point",
        });
    }
    data.iter()
        .zip(labels)
        .map(|(p, &l)| {
            let c = centers.get(l).ok_or(Error::InvalidParameter {
                name: "labels",
                message: "label out of range [0, k)",
            })?;
            Ok(squared_euclidean_f64(p, c.coords(data)))
        })
        .collect()
}

/// Sum of squared distances from each point to its assigned center.
pub fn inertia<C: Center>(data: &Dataset, labels: &[usize], centers: &[C]) -> Result<f64> {
    Ok(assigned_squared(data, labels, centers)?.into_iter().sum())
}

/// Sum of Euclidean distances from each point to its assigned center.
pub fn total_distance<C: Center>(data: &Dataset, labels: &[usize], centers: &[C]) -> Result<f64> {
    Ok(assigned_squared(data, labels, centers)?
        .into_iter()
        .map(f64::sqrt)
        .sum())
}

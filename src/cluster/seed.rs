//! Initial center selection.
//!
//! ## K-means++
//!
//! 1. Choose the first center uniformly at random.
//! 2. Choose each next center with probability proportional to D(x)², the
//!    squared distance from x to its nearest already-chosen center.
//!
//! Spreading centers this way gives an O(log k) approximation to the optimal
//! within-cluster sum of squares (Arthur & Vassilvitskii, 2007).
//!
//! When every D(x)² is zero (fewer distinct points than `k`) the distribution
//! is undefined; the next center is then drawn uniformly from the points not
//! chosen yet.

use super::dataset::Dataset;
use super::traits::Seeder;
use super::util::squared_euclidean_f64;
use rand::prelude::*;

/// Initialization strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Init {
    /// D²-weighted sampling (k-means++).
    #[default]
    KmeansPlusPlus,
    /// `k` distinct points drawn uniformly.
    Random,
}

impl Seeder for Init {
    fn seed_indices<R: Rng + ?Sized>(&self, data: &Dataset, k: usize, rng: &mut R) -> Vec<usize> {
        match self {
            Init::KmeansPlusPlus => kmeans_plus_plus(data, k, rng),
            Init::Random => rand::seq::index::sample(rng, data.len(), k).into_vec(),
        }
    }
}

fn kmeans_plus_plus<R: Rng + ?Sized>(data: &Dataset, k: usize, rng: &mut R) -> Vec<usize> {
    let n = data.len();
    let mut chosen: Vec<usize> = Vec::with_capacity(k);
    chosen.push(rng.random_range(0..n));

    // Running D(x)² in f64, refreshed against each newly chosen center only.
    let mut min_sq: Vec<f64> = vec![f64::INFINITY; n];

    while chosen.len() < k {
        let latest = data.point(chosen[chosen.len() - 1]);
        for (j, d) in min_sq.iter_mut().enumerate() {
            let sq = squared_euclidean_f64(data.point(j), latest);
            if sq < *d {
                *d = sq;
            }
        }

        let total: f64 = min_sq.iter().sum();
        let next = if total > 0.0 {
            sample_weighted(&min_sq, total, rng)
        } else {
            log::debug!(
                "k-means++: all {} points coincide with chosen centers, sampling uniformly",
                n
            );
            sample_unchosen(n, &chosen, rng)
        };
        chosen.push(next);
    }

    chosen
}

/// Cumulative scan with a strict threshold so zero-weight entries are never picked.
fn sample_weighted<R: Rng + ?Sized>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random::<f64>() * total;
    let mut cumsum = 0.0;
    let mut last_positive = 0;
    for (j, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumsum += w;
        last_positive = j;
        if cumsum > threshold {
            return j;
        }
    }
    // Rounding left the threshold unreached.
    last_positive
}

fn sample_unchosen<R: Rng + ?Sized>(n: usize, chosen: &[usize], rng: &mut R) -> usize {
    let mut taken = vec![false; n];
    for &c in chosen {
        taken[c] = true;
    }
    let free: Vec<usize> = (0..n).filter(|&i| !taken[i]).collect();
    // chosen.len() < k <= n, so `free` is never empty.
    free[rng.random_range(0..free.len())]
}

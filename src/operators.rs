//! Shared genetic operators over portfolio weight vectors.
//!
//! Initialization, single-point crossover, and per-gene reset mutation,
//! each followed by renormalization so every produced vector stays on the
//! standard simplex (entries in [0, 1], summing to 1).
//!
//! Operators take slices and return fresh vectors; parents are never
//! mutated, so selecting the same parent twice is safe. All randomness
//! comes from the `&mut R: Rng` argument — there is no hidden RNG state.
//!
//! Both search strategies ([`ga`](crate::ga) and [`nsga2`](crate::nsga2))
//! use these operators unchanged.

use rand::Rng;

/// Draws one random portfolio: uniform [0, 1) genes divided by their sum.
///
/// # Panics
/// Panics if `num_assets` is zero. Runners validate the problem before
/// initialization, so this only fires on direct misuse.
pub fn random_portfolio<R: Rng>(num_assets: usize, rng: &mut R) -> Vec<f64> {
    assert!(num_assets > 0, "cannot draw a portfolio over zero assets");
    let mut weights: Vec<f64> = (0..num_assets)
        .map(|_| rng.random_range(0.0..1.0))
        .collect();
    renormalize(&mut weights);
    weights
}

/// Draws `n` random portfolios.
pub fn random_population<R: Rng>(n: usize, num_assets: usize, rng: &mut R) -> Vec<Vec<f64>> {
    (0..n).map(|_| random_portfolio(num_assets, rng)).collect()
}

/// Single-point crossover.
///
/// With probability `crossover_rate`, picks a cut index `k` in `[0, len)`
/// and swaps the tails: `child1 = parent1[..k] + parent2[k..]` and
/// vice versa. Otherwise the children are exact copies of the parents.
///
/// `k == 0` swaps the whole vectors and `k == len-1` swaps a single gene;
/// both are legal outcomes of the uniform draw.
///
/// Children are renormalized before being returned (a spliced vector
/// generally no longer sums to 1). When crossover does not fire, the
/// copies are already normalized and renormalization leaves them
/// bit-identical to the parents.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn crossover<R: Rng>(
    parent1: &[f64],
    parent2: &[f64],
    crossover_rate: f64,
    rng: &mut R,
) -> (Vec<f64>, Vec<f64>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    if rng.random_range(0.0..1.0) >= crossover_rate {
        return (parent1.to_vec(), parent2.to_vec());
    }

    let k = rng.random_range(0..n);
    let mut child1 = Vec::with_capacity(n);
    let mut child2 = Vec::with_capacity(n);
    child1.extend_from_slice(&parent1[..k]);
    child1.extend_from_slice(&parent2[k..]);
    child2.extend_from_slice(&parent2[..k]);
    child2.extend_from_slice(&parent1[k..]);

    renormalize(&mut child1);
    renormalize(&mut child2);
    (child1, child2)
}

/// Per-gene reset mutation.
///
/// Each gene is independently replaced by a fresh uniform [0, 1) value
/// with probability `mutation_rate`; the whole vector is then
/// renormalized. Genes are reset, never clamped — the simplex constraint
/// is restored by the final renormalization alone.
///
/// With `mutation_rate == 0` the result is numerically identical to the
/// input: no gene changes and renormalization of an already-normalized
/// vector is a no-op.
pub fn mutate<R: Rng>(individual: &[f64], mutation_rate: f64, rng: &mut R) -> Vec<f64> {
    let mut child = individual.to_vec();
    let mut touched = false;
    for gene in child.iter_mut() {
        if rng.random_range(0.0..1.0) < mutation_rate {
            *gene = rng.random_range(0.0..1.0);
            touched = true;
        }
    }
    if touched {
        renormalize(&mut child);
    }
    child
}

/// Divides the vector by its sum, restoring the simplex constraint.
///
/// If the sum is exactly zero the vector is left untouched — the
/// documented degeneracy fallback. With continuous uniform sampling a
/// zero sum is effectively unreachable, but the fallback keeps the
/// operator free of non-finite output either way.
pub fn renormalize(weights: &mut [f64]) {
    let sum: f64 = weights.iter().sum();
    if sum == 0.0 {
        return;
    }
    for w in weights.iter_mut() {
        *w /= sum;
    }
}

//! Pareto selection engine.
//!
//! The survival machinery of the NSGA-II strategy: fast non-dominated
//! sorting into ranked fronts, crowding-distance assignment within a
//! front, and the front-by-front truncation that picks the next
//! generation out of a parents-plus-offspring pool.
//!
//! All functions here are pure over [`ObjectivePair`] slices; they know
//! nothing about weight vectors or evaluators. Callers pass the pool's
//! objective values and get index sets back.
//!
//! # References
//!
//! - Deb et al. (2002), "A Fast and Elitist Multiobjective Genetic
//!   Algorithm: NSGA-II", IEEE Trans. Evolutionary Computation 6(2)

use crate::problem::ObjectivePair;

/// Result of non-dominated sorting.
///
/// `fronts` partitions the input indices: `fronts[0]` holds the rank-0
/// (non-dominated) individuals, `fronts[1]` those dominated only by
/// rank 0, and so on. `ranks[i]` is the front number of input index `i`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParetoRanking {
    /// Pareto rank per input index (0 = best).
    pub ranks: Vec<usize>,

    /// Input indices grouped by front, best first.
    pub fronts: Vec<Vec<usize>>,
}

/// Fast non-dominated sorting.
///
/// Partitions the pool into ranked fronts using the Deb et al. (2002)
/// bookkeeping: one O(n²) pass records, for every pair, who dominates
/// whom; peeling counts then yields front after front without further
/// dominance checks. An individual is never compared against itself, and
/// equal objective pairs are mutually non-dominating, so ties always land
/// in the same front.
///
/// # Panics
///
/// Panics if `objectives` is empty.
pub fn non_dominated_sort(objectives: &[ObjectivePair]) -> ParetoRanking {
    let n = objectives.len();
    assert!(n > 0, "cannot rank an empty pool");

    let mut domination_count = vec![0usize; n];
    let mut dominated: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut ranks = vec![0usize; n];
    let mut first_front = Vec::new();

    for i in 0..n {
        for j in (i + 1)..n {
            if objectives[i].dominates(&objectives[j]) {
                dominated[i].push(j);
                domination_count[j] += 1;
            } else if objectives[j].dominates(&objectives[i]) {
                dominated[j].push(i);
                domination_count[i] += 1;
            }
        }

        // All pairs involving i have been seen once the inner loop ends.
        if domination_count[i] == 0 {
            first_front.push(i);
        }
    }

    let mut fronts = vec![first_front];
    loop {
        let current = fronts.last().expect("fronts starts non-empty");
        let mut next_front = Vec::new();

        for &i in current {
            for &j in &dominated[i] {
                domination_count[j] -= 1;
                if domination_count[j] == 0 {
                    ranks[j] = fronts.len();
                    next_front.push(j);
                }
            }
        }

        if next_front.is_empty() {
            break;
        }
        fronts.push(next_front);
    }

    ParetoRanking { ranks, fronts }
}

/// Crowding distance within one front.
///
/// `objectives` are the pairs of a single front's members; the returned
/// vector is parallel to it. Per objective dimension, an individual
/// contributes its normalized position `(v − min) / (max − min)`, summed
/// over both dimensions. Individuals holding a dimension's minimum or
/// maximum get `+∞` so the front's extremes always survive truncation.
///
/// Degenerate fronts are handled deterministically: a dimension with zero
/// range (single member, or all values equal) contributes nothing — no
/// division by zero, no infinities from that dimension. Two individuals
/// with identical objective pairs always receive identical distances.
pub fn crowding_distance(objectives: &[ObjectivePair]) -> Vec<f64> {
    let n = objectives.len();
    let mut distances = vec![0.0f64; n];

    for dim in 0..2 {
        let value = |o: &ObjectivePair| if dim == 0 { o.f0 } else { o.f1 };

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for o in objectives {
            let v = value(o);
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }

        let range = max - min;
        if range == 0.0 {
            continue;
        }

        for (i, o) in objectives.iter().enumerate() {
            let v = value(o);
            if v == min || v == max {
                distances[i] = f64::INFINITY;
            } else {
                distances[i] += (v - min) / range;
            }
        }
    }

    distances
}

/// Selects the next generation out of a combined pool.
///
/// Runs [`non_dominated_sort`] over the pool's objectives, then fills the
/// next generation front-by-front in rank order. The first front that
/// does not fit whole is sorted by crowding distance, most isolated
/// first, and sliced to fill the remaining budget exactly. The sort is
/// stable, so equal distances keep pool order and runs are reproducible
/// under a fixed seed.
///
/// Returns exactly `population_size` indices into `objectives`.
///
/// # Panics
///
/// Panics if the pool holds fewer than `population_size` individuals.
pub fn select_next_generation(objectives: &[ObjectivePair], population_size: usize) -> Vec<usize> {
    assert!(
        objectives.len() >= population_size,
        "pool of {} cannot fill a population of {}",
        objectives.len(),
        population_size
    );

    let ranking = non_dominated_sort(objectives);
    let mut next = Vec::with_capacity(population_size);

    for front in &ranking.fronts {
        let remaining = population_size - next.len();
        if front.len() <= remaining {
            next.extend_from_slice(front);
            if next.len() == population_size {
                break;
            }
        } else {
            let front_objectives: Vec<ObjectivePair> =
                front.iter().map(|&i| objectives[i]).collect();
            let distances = crowding_distance(&front_objectives);

            let mut order: Vec<usize> = (0..front.len()).collect();
            order.sort_by(|&a, &b| {
                distances[b]
                    .partial_cmp(&distances[a])
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            next.extend(order[..remaining].iter().map(|&k| front[k]));
            break;
        }
    }

    next
}

// ============================================================================
// Tests
// ============================================================================

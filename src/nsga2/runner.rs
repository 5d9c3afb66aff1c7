//! NSGA-II generational loop.
//!
//! [`Nsga2Runner`] drives population evolution for a fixed generation
//! budget: offspring via the shared operators, then survival via the
//! Pareto selection engine in [`pareto`](super::pareto).

use super::pareto::{self, ParetoRanking};
use crate::config::EvolutionConfig;
use crate::error::{ConfigError, EvalError, RunError};
use crate::operators;
use crate::problem::{ObjectivePair, PortfolioProblem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of an NSGA-II run.
///
/// `population` is the final generation — Pareto-optimal within the
/// history of populations explored, not guaranteed globally optimal.
/// `ranking` describes that final population; its `fronts[0]` is the
/// discovered approximation of the Pareto front.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Nsga2Result {
    /// Final population of weight vectors, exactly `population_size`.
    pub population: Vec<Vec<f64>>,

    /// Objective pair per individual, parallel to `population`.
    pub objectives: Vec<ObjectivePair>,

    /// Non-dominated ranking of the final population.
    pub ranking: ParetoRanking,

    /// Number of generations executed (always `max_generations`).
    pub generations: usize,
}

impl Nsga2Result {
    /// The rank-0 individuals of the final population with their
    /// objective pairs.
    pub fn pareto_front(&self) -> Vec<(&[f64], ObjectivePair)> {
        self.ranking.fronts[0]
            .iter()
            .map(|&i| (self.population[i].as_slice(), self.objectives[i]))
            .collect()
    }
}

/// Executes the NSGA-II evolutionary loop.
///
/// # Usage
///
/// ```
/// use mvfront::config::EvolutionConfig;
/// use mvfront::markowitz::Markowitz;
/// use mvfront::nsga2::Nsga2Runner;
///
/// let problem = Markowitz::new(
///     vec![0.01, 0.02],
///     vec![vec![0.001, 0.0], vec![0.0, 0.002]],
/// )?;
/// let config = EvolutionConfig::default()
///     .with_population_size(10)
///     .with_max_generations(5)
///     .with_seed(42);
///
/// let result = Nsga2Runner::run(&problem, &config)?;
/// assert_eq!(result.population.len(), 10);
/// assert!(!result.pareto_front().is_empty());
/// # Ok::<(), mvfront::error::RunError>(())
/// ```
pub struct Nsga2Runner;

impl Nsga2Runner {
    /// Runs the optimization to the full generation budget.
    ///
    /// Single-threaded and synchronous; each generation is a strict
    /// barrier. Randomness is consumed in a fixed order — population
    /// initialization, then per generation: two pairing draws per
    /// offspring pair, the crossover decision, the crossover point (when
    /// crossover fires), then per-gene mutation decisions and replacement
    /// values for each child — so a fixed seed reproduces the run
    /// exactly.
    pub fn run<P: PortfolioProblem>(
        problem: &P,
        config: &EvolutionConfig,
    ) -> Result<Nsga2Result, RunError> {
        config.validate()?;
        if problem.num_assets() == 0 {
            return Err(ConfigError::NoAssets.into());
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let pop_size = config.population_size;
        let mut population =
            operators::random_population(pop_size, problem.num_assets(), &mut rng);
        let mut objectives = evaluate_population(problem, &population)?;

        for gen in 0..config.max_generations {
            // Offspring are produced in pairs; parents are drawn uniformly
            // at random with replacement from the current generation only.
            let mut pool = population;
            let mut pool_objectives = objectives;
            for _ in 0..pop_size.div_ceil(2) {
                let p1 = rng.random_range(0..pop_size);
                let p2 = rng.random_range(0..pop_size);
                let (c1, c2) = operators::crossover(
                    &pool[p1],
                    &pool[p2],
                    config.crossover_rate,
                    &mut rng,
                );
                for child in [c1, c2] {
                    let child = operators::mutate(&child, config.mutation_rate, &mut rng);
                    pool_objectives.push(evaluate_one(problem, &child)?);
                    pool.push(child);
                }
            }

            let survivors = pareto::select_next_generation(&pool_objectives, pop_size);
            population = survivors.iter().map(|&i| pool[i].clone()).collect();
            objectives = survivors.iter().map(|&i| pool_objectives[i]).collect();

            log::debug!(
                "generation {}/{}: kept {} of {} pooled candidates",
                gen + 1,
                config.max_generations,
                pop_size,
                pool.len()
            );
        }

        let ranking = pareto::non_dominated_sort(&objectives);
        log::debug!(
            "finished: {} individuals on the first front",
            ranking.fronts[0].len()
        );

        Ok(Nsga2Result {
            population,
            objectives,
            ranking,
            generations: config.max_generations,
        })
    }
}

/// Evaluate every individual, surfacing contract violations.
fn evaluate_population<P: PortfolioProblem>(
    problem: &P,
    population: &[Vec<f64>],
) -> Result<Vec<ObjectivePair>, EvalError> {
    population
        .iter()
        .map(|w| evaluate_one(problem, w))
        .collect()
}

fn evaluate_one<P: PortfolioProblem>(
    problem: &P,
    weights: &[f64],
) -> Result<ObjectivePair, EvalError> {
    let pair = problem.evaluate(weights);
    if pair.is_finite() {
        Ok(pair)
    } else {
        Err(EvalError::NonFinite {
            f0: pair.f0,
            f1: pair.f1,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

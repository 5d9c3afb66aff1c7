//! Scalar GA generational loop.
//!
//! Same offspring pipeline as the NSGA-II runner; only survival differs —
//! a stable descending sort on the derived score with truncation to the
//! population size.

use crate::config::EvolutionConfig;
use crate::error::{ConfigError, EvalError, RunError};
use crate::operators;
use crate::problem::{ObjectivePair, PortfolioProblem};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A weight vector with its derived scalar score.
#[derive(Debug, Clone)]
struct Scored {
    weights: Vec<f64>,
    score: f64,
}

/// Result of a GA run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Final population, best-scored first, exactly `population_size`.
    pub population: Vec<Vec<f64>>,

    /// Scalar score per individual, parallel to `population`.
    pub scores: Vec<f64>,

    /// The best individual of the final population.
    pub best: Vec<f64>,

    /// Score of `best`.
    pub best_score: f64,

    /// Number of generations executed (always `max_generations`).
    pub generations: usize,

    /// Best score at initialization and after each generation.
    pub score_history: Vec<f64>,
}

/// Executes the single-objective GA loop.
///
/// The scalar score is the return/variance ratio, expressed against the
/// minimization contract of [`PortfolioProblem`] as `−f0 / f1`; higher is
/// better. Selection is an ordinary stable sort-and-truncate on that
/// score.
///
/// # Usage
///
/// ```
/// use mvfront::config::EvolutionConfig;
/// use mvfront::ga::GaRunner;
/// use mvfront::markowitz::Markowitz;
///
/// let problem = Markowitz::new(
///     vec![0.01, 0.02],
///     vec![vec![0.001, 0.0], vec![0.0, 0.002]],
/// )?;
/// let config = EvolutionConfig::fast().with_seed(42);
///
/// let result = GaRunner::run(&problem, &config)?;
/// assert_eq!(result.best.len(), 2);
/// # Ok::<(), mvfront::error::RunError>(())
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the optimization to the full generation budget.
    ///
    /// Randomness is consumed in the same fixed order as
    /// [`Nsga2Runner::run`](crate::nsga2::Nsga2Runner::run), so a fixed
    /// seed reproduces the run exactly.
    pub fn run<P: PortfolioProblem>(
        problem: &P,
        config: &EvolutionConfig,
    ) -> Result<GaResult, RunError> {
        config.validate()?;
        if problem.num_assets() == 0 {
            return Err(ConfigError::NoAssets.into());
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let pop_size = config.population_size;
        let mut population: Vec<Scored> =
            operators::random_population(pop_size, problem.num_assets(), &mut rng)
                .into_iter()
                .map(|weights| score_one(problem, weights))
                .collect::<Result<_, _>>()?;

        let mut score_history = Vec::with_capacity(config.max_generations + 1);
        score_history.push(best_score(&population));

        for gen in 0..config.max_generations {
            let mut pool = population;
            for _ in 0..pop_size.div_ceil(2) {
                let p1 = rng.random_range(0..pop_size);
                let p2 = rng.random_range(0..pop_size);
                let (c1, c2) = operators::crossover(
                    &pool[p1].weights,
                    &pool[p2].weights,
                    config.crossover_rate,
                    &mut rng,
                );
                for child in [c1, c2] {
                    let child = operators::mutate(&child, config.mutation_rate, &mut rng);
                    pool.push(score_one(problem, child)?);
                }
            }

            // Sort-and-truncate selection: best score first, stable on ties.
            pool.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
            pool.truncate(pop_size);
            population = pool;

            let best = best_score(&population);
            score_history.push(best);
            log::debug!(
                "generation {}/{}: best score {best:.6}",
                gen + 1,
                config.max_generations
            );
        }

        let best = population[0].clone();
        Ok(GaResult {
            best_score: best.score,
            best: best.weights,
            scores: population.iter().map(|s| s.score).collect(),
            population: population.into_iter().map(|s| s.weights).collect(),
            generations: config.max_generations,
            score_history,
        })
    }
}

/// Evaluate one individual and attach its ratio score.
fn score_one<P: PortfolioProblem>(problem: &P, weights: Vec<f64>) -> Result<Scored, EvalError> {
    let pair = problem.evaluate(&weights);
    if !pair.is_finite() {
        return Err(EvalError::NonFinite {
            f0: pair.f0,
            f1: pair.f1,
        });
    }
    Ok(Scored {
        weights,
        score: ratio_score(pair),
    })
}

/// Return/variance ratio under the minimization sign convention.
fn ratio_score(pair: ObjectivePair) -> f64 {
    -pair.f0 / pair.f1
}

fn best_score(population: &[Scored]) -> f64 {
    population
        .iter()
        .map(|s| s.score)
        .fold(f64::NEG_INFINITY, f64::max)
}

// ============================================================================
// Tests
// ============================================================================

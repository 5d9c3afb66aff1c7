//! Mean-variance portfolio search via population-based stochastic search.
//!
//! Searches for portfolio weight vectors trading off expected return
//! against variance (the Markowitz problem), with two strategies:
//!
//! - **GA** ([`ga`]): single-objective genetic algorithm optimizing the
//!   scalar return/variance ratio.
//! - **NSGA-II** ([`nsga2`]): multi-objective variant evolving a Pareto
//!   front over (negated return, variance) without collapsing the two
//!   objectives into one score.
//!
//! Both strategies share the simplex-preserving genetic operators in
//! [`operators`], the parameters in [`config`], and the evaluator
//! contract in [`problem`]. A ready-made Markowitz evaluator lives in
//! [`markowitz`].
//!
//! # Example
//!
//! ```
//! use mvfront::config::EvolutionConfig;
//! use mvfront::markowitz::Markowitz;
//! use mvfront::nsga2::Nsga2Runner;
//!
//! let problem = Markowitz::new(
//!     vec![0.01, 0.02],
//!     vec![vec![0.001, 0.0], vec![0.0, 0.002]],
//! )?;
//! let config = EvolutionConfig::fast().with_seed(42);
//!
//! let result = Nsga2Runner::run(&problem, &config)?;
//! for (weights, objectives) in result.pareto_front() {
//!     println!("{weights:?} -> return {:.4}, variance {:.6}", -objectives.f0, objectives.f1);
//! }
//! # Ok::<(), mvfront::error::RunError>(())
//! ```
//!
//! # Determinism
//!
//! All randomness flows through one sequential, seedable source
//! ([`EvolutionConfig::seed`](config::EvolutionConfig::seed)); with a
//! fixed seed, both runners are fully reproducible. Evolution is
//! single-threaded and each generation is a strict barrier.

pub mod config;
pub mod error;
pub mod ga;
pub mod markowitz;
pub mod nsga2;
pub mod operators;
pub mod problem;

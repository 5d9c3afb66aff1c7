//! Error types for the evolutionary portfolio search.
//!
//! Two concerns, two enums: [`ConfigError`] for parameters that must be
//! rejected before any generation runs, and [`EvalError`] for objective
//! evaluator contract violations discovered mid-run.
//!
//! Misuse of the low-level Pareto functions (empty input, pool smaller than
//! the population budget) is a programming error and panics with an
//! `assert!` message instead.

use thiserror::Error;

/// Configuration validation failure.
///
/// Returned by [`EvolutionConfig::validate`](crate::config::EvolutionConfig::validate)
/// and [`Markowitz::new`](crate::markowitz::Markowitz::new). The runners
/// validate before touching the population, so none of these can surface
/// after generation 0 has started.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// Population must hold at least two individuals to form parent pairs.
    #[error("population_size must be at least 2 (got {0})")]
    PopulationTooSmall(usize),

    /// The generational loop needs a positive budget.
    #[error("max_generations must be at least 1")]
    NoGenerations,

    /// An operator probability was outside [0, 1].
    #[error("{name} must be within [0, 1] (got {value})")]
    RateOutOfRange {
        /// Which rate field was invalid.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The problem reports zero assets; weight vectors would be empty.
    #[error("problem must have at least one asset")]
    NoAssets,

    /// Covariance matrix has the wrong number of rows.
    #[error("covariance matrix must have {expected} rows (got {got})")]
    CovarianceRows {
        /// Number of assets.
        expected: usize,
        /// Rows supplied.
        got: usize,
    },

    /// A covariance matrix row has the wrong length.
    #[error("covariance row {row} must have length {expected} (got {len})")]
    CovarianceRowLength {
        /// Number of assets.
        expected: usize,
        /// Index of the offending row.
        row: usize,
        /// Actual length found.
        len: usize,
    },
}

/// Any failure an evolutionary run can report.
///
/// Returned by the runners' `run` entry points. Configuration problems
/// surface before generation 0; evaluator violations surface at the first
/// offending evaluation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RunError {
    /// Invalid run parameters.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The objective evaluator broke its contract.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Objective evaluator contract violation.
///
/// The evaluator must return a finite objective pair for every weight
/// vector. A non-finite pair is surfaced immediately instead of letting
/// NaN/infinity propagate through dominance comparisons.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// The evaluator produced a non-finite objective value.
    #[error("evaluator returned non-finite objectives ({f0}, {f1})")]
    NonFinite {
        /// First objective as returned.
        f0: f64,
        /// Second objective as returned.
        f1: f64,
    },
}

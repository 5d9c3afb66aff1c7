//! Multi-objective search: NSGA-II over (negated return, variance).
//!
//! Instead of collapsing the two objectives into one score, this strategy
//! evolves a Pareto front — a set of portfolios none of which is beaten
//! in both objectives at once. Survival each generation is decided by the
//! [`pareto`] engine: non-dominated sorting into ranked fronts, then
//! crowding-distance truncation of the last front that fits partially.
//!
//! # Key Types
//!
//! - [`Nsga2Runner`]: executes the generational loop
//! - [`Nsga2Result`]: final population plus its non-dominated ranking
//! - [`pareto::ParetoRanking`]: ranks and fronts of a pool
//!
//! # References
//!
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

pub mod pareto;
mod runner;

pub use runner::{Nsga2Result, Nsga2Runner};

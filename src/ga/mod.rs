//! Single-objective search: GA on the return/variance ratio.
//!
//! Collapses the two portfolio objectives into one scalar score and
//! evolves toward it. Selection is an ordinary sort-and-truncate — the
//! multi-objective machinery lives in [`nsga2`](crate::nsga2) instead.
//!
//! # Key Types
//!
//! - [`GaRunner`]: executes the generational loop
//! - [`GaResult`]: final population, best individual, score history

mod runner;

pub use runner::{GaResult, GaRunner};

//! The objective evaluator contract.
//!
//! [`PortfolioProblem`] is the one trait a user implements to plug a
//! portfolio model into the search strategies. Both runners consume it the
//! same way: a weight vector goes in, a two-objective [`ObjectivePair`]
//! comes out, lower is better in both dimensions.
//!
//! The crate ships one implementation,
//! [`Markowitz`](crate::markowitz::Markowitz).

/// A pair of objective values for one weight vector.
///
/// Both objectives are **minimized**. The evaluator owns the sign
/// convention: for mean-variance portfolios, `f0` is the *negated*
/// expected return (so "more return" becomes "lower f0") and `f1` is the
/// variance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectivePair {
    /// First objective (negated expected return by convention).
    pub f0: f64,
    /// Second objective (portfolio variance by convention).
    pub f1: f64,
}

impl ObjectivePair {
    /// Creates a pair from raw objective values.
    pub fn new(f0: f64, f1: f64) -> Self {
        Self { f0, f1 }
    }

    /// Weak Pareto dominance with strict improvement in at least one
    /// objective: `self` dominates `other` iff it is no worse in both
    /// dimensions and strictly better in at least one.
    ///
    /// Irreflexive and asymmetric. Equal pairs never dominate each other,
    /// so ties land in the same front during non-dominated sorting.
    pub fn dominates(&self, other: &ObjectivePair) -> bool {
        self.f0 <= other.f0
            && self.f1 <= other.f1
            && (self.f0 < other.f0 || self.f1 < other.f1)
    }

    /// True when both objective values are finite.
    pub fn is_finite(&self) -> bool {
        self.f0.is_finite() && self.f1.is_finite()
    }
}

/// Tolerance for the simplex feasibility sum check.
pub const FEASIBILITY_TOLERANCE: f64 = 1e-6;

/// Defines a portfolio optimization problem.
///
/// Implementations must be pure: `evaluate` is deterministic for identical
/// input and has no side effects. `num_assets` is fixed for the lifetime
/// of a run.
///
/// Feasibility is diagnostic only — the search maintains the simplex
/// constraint by renormalization, not by rejecting infeasible candidates.
pub trait PortfolioProblem {
    /// Number of assets, i.e. the length of every weight vector.
    fn num_assets(&self) -> usize;

    /// Maps a weight vector to its objective pair (lower is better).
    ///
    /// `weights` always has length [`num_assets`](Self::num_assets).
    fn evaluate(&self, weights: &[f64]) -> ObjectivePair;

    /// Checks that every weight lies in [0, 1] and the weights sum to 1
    /// within [`FEASIBILITY_TOLERANCE`].
    fn is_feasible(&self, weights: &[f64]) -> bool {
        let mut sum = 0.0;
        for &w in weights {
            if !(0.0..=1.0).contains(&w) {
                return false;
            }
            sum += w;
        }
        (sum - 1.0).abs() < FEASIBILITY_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominates_strictly_better() {
        let a = ObjectivePair::new(1.0, 1.0);
        let b = ObjectivePair::new(2.0, 2.0);
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_dominates_better_in_one() {
        let a = ObjectivePair::new(1.0, 2.0);
        let b = ObjectivePair::new(1.0, 3.0);
        assert!(a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_dominates_irreflexive() {
        let a = ObjectivePair::new(1.5, 2.5);
        assert!(!a.dominates(&a));
    }

    #[test]
    fn test_dominates_incomparable() {
        let a = ObjectivePair::new(1.0, 3.0);
        let b = ObjectivePair::new(3.0, 1.0);
        assert!(!a.dominates(&b));
        assert!(!b.dominates(&a));
    }

    #[test]
    fn test_is_finite() {
        assert!(ObjectivePair::new(0.0, -1.0).is_finite());
        assert!(!ObjectivePair::new(f64::NAN, 0.0).is_finite());
        assert!(!ObjectivePair::new(0.0, f64::INFINITY).is_finite());
    }

    struct TwoAssets;

    impl PortfolioProblem for TwoAssets {
        fn num_assets(&self) -> usize {
            2
        }
        fn evaluate(&self, w: &[f64]) -> ObjectivePair {
            ObjectivePair::new(-w[0], w[1])
        }
    }

    #[test]
    fn test_default_feasibility() {
        let p = TwoAssets;
        assert!(p.is_feasible(&[0.4, 0.6]));
        assert!(p.is_feasible(&[0.0, 1.0]));
        assert!(!p.is_feasible(&[0.5, 0.6]));
        assert!(!p.is_feasible(&[-0.1, 1.1]));
        assert!(!p.is_feasible(&[1.2, -0.2]));
    }

    #[test]
    fn test_feasibility_tolerance() {
        let p = TwoAssets;
        assert!(p.is_feasible(&[0.5, 0.5 + 1e-7]));
        assert!(!p.is_feasible(&[0.5, 0.5 + 1e-5]));
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_dominance_irreflexive_and_asymmetric(
                a0 in -1.0f64..1.0,
                a1 in -1.0f64..1.0,
                b0 in -1.0f64..1.0,
                b1 in -1.0f64..1.0,
            ) {
                let a = ObjectivePair::new(a0, a1);
                let b = ObjectivePair::new(b0, b1);
                prop_assert!(!a.dominates(&a));
                prop_assert!(!(a.dominates(&b) && b.dominates(&a)));
            }
        }
    }
}

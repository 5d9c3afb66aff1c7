//! Markowitz mean-variance evaluator.
//!
//! The classic two-objective portfolio model: expected return `wᵀr` and
//! variance `wᵀΣw`. Packaged as the crate's stock [`PortfolioProblem`]
//! implementation; the search strategies themselves never look inside.

use crate::error::ConfigError;
use crate::problem::{ObjectivePair, PortfolioProblem};

/// Mean-variance portfolio problem over a fixed asset universe.
///
/// Objectives follow the minimization convention of [`ObjectivePair`]:
/// `f0 = −wᵀr` (negated expected return) and `f1 = wᵀΣw` (variance).
///
/// # Examples
///
/// ```
/// use mvfront::markowitz::Markowitz;
/// use mvfront::problem::PortfolioProblem;
///
/// let problem = Markowitz::new(
///     vec![0.01, 0.02],
///     vec![vec![0.001, 0.0], vec![0.0, 0.002]],
/// ).unwrap();
///
/// let pair = problem.evaluate(&[0.5, 0.5]);
/// assert!((pair.f0 - (-0.015)).abs() < 1e-12);
/// assert!((pair.f1 - 0.00075).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Markowitz {
    returns: Vec<f64>,
    cov: Vec<Vec<f64>>,
}

impl Markowitz {
    /// Creates a problem from expected returns and a covariance matrix.
    ///
    /// `cov` must be square with dimension `returns.len()`, and at least
    /// one asset is required.
    pub fn new(returns: Vec<f64>, cov: Vec<Vec<f64>>) -> Result<Self, ConfigError> {
        let n = returns.len();
        if n == 0 {
            return Err(ConfigError::NoAssets);
        }
        if cov.len() != n {
            return Err(ConfigError::CovarianceRows {
                expected: n,
                got: cov.len(),
            });
        }
        for (i, row) in cov.iter().enumerate() {
            if row.len() != n {
                return Err(ConfigError::CovarianceRowLength {
                    expected: n,
                    row: i,
                    len: row.len(),
                });
            }
        }
        Ok(Self { returns, cov })
    }

    /// Expected returns per asset.
    pub fn returns(&self) -> &[f64] {
        &self.returns
    }

    /// Covariance matrix, row-major.
    pub fn covariance(&self) -> &[Vec<f64>] {
        &self.cov
    }
}

impl PortfolioProblem for Markowitz {
    fn num_assets(&self) -> usize {
        self.returns.len()
    }

    fn evaluate(&self, weights: &[f64]) -> ObjectivePair {
        let mut portfolio_return = 0.0;
        let mut portfolio_variance = 0.0;
        for (i, &wi) in weights.iter().enumerate() {
            portfolio_return += wi * self.returns[i];
            for (j, &wj) in weights.iter().enumerate() {
                portfolio_variance += wi * wj * self.cov[i][j];
            }
        }
        ObjectivePair::new(-portfolio_return, portfolio_variance)
    }
}

/// 4-asset demonstration universe shared by tests across the crate.
#[cfg(test)]
pub(crate) fn demo_problem() -> Markowitz {
    Markowitz::new(
        vec![0.00429493, 0.02689857, 0.00827647, 0.00794438],
        vec![
            vec![0.00671900, 0.01193778, 0.00170523, 0.00161020],
            vec![0.01193778, 0.03438852, 0.00402569, 0.00375060],
            vec![0.00170523, 0.00402569, 0.00344421, 0.00185332],
            vec![0.00161020, 0.00375060, 0.00185332, 0.00233944],
        ],
    )
    .expect("demo data is well-formed")
}

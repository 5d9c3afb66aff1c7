//! Evolution parameters shared by both search strategies.
//!
//! The GA and the NSGA-II variant take exactly the same knobs, so one
//! [`EvolutionConfig`] serves both runners.

use crate::error::ConfigError;

/// Configuration for an evolutionary run.
///
/// # Defaults
///
/// The defaults are the demonstration parameters the model was originally
/// tuned with:
///
/// ```
/// use mvfront::config::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 1000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use mvfront::config::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_population_size(50)
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of individuals in the population.
    ///
    /// The population transiently doubles while offspring are pooled, then
    /// selection truncates back to this size. Must be at least 2 so parent
    /// pairs can form.
    pub population_size: usize,

    /// Fixed generation budget. The loop always runs to completion; there
    /// is no convergence-based early stop.
    pub max_generations: usize,

    /// Per-gene probability of resetting a weight during mutation (0.0–1.0).
    pub mutation_rate: f64,

    /// Per-pair probability of applying single-point crossover (0.0–1.0).
    ///
    /// When crossover does not fire, children are exact copies of their
    /// parents (mutation still applies).
    pub crossover_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. Identical seed + config + problem means
    /// identical results; the runners consume randomness in a fixed,
    /// documented order.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 1000,
            mutation_rate: 0.01,
            crossover_rate: 0.9,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the per-gene mutation rate.
    ///
    /// Values outside [0, 1] are kept as given and rejected by
    /// [`validate`](Self::validate) — invalid rates fail fast instead of
    /// being silently clamped.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the per-pair crossover rate. Same validation behavior as
    /// [`with_mutation_rate`](Self::with_mutation_rate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for quick exploratory runs.
    ///
    /// - Population: 50, Generations: 100
    pub fn fast() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            ..Self::default()
        }
    }

    /// Preset for long runs where front quality matters most.
    ///
    /// - Population: 200, Generations: 2000
    pub fn thorough() -> Self {
        Self {
            population_size: 200,
            max_generations: 2000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// The runners call this before touching the population, so invalid
    /// parameters never reach generation 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        // NaN fails the range check as well.
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ConfigError::RateOutOfRange {
                name: "mutation_rate",
                value: self.mutation_rate,
            });
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(ConfigError::RateOutOfRange {
                name: "crossover_rate",
                value: self.crossover_rate,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.max_generations, 1000);
        assert!((config.mutation_rate - 0.01).abs() < 1e-12);
        assert!((config.crossover_rate - 0.9).abs() < 1e-12);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_population_size(20)
            .with_max_generations(50)
            .with_mutation_rate(0.1)
            .with_crossover_rate(0.7)
            .with_seed(42);

        assert_eq!(config.population_size, 20);
        assert_eq!(config.max_generations, 50);
        assert!((config.mutation_rate - 0.1).abs() < 1e-12);
        assert!((config.crossover_rate - 0.7).abs() < 1e-12);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in [0, 1] {
            let err = EvolutionConfig::default()
                .with_population_size(n)
                .validate()
                .unwrap_err();
            assert_eq!(err, ConfigError::PopulationTooSmall(n));
        }
    }

    #[test]
    fn test_validate_zero_generations() {
        let err = EvolutionConfig::default()
            .with_max_generations(0)
            .validate()
            .unwrap_err();
        assert_eq!(err, ConfigError::NoGenerations);
    }

    #[test]
    fn test_validate_rates_not_clamped() {
        let config = EvolutionConfig::default().with_mutation_rate(1.5);
        assert!((config.mutation_rate - 1.5).abs() < 1e-12);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "mutation_rate",
                ..
            })
        ));

        let config = EvolutionConfig::default().with_crossover_rate(-0.1);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RateOutOfRange {
                name: "crossover_rate",
                ..
            })
        ));
    }

    #[test]
    fn test_validate_non_finite_rate() {
        let config = EvolutionConfig::default().with_mutation_rate(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_boundary_rates_valid() {
        for rate in [0.0, 1.0] {
            let config = EvolutionConfig::default()
                .with_mutation_rate(rate)
                .with_crossover_rate(rate);
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_presets() {
        let fast = EvolutionConfig::fast();
        assert_eq!(fast.population_size, 50);
        assert_eq!(fast.max_generations, 100);
        assert!(fast.validate().is_ok());

        let thorough = EvolutionConfig::thorough();
        assert_eq!(thorough.population_size, 200);
        assert_eq!(thorough.max_generations, 2000);
        assert!(thorough.validate().is_ok());
    }

    #[test]
    fn test_preset_chainable() {
        let config = EvolutionConfig::fast().with_seed(7);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.seed, Some(7));
    }
}

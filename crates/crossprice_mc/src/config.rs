//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for the
//! simulation engine: path count, parallelism degree and base seed.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_SIMULATIONS: usize = 100_000_000;

/// Default number of simulation paths.
pub const DEFAULT_SIMULATIONS: usize = 100_000;

/// Default base seed.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Every field has a default, so
/// `SimulationConfig::default()` is a valid configuration:
/// 100,000 paths across all rayon workers with base seed 42.
///
/// # Examples
///
/// ```rust
/// use crossprice_mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_simulations(500_000)
///     .n_jobs(4)
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.n_simulations(), 500_000);
/// assert_eq!(config.n_jobs(), 4);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of simulation paths.
    n_simulations: usize,
    /// Number of parallel batches.
    n_jobs: usize,
    /// Base seed; batch i uses seed `base + i`.
    seed: u64,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Returns the number of parallel batches.
    #[inline]
    pub fn n_jobs(&self) -> usize {
        self.n_jobs
    }

    /// Returns the base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidSimulationCount`] when `n_simulations` is 0 or
    ///   above [`MAX_SIMULATIONS`]
    /// - [`ConfigError::InvalidJobCount`] when `n_jobs` is 0
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_simulations == 0 || self.n_simulations > MAX_SIMULATIONS {
            return Err(ConfigError::InvalidSimulationCount(self.n_simulations));
        }
        if self.n_jobs == 0 {
            return Err(ConfigError::InvalidJobCount(self.n_jobs));
        }
        Ok(())
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_simulations: DEFAULT_SIMULATIONS,
            n_jobs: rayon::current_num_threads(),
            seed: DEFAULT_SEED,
        }
    }
}

/// Builder for [`SimulationConfig`].
///
/// Unset fields fall back to their defaults; `build()` validates bounds.
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_simulations: Option<usize>,
    n_jobs: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths (in [1, [`MAX_SIMULATIONS`]]).
    #[inline]
    pub fn n_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = Some(n_simulations);
        self
    }

    /// Sets the number of parallel batches.
    #[inline]
    pub fn n_jobs(mut self, n_jobs: usize) -> Self {
        self.n_jobs = Some(n_jobs);
        self
    }

    /// Sets the base seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Propagates the bound checks of [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let config = SimulationConfig {
            n_simulations: self.n_simulations.unwrap_or(DEFAULT_SIMULATIONS),
            n_jobs: self.n_jobs.unwrap_or_else(rayon::current_num_threads),
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SimulationConfig::builder().build().unwrap();
        assert_eq!(config.n_simulations(), DEFAULT_SIMULATIONS);
        assert_eq!(config.seed(), DEFAULT_SEED);
        assert!(config.n_jobs() >= 1);
    }

    #[test]
    fn test_builder_explicit_values() {
        let config = SimulationConfig::builder()
            .n_simulations(1_000)
            .n_jobs(3)
            .seed(99)
            .build()
            .unwrap();

        assert_eq!(config.n_simulations(), 1_000);
        assert_eq!(config.n_jobs(), 3);
        assert_eq!(config.seed(), 99);
    }

    #[test]
    fn test_zero_simulations_rejected() {
        let result = SimulationConfig::builder().n_simulations(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidSimulationCount(0))));
    }

    #[test]
    fn test_too_many_simulations_rejected() {
        let result = SimulationConfig::builder()
            .n_simulations(MAX_SIMULATIONS + 1)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidSimulationCount(_))
        ));
    }

    #[test]
    fn test_zero_jobs_rejected() {
        let result = SimulationConfig::builder().n_jobs(0).build();
        assert!(matches!(result, Err(ConfigError::InvalidJobCount(0))));
    }

    #[test]
    fn test_default_matches_builder_defaults() {
        let from_default = SimulationConfig::default();
        assert_eq!(from_default.n_simulations(), DEFAULT_SIMULATIONS);
        assert_eq!(from_default.seed(), DEFAULT_SEED);
    }
}

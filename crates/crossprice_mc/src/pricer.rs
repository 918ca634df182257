//! Batch-parallel Monte Carlo pricing engine.
//!
//! Samples terminal prices under geometric Brownian motion,
//! `S_T = S·exp[(r − σ²/2)T + σ√T·Z]`, in parallel batches and caches the
//! sample for price, standard error and confidence interval queries.

use rayon::prelude::*;
use tracing::debug;

use crossprice_core::math::distributions::norm_ppf;
use crossprice_core::types::{OptionType, PricingParameters};

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::rng::SimRng;

/// Parallel Monte Carlo pricer for European options.
///
/// `simulate()` populates an owned terminal-price sample; every statistics
/// query reads that cache and fails with [`SimulationError::NotSimulated`]
/// until it exists. Re-running `simulate()` replaces the sample.
///
/// Work splits into `n_jobs` equal batches plus one remainder batch; batch
/// `i` draws from its own RNG seeded `base_seed + i`, so the concatenated
/// sample is identical for a given seed no matter how rayon schedules the
/// batches.
///
/// # Examples
/// ```
/// use crossprice_core::types::{OptionType, PricingParameters};
/// use crossprice_mc::{SimulationConfig, SimulationPricer};
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let config = SimulationConfig::builder()
///     .n_simulations(50_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let mut pricer = SimulationPricer::new(params, config);
/// assert!(pricer.price(OptionType::Call).is_err());
///
/// pricer.simulate();
/// let price = pricer.price(OptionType::Call).unwrap();
/// assert!(price > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulationPricer {
    params: PricingParameters,
    config: SimulationConfig,
    terminal_prices: Option<Vec<f64>>,
}

impl SimulationPricer {
    /// Creates an engine from validated parameters and configuration.
    ///
    /// No sampling happens here; call [`SimulationPricer::simulate`].
    pub fn new(params: PricingParameters, config: SimulationConfig) -> Self {
        Self {
            params,
            config,
            terminal_prices: None,
        }
    }

    /// Creates an engine with the default configuration.
    pub fn with_defaults(params: PricingParameters) -> Self {
        Self::new(params, SimulationConfig::default())
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// True once `simulate()` has populated the sample.
    #[inline]
    pub fn is_simulated(&self) -> bool {
        self.terminal_prices.is_some()
    }

    /// Runs the simulation and caches the terminal-price sample.
    ///
    /// Splits `n_simulations` into `n_jobs` equal batches plus a remainder
    /// batch (seeded with the `n_jobs`-th derived seed), fans them out on
    /// the rayon pool and concatenates the outputs in batch index order.
    /// The rayon join is the only barrier; there is no timeout, so the call
    /// blocks until every batch completes.
    ///
    /// Returns the freshly populated sample.
    pub fn simulate(&mut self) -> &[f64] {
        let n = self.config.n_simulations();
        let n_jobs = self.config.n_jobs();
        let base_seed = self.config.seed();

        let batch_size = n / n_jobs;
        let remainder = n % n_jobs;

        let mut batches: Vec<(u64, usize)> = (0..n_jobs as u64)
            .map(|i| (base_seed + i, batch_size))
            .collect();
        if remainder > 0 {
            batches.push((base_seed + n_jobs as u64, remainder));
        }

        debug!(
            n_simulations = n,
            n_jobs,
            base_seed,
            "starting Monte Carlo simulation"
        );

        // Precompute the GBM terminal map: S_T = S·exp(drift + vol_sqrt_t·Z)
        let drift =
            (self.params.rate - 0.5 * self.params.volatility * self.params.volatility)
                * self.params.expiry;
        let vol_sqrt_t = self.params.volatility * self.params.expiry.sqrt();
        let spot = self.params.spot;

        // Collect per batch, then concatenate sequentially in index order
        let batch_outputs: Vec<Vec<f64>> = batches
            .par_iter()
            .map(|&(seed, size)| {
                let mut rng = SimRng::from_seed(seed);
                let mut normals = vec![0.0; size];
                rng.fill_normal(&mut normals);
                normals
                    .into_iter()
                    .map(|z| spot * (drift + vol_sqrt_t * z).exp())
                    .collect()
            })
            .collect();
        let sample: Vec<f64> = batch_outputs.into_iter().flatten().collect();

        debug!(sample_len = sample.len(), "simulation complete");

        self.terminal_prices.insert(sample)
    }

    /// The cached terminal-price sample.
    ///
    /// # Errors
    /// [`SimulationError::NotSimulated`] before the first `simulate()`.
    pub fn terminal_prices(&self) -> Result<&[f64], SimulationError> {
        self.terminal_prices
            .as_deref()
            .ok_or(SimulationError::NotSimulated)
    }

    /// Monte Carlo estimate of the option price: the mean discounted payoff.
    ///
    /// # Errors
    /// [`SimulationError::NotSimulated`] before the first `simulate()`.
    pub fn price(&self, option_type: OptionType) -> Result<f64, SimulationError> {
        let payoffs = self.discounted_payoffs(option_type)?;
        Ok(mean(&payoffs))
    }

    /// European call price estimate.
    ///
    /// # Errors
    /// [`SimulationError::NotSimulated`] before the first `simulate()`.
    #[inline]
    pub fn call_price(&self) -> Result<f64, SimulationError> {
        self.price(OptionType::Call)
    }

    /// European put price estimate.
    ///
    /// # Errors
    /// [`SimulationError::NotSimulated`] before the first `simulate()`.
    #[inline]
    pub fn put_price(&self) -> Result<f64, SimulationError> {
        self.price(OptionType::Put)
    }

    /// Standard error of the price estimate: sample standard deviation of
    /// the discounted payoffs (n−1 denominator) divided by √n.
    ///
    /// # Errors
    /// [`SimulationError::NotSimulated`] before the first `simulate()`.
    pub fn std_error(&self, option_type: OptionType) -> Result<f64, SimulationError> {
        let payoffs = self.discounted_payoffs(option_type)?;
        Ok(std_error(&payoffs))
    }

    /// Normal-approximation confidence interval for the price estimate:
    /// `estimate ± z·std_error` with `z = Φ⁻¹((1 + confidence) / 2)`.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidConfidence`] when `confidence ∉ (0, 1)`
    /// - [`SimulationError::NotSimulated`] before the first `simulate()`
    pub fn confidence_interval(
        &self,
        option_type: OptionType,
        confidence: f64,
    ) -> Result<(f64, f64), SimulationError> {
        if !confidence.is_finite() || confidence <= 0.0 || confidence >= 1.0 {
            return Err(SimulationError::InvalidConfidence { confidence });
        }

        let payoffs = self.discounted_payoffs(option_type)?;
        let estimate = mean(&payoffs);
        let se = std_error(&payoffs);
        let z = norm_ppf((1.0 + confidence) / 2.0);

        Ok((estimate - z * se, estimate + z * se))
    }

    fn discounted_payoffs(
        &self,
        option_type: OptionType,
    ) -> Result<Vec<f64>, SimulationError> {
        let sample = self.terminal_prices()?;
        let discount = (-self.params.rate * self.params.expiry).exp();
        Ok(sample
            .iter()
            .map(|&terminal| discount * option_type.payoff(terminal, self.params.strike))
            .collect())
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn std_error(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / (n as f64 - 1.0);
    (variance / n as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> PricingParameters {
        PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
    }

    fn config(n: usize, jobs: usize, seed: u64) -> SimulationConfig {
        SimulationConfig::builder()
            .n_simulations(n)
            .n_jobs(jobs)
            .seed(seed)
            .build()
            .unwrap()
    }

    #[test]
    fn test_queries_before_simulate_fail() {
        let pricer = SimulationPricer::new(params(), config(1_000, 2, 42));

        assert_eq!(
            pricer.price(OptionType::Call).unwrap_err(),
            SimulationError::NotSimulated
        );
        assert_eq!(
            pricer.std_error(OptionType::Put).unwrap_err(),
            SimulationError::NotSimulated
        );
        assert_eq!(
            pricer
                .confidence_interval(OptionType::Call, 0.95)
                .unwrap_err(),
            SimulationError::NotSimulated
        );
        assert!(!pricer.is_simulated());
    }

    #[test]
    fn test_sample_length_includes_remainder() {
        // 10_007 paths over 4 jobs: 4 batches of 2501 plus remainder 3
        let mut pricer = SimulationPricer::new(params(), config(10_007, 4, 42));
        let sample = pricer.simulate();
        assert_eq!(sample.len(), 10_007);
        assert!(pricer.is_simulated());
    }

    #[test]
    fn test_same_seed_reproduces_exact_sample() {
        let mut a = SimulationPricer::new(params(), config(5_000, 3, 7));
        let mut b = SimulationPricer::new(params(), config(5_000, 3, 7));

        assert_eq!(a.simulate(), b.simulate());
    }

    #[test]
    fn test_different_seeds_differ() {
        let mut a = SimulationPricer::new(params(), config(5_000, 3, 1));
        let mut b = SimulationPricer::new(params(), config(5_000, 3, 2));

        assert_ne!(a.simulate(), b.simulate());
    }

    #[test]
    fn test_terminal_prices_positive() {
        let mut pricer = SimulationPricer::new(params(), config(10_000, 4, 42));
        pricer.simulate();
        assert!(pricer
            .terminal_prices()
            .unwrap()
            .iter()
            .all(|&s| s > 0.0 && s.is_finite()));
    }

    #[test]
    fn test_invalid_confidence_rejected() {
        let mut pricer = SimulationPricer::new(params(), config(1_000, 2, 42));
        pricer.simulate();

        for bad in [0.0, 1.0, -0.5, 2.0, f64::NAN] {
            let err = pricer
                .confidence_interval(OptionType::Call, bad)
                .unwrap_err();
            assert!(matches!(err, SimulationError::InvalidConfidence { .. }));
        }
    }

    #[test]
    fn test_interval_brackets_estimate_and_widens_with_confidence() {
        let mut pricer = SimulationPricer::new(params(), config(50_000, 4, 42));
        pricer.simulate();

        let price = pricer.call_price().unwrap();
        let (lo95, hi95) = pricer
            .confidence_interval(OptionType::Call, 0.95)
            .unwrap();
        let (lo99, hi99) = pricer
            .confidence_interval(OptionType::Call, 0.99)
            .unwrap();

        assert!(lo95 < price && price < hi95);
        assert!(lo99 < lo95);
        assert!(hi99 > hi95);
    }

    #[test]
    fn test_std_error_shrinks_with_sample_size() {
        let mut small = SimulationPricer::new(params(), config(10_000, 4, 42));
        let mut large = SimulationPricer::new(params(), config(160_000, 4, 42));
        small.simulate();
        large.simulate();

        let se_small = small.std_error(OptionType::Call).unwrap();
        let se_large = large.std_error(OptionType::Call).unwrap();

        // 16x paths should shrink the standard error roughly 4x
        assert!(se_large < se_small * 0.35, "se {se_small} -> {se_large}");
    }

    #[test]
    fn test_resimulate_replaces_sample() {
        let mut pricer = SimulationPricer::new(params(), config(1_000, 2, 42));
        let first: Vec<f64> = pricer.simulate().to_vec();
        let second: Vec<f64> = pricer.simulate().to_vec();
        // Same config: the rerun reproduces the same sample
        assert_eq!(first, second);
    }
}

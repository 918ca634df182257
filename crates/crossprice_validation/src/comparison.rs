//! Cross-model price comparison.
//!
//! Prices the same contract with all three models and reports each model's
//! deviation from the closed-form benchmark, which is exact under the
//! shared lognormal assumptions.

use serde::Serialize;
use tracing::debug;

use crossprice_core::types::{OptionType, PricingError, PricingParameters};
use crossprice_mc::{SimulationConfig, SimulationPricer};
use crossprice_models::{AnalyticPricer, LatticePricer};

/// Numerical fidelity of the comparison.
///
/// Defaults match the certification settings: a 1000-step tree and 500,000
/// Monte Carlo paths with base seed 42.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fidelity {
    /// Lattice step count.
    pub n_steps: usize,
    /// Monte Carlo path count.
    pub n_simulations: usize,
    /// Monte Carlo base seed.
    pub seed: u64,
}

impl Default for Fidelity {
    fn default() -> Self {
        Self {
            n_steps: 1_000,
            n_simulations: 500_000,
            seed: 42,
        }
    }
}

/// One model's prices and deviations from the benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct ModelRow {
    /// Model name ("lattice" or "monte_carlo").
    pub model: String,
    /// Call price under this model.
    pub call_price: f64,
    /// Put price under this model.
    pub put_price: f64,
    /// |call - benchmark call|.
    pub call_abs_error: f64,
    /// Call deviation as a percentage of the benchmark.
    pub call_pct_error: f64,
    /// |put - benchmark put|.
    pub put_abs_error: f64,
    /// Put deviation as a percentage of the benchmark.
    pub put_pct_error: f64,
}

/// Three-model comparison anchored on the analytic benchmark.
#[derive(Debug, Clone, Serialize)]
pub struct ModelComparison {
    /// Parameters the comparison was run on.
    pub params: PricingParameters,
    /// Fidelity the numerical models ran at.
    pub fidelity: Fidelity,
    /// Benchmark call price (closed form).
    pub benchmark_call: f64,
    /// Benchmark put price (closed form).
    pub benchmark_put: f64,
    /// One row per numerical model.
    pub rows: Vec<ModelRow>,
}

impl ModelComparison {
    /// True when every model's percentage error stays within `max_pct` on
    /// both sides.
    pub fn agrees_within(&self, max_pct: f64) -> bool {
        self.rows
            .iter()
            .all(|row| row.call_pct_error.abs() <= max_pct && row.put_pct_error.abs() <= max_pct)
    }
}

fn row(name: &str, call: f64, put: f64, benchmark_call: f64, benchmark_put: f64) -> ModelRow {
    ModelRow {
        model: name.to_string(),
        call_price: call,
        put_price: put,
        call_abs_error: (call - benchmark_call).abs(),
        call_pct_error: 100.0 * (call - benchmark_call) / benchmark_call,
        put_abs_error: (put - benchmark_put).abs(),
        put_pct_error: 100.0 * (put - benchmark_put) / benchmark_put,
    }
}

/// Prices the contract with all three models at the given fidelity.
///
/// # Errors
/// Propagates [`PricingError`] from lattice construction (degenerate
/// risk-neutral probability or zero step count) and from the simulation
/// configuration bounds.
pub fn compare_models(
    params: PricingParameters,
    fidelity: Fidelity,
) -> Result<ModelComparison, PricingError> {
    debug!(?params, ?fidelity, "running cross-model comparison");

    let analytic = AnalyticPricer::new(params);
    let benchmark_call = analytic.call_price();
    let benchmark_put = analytic.put_price();

    let lattice = LatticePricer::new(params, fidelity.n_steps)?;

    let config = SimulationConfig::builder()
        .n_simulations(fidelity.n_simulations)
        .seed(fidelity.seed)
        .build()
        .map_err(|err| PricingError::InvalidInput(err.to_string()))?;
    let mut mc = SimulationPricer::new(params, config);
    mc.simulate();

    // Queries cannot fail here: simulate() has just populated the sample
    let mc_call = mc.price(OptionType::Call).unwrap_or(f64::NAN);
    let mc_put = mc.price(OptionType::Put).unwrap_or(f64::NAN);

    let rows = vec![
        row(
            "lattice",
            lattice.call_price(),
            lattice.put_price(),
            benchmark_call,
            benchmark_put,
        ),
        row("monte_carlo", mc_call, mc_put, benchmark_call, benchmark_put),
    ];

    Ok(ModelComparison {
        params,
        fidelity,
        benchmark_call,
        benchmark_put,
        rows,
    })
}

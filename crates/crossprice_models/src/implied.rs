//! Newton-Raphson implied volatility solver.
//!
//! Inverts the Black-Scholes formula: given an observed market price, find
//! the volatility σ at which [`AnalyticPricer`] reproduces it. Newton's
//! update divides by vega, σ_{n+1} = σ_n - (model - market) / vega, and the
//! iterates are clamped to a positive bracket so every candidate σ is a
//! valid model input.

use crossprice_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
use crossprice_core::types::{OptionType, PricingParameters, SolverError};

use crate::analytic::AnalyticPricer;

/// Tuning knobs for the implied volatility search.
///
/// Defaults: initial guess 0.30, tolerance 1e-6 on the price residual,
/// 100 iterations, σ clamped to [0.01, 5.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverSettings {
    /// Starting volatility for the Newton iteration.
    pub initial_sigma: f64,
    /// Convergence tolerance on |model price - market price|.
    pub tolerance: f64,
    /// Maximum Newton iterations.
    pub max_iterations: usize,
    /// Lower σ clamp; iterates never go below this.
    pub min_sigma: f64,
    /// Upper σ clamp; iterates never go above this.
    pub max_sigma: f64,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            initial_sigma: 0.30,
            tolerance: 1e-6,
            max_iterations: 100,
            min_sigma: 0.01,
            max_sigma: 5.0,
        }
    }
}

/// Implied volatility solver.
///
/// # Examples
/// ```
/// use crossprice_core::types::{OptionType, PricingParameters};
/// use crossprice_models::{AnalyticPricer, VolatilitySolver};
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let market_price = AnalyticPricer::new(params).call_price();
///
/// let solver = VolatilitySolver::default();
/// let sigma = solver
///     .solve(&params, OptionType::Call, market_price)
///     .unwrap();
/// assert!((sigma - 0.2).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VolatilitySolver {
    settings: SolverSettings,
}

impl VolatilitySolver {
    /// Creates a solver with explicit settings.
    pub fn new(settings: SolverSettings) -> Self {
        Self { settings }
    }

    /// Returns the solver settings.
    pub fn settings(&self) -> &SolverSettings {
        &self.settings
    }

    /// Finds the volatility at which the analytic model reproduces
    /// `market_price` for the given side.
    ///
    /// The `volatility` field of `params` is not used; the search starts
    /// from [`SolverSettings::initial_sigma`].
    ///
    /// # Errors
    /// - [`SolverError::NumericalInstability`] when `market_price` is not a
    ///   positive finite value
    /// - [`SolverError::DerivativeNearZero`] when vega collapses (deep
    ///   ITM/OTM or near expiry, where price barely responds to σ)
    /// - [`SolverError::MaxIterationsExceeded`] when no σ in the clamp range
    ///   matches the price to tolerance
    pub fn solve(
        &self,
        params: &PricingParameters,
        option_type: OptionType,
        market_price: f64,
    ) -> Result<f64, SolverError> {
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(SolverError::NumericalInstability(format!(
                "market price {market_price} is not a positive finite value"
            )));
        }

        let residual = |sigma: f64| {
            AnalyticPricer::new(params.with_volatility(sigma)).price(option_type) - market_price
        };
        let vega = |sigma: f64| AnalyticPricer::new(params.with_volatility(sigma)).raw_vega();

        let solver = NewtonRaphsonSolver::new(SolverConfig::new(
            self.settings.tolerance,
            self.settings.max_iterations,
        ));

        solver.find_root_in(
            residual,
            vega,
            self.settings.initial_sigma,
            self.settings.min_sigma,
            self.settings.max_sigma,
        )
    }
}

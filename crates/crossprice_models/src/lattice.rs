//! Cox-Ross-Rubinstein binomial lattice pricer for European options.
//!
//! The tree discretises lognormal dynamics into `n` steps of length
//! `dt = T/n` with up factor `u = e^(σ√dt)`, down factor `d = 1/u` and
//! risk-neutral up probability `p = (e^(r·dt) - d) / (u - d)`. Prices
//! converge to the Black-Scholes value at rate O(1/n).

use crossprice_core::types::{OptionType, PricingError, PricingParameters};

/// Default number of tree steps.
pub const DEFAULT_STEPS: usize = 100;

/// CRR binomial tree pricer.
///
/// The step quantities `dt`, `u`, `d` and `p` depend only on the parameters
/// and step count, so they are derived once at construction. Construction
/// fails when the risk-neutral probability leaves (0, 1), which means the
/// chosen discretisation cannot represent the dynamics; the failure is
/// reported, never clamped.
///
/// # Examples
/// ```
/// use crossprice_core::types::PricingParameters;
/// use crossprice_models::LatticePricer;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let tree = LatticePricer::new(params, 1000).unwrap();
///
/// // Converges to the Black-Scholes value ≈ 10.4506
/// assert!((tree.call_price() - 10.4506).abs() < 0.01);
/// ```
#[derive(Debug, Clone)]
pub struct LatticePricer {
    params: PricingParameters,
    n_steps: usize,
    dt: f64,
    up: f64,
    down: f64,
    p_up: f64,
}

impl LatticePricer {
    /// Creates a CRR tree with the given step count.
    ///
    /// # Errors
    /// - [`PricingError::InvalidInput`] when `n_steps == 0`
    /// - [`PricingError::ModelFailure`] when the risk-neutral probability
    ///   `p = (e^(r·dt) - d) / (u - d)` falls outside (0, 1)
    pub fn new(params: PricingParameters, n_steps: usize) -> Result<Self, PricingError> {
        if n_steps == 0 {
            return Err(PricingError::InvalidInput(
                "n_steps must be at least 1".to_string(),
            ));
        }

        let dt = params.expiry / n_steps as f64;
        let up = (params.volatility * dt.sqrt()).exp();
        let down = 1.0 / up;
        let p_up = ((params.rate * dt).exp() - down) / (up - down);

        if !p_up.is_finite() || p_up <= 0.0 || p_up >= 1.0 {
            return Err(PricingError::ModelFailure(format!(
                "risk-neutral probability p = {p_up} outside (0, 1); \
                 increase n_steps or reduce |rate|·dt relative to volatility"
            )));
        }

        Ok(Self {
            params,
            n_steps,
            dt,
            up,
            down,
            p_up,
        })
    }

    /// Creates a tree with [`DEFAULT_STEPS`] steps.
    ///
    /// # Errors
    /// Same failure modes as [`LatticePricer::new`].
    pub fn with_default_steps(params: PricingParameters) -> Result<Self, PricingError> {
        Self::new(params, DEFAULT_STEPS)
    }

    /// Returns the step count.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the risk-neutral up probability.
    #[inline]
    pub fn risk_neutral_probability(&self) -> f64 {
        self.p_up
    }

    /// European call price via backward induction.
    #[inline]
    pub fn call_price(&self) -> f64 {
        self.price(OptionType::Call)
    }

    /// European put price via backward induction.
    #[inline]
    pub fn put_price(&self) -> f64 {
        self.price(OptionType::Put)
    }

    /// Price for the requested side.
    ///
    /// Builds the n+1 terminal payoffs, then rolls back through the tree:
    /// each pass discounts the risk-neutral expectation one step,
    /// `V = e^(-r·dt)·(p·V_up + (1-p)·V_down)`, shrinking the vector by one
    /// node per step until only the root value remains.
    pub fn price(&self, option_type: OptionType) -> f64 {
        let n = self.n_steps;
        let step_discount = (-self.params.rate * self.dt).exp();

        // Terminal spot at node j: S·u^j·d^(n-j)
        let mut values: Vec<f64> = (0..=n)
            .map(|j| {
                let terminal =
                    self.params.spot * self.up.powi(j as i32) * self.down.powi((n - j) as i32);
                option_type.payoff(terminal, self.params.strike)
            })
            .collect();

        for step in (0..n).rev() {
            for j in 0..=step {
                values[j] =
                    step_discount * (self.p_up * values[j + 1] + (1.0 - self.p_up) * values[j]);
            }
        }

        values[0]
    }
}

//! Tabular data contracts for external callers.
//!
//! [`OptionQuote`] is the input row an upstream data pipeline hands over;
//! [`PricingRecord`] is the enriched output row. [`price_quote`] is the
//! in-process glue between them: it never panics on a bad quote, it returns
//! a record carrying the failure instead.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crossprice_core::types::{OptionType, PricingError, PricingParameters};
use crossprice_mc::{SimulationConfig, SimulationPricer};
use crossprice_models::{AnalyticPricer, LatticePricer, VolatilitySolver};

use crate::comparison::Fidelity;

/// One observed market quote.
///
/// Carries either a market price (implied volatility gets solved) or an
/// already-known implied volatility, or both. Quotes with neither are
/// rejected by [`price_quote`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptionQuote {
    /// Underlying spot price.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Time to expiry in years.
    pub expiry: f64,
    /// Option side.
    pub option_type: OptionType,
    /// Observed market price, if any.
    pub market_price: Option<f64>,
    /// Observed implied volatility, if any.
    pub market_iv: Option<f64>,
}

/// One enriched output row: the quote priced by all three models.
///
/// Prices are `None` when the corresponding model could not run, e.g. the
/// lattice rejected its discretisation or no volatility could be
/// established. Solver failures set `convergence_failure` and the message
/// instead of erroring, so batch processing keeps flowing.
#[derive(Debug, Clone, Serialize)]
pub struct PricingRecord {
    /// Option side.
    pub option_type: OptionType,
    /// Underlying spot price.
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Time to expiry in years.
    pub expiry: f64,
    /// Risk-free rate used.
    pub rate: f64,
    /// Volatility used for pricing: solved from the market price, or the
    /// quote's own implied volatility when no price was given.
    pub implied_vol: Option<f64>,
    /// Closed-form price.
    pub analytic_price: Option<f64>,
    /// Binomial lattice price.
    pub lattice_price: Option<f64>,
    /// Monte Carlo price.
    pub mc_price: Option<f64>,
    /// True when the implied volatility solver failed to converge.
    pub convergence_failure: bool,
    /// Failure detail, when any model could not run.
    pub failure_message: Option<String>,
}

impl PricingRecord {
    fn empty(quote: &OptionQuote, rate: f64) -> Self {
        Self {
            option_type: quote.option_type,
            spot: quote.spot,
            strike: quote.strike,
            expiry: quote.expiry,
            rate,
            implied_vol: None,
            analytic_price: None,
            lattice_price: None,
            mc_price: None,
            convergence_failure: false,
            failure_message: None,
        }
    }
}

/// Prices a quote with all three models at the given fidelity.
///
/// The volatility comes from the quote: when `market_price` is present the
/// implied volatility is solved from it (Newton-Raphson); otherwise
/// `market_iv` is used directly. Solver non-convergence is captured in the
/// record, not returned as an error.
///
/// # Errors
/// - [`PricingError::InvalidInput`] when the quote carries neither a market
///   price nor an implied volatility
/// - [`PricingError::InvalidParameter`] when the quote's terms or the
///   established volatility fail validation
pub fn price_quote(
    quote: &OptionQuote,
    rate: f64,
    fidelity: Fidelity,
) -> Result<PricingRecord, PricingError> {
    debug!(?quote, rate, "pricing quote");

    let sigma = match (quote.market_price, quote.market_iv) {
        (Some(market_price), _) => {
            // Solver terms get validated here; the volatility field is a
            // placeholder the solver overwrites from its initial guess
            let solver = VolatilitySolver::default();
            let terms = PricingParameters::new(
                quote.spot,
                quote.strike,
                quote.expiry,
                rate,
                solver.settings().initial_sigma,
            )?;

            match solver.solve(&terms, quote.option_type, market_price) {
                Ok(sigma) => sigma,
                Err(err) => {
                    let mut record = PricingRecord::empty(quote, rate);
                    record.convergence_failure = true;
                    record.failure_message = Some(err.to_string());
                    return Ok(record);
                }
            }
        }
        (None, Some(iv)) => iv,
        (None, None) => {
            return Err(PricingError::InvalidInput(
                "quote carries neither market_price nor market_iv".to_string(),
            ));
        }
    };

    let params = PricingParameters::new(quote.spot, quote.strike, quote.expiry, rate, sigma)?;

    let mut record = PricingRecord::empty(quote, rate);
    record.implied_vol = Some(sigma);
    record.analytic_price = Some(AnalyticPricer::new(params).price(quote.option_type));

    match LatticePricer::new(params, fidelity.n_steps) {
        Ok(lattice) => record.lattice_price = Some(lattice.price(quote.option_type)),
        Err(err) => record.failure_message = Some(err.to_string()),
    }

    let config = SimulationConfig::builder()
        .n_simulations(fidelity.n_simulations)
        .seed(fidelity.seed)
        .build()
        .map_err(|err| PricingError::InvalidInput(err.to_string()))?;
    let mut mc = SimulationPricer::new(params, config);
    mc.simulate();
    record.mc_price = mc.price(quote.option_type).ok();

    Ok(record)
}

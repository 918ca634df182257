//! Implied volatility command implementation.

use anyhow::Context;
use tracing::info;

use crossprice_core::types::{OptionType, PricingParameters};
use crossprice_models::VolatilitySolver;

/// Run the implied command.
pub fn run(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    market_price: f64,
    option_type: &str,
) -> anyhow::Result<()> {
    let side: OptionType = option_type.parse().context("invalid option type")?;

    let solver = VolatilitySolver::default();
    let terms = PricingParameters::new(
        spot,
        strike,
        expiry,
        rate,
        solver.settings().initial_sigma,
    )
    .context("invalid contract terms")?;

    info!(?side, market_price, "solving implied volatility");

    let sigma = solver
        .solve(&terms, side, market_price)
        .context("implied volatility search failed")?;

    println!("implied volatility: {sigma:.6} ({:.2}%)", sigma * 100.0);
    Ok(())
}

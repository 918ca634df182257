//! Price command implementation.
//!
//! Prices one contract with all three models and reports the Greeks.

use anyhow::{bail, Context};
use serde_json::json;
use tracing::info;

use crossprice_core::types::{OptionType, PricingParameters};
use crossprice_mc::{SimulationConfig, SimulationPricer};
use crossprice_models::{AnalyticPricer, LatticePricer};

/// Run the price command.
#[allow(clippy::too_many_arguments)]
pub fn run(
    spot: f64,
    strike: f64,
    expiry: f64,
    rate: f64,
    volatility: f64,
    option_type: &str,
    n_steps: usize,
    n_simulations: usize,
    seed: u64,
    format: &str,
) -> anyhow::Result<()> {
    let side: OptionType = option_type.parse().context("invalid option type")?;
    let params = PricingParameters::new(spot, strike, expiry, rate, volatility)
        .context("invalid pricing parameters")?;

    info!(?side, n_steps, n_simulations, seed, "pricing contract");

    let analytic = AnalyticPricer::new(params);
    let greeks = analytic.greeks();

    let lattice = LatticePricer::new(params, n_steps).context("lattice construction failed")?;

    let config = SimulationConfig::builder()
        .n_simulations(n_simulations)
        .seed(seed)
        .build()
        .context("invalid simulation configuration")?;
    let mut mc = SimulationPricer::new(params, config);
    mc.simulate();

    let analytic_price = analytic.price(side);
    let lattice_price = lattice.price(side);
    let mc_price = mc.price(side)?;
    let (ci_lo, ci_hi) = mc.confidence_interval(side, 0.95)?;

    match format {
        "json" => {
            let payload = json!({
                "params": params,
                "option_type": side,
                "d1": analytic.d1(),
                "d2": analytic.d2(),
                "analytic_price": analytic_price,
                "lattice_price": lattice_price,
                "mc_price": mc_price,
                "mc_confidence_interval_95": [ci_lo, ci_hi],
                "greeks": greeks,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "table" => {
            println!("Contract: {side} S={spot} K={strike} T={expiry}y r={rate} sigma={volatility}");
            println!("  d1 = {:.6}, d2 = {:.6}", analytic.d1(), analytic.d2());
            println!("Prices");
            println!("  analytic     {analytic_price:>12.6}");
            println!("  lattice      {lattice_price:>12.6}  ({n_steps} steps)");
            println!(
                "  monte carlo  {mc_price:>12.6}  (95% CI [{ci_lo:.6}, {ci_hi:.6}], {n_simulations} paths)"
            );
            println!("Greeks (vega/rho per 1%, theta per day)");
            println!(
                "  delta {:.6} (call) / {:.6} (put), gamma {:.6}",
                greeks.delta_call, greeks.delta_put, greeks.gamma
            );
            println!(
                "  vega {:.6}, theta {:.6} (call) / {:.6} (put), rho {:.6} (call) / {:.6} (put)",
                greeks.vega, greeks.theta_call, greeks.theta_put, greeks.rho_call, greeks.rho_put
            );
        }
        other => bail!("unknown format: {other}. Supported: json, table"),
    }

    Ok(())
}

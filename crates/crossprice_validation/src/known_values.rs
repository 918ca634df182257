//! Regression checks against published reference values.
//!
//! Three literal scenarios guard the analytic model:
//! - the Hull textbook call (S=42, K=40, T=0.5, r=0.10, σ=0.20 → ≈ 4.76)
//! - put-call parity on the ATM reference contract
//! - a deep ITM near-expiry call tracking its intrinsic value

use tracing::debug;

use crossprice_core::types::PricingParameters;
use crossprice_models::AnalyticPricer;

use crate::parity::{validate_put_call_parity, PARITY_TOLERANCE};
use crate::report::CheckOutcome;

/// Runs the literal regression scenarios.
///
/// Each scenario produces a [`CheckOutcome`]; a scenario whose parameters
/// fail validation is reported as a failed outcome rather than an error, so
/// the caller always receives the full list.
pub fn known_value_checks() -> Vec<CheckOutcome> {
    debug!("running known-value regression checks");
    vec![hull_reference_call(), atm_parity(), deep_itm_intrinsic()]
}

fn hull_reference_call() -> CheckOutcome {
    const EXPECTED: f64 = 4.76;
    const TOLERANCE: f64 = 0.1;

    match PricingParameters::new(42.0, 40.0, 0.5, 0.10, 0.20) {
        Ok(params) => {
            let price = AnalyticPricer::new(params).call_price();
            CheckOutcome::new(
                "hull_reference_call",
                (price - EXPECTED).abs() <= TOLERANCE,
                format!("call = {price:.4}, expected {EXPECTED} ± {TOLERANCE}"),
            )
        }
        Err(err) => CheckOutcome::new("hull_reference_call", false, err.to_string()),
    }
}

fn atm_parity() -> CheckOutcome {
    match PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2) {
        Ok(params) => {
            let pricer = AnalyticPricer::new(params);
            let check = validate_put_call_parity(
                pricer.call_price(),
                pricer.put_price(),
                params.spot,
                params.strike,
                params.rate,
                params.expiry,
                PARITY_TOLERANCE,
            );
            CheckOutcome::new(
                "atm_put_call_parity",
                check.valid,
                format!(
                    "C - P = {:.6}, S - K·e^(-rT) = {:.6}, gap {:.2e}",
                    check.left, check.right, check.difference
                ),
            )
        }
        Err(err) => CheckOutcome::new("atm_put_call_parity", false, err.to_string()),
    }
}

fn deep_itm_intrinsic() -> CheckOutcome {
    const INTRINSIC: f64 = 50.0;
    const TOLERANCE: f64 = 1.0;

    match PricingParameters::new(150.0, 100.0, 0.01, 0.05, 0.2) {
        Ok(params) => {
            let price = AnalyticPricer::new(params).call_price();
            CheckOutcome::new(
                "deep_itm_near_expiry",
                (price - INTRINSIC).abs() <= TOLERANCE,
                format!("call = {price:.4}, intrinsic {INTRINSIC} ± {TOLERANCE}"),
            )
        }
        Err(err) => CheckOutcome::new("deep_itm_near_expiry", false, err.to_string()),
    }
}

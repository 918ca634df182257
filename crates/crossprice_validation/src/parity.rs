//! Put-call parity validation.
//!
//! For European options on a non-dividend-paying underlying,
//! `C - P = S - K·e^(-rT)` must hold for any arbitrage-free price pair.

use serde::Serialize;

/// Default dollar tolerance for a parity check.
pub const PARITY_TOLERANCE: f64 = 0.01;

/// Outcome of a put-call parity check.
///
/// Keeps both sides of the identity so a report can show how far apart
/// they are, not just a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParityCheck {
    /// Left-hand side: C - P.
    pub left: f64,
    /// Right-hand side: S - K·e^(-rT).
    pub right: f64,
    /// Signed gap, left - right.
    pub difference: f64,
    /// Tolerance the gap was judged against.
    pub tolerance: f64,
    /// True when |difference| <= tolerance.
    pub valid: bool,
}

/// Checks put-call parity for an observed call/put price pair.
///
/// # Examples
/// ```
/// use crossprice_validation::{validate_put_call_parity, PARITY_TOLERANCE};
///
/// // Consistent pair: C - P exactly matches S - K·e^(-rT)
/// let forward = 100.0 - 100.0 * (-0.05_f64).exp();
/// let check = validate_put_call_parity(
///     10.45, 10.45 - forward, 100.0, 100.0, 0.05, 1.0, PARITY_TOLERANCE,
/// );
/// assert!(check.valid);
/// ```
pub fn validate_put_call_parity(
    call_price: f64,
    put_price: f64,
    spot: f64,
    strike: f64,
    rate: f64,
    expiry: f64,
    tolerance: f64,
) -> ParityCheck {
    let left = call_price - put_price;
    let right = spot - strike * (-rate * expiry).exp();
    let difference = left - right;

    ParityCheck {
        left,
        right,
        difference,
        tolerance,
        valid: difference.abs() <= tolerance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossprice_core::types::PricingParameters;
    use crossprice_models::AnalyticPricer;

    #[test]
    fn test_analytic_prices_satisfy_parity() {
        let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
        let pricer = AnalyticPricer::new(params);

        let check = validate_put_call_parity(
            pricer.call_price(),
            pricer.put_price(),
            100.0,
            100.0,
            0.05,
            1.0,
            PARITY_TOLERANCE,
        );
        assert!(check.valid);
        assert!(check.difference.abs() < 1e-10);
    }

    #[test]
    fn test_mispriced_pair_fails() {
        // Call quoted a dollar rich relative to the put
        let check =
            validate_put_call_parity(11.45, 5.57, 100.0, 100.0, 0.05, 1.0, PARITY_TOLERANCE);
        assert!(!check.valid);
        assert!(check.difference > 0.5);
    }

    #[test]
    fn test_wide_tolerance_accepts_noisy_pair() {
        let check = validate_put_call_parity(10.50, 5.57, 100.0, 100.0, 0.05, 1.0, 0.25);
        assert!(check.valid);
    }

    #[test]
    fn test_sides_reported() {
        let check =
            validate_put_call_parity(10.45, 5.57, 100.0, 100.0, 0.05, 1.0, PARITY_TOLERANCE);
        assert!((check.left - (10.45 - 5.57)).abs() < 1e-12);
        assert!((check.right - (100.0 - 100.0 * (-0.05_f64).exp())).abs() < 1e-12);
        assert_eq!(check.tolerance, PARITY_TOLERANCE);
    }
}

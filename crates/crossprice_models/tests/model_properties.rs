//! Cross-cutting model properties: put-call parity under randomised
//! parameters, lattice convergence and solver round-trips.

use approx::assert_relative_eq;
use proptest::prelude::*;

use crossprice_core::types::{OptionType, PricingParameters};
use crossprice_models::{AnalyticPricer, LatticePricer, VolatilitySolver};

proptest! {
    /// C - P = S - K·e^(-rT) to 1e-6 across the whole valid parameter box.
    #[test]
    fn analytic_put_call_parity(
        spot in 1.0..500.0_f64,
        strike in 1.0..500.0_f64,
        expiry in 0.01..5.0_f64,
        rate in -0.05..0.15_f64,
        vol in 0.01..1.5_f64,
    ) {
        let params = PricingParameters::new(spot, strike, expiry, rate, vol).unwrap();
        let pricer = AnalyticPricer::new(params);

        let lhs = pricer.call_price() - pricer.put_price();
        let rhs = spot - strike * (-rate * expiry).exp();
        prop_assert!((lhs - rhs).abs() < 1e-6, "parity gap {} at {:?}", lhs - rhs, params);
    }

    /// Prices are non-negative and a call never exceeds spot, a put never
    /// exceeds the discounted strike.
    #[test]
    fn analytic_arbitrage_bounds(
        spot in 1.0..500.0_f64,
        strike in 1.0..500.0_f64,
        expiry in 0.01..5.0_f64,
        rate in 0.0..0.15_f64,
        vol in 0.01..1.5_f64,
    ) {
        let params = PricingParameters::new(spot, strike, expiry, rate, vol).unwrap();
        let pricer = AnalyticPricer::new(params);

        // Slack covers the 1.5e-7 CDF approximation error scaled by S and K
        let call = pricer.call_price();
        let put = pricer.put_price();
        prop_assert!(call >= -1e-3);
        prop_assert!(put >= -1e-3);
        prop_assert!(call <= spot + 1e-3);
        prop_assert!(put <= strike * (-rate * expiry).exp() + 1e-3);
    }

    /// Implied volatility recovers the generating σ from the model price.
    #[test]
    fn solver_round_trip(
        vol in 0.05..1.0_f64,
        moneyness in 0.8..1.2_f64,
    ) {
        let params = PricingParameters::new(100.0 * moneyness, 100.0, 1.0, 0.05, vol).unwrap();
        let market = AnalyticPricer::new(params).call_price();

        let sigma = VolatilitySolver::default()
            .solve(&params, OptionType::Call, market)
            .unwrap();
        prop_assert!((sigma - vol).abs() < 1e-4, "σ₀ = {vol}, recovered {sigma}");
    }
}

#[test]
fn lattice_error_decreases_monotonically_in_fidelity() {
    let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    let benchmark = AnalyticPricer::new(params).call_price();

    let error_at = |n: usize| {
        (LatticePricer::new(params, n).unwrap().call_price() - benchmark).abs()
    };

    let coarse = error_at(10);
    let medium = error_at(100);
    let fine = error_at(1000);
    let finest = error_at(5000);

    assert!(medium < coarse, "error at 100 steps ({medium}) >= at 10 ({coarse})");
    assert!(fine < medium, "error at 1000 steps ({fine}) >= at 100 ({medium})");
    assert!(finest < 0.01, "error at 5000 steps still {finest}");
}

#[test]
fn three_models_agree_on_reference_scenario() {
    // S = K = 100, T = 1, r = 0.05, σ = 0.20: analytic vs 1000-step lattice
    let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
    let analytic = AnalyticPricer::new(params);
    let lattice = LatticePricer::new(params, 1000).unwrap();

    for (a, l) in [
        (analytic.call_price(), lattice.call_price()),
        (analytic.put_price(), lattice.put_price()),
    ] {
        assert_relative_eq!(a, l, max_relative = 0.01);
    }
}

//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form pricing and analytical Greeks for
//! European call and put options under lognormal dynamics.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use serde::Serialize;

use crossprice_core::math::distributions::{norm_cdf, norm_pdf};
use crossprice_core::types::{OptionType, PricingParameters};

/// Number of calendar days used to express theta per day.
const DAYS_PER_YEAR: f64 = 365.0;

/// Scaled option sensitivities for both sides.
///
/// Reporting conventions:
/// - `vega` and `rho_*` are per 1 percentage point move (raw value / 100)
/// - `theta_*` is per calendar day (raw value / 365)
/// - `delta_*` and `gamma` are unscaled
///
/// Gamma and vega are side-independent, so they appear once.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Greeks {
    /// Call delta, N(d₁), in [0, 1].
    pub delta_call: f64,
    /// Put delta, N(d₁) - 1, in [-1, 0].
    pub delta_put: f64,
    /// Gamma, φ(d₁) / (S·σ·√T), side-independent.
    pub gamma: f64,
    /// Vega per 1% volatility move.
    pub vega: f64,
    /// Call theta per calendar day.
    pub theta_call: f64,
    /// Put theta per calendar day.
    pub theta_put: f64,
    /// Call rho per 1% rate move.
    pub rho_call: f64,
    /// Put rho per 1% rate move.
    pub rho_put: f64,
}

/// Black-Scholes closed-form pricer.
///
/// The intermediate quantities d₁, d₂, √T and the discount factor depend
/// only on the parameters, so they are computed once at construction and
/// shared by every price and Greek query.
///
/// # Examples
/// ```
/// use crossprice_core::types::PricingParameters;
/// use crossprice_models::AnalyticPricer;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// let pricer = AnalyticPricer::new(params);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = pricer.call_price() - pricer.put_price()
///     - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct AnalyticPricer {
    params: PricingParameters,
    d1: f64,
    d2: f64,
    sqrt_t: f64,
    discount: f64,
}

impl AnalyticPricer {
    /// Creates a pricer from validated parameters, memoizing d₁, d₂, √T and
    /// the discount factor.
    ///
    /// Infallible: [`PricingParameters`] guarantees positive spot, strike,
    /// expiry and volatility, so the intermediates are always finite.
    pub fn new(params: PricingParameters) -> Self {
        let sqrt_t = params.expiry.sqrt();
        let vol_sqrt_t = params.volatility * sqrt_t;

        // d1 = (ln(S/K) + (r + σ²/2)T) / (σ√T)
        let log_moneyness = params.moneyness().ln();
        let drift = (params.rate + 0.5 * params.volatility * params.volatility) * params.expiry;
        let d1 = (log_moneyness + drift) / vol_sqrt_t;
        let d2 = d1 - vol_sqrt_t;

        let discount = (-params.rate * params.expiry).exp();

        Self {
            params,
            d1,
            d2,
            sqrt_t,
            discount,
        }
    }

    /// Returns the pricing parameters.
    #[inline]
    pub fn params(&self) -> &PricingParameters {
        &self.params
    }

    /// The d₁ term of the Black-Scholes formula.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// The d₂ term, d₁ - σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// European call price: C = S·N(d₁) - K·e^(-rT)·N(d₂).
    #[inline]
    pub fn call_price(&self) -> f64 {
        self.params.spot * norm_cdf(self.d1)
            - self.params.strike * self.discount * norm_cdf(self.d2)
    }

    /// European put price: P = K·e^(-rT)·N(-d₂) - S·N(-d₁).
    #[inline]
    pub fn put_price(&self) -> f64 {
        self.params.strike * self.discount * norm_cdf(-self.d2)
            - self.params.spot * norm_cdf(-self.d1)
    }

    /// Price for the requested side.
    #[inline]
    pub fn price(&self, option_type: OptionType) -> f64 {
        match option_type {
            OptionType::Call => self.call_price(),
            OptionType::Put => self.put_price(),
        }
    }

    /// Unscaled vega, S·φ(d₁)·√T.
    ///
    /// This is ∂V/∂σ per unit volatility move, the derivative the implied
    /// volatility solver divides by. [`Greeks::vega`] reports the same
    /// quantity scaled per percentage point.
    #[inline]
    pub fn raw_vega(&self) -> f64 {
        self.params.spot * norm_pdf(self.d1) * self.sqrt_t
    }

    /// All Greeks for both sides, with reporting scaling applied.
    ///
    /// - delta_call = N(d₁); delta_put = N(d₁) - 1
    /// - gamma = φ(d₁) / (S·σ·√T)
    /// - vega = S·φ(d₁)·√T / 100 (per 1% vol move)
    /// - theta_call = [-(S·σ·φ(d₁))/(2√T) - r·K·e^(-rT)·N(d₂)] / 365
    /// - theta_put  = [-(S·σ·φ(d₁))/(2√T) + r·K·e^(-rT)·N(-d₂)] / 365
    /// - rho_call = K·T·e^(-rT)·N(d₂) / 100; rho_put = -K·T·e^(-rT)·N(-d₂) / 100
    pub fn greeks(&self) -> Greeks {
        let p = &self.params;
        let n_d1 = norm_cdf(self.d1);
        let n_d2 = norm_cdf(self.d2);
        let n_neg_d2 = norm_cdf(-self.d2);
        let pdf_d1 = norm_pdf(self.d1);

        let gamma = pdf_d1 / (p.spot * p.volatility * self.sqrt_t);

        // Common time-decay term: -(S·σ·φ(d₁))/(2√T)
        let decay = -(p.spot * p.volatility * pdf_d1) / (2.0 * self.sqrt_t);
        let carry_call = p.rate * p.strike * self.discount * n_d2;
        let carry_put = p.rate * p.strike * self.discount * n_neg_d2;

        let rho_raw_call = p.strike * p.expiry * self.discount * n_d2;
        let rho_raw_put = -p.strike * p.expiry * self.discount * n_neg_d2;

        Greeks {
            delta_call: n_d1,
            delta_put: n_d1 - 1.0,
            gamma,
            vega: self.raw_vega() / 100.0,
            theta_call: (decay - carry_call) / DAYS_PER_YEAR,
            theta_put: (decay + carry_put) / DAYS_PER_YEAR,
            rho_call: rho_raw_call / 100.0,
            rho_put: rho_raw_put / 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pricer(spot: f64, strike: f64, expiry: f64, rate: f64, vol: f64) -> AnalyticPricer {
        AnalyticPricer::new(PricingParameters::new(spot, strike, expiry, rate, vol).unwrap())
    }

    // ==========================================================
    // d1/d2
    // ==========================================================

    #[test]
    fn test_d1_atm_zero_rate() {
        // ATM with r=0: d1 = σ√T / 2 = 0.1
        let p = pricer(100.0, 100.0, 1.0, 0.0, 0.2);
        assert_relative_eq!(p.d1(), 0.1, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_d2_relationship() {
        // d2 = d1 - σ√T
        let p = pricer(100.0, 105.0, 0.5, 0.05, 0.2);
        let expected_d2 = p.d1() - 0.2 * 0.5_f64.sqrt();
        assert_relative_eq!(p.d2(), expected_d2, epsilon = 1e-10);
    }

    #[test]
    fn test_d1_sign_follows_moneyness() {
        assert!(pricer(150.0, 100.0, 1.0, 0.05, 0.2).d1() > 1.0);
        assert!(pricer(50.0, 100.0, 1.0, 0.05, 0.2).d1() < -1.0);
    }

    // ==========================================================
    // Prices
    // ==========================================================

    #[test]
    fn test_call_price_reference_value() {
        // S=100, K=100, r=0.05, σ=0.2, T=1: call ≈ 10.4506
        let p = pricer(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_relative_eq!(p.call_price(), 10.4506, epsilon = 0.001);
    }

    #[test]
    fn test_put_price_reference_value() {
        // Same parameters: put ≈ 5.5735
        let p = pricer(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_relative_eq!(p.put_price(), 5.5735, epsilon = 0.001);
    }

    #[test]
    fn test_hull_reference_value() {
        // Hull, Options, Futures and Other Derivatives:
        // S=42, K=40, T=0.5, r=0.10, σ=0.20 → call ≈ 4.76
        let p = pricer(42.0, 40.0, 0.5, 0.10, 0.20);
        assert_relative_eq!(p.call_price(), 4.76, epsilon = 0.01);
    }

    #[test]
    fn test_price_dispatch_matches_sides() {
        let p = pricer(100.0, 95.0, 0.75, 0.03, 0.25);
        assert_eq!(p.price(OptionType::Call), p.call_price());
        assert_eq!(p.price(OptionType::Put), p.put_price());
    }

    #[test]
    fn test_deep_itm_call_above_forward_intrinsic() {
        // Deep ITM call ≈ S - K·e^(-rT)
        let p = pricer(200.0, 100.0, 1.0, 0.05, 0.2);
        let forward_intrinsic = 200.0 - 100.0 * (-0.05_f64).exp();
        assert!(p.call_price() >= forward_intrinsic - 0.01);
    }

    #[test]
    fn test_deep_otm_call_near_zero() {
        let p = pricer(50.0, 100.0, 1.0, 0.05, 0.2);
        assert!(p.call_price() < 0.01);
    }

    #[test]
    fn test_deep_itm_near_expiry_tracks_intrinsic() {
        // S=150, K=100, T=0.01: call within $1 of intrinsic 50
        let p = pricer(150.0, 100.0, 0.01, 0.05, 0.2);
        assert!((p.call_price() - 50.0).abs() < 1.0);
    }

    // ==========================================================
    // Put-call parity
    // ==========================================================

    #[test]
    fn test_put_call_parity_various_strikes() {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let p = pricer(100.0, strike, 1.0, 0.05, 0.2);
            let forward = 100.0 - strike * (-0.05_f64).exp();
            assert_relative_eq!(p.call_price() - p.put_price(), forward, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_rate() {
        let p = pricer(100.0, 100.0, 1.0, -0.02, 0.2);
        let forward = 100.0 - 100.0 * (0.02_f64).exp();
        assert_relative_eq!(p.call_price() - p.put_price(), forward, epsilon = 1e-10);
    }

    // ==========================================================
    // Greeks
    // ==========================================================

    #[test]
    fn test_delta_bounds_and_relationship() {
        for strike in [80.0, 90.0, 100.0, 110.0, 120.0] {
            let g = pricer(100.0, strike, 1.0, 0.05, 0.2).greeks();
            assert!(g.delta_call >= 0.0 && g.delta_call <= 1.0);
            assert!(g.delta_put >= -1.0 && g.delta_put <= 0.0);
            // Put delta = call delta - 1
            assert_relative_eq!(g.delta_put, g.delta_call - 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_gamma_non_negative_and_peaks_atm() {
        let gamma_atm = pricer(100.0, 100.0, 1.0, 0.05, 0.2).greeks().gamma;
        let gamma_itm = pricer(100.0, 80.0, 1.0, 0.05, 0.2).greeks().gamma;
        let gamma_otm = pricer(100.0, 120.0, 1.0, 0.05, 0.2).greeks().gamma;
        assert!(gamma_atm >= gamma_itm);
        assert!(gamma_atm >= gamma_otm);
        assert!(gamma_otm >= 0.0);
    }

    #[test]
    fn test_vega_scaling() {
        // Reported vega = raw vega / 100
        let p = pricer(100.0, 100.0, 1.0, 0.05, 0.2);
        assert_relative_eq!(p.greeks().vega, p.raw_vega() / 100.0, epsilon = 1e-12);
        assert!(p.raw_vega() > 0.0);
    }

    #[test]
    fn test_theta_per_day_scaling() {
        // Annual theta for ATM 1y call ≈ -6.414; per-day ≈ -0.01757
        let g = pricer(100.0, 100.0, 1.0, 0.05, 0.2).greeks();
        assert!(g.theta_call < 0.0);
        assert!(g.theta_call > -0.05, "theta should be per-day scaled");
    }

    #[test]
    fn test_rho_signs() {
        let g = pricer(100.0, 100.0, 1.0, 0.05, 0.2).greeks();
        assert!(g.rho_call > 0.0);
        assert!(g.rho_put < 0.0);
    }

    // ==========================================================
    // Greeks vs finite differences
    // ==========================================================

    #[test]
    fn test_delta_vs_finite_diff() {
        let h = 0.01;
        let base = pricer(100.0, 100.0, 1.0, 0.05, 0.2);
        let up = pricer(100.0 + h, 100.0, 1.0, 0.05, 0.2);
        let dn = pricer(100.0 - h, 100.0, 1.0, 0.05, 0.2);

        let fd_delta = (up.call_price() - dn.call_price()) / (2.0 * h);
        assert_relative_eq!(base.greeks().delta_call, fd_delta, epsilon = 1e-4);
    }

    #[test]
    fn test_gamma_vs_finite_diff() {
        let h = 0.01;
        let base = pricer(100.0, 100.0, 1.0, 0.05, 0.2);
        let up = pricer(100.0 + h, 100.0, 1.0, 0.05, 0.2);
        let dn = pricer(100.0 - h, 100.0, 1.0, 0.05, 0.2);

        let fd_gamma =
            (up.call_price() - 2.0 * base.call_price() + dn.call_price()) / (h * h);
        assert_relative_eq!(base.greeks().gamma, fd_gamma, epsilon = 1e-3);
    }

    #[test]
    fn test_raw_vega_vs_finite_diff() {
        let h = 0.001;
        let base = pricer(100.0, 100.0, 1.0, 0.05, 0.2);
        let up = pricer(100.0, 100.0, 1.0, 0.05, 0.2 + h);
        let dn = pricer(100.0, 100.0, 1.0, 0.05, 0.2 - h);

        let fd_vega = (up.call_price() - dn.call_price()) / (2.0 * h);
        assert_relative_eq!(base.raw_vega(), fd_vega, epsilon = 1e-3);
    }

    #[test]
    fn test_rho_vs_finite_diff() {
        let h = 0.0001;
        let base = pricer(100.0, 100.0, 1.0, 0.05, 0.2);
        let up = pricer(100.0, 100.0, 1.0, 0.05 + h, 0.2);
        let dn = pricer(100.0, 100.0, 1.0, 0.05 - h, 0.2);

        let fd_rho = (up.call_price() - dn.call_price()) / (2.0 * h);
        assert_relative_eq!(base.greeks().rho_call * 100.0, fd_rho, epsilon = 1e-3);
    }

    #[test]
    fn test_theta_vs_finite_diff() {
        // Theta reported per day; compare against -∂V/∂T per year
        let h = 1e-5;
        let base = pricer(100.0, 100.0, 1.0, 0.05, 0.2);
        let up = pricer(100.0, 100.0, 1.0 + h, 0.05, 0.2);
        let dn = pricer(100.0, 100.0, 1.0 - h, 0.05, 0.2);

        let fd_theta_annual = -(up.call_price() - dn.call_price()) / (2.0 * h);
        assert_relative_eq!(
            base.greeks().theta_call * 365.0,
            fd_theta_annual,
            epsilon = 1e-3
        );
    }
}

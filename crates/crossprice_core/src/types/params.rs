//! Validated pricing inputs shared by every model.
//!
//! [`PricingParameters`] rejects degenerate inputs at construction so the
//! pricing kernels never see a non-positive spot, an expired contract or a
//! zero volatility. [`OptionType`] is a closed two-variant enum carrying the
//! payoff itself.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::PricingError;

/// European option side.
///
/// # Examples
/// ```
/// use crossprice_core::types::OptionType;
///
/// assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
/// assert_eq!(OptionType::Put.payoff(110.0, 100.0), 0.0);
/// assert_eq!("CALL".parse::<OptionType>().unwrap(), OptionType::Call);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Intrinsic value at expiry for the given terminal spot and strike.
    #[inline]
    pub fn payoff(self, terminal: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (terminal - strike).max(0.0),
            OptionType::Put => (strike - terminal).max(0.0),
        }
    }

    /// True for [`OptionType::Call`].
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            other => Err(PricingError::InvalidInput(format!(
                "unknown option type '{other}' (expected 'call' or 'put')"
            ))),
        }
    }
}

/// Immutable, validated inputs to a European option pricing model.
///
/// Construction is the single validation point: every field is checked once
/// in [`PricingParameters::new`] and the models downstream assume validity.
///
/// # Fields
/// - `spot`: current underlying price (> 0, finite)
/// - `strike`: exercise price (> 0, finite)
/// - `expiry`: time to expiry in years (> 0, finite)
/// - `rate`: continuously compounded risk-free rate (finite; may be negative)
/// - `volatility`: annualised volatility (> 0, finite)
///
/// # Examples
/// ```
/// use crossprice_core::types::PricingParameters;
///
/// let params = PricingParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
/// assert_eq!(params.moneyness(), 1.0);
///
/// assert!(PricingParameters::new(100.0, 100.0, 0.0, 0.05, 0.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricingParameters {
    /// Current underlying price.
    pub spot: f64,
    /// Exercise price.
    pub strike: f64,
    /// Time to expiry in years.
    pub expiry: f64,
    /// Continuously compounded risk-free rate.
    pub rate: f64,
    /// Annualised volatility of the underlying.
    pub volatility: f64,
}

impl PricingParameters {
    /// Creates validated pricing parameters.
    ///
    /// # Errors
    /// Returns [`PricingError::InvalidParameter`] naming the first offending
    /// field when `spot`, `strike`, `expiry` or `volatility` is non-positive
    /// or non-finite, or when `rate` is non-finite.
    pub fn new(
        spot: f64,
        strike: f64,
        expiry: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        Self::check_positive("spot", spot)?;
        Self::check_positive("strike", strike)?;
        Self::check_positive("expiry", expiry)?;
        if !rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: rate,
            });
        }
        Self::check_positive("volatility", volatility)?;

        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            volatility,
        })
    }

    /// Returns a copy with the volatility replaced.
    ///
    /// For solver iteration over σ: the remaining fields were validated at
    /// construction, and the caller guarantees `volatility > 0` (the
    /// implied-volatility solver clamps its iterates to a positive bracket).
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        debug_assert!(
            volatility.is_finite() && volatility > 0.0,
            "with_volatility requires a positive finite volatility"
        );
        Self { volatility, ..self }
    }

    /// Spot-to-strike ratio (S/K).
    #[inline]
    pub fn moneyness(&self) -> f64 {
        self.spot / self.strike
    }

    fn check_positive(name: &'static str, value: f64) -> Result<(), PricingError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(PricingError::InvalidParameter { name, value });
        }
        Ok(())
    }
}

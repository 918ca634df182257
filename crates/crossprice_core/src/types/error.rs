//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from parameter validation and pricing operations
//! - `SolverError`: Errors from root-finding solvers

use thiserror::Error;

/// Categorised pricing errors.
///
/// Provides structured error handling for parameter validation and pricing
/// operations with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidParameter`: A pricing input failed its validity constraint
/// - `InvalidInput`: General invalid input (e.g., zero step count)
/// - `ModelFailure`: Model assumptions violated (e.g., risk-neutral
///   probability outside (0, 1))
///
/// # Examples
/// ```
/// use crossprice_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter { name: "spot", value: -100.0 };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A pricing parameter failed validation (non-positive or non-finite).
    #[error("Invalid parameter {name} = {value}: must be positive and finite")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// Invalid input data or configuration.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model assumptions violated for the supplied parameters.
    #[error("Model failure: {0}")]
    ModelFailure(String),
}

/// Root-finding solver errors.
///
/// Provides structured error handling for root-finding operations. A caller
/// can always distinguish "no solution found" from a valid root near zero.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `DerivativeNearZero`: Derivative too small for a stable Newton update
/// - `NumericalInstability`: Iteration produced a non-finite value
///
/// # Examples
/// ```
/// use crossprice_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted.
        iterations: usize,
    },

    /// Derivative near zero (flat objective; division would be unstable).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The abscissa where the derivative vanished.
        x: f64,
    },

    /// Numerical instability during iteration.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl From<SolverError> for PricingError {
    fn from(err: SolverError) -> Self {
        PricingError::ModelFailure(err.to_string())
    }
}

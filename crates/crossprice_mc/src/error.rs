//! Simulation error types.

use thiserror::Error;

/// Simulation configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Simulation count outside the allowed bounds.
    #[error("Invalid simulation count {0}: must be in [1, 100000000]")]
    InvalidSimulationCount(usize),

    /// Job count of zero.
    #[error("Invalid job count {0}: must be at least 1")]
    InvalidJobCount(usize),
}

/// Errors from the Monte Carlo engine.
///
/// Distinguishes ordering violations (querying before simulating) from
/// invalid query arguments, so callers can react programmatically.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A price or statistics query arrived before `simulate()` populated
    /// the terminal sample.
    #[error("No simulation results available: call simulate() first")]
    NotSimulated,

    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level {confidence}: must be in (0, 1)")]
    InvalidConfidence {
        /// The rejected confidence level.
        confidence: f64,
    },

    /// Configuration rejected at build time.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

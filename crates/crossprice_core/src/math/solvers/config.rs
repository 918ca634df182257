//! Solver configuration.

use num_traits::Float;

/// Configuration for iterative root-finding solvers.
///
/// # Examples
/// ```
/// use crossprice_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert_eq!(config.max_iterations, 100);
///
/// let tight = SolverConfig::new(1e-10, 200);
/// assert_eq!(tight.max_iterations, 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance on |f(x)|.
    pub tolerance: T,
    /// Maximum number of iterations before giving up.
    pub max_iterations: usize,
}

impl<T: Float> SolverConfig<T> {
    /// Creates a solver configuration with explicit tolerance and iteration cap.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default configuration: tolerance 1e-6, 100 iterations.
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-6).unwrap(),
            max_iterations: 100,
        }
    }
}

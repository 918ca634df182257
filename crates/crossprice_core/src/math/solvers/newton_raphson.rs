//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Derivatives smaller than this in magnitude are treated as zero.
const DERIVATIVE_FLOOR: f64 = 1e-10;

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a root, meaning the number
/// of correct digits approximately doubles each iteration. However, it may
/// fail if:
/// - The derivative is near zero
/// - The initial guess is far from the root
/// - The function has discontinuities
///
/// Failures are reported as typed [`SolverError`] values; the solver never
/// returns a sentinel.
///
/// # Example
///
/// ```
/// use crossprice_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of f
    /// * `x0` - Initial guess
    ///
    /// # Errors
    ///
    /// * [`SolverError::MaxIterationsExceeded`] - Failed to converge
    /// * [`SolverError::DerivativeNearZero`] - Derivative too small
    /// * [`SolverError::NumericalInstability`] - Iterate became non-finite
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.iterate(f, f_prime, x0, |x| x)
    }

    /// Find a root of `f` with iterates clamped to `[lo, hi]`.
    ///
    /// Newton steps that would leave the bracket are projected back onto it,
    /// which keeps the iteration inside the domain where `f` is defined.
    /// Useful when `f` is only meaningful on a known interval, such as a
    /// volatility that must stay positive.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`NewtonRaphsonSolver::find_root`].
    ///
    /// # Example
    ///
    /// ```
    /// use crossprice_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // ln(x) = 0 has its root at 1; the clamp keeps iterates positive
    /// let root = solver
    ///     .find_root_in(|x: f64| x.ln(), |x| 1.0 / x, 3.0, 0.01, 5.0)
    ///     .unwrap();
    /// assert!((root - 1.0).abs() < 1e-6);
    /// ```
    pub fn find_root_in<F, G>(&self, f: F, f_prime: G, x0: T, lo: T, hi: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        self.iterate(f, f_prime, x0.max(lo).min(hi), |x| x.max(lo).min(hi))
    }

    fn iterate<F, G, P>(&self, f: F, f_prime: G, x0: T, project: P) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
        P: Fn(T) -> T,
    {
        let mut x = x0;
        let floor = T::from(DERIVATIVE_FLOOR).unwrap();

        for _iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            // Check for convergence
            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let f_prime_val = f_prime(x);

            // Check for near-zero derivative
            if f_prime_val.abs() < floor {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            // Newton update, projected back into the feasible set
            x = project(x - f_val / f_prime_val);

            // Check for non-finite values
            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

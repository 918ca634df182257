//! Numerical primitives: distribution functions and root-finding solvers.

pub mod distributions;
pub mod solvers;

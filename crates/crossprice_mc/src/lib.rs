//! # Crossprice MC (Simulation Layer)
//!
//! Parallel Monte Carlo pricing of European options under geometric
//! Brownian motion:
//! - [`rng`]: Seeded PRNG wrapper for reproducible sampling
//! - [`config`]: Simulation configuration with builder and bounds
//! - [`pricer`]: Batch-parallel engine with price, standard error and
//!   confidence interval queries
//!
//! ## Reproducibility
//!
//! All randomness flows from an explicit base seed threaded through the
//! configuration; there is no global RNG state. A fixed seed reproduces the
//! exact terminal sample regardless of thread scheduling, because batch
//! seeds derive from the batch index and the outputs are concatenated in
//! batch order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod error;
pub mod pricer;
pub mod rng;

pub use config::SimulationConfig;
pub use error::{ConfigError, SimulationError};
pub use pricer::SimulationPricer;
pub use rng::SimRng;

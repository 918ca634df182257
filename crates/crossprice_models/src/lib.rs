//! # Crossprice Models (Pricing Layer)
//!
//! Deterministic pricing models for European options:
//! - [`analytic`]: Black-Scholes closed-form pricer with analytical Greeks
//! - [`lattice`]: Cox-Ross-Rubinstein binomial tree pricer
//! - [`implied`]: Newton-Raphson implied volatility solver
//!
//! All models consume the same validated
//! [`PricingParameters`](crossprice_core::types::PricingParameters), so the
//! kernels here carry no input guards of their own.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod analytic;
pub mod implied;
pub mod lattice;

pub use analytic::{AnalyticPricer, Greeks};
pub use implied::{SolverSettings, VolatilitySolver};
pub use lattice::LatticePricer;

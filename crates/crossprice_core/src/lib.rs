//! # Crossprice Core (Foundation Layer)
//!
//! Shared building blocks for the crossprice pricing and calibration engine.
//!
//! This crate provides:
//! - Validated pricing inputs ([`types::PricingParameters`], [`types::OptionType`])
//! - Structured error taxonomy ([`types::PricingError`], [`types::SolverError`])
//! - Standard normal distribution functions ([`math::distributions`])
//! - Root-finding solvers ([`math::solvers`])
//!
//! ## Design Principles
//!
//! - **Validate at construction**: invalid parameters are rejected before any
//!   model sees them, so the pricing kernels carry no NaN guards.
//! - **Typed failures**: non-convergence and modelling-assumption violations
//!   are distinguishable errors, never numeric sentinels.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;

//! # Crossprice Validation (Certification Layer)
//!
//! Cross-validates the three pricing models against each other and against
//! published reference values:
//! - [`parity`]: put-call parity checks on observed prices
//! - [`comparison`]: three-model comparison against the analytic benchmark
//! - [`known_values`]: literal regression scenarios from the literature
//! - [`report`]: outcome aggregation (record failures, never abort early)
//! - [`records`]: tabular input/output contracts for external callers

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod comparison;
pub mod known_values;
pub mod parity;
pub mod records;
pub mod report;

pub use comparison::{compare_models, Fidelity, ModelComparison, ModelRow};
pub use known_values::known_value_checks;
pub use parity::{validate_put_call_parity, ParityCheck, PARITY_TOLERANCE};
pub use records::{price_quote, OptionQuote, PricingRecord};
pub use report::{CheckOutcome, ValidationReport};

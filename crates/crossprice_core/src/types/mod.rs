//! Core value types and error taxonomy.

mod error;
mod params;

pub use error::{PricingError, SolverError};
pub use params::{OptionType, PricingParameters};

//! Command implementations.

pub mod implied;
pub mod price;
pub mod validate;

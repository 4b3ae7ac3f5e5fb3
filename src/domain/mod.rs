//! Domain module
//!
//! Core domain types shared by the aggregates.

pub mod amount;
pub mod error;

pub use amount::{exact_add, exact_sub, parse_amount, plain_string, AmountError};
pub use error::DomainError;

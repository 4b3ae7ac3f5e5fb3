//! bank_accounts Library
//!
//! Account and Bank domain model with exact decimal balances.

pub mod aggregate;
pub mod config;
pub mod domain;
mod error;

pub use aggregate::{Account, Bank, BankSnapshot, SharedAccount};
pub use config::{Config, ConfigError};
pub use domain::{parse_amount, plain_string, AmountError, DomainError};
pub use error::{AppError, AppResult};

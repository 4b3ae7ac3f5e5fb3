//! Domain Error Types
//!
//! Pure domain errors that don't depend on infrastructure.

use rust_decimal::Decimal;
use thiserror::Error;

/// Domain-specific errors
///
/// Business rule violations raised by account operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// Debit would leave the balance below zero
    #[error("Insufficient funds")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    /// Result of an operation needs more digits or range than `Decimal` holds
    #[error("Balance out of range: {balance} with amount {amount}")]
    BalanceOutOfRange { balance: Decimal, amount: Decimal },
}

impl DomainError {
    /// Create an insufficient funds error
    pub fn insufficient_funds(requested: Decimal, available: Decimal) -> Self {
        Self::InsufficientFunds {
            requested,
            available,
        }
    }

    /// Create a balance out of range error
    pub fn balance_out_of_range(balance: Decimal, amount: Decimal) -> Self {
        Self::BalanceOutOfRange { balance, amount }
    }

    /// Check if this is a client error (caller's fault)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InsufficientFunds { .. })
    }
}

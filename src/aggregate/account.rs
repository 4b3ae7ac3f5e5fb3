//! Account Aggregate
//!
//! An account holds a holder name and an exact decimal balance.
//! Balances change only through `credit` and `debit` (plus the raw
//! `set_balance` setter used to seed fixtures).

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{exact_add, exact_sub, plain_string, DomainError};

use super::bank::{Bank, BankLink};

/// Shared handle to an account.
///
/// A bank stores these; callers keep their own clone and keep using the
/// account after registration. Single-threaded by construction.
pub type SharedAccount = Rc<RefCell<Account>>;

/// Account Aggregate
///
/// Equality and hashing use `(holder, balance)` only. The bank link is
/// informational and never compared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account owner
    holder: String,

    /// Current balance
    balance: Decimal,

    /// Non-owning link to the bank this account was registered with
    #[serde(skip)]
    bank: Option<BankLink>,
}

impl Account {
    pub fn new(holder: impl Into<String>, balance: Decimal) -> Self {
        Self {
            holder: holder.into(),
            balance,
            bank: None,
        }
    }

    /// Create an account already wrapped in a shared handle
    pub fn shared(holder: impl Into<String>, balance: Decimal) -> SharedAccount {
        Self::new(holder, balance).into_shared()
    }

    pub fn into_shared(self) -> SharedAccount {
        Rc::new(RefCell::new(self))
    }

    // =========================================================================
    // Account::credit()
    // =========================================================================

    /// Credit (deposit) money to the account.
    ///
    /// The amount is not validated: a negative amount lowers the balance.
    ///
    /// # Panics
    ///
    /// Panics if the exact sum does not fit a `Decimal` (more than 28
    /// significant digits, or beyond `Decimal::MAX`). Use [`can_credit`]
    /// to check first.
    ///
    /// [`can_credit`]: Account::can_credit
    pub fn credit(&mut self, amount: Decimal) {
        self.balance = match exact_add(self.balance, amount) {
            Some(balance) => balance,
            None => panic!("{}", DomainError::balance_out_of_range(self.balance, amount)),
        };

        tracing::debug!(
            holder = %self.holder,
            %amount,
            balance = %self.balance,
            "Account credited"
        );
    }

    // =========================================================================
    // Account::debit()
    // =========================================================================

    /// Debit (withdraw) money from the account.
    ///
    /// Fails with `DomainError::InsufficientFunds` when the balance would go
    /// below zero, and with `DomainError::BalanceOutOfRange` when the exact
    /// difference does not fit a `Decimal`. The balance is left untouched on
    /// failure. The amount's sign is not validated.
    pub fn debit(&mut self, amount: Decimal) -> Result<(), DomainError> {
        if amount > self.balance {
            tracing::warn!(
                holder = %self.holder,
                %amount,
                balance = %self.balance,
                "Debit refused: insufficient funds"
            );
            return Err(DomainError::insufficient_funds(amount, self.balance));
        }

        self.balance = exact_sub(self.balance, amount)
            .ok_or_else(|| DomainError::balance_out_of_range(self.balance, amount))?;

        tracing::debug!(
            holder = %self.holder,
            %amount,
            balance = %self.balance,
            "Account debited"
        );

        Ok(())
    }

    /// Whether `credit(amount)` would keep the balance exact
    pub fn can_credit(&self, amount: Decimal) -> bool {
        exact_add(self.balance, amount).is_some()
    }

    /// Overwrite the balance without any check
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    pub(crate) fn link_bank(&mut self, link: BankLink) {
        self.bank = Some(link);
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn holder(&self) -> &str {
        &self.holder
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Balance rendered without exponent or trailing zero padding
    pub fn plain_balance(&self) -> String {
        plain_string(self.balance)
    }

    /// The bank this account was last registered with, if it is still alive
    pub fn bank(&self) -> Option<Bank> {
        self.bank
            .as_ref()
            .and_then(Weak::upgrade)
            .map(Bank::from_state)
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.holder == other.holder && self.balance == other.balance
    }
}

impl Eq for Account {}

impl Hash for Account {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.holder.hash(state);
        self.balance.hash(state);
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.holder, self.plain_balance())
    }
}

//! Bank Aggregate
//!
//! A bank keeps an insertion-ordered list of shared account handles and
//! moves money between accounts as a debit followed by a credit.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::DomainError;

use super::account::{Account, SharedAccount};

/// Non-owning link from an account back to its bank
pub(crate) type BankLink = Weak<RefCell<BankState>>;

#[derive(Debug, Default)]
pub(crate) struct BankState {
    name: Option<String>,
    accounts: Vec<SharedAccount>,
}

/// Bank Aggregate
///
/// `Bank` is a handle: clones share the same name and account list, and
/// accounts registered through any clone link back to the same state.
/// Holds no locks; not meant to cross threads.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    state: Rc<RefCell<BankState>>,
}

/// Point-in-time copy of a bank, for inspection and JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BankSnapshot {
    pub name: Option<String>,
    pub accounts: Vec<Account>,
}

impl Bank {
    /// Create an unnamed bank with no accounts
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_state(state: Rc<RefCell<BankState>>) -> Self {
        Self { state }
    }

    pub fn name(&self) -> Option<String> {
        self.state.borrow().name.clone()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        self.state.borrow_mut().name = Some(name.into());
    }

    /// Whether both handles refer to the same bank
    pub fn ptr_eq(&self, other: &Bank) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }

    // =========================================================================
    // Bank::add_account()
    // =========================================================================

    /// Register an account and link it back to this bank.
    ///
    /// Adding the same account twice yields two entries.
    pub fn add_account(&self, account: &SharedAccount) {
        self.state.borrow_mut().accounts.push(Rc::clone(account));
        account.borrow_mut().link_bank(Rc::downgrade(&self.state));

        tracing::debug!(
            bank = ?self.name(),
            holder = %account.borrow().holder(),
            "Account registered"
        );
    }

    /// Replace the account list, linking every new entry back to this bank.
    ///
    /// Accounts dropped from the list keep their old link.
    pub fn set_accounts(&self, accounts: Vec<SharedAccount>) {
        for account in &accounts {
            account.borrow_mut().link_bank(Rc::downgrade(&self.state));
        }
        self.state.borrow_mut().accounts = accounts;
    }

    /// Registered accounts in insertion order
    pub fn accounts(&self) -> Vec<SharedAccount> {
        self.state.borrow().accounts.clone()
    }

    pub fn account_count(&self) -> usize {
        self.state.borrow().accounts.len()
    }

    /// First registered account with the given holder
    pub fn find_by_holder(&self, holder: &str) -> Option<SharedAccount> {
        self.state
            .borrow()
            .accounts
            .iter()
            .find(|account| account.borrow().holder() == holder)
            .cloned()
    }

    // =========================================================================
    // Bank::transfer()
    // =========================================================================

    /// Move `amount` from `source` to `destination`.
    ///
    /// Debits first; if that fails the error is returned and the credit never
    /// runs. There is no rollback once the debit succeeded. Neither account
    /// has to be registered with this bank.
    ///
    /// A destination that could not hold the credited balance exactly is
    /// refused with `DomainError::BalanceOutOfRange` before anything moves.
    pub fn transfer(
        &self,
        source: &SharedAccount,
        destination: &SharedAccount,
        amount: Decimal,
    ) -> Result<(), DomainError> {
        // Same handle: the debit restores room for the credit
        if !Rc::ptr_eq(source, destination) {
            let destination = destination.borrow();
            if !destination.can_credit(amount) {
                return Err(DomainError::balance_out_of_range(destination.balance(), amount));
            }
        }

        source.borrow_mut().debit(amount)?;
        destination.borrow_mut().credit(amount);

        tracing::info!(
            bank = ?self.name(),
            from = %source.borrow().holder(),
            to = %destination.borrow().holder(),
            %amount,
            "Transfer completed"
        );

        Ok(())
    }

    pub fn snapshot(&self) -> BankSnapshot {
        let state = self.state.borrow();
        BankSnapshot {
            name: state.name.clone(),
            accounts: state
                .accounts
                .iter()
                .map(|account| account.borrow().clone())
                .collect(),
        }
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bank{{name='{}'}}",
            self.state.borrow().name.as_deref().unwrap_or_default()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn estado() -> Bank {
        let bank = Bank::new();
        bank.set_name("Banco del estado");
        bank
    }

    #[test]
    fn test_bank_new_is_empty() {
        let bank = Bank::new();

        assert!(bank.name().is_none());
        assert_eq!(bank.account_count(), 0);
        assert!(bank.accounts().is_empty());
    }

    #[test]
    fn test_transfer_between_accounts() {
        let luis = Account::shared("Luis", dec!(2500));
        let angel = Account::shared("Angel", dec!(1500.8989));

        let bank = estado();
        bank.transfer(&angel, &luis, dec!(500)).unwrap();

        assert_eq!(angel.borrow().plain_balance(), "1000.8989");
        assert_eq!(luis.borrow().plain_balance(), "3000");
    }

    #[test]
    fn test_failed_transfer_leaves_accounts_untouched() {
        let luis = Account::shared("Luis", dec!(2500));
        let angel = Account::shared("Angel", dec!(1500.8989));

        let result = estado().transfer(&angel, &luis, dec!(2000));

        assert_eq!(result.unwrap_err().to_string(), "Insufficient funds");
        assert_eq!(angel.borrow().balance(), dec!(1500.8989));
        assert_eq!(luis.borrow().balance(), dec!(2500));
    }

    #[test]
    fn test_transfer_refused_when_destination_cannot_hold_credit() {
        let full = Account::shared("Luis", Decimal::MAX);
        let angel = Account::shared("Angel", dec!(1500.8989));

        let result = estado().transfer(&angel, &full, dec!(1));

        assert_eq!(
            result,
            Err(DomainError::balance_out_of_range(Decimal::MAX, dec!(1)))
        );
        assert_eq!(angel.borrow().balance(), dec!(1500.8989));
        assert_eq!(full.borrow().balance(), Decimal::MAX);
    }

    #[test]
    fn test_transfer_to_same_account() {
        let luis = Account::shared("Luis", dec!(2500));

        estado().transfer(&luis, &luis, dec!(500)).unwrap();

        assert_eq!(luis.borrow().balance(), dec!(2500));
    }

    #[test]
    fn test_add_account_links_back() {
        let luis = Account::shared("Luis", dec!(2500));
        let bank = Bank::new();

        bank.add_account(&luis);
        bank.set_name("Banco del estado");

        let linked = luis.borrow().bank().unwrap();
        assert!(linked.ptr_eq(&bank));
        assert_eq!(linked.name().as_deref(), Some("Banco del estado"));
    }

    #[test]
    fn test_add_account_twice_keeps_duplicates() {
        let luis = Account::shared("Luis", dec!(2500));
        let bank = estado();

        bank.add_account(&luis);
        bank.add_account(&luis);

        assert_eq!(bank.account_count(), 2);
    }

    #[test]
    fn test_reregistration_overwrites_link() {
        let luis = Account::shared("Luis", dec!(2500));
        let first = estado();
        let second = Bank::new();
        second.set_name("Banco central");

        first.add_account(&luis);
        second.add_account(&luis);

        let linked = luis.borrow().bank().unwrap();
        assert!(linked.ptr_eq(&second));
        assert_eq!(first.account_count(), 1);
    }

    #[test]
    fn test_link_does_not_keep_bank_alive() {
        let luis = Account::shared("Luis", dec!(2500));
        {
            let bank = estado();
            bank.add_account(&luis);
        }

        assert!(luis.borrow().bank().is_none());
    }

    #[test]
    fn test_set_accounts_links_new_entries() {
        let luis = Account::shared("Luis", dec!(2500));
        let angel = Account::shared("Angel", dec!(1500.8989));
        let bank = estado();

        bank.set_accounts(vec![luis.clone(), angel.clone()]);

        assert_eq!(bank.account_count(), 2);
        assert!(angel.borrow().bank().unwrap().ptr_eq(&bank));
    }

    #[test]
    fn test_find_by_holder() {
        let bank = estado();
        bank.add_account(&Account::shared("Luis", dec!(2500)));
        bank.add_account(&Account::shared("Angel", dec!(1500.8989)));

        let found = bank.find_by_holder("Angel").unwrap();
        assert_eq!(found.borrow().balance(), dec!(1500.8989));
        assert!(bank.find_by_holder("Maria").is_none());
    }

    #[test]
    fn test_bank_display() {
        assert_eq!(estado().to_string(), "Bank{name='Banco del estado'}");
        assert_eq!(Bank::new().to_string(), "Bank{name=''}");
    }

    #[test]
    fn test_snapshot_copies_values() {
        let luis = Account::shared("Luis", dec!(2500));
        let bank = estado();
        bank.add_account(&luis);

        let snapshot = bank.snapshot();
        luis.borrow_mut().credit(dec!(1));

        assert_eq!(snapshot.name.as_deref(), Some("Banco del estado"));
        assert_eq!(snapshot.accounts, vec![Account::new("Luis", dec!(2500))]);
    }
}

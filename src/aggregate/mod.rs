//! Aggregate module
//!
//! Account and Bank aggregates. Banks hold shared account handles; accounts
//! point back to their bank through a weak link, so there is no ownership
//! cycle.

pub mod account;
pub mod bank;

pub use account::{Account, SharedAccount};
pub use bank::{Bank, BankSnapshot};

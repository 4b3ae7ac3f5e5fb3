//! Common test utilities

#![allow(dead_code)]

use std::path::PathBuf;

use bank_accounts::{parse_amount, Account, Bank, SharedAccount};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const BANK_NAME: &str = "Banco del estado";

/// The account most tests start from
pub fn luis() -> Account {
    Account::new("Luis", dec!(1000.12345))
}

/// Named bank with Luis (2500) and Angel (1500.8989) registered, in that order
pub fn estado_with_accounts() -> (Bank, SharedAccount, SharedAccount) {
    let luis = Account::shared("Luis", dec!(2500));
    let angel = Account::shared("Angel", dec!(1500.8989));

    let bank = Bank::new();
    bank.add_account(&luis);
    bank.add_account(&angel);
    bank.set_name(BANK_NAME);

    (bank, luis, angel)
}

/// Read one amount per line from a file under `tests/fixtures`
pub fn load_amounts(file: &str) -> Vec<Decimal> {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "tests", "fixtures", file]
        .iter()
        .collect();
    let contents = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));

    contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_amount(line).expect("Fixture amount must parse"))
        .collect()
}

//! bank_accounts demo
//!
//! Registers two accounts with a bank, runs one transfer that succeeds and
//! one that is refused, then prints the bank as JSON.

use bank_accounts::{parse_amount, Account, AppError, AppResult, Bank, Config, SharedAccount};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
fn init_tracing(config: &Config) {
    let default_filter = if config.is_development() {
        "bank_accounts=debug"
    } else {
        "bank_accounts=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Demo accounts, kept as handles after registration
struct Accounts {
    luis: SharedAccount,
    angel: SharedAccount,
}

/// Build the demo bank with its two accounts
fn build_bank(config: &Config) -> AppResult<(Bank, Accounts)> {
    let accounts = Accounts {
        luis: Account::shared("Luis", parse_amount("2500")?),
        angel: Account::shared("Angel", parse_amount("1500.8989")?),
    };

    let bank = Bank::new();
    bank.add_account(&accounts.luis);
    bank.add_account(&accounts.angel);
    bank.set_name(config.bank_name.clone());

    Ok((bank, accounts))
}

fn run(bank: &Bank, accounts: &Accounts) -> AppResult<()> {
    bank.transfer(&accounts.angel, &accounts.luis, parse_amount("500")?)?;

    if let Err(e) = bank.transfer(&accounts.angel, &accounts.luis, parse_amount("5000")?) {
        if !e.is_client_error() {
            return Err(e.into());
        }
        let e = AppError::from(e);
        tracing::warn!(error = %e, error_code = e.error_code(), "Overdraft transfer refused");
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(&config);
    tracing::info!(environment = %config.environment, "Starting bank_accounts demo");

    let (bank, accounts) = build_bank(&config)?;
    tracing::info!("{}", bank);

    run(&bank, &accounts)?;

    for account in bank.accounts() {
        tracing::info!("{}", account.borrow());
    }

    println!("{}", serde_json::to_string_pretty(&bank.snapshot())?);

    Ok(())
}

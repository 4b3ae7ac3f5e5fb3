//! Error handling module
//!
//! Application-level error type wrapping domain and configuration failures.

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] crate::domain::DomainError),

    #[error(transparent)]
    Amount(#[from] crate::domain::AmountError),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Stable machine-readable code for logs and output
    pub fn error_code(&self) -> &'static str {
        use crate::domain::DomainError;
        match self {
            AppError::Domain(DomainError::InsufficientFunds { .. }) => "insufficient_funds",
            AppError::Domain(DomainError::BalanceOutOfRange { .. }) => "balance_out_of_range",
            AppError::Amount(_) => "invalid_amount",
            AppError::Config(_) => "config_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use crate::domain::{parse_amount, DomainError};
    use rust_decimal::Decimal;

    #[test]
    fn test_domain_error_is_transparent() {
        let err: AppError = DomainError::insufficient_funds(Decimal::ONE, Decimal::ZERO).into();

        assert_eq!(err.to_string(), "Insufficient funds");
        assert_eq!(err.error_code(), "insufficient_funds");
    }

    #[test]
    fn test_out_of_range_error_code() {
        let err: AppError = DomainError::balance_out_of_range(Decimal::MAX, Decimal::ONE).into();

        assert_eq!(err.error_code(), "balance_out_of_range");
    }

    #[test]
    fn test_amount_error_converts() {
        let err: AppError = parse_amount("abc").unwrap_err().into();

        assert_eq!(err.error_code(), "invalid_amount");
        assert!(err.to_string().starts_with("Invalid amount format"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: AppError = ConfigError::InvalidValue("BANK_NAME").into();

        assert_eq!(err.error_code(), "config_error");
        assert!(err.to_string().contains("BANK_NAME"));
    }
}

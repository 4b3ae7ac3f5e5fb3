//! Configuration module
//!
//! Loads configuration from environment variables.

use std::env;

const DEFAULT_BANK_NAME: &str = "Banco del estado";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Display name given to the demo bank
    pub bank_name: String,

    /// Environment (development, production)
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bank_name = lookup("BANK_NAME").unwrap_or_else(|| DEFAULT_BANK_NAME.to_string());
        if bank_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue("BANK_NAME"));
        }

        let environment = lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string());

        Ok(Self {
            bank_name,
            environment,
        })
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development" || self.environment == "dev"
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production" || self.environment == "prod"
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}

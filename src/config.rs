//! Application configuration management.
//!
//! Configuration is read from environment variables with the `envy` crate,
//! after an optional `.env` file has been loaded. The resulting value is
//! handed to constructors explicitly; nothing else reads the environment.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::money;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `DATABASE_URL` (required): PostgreSQL connection string
/// - `SERVER_PORT` (optional): HTTP server port, defaults to 8000
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
/// - `DEFAULT_BALANCE` (optional): balance of every new wallet, defaults to 100
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database_url: String,

    #[serde(default = "default_port")]
    pub server_port: u16,

    #[serde(default = "default_max_connections")]
    pub database_max_connections: u32,

    #[serde(default = "default_balance")]
    pub default_balance: Decimal,
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid environment: {0}")]
    Env(#[from] envy::Error),

    #[error("DEFAULT_BALANCE must not be negative, got {0}")]
    NegativeDefaultBalance(Decimal),

    #[error("DEFAULT_BALANCE must have at most two decimal places and fit NUMERIC(20, 2), got {0}")]
    DefaultBalanceOutOfRange(Decimal),
}

fn default_port() -> u16 {
    8000
}

fn default_max_connections() -> u32 {
    5
}

fn default_balance() -> Decimal {
    Decimal::ONE_HUNDRED
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// A `.env` file in the working directory is loaded first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(std::env::vars())
    }

    /// Build configuration from arbitrary `(KEY, value)` pairs.
    ///
    /// Field names map to upper-case keys: `default_balance` -> `DEFAULT_BALANCE`.
    ///
    /// # Errors
    ///
    /// - `Env`: a required variable is missing or a value cannot be parsed
    /// - `NegativeDefaultBalance`: `DEFAULT_BALANCE` is below zero
    /// - `DefaultBalanceOutOfRange`: `DEFAULT_BALANCE` is finer than a cent
    ///   or larger than a balance column can hold
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.default_balance < Decimal::ZERO {
            return Err(ConfigError::NegativeDefaultBalance(self.default_balance));
        }

        if !money::fits_money_column(self.default_balance) {
            return Err(ConfigError::DefaultBalanceOutOfRange(self.default_balance));
        }

        Ok(())
    }
}

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} must be a valid number, got '{value}'")]
    InvalidNumber { key: &'static str, value: String },
}

/// Staff credentials used by the `/login/funcionario` route.
#[derive(Debug, Clone)]
pub struct StaffCredentials {
    pub login: String,
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub pool_max_size: u32,
    pub connect_timeout: Duration,
    /// Upper bound for the order-submission transaction.
    pub submit_timeout: Duration,
    /// `None` disables staff login entirely.
    pub staff: Option<StaffCredentials>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = parse_or(&lookup, "PORT", 3000u16)?;
        let pool_max_size = parse_or(&lookup, "DB_POOL_MAX_SIZE", 10u32)?;
        let connect_timeout =
            Duration::from_secs(parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 5u64)?);
        let submit_timeout =
            Duration::from_millis(parse_or(&lookup, "ORDER_SUBMIT_TIMEOUT_MS", 5000u64)?);

        let staff = match (lookup("STAFF_LOGIN"), lookup("STAFF_PASSWORD")) {
            (Some(login), Some(password)) if !login.is_empty() => {
                Some(StaffCredentials { login, password })
            }
            _ => None,
        };

        Ok(Self {
            database_url,
            host,
            port,
            pool_max_size,
            connect_timeout,
            submit_timeout,
            staff,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => {
            let parsed = value.trim().parse();
            parsed.map_err(|_| ConfigError::InvalidNumber { key, value })
        }
    }
}

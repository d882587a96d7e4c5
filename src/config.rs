use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub prediction_addr: String,
    pub database_url: String,

    // Pool / locking
    pub db_max_connections: u32,
    pub db_busy_timeout_ms: u64,
    pub db_acquire_timeout_secs: u64,

    pub api_prefix: String,
    pub model_path: String,

    // Logging
    pub log_dir: String,
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            prediction_addr: "127.0.0.1:8081".to_string(),
            database_url: "sqlite://employees.db".to_string(),
            db_max_connections: 5,
            db_busy_timeout_ms: 5000,
            db_acquire_timeout_secs: 10,
            api_prefix: "/api".to_string(),
            model_path: "model.json".to_string(),
            log_dir: "logs".to_string(),
            log_level: tracing::Level::DEBUG,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            prediction_addr: env::var("PREDICTION_ADDR").unwrap_or(defaults.prediction_addr),
            database_url: env::var("DATABASE_URL").unwrap_or(defaults.database_url),

            db_max_connections: parse_or("DB_MAX_CONNECTIONS", defaults.db_max_connections)?,
            db_busy_timeout_ms: parse_or("DB_BUSY_TIMEOUT_MS", defaults.db_busy_timeout_ms)?,
            db_acquire_timeout_secs: parse_or(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.db_acquire_timeout_secs,
            )?,

            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),
            model_path: env::var("MODEL_PATH").unwrap_or(defaults.model_path),

            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: parse_or("LOG_LEVEL", defaults.log_level)?,
        })
    }
}

/// Reads `key` and parses it, falling back to `default` when unset.
fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

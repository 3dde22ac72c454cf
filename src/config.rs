use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use dotenvy::dotenv;
use strum_macros::{Display, EnumString};

/// Where attendance marks and the employee directory live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum StoreBackend {
    Mysql,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub store_backend: StoreBackend,
    pub database_url: Option<String>,
    pub employee_seed_file: Option<String>,

    // Bounded wait for directory and store calls
    pub store_timeout: Duration,

    pub directory_cache_ttl: Duration,
    pub directory_cache_capacity: u64,

    // Rate limiting, 0 disables
    pub rate_per_min: u32,

    pub api_prefix: String,
    pub log_level: tracing::Level,
}

fn var_or<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.parse::<T>()
        .map_err(|e| anyhow::anyhow!("{key}={raw:?} is invalid: {e}"))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let store_backend: StoreBackend = var_or("STORE_BACKEND", "mysql")?;
        let database_url = env::var("DATABASE_URL").ok();
        if store_backend == StoreBackend::Mysql && database_url.is_none() {
            bail!("DATABASE_URL must be set when STORE_BACKEND=mysql");
        }

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").context("SERVER_ADDR must be set")?,
            store_backend,
            database_url,
            employee_seed_file: env::var("EMPLOYEE_SEED_FILE").ok(),
            store_timeout: Duration::from_millis(var_or("STORE_TIMEOUT_MS", "2000")?),
            directory_cache_ttl: Duration::from_secs(var_or("DIRECTORY_CACHE_TTL_SECS", "300")?),
            directory_cache_capacity: var_or("DIRECTORY_CACHE_CAPACITY", "10000")?,
            rate_per_min: var_or("RATE_PER_MIN", "1000")?,
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            log_level: var_or("LOG_LEVEL", "debug")?,
        })
    }

    /// In-memory configuration with rate limiting off, for tests and local runs.
    pub fn in_memory() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            store_backend: StoreBackend::Memory,
            database_url: None,
            employee_seed_file: None,
            store_timeout: Duration::from_millis(2000),
            directory_cache_ttl: Duration::from_secs(300),
            directory_cache_capacity: 10_000,
            rate_per_min: 0,
            api_prefix: "/api".to_string(),
            log_level: tracing::Level::DEBUG,
        }
    }
}

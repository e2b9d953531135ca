//! Server settings read from the environment (optionally via `.env`).

use crate::error::ConfigError;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://test.db";
pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub database_url: String,
    /// Directory holding `users.json`, `orders.json` and `offers.json`.
    pub data_dir: PathBuf,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    pub body_limit_bytes: usize,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let data_dir = PathBuf::from(lookup("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.into()));
        let raw_bind = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let bind_addr: SocketAddr = raw_bind.trim().parse().map_err(|_| ConfigError::InvalidValue {
            key: "BIND_ADDR",
            value: raw_bind.clone(),
        })?;
        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", || DEFAULT_MAX_CONNECTIONS)?;
        let body_limit_bytes = parse_or(&lookup, "BODY_LIMIT_BYTES", || DEFAULT_BODY_LIMIT_BYTES)?;

        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        Ok(ServerConfig {
            database_url,
            data_dir,
            bind_addr,
            max_connections,
            body_limit_bytes,
        })
    }
}

fn parse_or<F, T, D>(lookup: &F, key: &'static str, default: D) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    D: FnOnce() -> T,
{
    match lookup(key) {
        None => Ok(default()),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

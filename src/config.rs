//! # Service Configuration
//!
//! Settings are read from `CATALOG_*` environment variables. Every setting has a default;
//! an unparseable value falls back to it, except the bind address, which must parse.
//!
//! | Variable | Default |
//! |---|---|
//! | `CATALOG_BIND_ADDR` | `127.0.0.1:5000` |
//! | `CATALOG_DATABASE_PATH` | `database.json` |
//! | `CATALOG_CHANNEL_CAPACITY` | `32` |
//! | `CATALOG_IN_MEMORY` | `false` |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DATABASE_PATH: &str = "database.json";
pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;

/// Errors raised while loading [`ServiceConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid bind address {value:?}: {reason}")]
    InvalidBindAddr { value: String, reason: String },
}

/// Runtime settings for the catalog service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub bind_addr: SocketAddr,
    pub database_path: PathBuf,
    /// Capacity of the product actor's request channel. Always at least 1.
    pub channel_capacity: usize,
    /// Keep products in memory only; nothing is written to `database_path`.
    pub in_memory: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            database_path: PathBuf::from(DEFAULT_DATABASE_PATH),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            in_memory: false,
        }
    }
}

impl ServiceConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads the configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_raw = lookup("CATALOG_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidBindAddr {
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let database_path = lookup("CATALOG_DATABASE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

        let channel_capacity = lookup("CATALOG_CHANNEL_CAPACITY")
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|&n| n >= 1)
            .unwrap_or(DEFAULT_CHANNEL_CAPACITY);

        let in_memory = lookup("CATALOG_IN_MEMORY")
            .and_then(|v| parse_bool(&v))
            .unwrap_or(false);

        Ok(Self {
            bind_addr,
            database_path,
            channel_capacity,
            in_memory,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw {
        "1" | "true" | "TRUE" | "yes" | "YES" => Some(true),
        "0" | "false" | "FALSE" | "no" | "NO" => Some(false),
        _ => None,
    }
}

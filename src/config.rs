// src/config.rs

use crate::errors::ServerError;
use log::LevelFilter;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_DB_PATH: &str = "rentals.sqlite3";
pub const DEFAULT_SCHEMA_PATH: &str = "sql/schema.sql";
pub const DEFAULT_MAX_WORKERS: usize = 8;

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    /// Optional SQL file applied after the schema (demo listings).
    pub seed_path: Option<String>,
    pub max_workers: usize,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_env() -> Result<Self, ServerError> {
        let vars: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with("RENTALS_"))
            .collect();
        Self::from_vars(&vars)
    }

    /// Build from an explicit variable map; missing keys fall back to defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ServerError> {
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let bind_addr = get("RENTALS_BIND_ADDR")
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ServerError::ConfigError(format!("RENTALS_BIND_ADDR: {e}")))?;

        let max_workers = match get("RENTALS_MAX_WORKERS") {
            Some(raw) => raw
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| {
                    ServerError::ConfigError(format!(
                        "RENTALS_MAX_WORKERS must be a positive integer, got '{raw}'"
                    ))
                })?,
            None => DEFAULT_MAX_WORKERS,
        };

        let log_level = match get("RENTALS_LOG_LEVEL") {
            Some(raw) => LevelFilter::from_str(raw)
                .map_err(|_| ServerError::ConfigError(format!("RENTALS_LOG_LEVEL: unknown level '{raw}'")))?,
            None => LevelFilter::Info,
        };

        Ok(Config {
            bind_addr,
            db_path: get("RENTALS_DB_PATH").unwrap_or(DEFAULT_DB_PATH).to_string(),
            schema_path: get("RENTALS_SCHEMA_PATH")
                .unwrap_or(DEFAULT_SCHEMA_PATH)
                .to_string(),
            seed_path: get("RENTALS_SEED_PATH").map(str::to_string),
            max_workers,
            log_level,
        })
    }
}

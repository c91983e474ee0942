//! Process configuration from environment (after `.env` is loaded by the binary).

use crate::error::ConfigError;
use std::collections::HashMap;

/// Which `StockStore` implementation the server runs against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Required for the postgres backend. Read from `DATABASE_URL`, falling back to `POSTGRES_URL`.
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// Run `CREATE TABLE IF NOT EXISTS stocks` at startup.
    pub bootstrap: bool,
    pub backend: StoreBackend,
}

pub const DEFAULT_PORT: u16 = 4000;

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |k: &str| vars.get(k).map(|v| v.trim()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").or_else(|| get("POSTGRES_URL")).map(String::from);
        let host = get("STOCK_API_HOST").unwrap_or("0.0.0.0").to_string();
        let port = match get("STOCK_API_PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::Invalid {
                key: "STOCK_API_PORT",
                value: v.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .ok()
                .filter(|n: &u32| *n > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    key: "DB_MAX_CONNECTIONS",
                    value: v.to_string(),
                })?,
            None => 5,
        };
        let bootstrap = match get("STOCKS_BOOTSTRAP") {
            Some(v) => parse_bool(v).ok_or_else(|| ConfigError::Invalid {
                key: "STOCKS_BOOTSTRAP",
                value: v.to_string(),
            })?,
            None => true,
        };
        let backend = match get("STORE_BACKEND").map(str::to_lowercase).as_deref() {
            None | Some("postgres") => StoreBackend::Postgres,
            Some("memory") => StoreBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORE_BACKEND",
                    value: other.to_string(),
                })
            }
        };
        if backend == StoreBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            bootstrap,
            backend,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

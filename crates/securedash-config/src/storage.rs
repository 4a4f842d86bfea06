//! Account store selection.
//!
//! # Environment Variables
//!
//! - `ACCOUNT_STORE`: `postgres` (default) or `memory`
//! - `DATABASE_URL`: PostgreSQL connection string, required for `postgres`
//! - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
//!
//! The `memory` backend keeps accounts in process and loses them on restart.
//! It exists for local development and tests.

use std::env;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Clone, Debug)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        let backend = match env::var("ACCOUNT_STORE")
            .map(|v| v.to_lowercase())
            .as_deref()
        {
            Ok("memory") => StorageBackend::Memory,
            _ => StorageBackend::Postgres,
        };

        Self {
            backend,
            database_url: env::var("DATABASE_URL").ok(),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
        }
    }
}

//! # SecureDash DB
//!
//! Account storage for the SecureDash API.
//!
//! The application talks to storage only through the [`AccountStore`] port.
//! Two adapters are provided:
//!
//! - [`PgAccountStore`]: PostgreSQL via SQLx, the production backend
//! - [`MemoryAccountStore`]: in-process, for development and tests
//!
//! Both enforce the same two uniqueness rules at the storage layer: one
//! account per (normalised) email, and at most one superadmin. Those checks
//! happen atomically with the write, so concurrent callers cannot both pass
//! them.
//!
//! # Example
//!
//! ```ignore
//! use securedash_db::{init_db_pool, PgAccountStore};
//!
//! let pool = init_db_pool(&database_url, 5).await?;
//! let store = PgAccountStore::new(pool);
//! ```

pub mod memory;
pub mod postgres;
pub mod store;

use sqlx::postgres::PgPoolOptions;

pub use memory::MemoryAccountStore;
pub use postgres::PgAccountStore;
pub use store::{AccountStore, StoreError, StoreResult};

/// Initializes a PostgreSQL connection pool.
///
/// The returned pool is cheaply cloneable and should be created once at
/// startup.
pub async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;

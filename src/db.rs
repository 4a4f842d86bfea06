use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};

use securedash_config::{CorsConfig, JwtConfig, StorageBackend, StorageConfig};
use securedash_db::{AccountStore, MemoryAccountStore, PgAccountStore, init_db_pool};

use crate::state::AppState;

/// Opens the configured account store. For PostgreSQL this also runs any
/// pending migrations.
pub async fn init_account_store(config: &StorageConfig) -> anyhow::Result<Arc<dyn AccountStore>> {
    match config.backend {
        StorageBackend::Memory => {
            warn!("Using in-memory account store; accounts are lost on restart");
            Ok(Arc::new(MemoryAccountStore::new()))
        }
        StorageBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL must be set when ACCOUNT_STORE=postgres")?;

            let pool = init_db_pool(database_url, config.max_connections)
                .await
                .context("Failed to connect to database")?;

            sqlx::migrate!()
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            info!(max_connections = config.max_connections, "Connected to PostgreSQL");
            Ok(Arc::new(PgAccountStore::new(pool)))
        }
    }
}

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let accounts = init_account_store(&StorageConfig::from_env()).await?;

    Ok(AppState::new(accounts, JwtConfig::from_env()).with_cors(CorsConfig::from_env()))
}

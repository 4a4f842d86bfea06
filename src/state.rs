use std::sync::Arc;

use securedash_config::{CorsConfig, JwtConfig};
use securedash_core::ModuleCatalog;
use securedash_db::AccountStore;

/// Shared, read-only application state.
///
/// The only mutable data lives behind [`AccountStore`]; the signing key and
/// module catalog are fixed for the life of the process.
#[derive(Clone, Debug)]
pub struct AppState {
    pub accounts: Arc<dyn AccountStore>,
    pub catalog: ModuleCatalog,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(accounts: Arc<dyn AccountStore>, jwt_config: JwtConfig) -> Self {
        Self {
            accounts,
            catalog: ModuleCatalog::standard(),
            jwt_config,
            cors_config: CorsConfig::default(),
        }
    }

    pub fn with_cors(mut self, cors_config: CorsConfig) -> Self {
        self.cors_config = cors_config;
        self
    }
}

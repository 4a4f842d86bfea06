//! Administrative operations behind `securedash-cli`.

pub mod seeder;

use securedash_core::ModuleCatalog;
use securedash_db::AccountStore;
use securedash_models::Account;

use crate::modules::users::error::AccountError;
use crate::modules::users::service::AccountService;

/// Same operation as `POST /api/users/createsuperadmin`.
pub async fn create_superadmin(
    store: &dyn AccountStore,
    name: &str,
    email: &str,
    password: &str,
) -> Result<Account, AccountError> {
    AccountService::bootstrap_superadmin(store, &ModuleCatalog::standard(), name, email, password)
        .await
}

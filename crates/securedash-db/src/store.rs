use async_trait::async_trait;
use std::fmt::Debug;

use securedash_models::{AccountId, AccountRecord, Email, NewAccount, Role};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("an account with this email already exists")]
    DuplicateEmail,
    #[error("a superadmin account already exists")]
    SuperadminExists,
    #[error("account not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence port for accounts.
///
/// Each call is atomic for the single account it touches. Implementations
/// must reject, as part of the same write, an email already held by another
/// account ([`StoreError::DuplicateEmail`]) and a second superadmin
/// ([`StoreError::SuperadminExists`]).
#[async_trait]
pub trait AccountStore: Send + Sync + Debug {
    /// Persists a new account, assigning its id and timestamps.
    async fn insert(&self, account: NewAccount) -> StoreResult<AccountRecord>;

    async fn find_by_id(&self, id: AccountId) -> StoreResult<Option<AccountRecord>>;

    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<AccountRecord>>;

    /// Accounts holding any of `roles`, oldest first.
    async fn list_by_roles(&self, roles: &[Role]) -> StoreResult<Vec<AccountRecord>>;

    async fn superadmin_exists(&self) -> StoreResult<bool>;

    /// Overwrites the mutable fields of an existing account and bumps
    /// `updated_at`. `id` and `created_at` are never changed.
    async fn save(&self, account: &AccountRecord) -> StoreResult<AccountRecord>;

    /// Returns `false` when no account had this id.
    async fn delete(&self, id: AccountId) -> StoreResult<bool>;
}

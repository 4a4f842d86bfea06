use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use std::fmt;
use utoipa::ToSchema;

use crate::ids::AccountId;
use crate::roles::Role;
use crate::value_types::Email;

/// Public projection of an account. Never carries the credential hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub email: Email,
    pub role: Role,
    #[schema(example = json!(["inventory", "reports"]))]
    pub modules: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Full stored row, including the credential hash.
///
/// Not `Serialize`: the only way out to a client is through
/// [`Account`].
#[derive(Clone, PartialEq, Eq, FromRow)]
pub struct AccountRecord {
    pub id: AccountId,
    pub name: String,
    pub email: Email,
    pub credential_hash: String,
    pub role: Role,
    pub modules: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl fmt::Debug for AccountRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountRecord")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("credential_hash", &"<redacted>")
            .field("role", &self.role)
            .field("modules", &self.modules)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl From<AccountRecord> for Account {
    fn from(record: AccountRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
            modules: record.modules,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

/// Insert payload. The store assigns `id` and both timestamps.
#[derive(Clone)]
pub struct NewAccount {
    pub name: String,
    pub email: Email,
    pub credential_hash: String,
    pub role: Role,
    pub modules: Vec<String>,
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("role", &self.role)
            .field("modules", &self.modules)
            .finish_non_exhaustive()
    }
}

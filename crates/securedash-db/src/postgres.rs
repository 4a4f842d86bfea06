use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;

use securedash_models::{AccountId, AccountRecord, Email, NewAccount, Role};

use crate::store::{AccountStore, StoreError, StoreResult};

const EMAIL_CONSTRAINT: &str = "accounts_email_key";
const SUPERADMIN_CONSTRAINT: &str = "accounts_single_superadmin";

const RETURNING: &str = "id, name, email, credential_hash, role, modules, created_at, updated_at";

/// PostgreSQL-backed implementation of the [`AccountStore`] port.
///
/// Uniqueness is enforced by the schema: a unique index on `lower(email)` and
/// a partial unique index allowing a single `superadmin` row.
#[derive(Clone, Debug)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn map_write_error(e: sqlx::Error) -> StoreError {
    if let Some(db_err) = e.as_database_error() {
        match db_err.constraint() {
            Some(EMAIL_CONSTRAINT) => return StoreError::DuplicateEmail,
            Some(SUPERADMIN_CONSTRAINT) => return StoreError::SuperadminExists,
            _ => {}
        }
    }
    StoreError::Database(e)
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn insert(&self, account: NewAccount) -> StoreResult<AccountRecord> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            r#"
            INSERT INTO accounts (id, name, email, credential_hash, role, modules)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {RETURNING}
            "#
        ))
        .bind(AccountId::new())
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.credential_hash)
        .bind(account.role)
        .bind(&account.modules)
        .fetch_one(self.pool())
        .await
        .map_err(map_write_error)?;

        info!(account_id = %record.id, role = %record.role, "Inserted account");
        Ok(record)
    }

    async fn find_by_id(&self, id: AccountId) -> StoreResult<Option<AccountRecord>> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            "SELECT {RETURNING} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool())
        .await?;

        Ok(record)
    }

    async fn find_by_email(&self, email: &Email) -> StoreResult<Option<AccountRecord>> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            "SELECT {RETURNING} FROM accounts WHERE lower(email) = lower($1)"
        ))
        .bind(email)
        .fetch_optional(self.pool())
        .await?;

        Ok(record)
    }

    async fn list_by_roles(&self, roles: &[Role]) -> StoreResult<Vec<AccountRecord>> {
        let roles: Vec<&'static str> = roles.iter().map(Role::as_str).collect();

        let records = sqlx::query_as::<_, AccountRecord>(&format!(
            r#"
            SELECT {RETURNING}
            FROM accounts
            WHERE role::text = ANY($1)
            ORDER BY created_at, id
            "#
        ))
        .bind(&roles)
        .fetch_all(self.pool())
        .await?;

        Ok(records)
    }

    async fn superadmin_exists(&self) -> StoreResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM accounts WHERE role = 'superadmin')",
        )
        .fetch_one(self.pool())
        .await?;

        Ok(exists)
    }

    async fn save(&self, account: &AccountRecord) -> StoreResult<AccountRecord> {
        let record = sqlx::query_as::<_, AccountRecord>(&format!(
            r#"
            UPDATE accounts
            SET name = $2,
                email = $3,
                credential_hash = $4,
                role = $5,
                modules = $6,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {RETURNING}
            "#
        ))
        .bind(account.id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.credential_hash)
        .bind(account.role)
        .bind(&account.modules)
        .fetch_optional(self.pool())
        .await
        .map_err(map_write_error)?;

        record.ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: AccountId) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(self.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

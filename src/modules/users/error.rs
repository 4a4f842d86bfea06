use axum::http::StatusCode;
use serde_json::json;

use securedash_core::AppError;
use securedash_db::StoreError;

/// Failures of account directory operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Super Admin already exists")]
    SuperadminExists,
    /// Same message for unknown email and wrong password.
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Invalid role")]
    InvalidRole,
    #[error("Invalid modules: {}", .0.join(", "))]
    InvalidModules(Vec<String>),
    #[error("User already exists")]
    DuplicateEmail,
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    SuperadminImmutable(&'static str),
    #[error("User not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AccountError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateEmail => AccountError::DuplicateEmail,
            StoreError::SuperadminExists => AccountError::SuperadminExists,
            StoreError::NotFound => AccountError::NotFound,
            StoreError::Database(e) => AccountError::Internal(e.into()),
        }
    }
}

impl From<AccountError> for AppError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::InvalidModules(ref invalid) => {
                let details = json!({ "invalid_modules": invalid });
                AppError::bad_request(err.to_string()).with_details(details)
            }
            AccountError::NotFound => AppError::not_found(err.to_string()),
            AccountError::Internal(e) => AppError::new(StatusCode::INTERNAL_SERVER_ERROR, e),
            AccountError::SuperadminExists
            | AccountError::InvalidCredentials
            | AccountError::InvalidRole
            | AccountError::DuplicateEmail
            | AccountError::Validation(_)
            | AccountError::SuperadminImmutable(_) => AppError::bad_request(err.to_string()),
        }
    }
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use securedash_models::Account;

/// Body of `POST /register`.
///
/// `role` and `modules` stay as raw strings here so that bad values surface
/// as the domain's `Invalid role` / `Invalid modules` errors.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterAccountDto {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "secret1")]
    pub password: String,
    /// `admin` or `user`; defaults to `user`.
    #[schema(example = "admin")]
    pub role: Option<String>,
    #[schema(example = json!(["inventory", "reports"]))]
    pub modules: Option<Vec<String>>,
}

/// Partial update. Every field is optional; absent fields are left alone.
///
/// `role` and `modules` only apply on the superadmin route and are ignored on
/// self-service updates.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAccountDto {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Email cannot be empty"))]
    pub email: Option<String>,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,
    pub role: Option<String>,
    pub modules: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ListAccountsQuery {
    /// Restrict to `admin` or `user`.
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountResponse {
    pub message: String,
    pub user: Account,
}

impl AccountResponse {
    pub fn new(message: impl Into<String>, user: Account) -> Self {
        Self {
            message: message.into(),
            user,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ModulesResponse {
    #[schema(example = json!(["inventory", "reports", "dashboard", "settings", "analytics"]))]
    pub modules: Vec<String>,
}

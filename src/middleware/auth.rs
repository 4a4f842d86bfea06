use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use securedash_auth::{Claims, verify_token};
use securedash_core::AppError;
use securedash_models::{Account, AccountId};

use crate::state::AppState;

pub const NO_TOKEN: &str = "Not authorized, no token";
pub const TOKEN_FAILED: &str = "Not authorized, token failed";

/// The authenticated caller.
///
/// `account` is `None` when the token is valid but its account has since been
/// deleted. Role checks reject that case; handlers that only need the id
/// must decide for themselves.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub claims: Claims,
    pub account: Option<Account>,
}

impl AuthUser {
    pub fn account_id(&self) -> AccountId {
        self.claims.sub
    }

    /// The caller's account, or `404` if it no longer exists.
    pub fn require_account(&self) -> Result<&Account, AppError> {
        self.account
            .as_ref()
            .ok_or_else(|| AppError::not_found("User not found"))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Another extractor on the same request may already have resolved it.
        if let Some(auth_user) = parts.extensions.get::<AuthUser>() {
            return Ok(auth_user.clone());
        }

        let token = bearer_token(parts).ok_or_else(|| AppError::unauthorized(NO_TOKEN))?;

        let claims = verify_token(token, &state.jwt_config).map_err(|e| {
            debug!(reason = e.as_str(), "Token verification failed");
            AppError::unauthorized(TOKEN_FAILED)
        })?;

        let account = state
            .accounts
            .find_by_id(claims.sub)
            .await
            .map_err(AppError::database)?
            .map(Account::from);

        if account.is_none() {
            debug!(account_id = %claims.sub, "Token subject no longer exists");
        }

        let auth_user = AuthUser { claims, account };
        parts.extensions.insert(auth_user.clone());
        Ok(auth_user)
    }
}

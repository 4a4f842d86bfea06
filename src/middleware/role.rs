use axum::{extract::FromRequestParts, http::request::Parts};

use securedash_core::AppError;
use securedash_models::Role;
use securedash_observability::track_authorization_check;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

fn denied_message(role: Role) -> String {
    match role {
        Role::Superadmin => "Access denied. Super Admins only.".to_string(),
        Role::Admin | Role::User => format!("Access denied. {} role required.", role),
    }
}

/// Authorizes an already-authenticated caller for `role`.
///
/// Compares against the role on the account loaded for this request, not the
/// one in the token. A caller whose account was deleted is always denied.
pub fn check_role(auth_user: &AuthUser, role: Role) -> Result<(), AppError> {
    let current = auth_user.account.as_ref().map(|account| account.role);
    let allowed = current == Some(role);

    track_authorization_check(allowed, current.map_or("none", |r| r.as_str()));

    if !allowed {
        return Err(AppError::forbidden(denied_message(role)));
    }

    Ok(())
}

/// Extractor for superadmin-only routes.
///
/// Authenticates first; the resulting identity is then passed to
/// [`check_role`].
#[derive(Debug, Clone)]
pub struct RequireSuperadmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireSuperadmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;
        check_role(&auth_user, Role::Superadmin)?;
        Ok(RequireSuperadmin(auth_user))
    }
}

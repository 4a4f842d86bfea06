use axum::{
    Json,
    extract::{Path, Query, State},
};
use tracing::instrument;

use securedash_core::AppError;
use securedash_models::{Account, AccountId};

use crate::middleware::auth::AuthUser;
use crate::middleware::role::RequireSuperadmin;
use crate::modules::auth::model::{ErrorResponse, MessageResponse};
use crate::modules::users::model::{
    AccountResponse, ListAccountsQuery, ModulesResponse, RegisterAccountDto, UpdateAccountDto,
};
use crate::modules::users::service::AccountService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Unparseable ids cannot name an account, so they are reported as missing.
fn parse_account_id(id: &str) -> Result<AccountId, AppError> {
    id.parse()
        .map_err(|_| AppError::not_found("User not found"))
}

/// List admin and user accounts
#[utoipa::path(
    get,
    path = "/api/users",
    params(ListAccountsQuery),
    responses(
        (status = 200, description = "Admin and user accounts", body = Vec<Account>),
        (status = 400, description = "Invalid role filter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the superadmin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all, fields(role = ?query.role))]
pub async fn list_accounts(
    State(state): State<AppState>,
    RequireSuperadmin(_admin): RequireSuperadmin,
    Query(query): Query<ListAccountsQuery>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = AccountService::list(state.accounts.as_ref(), query.role.as_deref()).await?;
    Ok(Json(accounts))
}

/// List the module catalog
#[utoipa::path(
    get,
    path = "/api/users/modules",
    responses(
        (status = 200, description = "Every grantable module", body = ModulesResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the superadmin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn list_modules(
    State(state): State<AppState>,
    RequireSuperadmin(_admin): RequireSuperadmin,
) -> Json<ModulesResponse> {
    Json(ModulesResponse {
        modules: state.catalog.all_owned(),
    })
}

/// Create an admin or user account
#[utoipa::path(
    post,
    path = "/api/users/register",
    request_body = RegisterAccountDto,
    responses(
        (status = 200, description = "User created successfully", body = AccountResponse),
        (status = 400, description = "Invalid role, invalid modules, or email already in use", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the superadmin", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all)]
pub async fn register_account(
    State(state): State<AppState>,
    RequireSuperadmin(_admin): RequireSuperadmin,
    ValidatedJson(dto): ValidatedJson<RegisterAccountDto>,
) -> Result<Json<AccountResponse>, AppError> {
    let user = AccountService::register(state.accounts.as_ref(), &state.catalog, dto).await?;
    Ok(Json(AccountResponse::new("User created successfully", user)))
}

/// Update any account
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Account ID")),
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "User updated successfully", body = AccountResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the superadmin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all, fields(id = %id))]
pub async fn update_account(
    State(state): State<AppState>,
    RequireSuperadmin(_admin): RequireSuperadmin,
    Path(id): Path<String>,
    ValidatedJson(dto): ValidatedJson<UpdateAccountDto>,
) -> Result<Json<AccountResponse>, AppError> {
    let id = parse_account_id(&id)?;
    let user =
        AccountService::update(state.accounts.as_ref(), &state.catalog, id, dto, true).await?;
    Ok(Json(AccountResponse::new("User updated successfully", user)))
}

/// Delete an account
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = String, Path, description = "Account ID")),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 400, description = "The superadmin cannot be deleted", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the superadmin", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all, fields(id = %id))]
pub async fn delete_account(
    State(state): State<AppState>,
    RequireSuperadmin(_admin): RequireSuperadmin,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_account_id(&id)?;
    AccountService::remove(state.accounts.as_ref(), id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}

/// Get the caller's own profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    responses(
        (status = 200, description = "The caller's account", body = Account),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all, fields(account_id = %auth_user.account_id()))]
pub async fn get_me(auth_user: AuthUser) -> Result<Json<Account>, AppError> {
    Ok(Json(auth_user.require_account()?.clone()))
}

/// Update the caller's own name, email or password
#[utoipa::path(
    put,
    path = "/api/users/updateProfile",
    request_body = UpdateAccountDto,
    responses(
        (status = 200, description = "Profile updated", body = AccountResponse),
        (status = 400, description = "Validation failed", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Account no longer exists", body = ErrorResponse)
    ),
    security(("bearer_auth" = [])),
    tag = "Users"
)]
#[instrument(skip_all, fields(account_id = %auth_user.account_id()))]
pub async fn update_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<UpdateAccountDto>,
) -> Result<Json<AccountResponse>, AppError> {
    let user = AccountService::update(
        state.accounts.as_ref(),
        &state.catalog,
        auth_user.account_id(),
        dto,
        false,
    )
    .await?;
    Ok(Json(AccountResponse::new("Profile updated", user)))
}

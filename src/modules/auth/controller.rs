use axum::{Json, extract::State};
use tracing::instrument;

use securedash_core::AppError;

use super::model::{CreateSuperadminRequest, ErrorResponse, LoginRequest, LoginResponse};
use super::service::AuthService;
use crate::modules::users::model::AccountResponse;
use crate::modules::users::service::AccountService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// Create the superadmin account (once)
#[utoipa::path(
    post,
    path = "/api/users/createsuperadmin",
    request_body = CreateSuperadminRequest,
    responses(
        (status = 200, description = "Super Admin created successfully", body = AccountResponse),
        (status = 400, description = "A superadmin already exists, or validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn create_superadmin(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateSuperadminRequest>,
) -> Result<Json<AccountResponse>, AppError> {
    let user = AccountService::bootstrap_superadmin(
        state.accounts.as_ref(),
        &state.catalog,
        &dto.name,
        &dto.email,
        &dto.password,
    )
    .await?;

    Ok(Json(AccountResponse::new(
        "Super Admin created successfully",
        user,
    )))
}

/// Log in and receive a session token
#[utoipa::path(
    post,
    path = "/api/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Invalid email or password", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let response = AuthService::login(state.accounts.as_ref(), &state.jwt_config, dto).await?;
    Ok(Json(response))
}

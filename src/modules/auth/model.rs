use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use securedash_models::{AccountId, Email, Role};

#[derive(Deserialize, Validate, ToSchema)]
pub struct CreateSuperadminRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    #[schema(example = "Site Owner")]
    pub name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "owner@example.com")]
    pub email: String,
    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    #[schema(example = "secret1")]
    pub password: String,
}

#[derive(Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "owner@example.com")]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "secret1")]
    pub password: String,
}

/// Token plus the profile fields a dashboard needs to render its menu.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub id: AccountId,
    pub name: String,
    pub email: Email,
    pub role: Role,
    pub modules: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Shape of every error body.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

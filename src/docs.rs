use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use securedash_models::{Account, AccountId, Email, Role};

use crate::modules::auth::model::{
    CreateSuperadminRequest, ErrorResponse, LoginRequest, LoginResponse, MessageResponse,
};
use crate::modules::users::model::{
    AccountResponse, ModulesResponse, RegisterAccountDto, UpdateAccountDto,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::create_superadmin,
        crate::modules::auth::controller::login,
        crate::modules::users::controller::list_accounts,
        crate::modules::users::controller::list_modules,
        crate::modules::users::controller::register_account,
        crate::modules::users::controller::update_account,
        crate::modules::users::controller::delete_account,
        crate::modules::users::controller::get_me,
        crate::modules::users::controller::update_profile,
    ),
    components(
        schemas(
            Account,
            AccountId,
            Email,
            Role,
            CreateSuperadminRequest,
            LoginRequest,
            LoginResponse,
            MessageResponse,
            ErrorResponse,
            AccountResponse,
            ModulesResponse,
            RegisterAccountDto,
            UpdateAccountDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Superadmin bootstrap and login"),
        (name = "Users", description = "Account and module entitlement management")
    ),
    info(
        title = "SecureDash API",
        version = "0.1.0",
        description = "Role-based access control backend for the SecureDash admin dashboard.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

use tracing::{info, instrument, warn};

use securedash_auth::issue_token;
use securedash_config::JwtConfig;
use securedash_core::AppError;
use securedash_db::AccountStore;
use securedash_observability::{track_login_failure, track_login_success, track_token_issued};

use crate::modules::auth::model::{LoginRequest, LoginResponse};
use crate::modules::users::error::AccountError;
use crate::modules::users::service::AccountService;

pub struct AuthService;

impl AuthService {
    /// Authenticates and issues a seven-day session token.
    #[instrument(skip_all)]
    pub async fn login(
        store: &dyn AccountStore,
        jwt_config: &JwtConfig,
        dto: LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let record = match AccountService::authenticate(store, &dto.email, &dto.password).await {
            Ok(record) => record,
            Err(err @ AccountError::InvalidCredentials) => {
                track_login_failure("invalid_credentials");
                warn!("Login failed: invalid credentials");
                return Err(err.into());
            }
            Err(err) => return Err(err.into()),
        };

        let token = issue_token(record.id, record.role, jwt_config)?;

        track_token_issued();
        track_login_success(record.role.as_str());
        info!(account_id = %record.id, role = %record.role, "Login successful");

        Ok(LoginResponse {
            token,
            id: record.id,
            name: record.name,
            email: record.email,
            role: record.role,
            modules: record.modules,
        })
    }
}

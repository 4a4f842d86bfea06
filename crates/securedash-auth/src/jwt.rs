//! Issuing and verifying session tokens.
//!
//! Tokens are signed with HS256 using the process-wide secret from
//! [`JwtConfig`] and expire exactly [`TOKEN_TTL_SECONDS`] after issuance.
//! Expiry is checked here rather than by `jsonwebtoken` so that the boundary
//! is exact (no leeway) and the clock can be injected with
//! [`verify_token_at`].
//!
//! # Example
//!
//! ```ignore
//! use securedash_auth::{issue_token, verify_token, TokenError};
//!
//! let token = issue_token(account_id, Role::User, &jwt_config)?;
//!
//! match verify_token(&token, &jwt_config) {
//!     Ok(claims) => println!("caller {}", claims.sub),
//!     Err(TokenError::Expired) => println!("log in again"),
//!     Err(e) => println!("rejected: {}", e),
//! }
//! ```

use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};

use securedash_config::JwtConfig;
use securedash_core::AppError;
use securedash_models::{AccountId, Role};

use crate::claims::Claims;

/// Token lifetime: seven days. Fixed, not configurable.
pub const TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

/// Why a token was rejected.
///
/// Only for diagnostics. Every variant reaches the client as the same
/// "token failed" response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("token signature is invalid")]
    Invalid,
    #[error("token has expired")]
    Expired,
    #[error("token is malformed")]
    Malformed,
}

impl TokenError {
    /// Short label for logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenError::Invalid => "invalid",
            TokenError::Expired => "expired",
            TokenError::Malformed => "malformed",
        }
    }
}

/// Issues a token for `account_id` carrying `role`, valid from now.
pub fn issue_token(
    account_id: AccountId,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    issue_token_at(account_id, role, jwt_config, Utc::now().timestamp())
}

/// Issues a token as if the current time were `issued_at`.
pub fn issue_token_at(
    account_id: AccountId,
    role: Role,
    jwt_config: &JwtConfig,
    issued_at: i64,
) -> Result<String, AppError> {
    let claims = Claims {
        sub: account_id,
        role,
        iat: issued_at,
        exp: issued_at + TOKEN_TTL_SECONDS,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
}

/// Verifies a token against the current time.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, TokenError> {
    verify_token_at(token, jwt_config, Utc::now().timestamp())
}

/// Verifies a token's signature and that `now` is strictly before its expiry.
pub fn verify_token_at(
    token: &str,
    jwt_config: &JwtConfig,
    now: i64,
) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.leeway = 0;

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => TokenError::Invalid,
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Malformed,
    })?;

    if claims.is_expired_at(now) {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_test_jwt_config() -> JwtConfig {
        JwtConfig::new("test-secret-key-at-least-32-characters-long")
    }

    #[test]
    fn test_issue_and_verify() {
        let config = get_test_jwt_config();
        let id = AccountId::new();

        let token = issue_token(id, Role::Admin, &config).unwrap();
        let claims = verify_token(&token, &config).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECONDS);
    }

    #[test]
    fn test_expiry_boundary() {
        let config = get_test_jwt_config();
        let issued_at = 1_700_000_000;
        let token = issue_token_at(AccountId::new(), Role::User, &config, issued_at).unwrap();

        let just_before = issued_at + TOKEN_TTL_SECONDS - 1;
        let exactly = issued_at + TOKEN_TTL_SECONDS;
        let just_after = issued_at + TOKEN_TTL_SECONDS + 1;

        assert!(verify_token_at(&token, &config, just_before).is_ok());
        assert_eq!(
            verify_token_at(&token, &config, exactly),
            Err(TokenError::Expired)
        );
        assert_eq!(
            verify_token_at(&token, &config, just_after),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn test_wrong_secret_is_invalid() {
        let config = get_test_jwt_config();
        let token = issue_token(AccountId::new(), Role::User, &config).unwrap();

        let other = JwtConfig::new("different-secret-key-at-least-32-characters");
        assert_eq!(verify_token(&token, &other), Err(TokenError::Invalid));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let config = get_test_jwt_config();
        assert_eq!(
            verify_token("invalid-token", &config),
            Err(TokenError::Malformed)
        );
        assert_eq!(verify_token("", &config), Err(TokenError::Malformed));
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let config = get_test_jwt_config();
        let token = issue_token(AccountId::new(), Role::User, &config).unwrap();

        let forged = issue_token(AccountId::new(), Role::Superadmin, &config).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged_payload = forged.split('.').nth(1).unwrap();
        parts[1] = forged_payload;
        let spliced = parts.join(".");

        assert_eq!(verify_token(&spliced, &config), Err(TokenError::Invalid));
    }
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use securedash_models::{AccountId, Role};

/// Claims embedded in a session token.
///
/// The role is a snapshot taken at login. Authorization decisions re-read
/// the account, so a demotion takes effect before the token expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Account ID (subject claim)
    pub sub: AccountId,
    pub role: Role,
    /// Issued-at (Unix timestamp, seconds)
    pub iat: i64,
    /// Expiry (Unix timestamp, seconds)
    pub exp: i64,
}

impl Claims {
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

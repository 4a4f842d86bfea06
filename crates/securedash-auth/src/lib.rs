//! # SecureDash Auth
//!
//! Session tokens for the SecureDash API.
//!
//! - [`claims`]: the claim set carried by every token
//! - [`jwt`]: issuing and verifying tokens
//!
//! Tokens are HS256 JWTs that live for exactly seven days. Nothing is stored
//! server-side: a token is valid when its signature checks out and the
//! current time is before its expiry.
//!
//! # Example
//!
//! ```ignore
//! use securedash_auth::{issue_token, verify_token};
//! use securedash_config::JwtConfig;
//! use securedash_models::{AccountId, Role};
//!
//! let config = JwtConfig::from_env();
//! let token = issue_token(account_id, Role::Admin, &config)?;
//!
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.sub, account_id);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{TOKEN_TTL_SECONDS, TokenError, issue_token, issue_token_at, verify_token, verify_token_at};

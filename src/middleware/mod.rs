//! Request authentication and authorization.
//!
//! Access control is a two-stage pipeline:
//!
//! 1. [`auth::AuthUser`] authenticates: it reads the `Authorization: Bearer`
//!    header, verifies the token and loads the caller's account.
//! 2. [`role::check_role`] authorizes: it receives the identity from stage
//!    one and compares the account's current role.
//!
//! Stage two never runs without stage one succeeding, so a request without a
//! valid token always gets `401`, never `403`.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::{auth::AuthUser, role::RequireSuperadmin};
//!
//! // Any authenticated caller
//! async fn get_me(auth_user: AuthUser) -> impl IntoResponse { /* ... */ }
//!
//! // Superadmin only
//! async fn list_accounts(RequireSuperadmin(admin): RequireSuperadmin) -> impl IntoResponse {
//!     /* ... */
//! }
//! ```

pub mod auth;
pub mod role;

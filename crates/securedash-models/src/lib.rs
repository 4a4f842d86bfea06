//! # SecureDash Models
//!
//! Domain models for the SecureDash API.
//!
//! # Modules
//!
//! - [`accounts`]: the account entity, its stored record and the insert shape
//! - [`ids`]: strongly-typed identifiers
//! - [`roles`]: the closed role hierarchy
//! - [`value_types`]: validated primitives (email)
//!
//! # Example
//!
//! ```ignore
//! use securedash_models::{Account, Email, Role};
//!
//! let email = Email::new("  Admin@Example.com ")?;
//! assert_eq!(email.as_str(), "admin@example.com");
//!
//! assert!(Role::Admin.is_assignable());
//! assert!(!Role::Superadmin.is_assignable());
//! ```

pub mod accounts;
pub mod ids;
pub mod roles;
pub mod value_types;

// Re-export commonly used types at crate root for convenience
pub use accounts::{Account, AccountRecord, NewAccount};
pub use ids::AccountId;
pub use roles::{ParseRoleError, Role};
pub use value_types::{Email, ValueTypeError};

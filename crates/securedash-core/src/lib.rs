//! # SecureDash Core
//!
//! Core types, errors, and utilities for the SecureDash API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`password`]: One-way password hashing and verification
//! - [`catalog`]: The fixed catalog of feature modules an account can be granted
//!
//! # Example
//!
//! ```ignore
//! use securedash_core::{AppError, ModuleCatalog, hash_password, verify_password};
//!
//! let catalog = ModuleCatalog::standard();
//! assert!(catalog.is_valid_module("reports"));
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//! ```

pub mod catalog;
pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use catalog::{AVAILABLE_MODULES, ModuleCatalog};
pub use errors::AppError;
pub use password::{hash_password, verify_dummy_password, verify_password};

//! # SecureDash Config
//!
//! Configuration types for the SecureDash API.
//!
//! This crate provides configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing configuration
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`server`]: listener address
//! - [`storage`]: account store backend selection and database settings
//!
//! Every config is read once at startup and is immutable afterwards.
//!
//! # Example
//!
//! ```ignore
//! use securedash_config::{CorsConfig, JwtConfig, ServerConfig, StorageConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! let server_config = ServerConfig::from_env();
//! let storage_config = StorageConfig::from_env();
//! ```

pub mod cors;
pub mod jwt;
pub mod server;
pub mod storage;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use jwt::JwtConfig;
pub use server::ServerConfig;
pub use storage::{StorageBackend, StorageConfig};

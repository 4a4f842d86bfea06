//! One-way password hashing.
//!
//! Thin wrapper over bcrypt. The hash embeds its own salt and cost, so
//! verification needs nothing but the stored string.

use anyhow::{Context, Result};
use bcrypt::{hash, verify};
use std::sync::OnceLock;

/// bcrypt work factor for new hashes.
pub const HASH_COST: u32 = 10;

static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();

pub fn hash_password(password: &str) -> Result<String> {
    hash(password, HASH_COST).context("Failed to hash password")
}

/// Returns `Ok(false)` on mismatch; `Err` only when `hash` is not a bcrypt
/// hash at all.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    verify(password, hash).context("Failed to verify password")
}

/// Spends one bcrypt verification at [`HASH_COST`] against a hash nobody
/// owns. Callers with no stored hash use it so a failed login takes as long
/// whether or not the account exists. Always returns `false`.
pub fn verify_dummy_password(password: &str) -> bool {
    let dummy = DUMMY_HASH.get_or_init(|| hash("securedash-no-such-account", HASH_COST).ok());
    if let Some(dummy) = dummy {
        let _ = verify(password, dummy);
    }
    false
}

use std::env;
use std::fmt;
use tracing::warn;

const DEV_SECRET: &str = "your-secret-key-change-in-production";

/// Signing key for session tokens.
///
/// Loaded once at startup. Rotating the secret invalidates every outstanding
/// token, which is the only revocation mechanism stateless sessions have.
#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Reads `JWT_SECRET`, falling back to a development key with a warning.
    pub fn from_env() -> Self {
        Self {
            secret: secret_or_dev(env::var("JWT_SECRET").ok()),
        }
    }
}

fn secret_or_dev(secret: Option<String>) -> String {
    match secret {
        Some(secret) if !secret.is_empty() => secret,
        _ => {
            warn!("JWT_SECRET is not set; signing tokens with the development key");
            DEV_SECRET.to_string()
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secret() {
        let config = JwtConfig::new("super-secret-value");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret-value"));
        assert!(rendered.contains("redacted"));
    }

    #[test]
    fn test_missing_secret_falls_back_to_dev_key() {
        assert_eq!(secret_or_dev(None), DEV_SECRET);
        assert_eq!(secret_or_dev(Some(String::new())), DEV_SECRET);
        assert_eq!(
            secret_or_dev(Some("deployment-secret".into())),
            "deployment-secret"
        );
    }
}

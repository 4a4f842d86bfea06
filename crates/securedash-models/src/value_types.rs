//! Validated value types.
//!
//! [`Email`] is the account's unique login key. It is trimmed and
//! lower-cased on construction, so two spellings of the same address always
//! compare equal and the uniqueness constraint is case-insensitive.

use serde::{Deserialize, Serialize};
use sqlx::{
    Database, Decode, Encode, Type,
    postgres::PgTypeInfo,
};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;
use validator::ValidateEmail;

/// Error type for value type parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueTypeError {
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
}

/// A validated, normalised email address.
///
/// # Example
///
/// ```ignore
/// use securedash_models::value_types::Email;
///
/// let email: Email = " User@Example.COM ".parse().unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
///
/// assert!("not-an-email".parse::<Email>().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize, ToSchema)]
#[schema(value_type = String, format = "email", example = "user@example.com")]
pub struct Email(String);

impl Email {
    /// Normalise and validate an email address.
    pub fn new(email: impl AsRef<str>) -> Result<Self, ValueTypeError> {
        let normalised = email.as_ref().trim().to_lowercase();
        Self::validate(&normalised)?;
        Ok(Self(normalised))
    }

    /// Wrap a value that is already normalised, such as one read back from
    /// the database.
    #[inline]
    pub fn new_unchecked(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(email: &str) -> Result<(), ValueTypeError> {
        if email.is_empty() {
            return Err(ValueTypeError::InvalidEmail("email cannot be empty".into()));
        }

        if !email.validate_email() {
            return Err(ValueTypeError::InvalidEmail(format!(
                "'{}' is not a valid email address",
                email
            )));
        }

        Ok(())
    }
}

impl fmt::Debug for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Email({})", self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Email {
    type Err = ValueTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for Email {
    #[inline]
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Email {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Email {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Type<sqlx::Postgres> for Email {
    fn type_info() -> PgTypeInfo {
        <String as Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <String as Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'q> Encode<'q, sqlx::Postgres> for Email {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<'r> Decode<'r, sqlx::Postgres> for Email {
    fn decode(
        value: <sqlx::Postgres as Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(Self::new_unchecked(s))
    }
}

impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(serde::de::Error::custom)
    }
}

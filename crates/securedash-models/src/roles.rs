//! The role hierarchy.
//!
//! Two privilege tiers: the single [`Role::Superadmin`] above everyone, and
//! [`Role::Admin`] / [`Role::User`] below. `Admin` and `User` are freely
//! interchangeable by the superadmin. `Superadmin` is terminal: it is only
//! ever assigned by the bootstrap operation and never reached or left via an
//! update.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "account_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Superadmin,
    Admin,
    #[default]
    User,
}

impl Role {
    /// Roles a superadmin may hand out through registration or update.
    pub const ASSIGNABLE: [Role; 2] = [Role::Admin, Role::User];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Superadmin => "superadmin",
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn is_superadmin(&self) -> bool {
        matches!(self, Role::Superadmin)
    }

    pub fn is_assignable(&self) -> bool {
        match self {
            Role::Superadmin => false,
            Role::Admin | Role::User => true,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role '{0}'")]
pub struct ParseRoleError(pub String);

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "superadmin" => Ok(Role::Superadmin),
            "admin" => Ok(Role::Admin),
            "user" => Ok(Role::User),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

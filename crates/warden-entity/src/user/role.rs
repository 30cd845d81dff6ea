//! Role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC catalog.
///
/// The catalog is a closed enumeration: adding a role is a deliberate
/// code and schema change, never a runtime operation. Each user holds
/// exactly one role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "role_name", rename_all = "lowercase")]
pub enum Role {
    /// Full administrative access.
    Admin,
    /// Can view the dashboard but not manage users.
    Moderator,
    /// Default role with no granted permissions.
    User,
}

impl Role {
    /// Every role in the fixed catalog, in privilege order.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Moderator, Role::User];

    /// Return the canonical role name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Moderator => "Moderator",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = warden_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Self::Admin),
            "Moderator" => Ok(Self::Moderator),
            "User" => Ok(Self::User),
            _ => Err(warden_core::AppError::validation("Invalid role")),
        }
    }
}

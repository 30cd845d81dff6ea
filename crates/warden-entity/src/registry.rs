//! Persisted role/permission registry rows.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A persisted role row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RoleRecord {
    /// Role identifier.
    pub id: Uuid,
    /// Unique role name.
    pub name: String,
}

/// A persisted permission row.
///
/// Permission names are globally unique; a permission may be bound to any
/// number of roles (many-to-many).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PermissionRecord {
    /// Permission identifier.
    pub id: Uuid,
    /// Unique permission name.
    pub name: String,
    /// Human-readable description.
    pub description: String,
}

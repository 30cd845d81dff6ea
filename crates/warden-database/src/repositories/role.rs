//! Role and permission repository.
//!
//! All writes here are idempotent upserts: `INSERT … ON CONFLICT DO
//! NOTHING` against unique constraints, so repeated seeding runs and
//! concurrent boot races never duplicate rows or fail.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use warden_core::error::{AppError, ErrorKind};
use warden_core::result::AppResult;
use warden_entity::registry::{PermissionRecord, RoleRecord};
use warden_entity::user::Role;

use crate::registry::RegistrySink;

/// Repository for the persisted role/permission registry.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the permissions persisted for a role.
    pub async fn permissions_of(&self, role: Role) -> AppResult<Vec<PermissionRecord>> {
        sqlx::query_as::<_, PermissionRecord>(
            "SELECT p.id, p.name, p.description \
             FROM permissions p \
             JOIN role_permissions rp ON rp.permission_id = p.id \
             JOIN roles r ON r.id = rp.role_id \
             WHERE r.name = $1 \
             ORDER BY p.name",
        )
        .bind(role.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list role permissions", e)
        })
    }
}

#[async_trait]
impl RegistrySink for RoleRepository {
    async fn ensure_role(&self, role: Role) -> AppResult<RoleRecord> {
        sqlx::query("INSERT INTO roles (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(role.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert role", e))?;

        sqlx::query_as::<_, RoleRecord>("SELECT id, name FROM roles WHERE name = $1")
            .bind(role.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load role", e))
    }

    async fn ensure_permission(
        &self,
        name: &str,
        description: &str,
    ) -> AppResult<PermissionRecord> {
        sqlx::query(
            "INSERT INTO permissions (name, description) VALUES ($1, $2) \
             ON CONFLICT (name) DO NOTHING",
        )
        .bind(name)
        .bind(description)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert permission", e)
        })?;

        sqlx::query_as::<_, PermissionRecord>(
            "SELECT id, name, description FROM permissions WHERE name = $1",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to load permission", e))
    }

    async fn bind_permission(&self, role_id: Uuid, permission_id: Uuid) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO role_permissions (role_id, permission_id) VALUES ($1, $2) \
             ON CONFLICT DO NOTHING",
        )
        .bind(role_id)
        .bind(permission_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to bind permission to role", e)
        })?;
        Ok(())
    }
}

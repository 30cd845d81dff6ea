//! Startup seeding of the role/permission registry.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use warden_auth::rbac::RoleCatalog;
use warden_core::error::{AppError, ErrorKind};
use warden_core::result::AppResult;
use warden_entity::registry::{PermissionRecord, RoleRecord};
use warden_entity::user::Role;

/// Durable sink for seeded registry rows.
///
/// Every operation is an idempotent get-or-create keyed on the unique
/// name, so seeding can repeat across restarts and concurrent boots
/// without duplicating rows. The PostgreSQL implementation lives on
/// [`RoleRepository`](crate::repositories::role::RoleRepository).
#[async_trait]
pub trait RegistrySink: Send + Sync {
    /// Get or create the row for a catalog role.
    async fn ensure_role(&self, role: Role) -> AppResult<RoleRecord>;

    /// Get or create a permission row.
    async fn ensure_permission(
        &self,
        name: &str,
        description: &str,
    ) -> AppResult<PermissionRecord>;

    /// Bind a permission to a role. Idempotent; many-to-many.
    async fn bind_permission(&self, role_id: Uuid, permission_id: Uuid) -> AppResult<()>;
}

/// Synchronizes the in-memory role catalog into a durable sink.
///
/// Authorization decisions are served from the catalog; the persisted
/// rows exist so operators can inspect the grants with plain SQL. The
/// seeding runs at every boot and is safe to repeat.
pub struct RoleRegistry<S> {
    sink: S,
    catalog: RoleCatalog,
}

impl<S: RegistrySink> RoleRegistry<S> {
    pub fn new(sink: S, catalog: RoleCatalog) -> Self {
        Self { sink, catalog }
    }

    /// Seed every known role and its permission grants.
    ///
    /// A failure here means the service cannot guarantee its
    /// authorization baseline, so the caller should treat it as fatal.
    pub async fn initialize(&self) -> AppResult<()> {
        for role in Role::ALL {
            let role_record = self.sink.ensure_role(role).await.map_err(seed_error)?;

            let grants = self.catalog.permissions_of(&role);
            for permission in &grants {
                let perm_record = self
                    .sink
                    .ensure_permission(permission.name(), permission.description())
                    .await
                    .map_err(seed_error)?;
                self.sink
                    .bind_permission(role_record.id, perm_record.id)
                    .await
                    .map_err(seed_error)?;
            }

            info!(
                role = %role,
                permissions = grants.len(),
                "Seeded role registry entry"
            );
        }
        Ok(())
    }
}

fn seed_error(e: AppError) -> AppError {
    AppError::with_source(
        ErrorKind::Configuration,
        "Failed to seed role registry",
        e,
    )
}

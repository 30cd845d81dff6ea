//! Access decision engine — checks whether a principal's role grants a
//! required permission.

use warden_core::error::AppError;
use warden_entity::user::Role;

use crate::principal::Principal;

use super::catalog::{Permission, RoleCatalog};

/// Denied-access message shared by every gate.
const ACCESS_DENIED: &str = "Access Denied";

/// Decides allow/deny for protected operations.
///
/// Decisions are deterministic and side-effect-free: a catalog lookup
/// and a set-membership test, no I/O.
#[derive(Debug, Clone)]
pub struct AccessEngine {
    /// The role catalog.
    catalog: RoleCatalog,
}

impl AccessEngine {
    /// Creates a new engine with the fixed catalog.
    pub fn new() -> Self {
        Self {
            catalog: RoleCatalog::new(),
        }
    }

    /// Returns whether the principal's role grants the required permission.
    pub fn authorize(&self, principal: &Principal, permission: &Permission) -> bool {
        self.catalog.has_permission(&principal.role, permission)
    }

    /// Checks the required permission, failing with `Authorization` on deny.
    pub fn require_permission(
        &self,
        principal: &Principal,
        permission: &Permission,
    ) -> Result<(), AppError> {
        if self.authorize(principal, permission) {
            Ok(())
        } else {
            Err(AppError::authorization(ACCESS_DENIED))
        }
    }

    /// Checks that the principal holds one of the given roles.
    ///
    /// Coarser than a permission check; kept for the dashboard gate.
    pub fn require_any_role(
        &self,
        principal: &Principal,
        roles: &[Role],
    ) -> Result<(), AppError> {
        if roles.contains(&principal.role) {
            Ok(())
        } else {
            Err(AppError::authorization(ACCESS_DENIED))
        }
    }
}

impl Default for AccessEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use warden_core::error::ErrorKind;

    use super::*;

    fn principal(role: Role) -> Principal {
        Principal {
            user_id: Uuid::new_v4(),
            username: "someone".to_string(),
            role,
        }
    }

    #[test]
    fn test_admin_may_manage_users() {
        let engine = AccessEngine::new();
        assert!(engine.authorize(&principal(Role::Admin), &Permission::ManageUsers));
    }

    #[test]
    fn test_plain_user_is_denied() {
        let engine = AccessEngine::new();
        let p = principal(Role::User);

        assert!(!engine.authorize(&p, &Permission::ViewDashboard));

        let err = engine
            .require_permission(&p, &Permission::ManageUsers)
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authorization);
        assert_eq!(err.message, "Access Denied");
    }

    #[test]
    fn test_role_set_gate() {
        let engine = AccessEngine::new();
        let dashboard_roles = [Role::Admin, Role::Moderator];

        assert!(
            engine
                .require_any_role(&principal(Role::Moderator), &dashboard_roles)
                .is_ok()
        );
        assert!(
            engine
                .require_any_role(&principal(Role::User), &dashboard_roles)
                .is_err()
        );
    }
}

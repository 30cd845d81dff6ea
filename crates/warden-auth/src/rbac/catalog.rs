//! Role-to-permission mapping definitions.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use warden_entity::user::Role;

/// An atomic capability checked by the access decision engine.
///
/// Permission names are globally unique; a permission may be granted to
/// any number of roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create, modify, and remove user accounts.
    ManageUsers,
    /// View the dashboard.
    ViewDashboard,
}

impl Permission {
    /// Every permission in the catalog.
    pub const ALL: [Permission; 2] = [Permission::ManageUsers, Permission::ViewDashboard];

    /// Return the unique permission name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::ManageUsers => "manage_users",
            Self::ViewDashboard => "view_dashboard",
        }
    }

    /// Return the human-readable description.
    pub fn description(&self) -> &'static str {
        match self {
            Self::ManageUsers => "Can manage users",
            Self::ViewDashboard => "Can view dashboard",
        }
    }
}

/// Defines the mapping from each role to its set of granted permissions.
///
/// The mapping is a pure function of the role name. It is computed once
/// and held in memory; request-time checks never reach the database.
#[derive(Debug, Clone)]
pub struct RoleCatalog {
    /// Role to set of permissions.
    grants: HashMap<Role, HashSet<Permission>>,
}

impl RoleCatalog {
    /// Creates the fixed catalog.
    pub fn new() -> Self {
        let mut grants = HashMap::new();

        let admin: HashSet<Permission> = [Permission::ManageUsers, Permission::ViewDashboard]
            .into_iter()
            .collect();
        grants.insert(Role::Admin, admin);

        let moderator: HashSet<Permission> =
            [Permission::ViewDashboard].into_iter().collect();
        grants.insert(Role::Moderator, moderator);

        // User holds no permissions by default.
        grants.insert(Role::User, HashSet::new());

        Self { grants }
    }

    /// Returns the set of permissions granted to the given role.
    pub fn permissions_of(&self, role: &Role) -> HashSet<Permission> {
        self.grants.get(role).cloned().unwrap_or_default()
    }

    /// Checks whether the given role holds the specified permission.
    pub fn has_permission(&self, role: &Role, permission: &Permission) -> bool {
        self.grants
            .get(role)
            .map(|perms| perms.contains(permission))
            .unwrap_or(false)
    }
}

impl Default for RoleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_grants() {
        let catalog = RoleCatalog::new();
        assert!(catalog.has_permission(&Role::Admin, &Permission::ManageUsers));
        assert!(catalog.has_permission(&Role::Admin, &Permission::ViewDashboard));
    }

    #[test]
    fn test_moderator_grants() {
        let catalog = RoleCatalog::new();
        assert!(!catalog.has_permission(&Role::Moderator, &Permission::ManageUsers));
        assert!(catalog.has_permission(&Role::Moderator, &Permission::ViewDashboard));
    }

    #[test]
    fn test_user_holds_nothing() {
        let catalog = RoleCatalog::new();
        assert!(catalog.permissions_of(&Role::User).is_empty());
    }

    #[test]
    fn test_catalog_is_stable_across_instances() {
        // The mapping is a pure function of the role name.
        let a = RoleCatalog::new();
        let b = RoleCatalog::new();
        for role in Role::ALL {
            assert_eq!(a.permissions_of(&role), b.permissions_of(&role));
        }
    }

    #[test]
    fn test_permission_names_are_unique() {
        let names: HashSet<&str> = Permission::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), Permission::ALL.len());
    }
}

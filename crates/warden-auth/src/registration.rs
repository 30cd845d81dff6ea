//! New user registration workflow.

use std::str::FromStr;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use warden_core::error::AppError;
use warden_entity::user::{CreateUser, Role};

use crate::password::PasswordHasher;
use crate::store::CredentialStore;

/// Validates and commits new user + role bindings.
#[derive(Clone)]
pub struct RegistrationService {
    /// Credential store.
    store: Arc<dyn CredentialStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(store: Arc<dyn CredentialStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Registers a new user under the named role.
    ///
    /// The role name must match the fixed catalog. The secret is hashed
    /// before it reaches the store; no token is issued here. Exactly one
    /// user record is created on success.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role_name: &str,
    ) -> Result<Uuid, AppError> {
        let role = Role::from_str(role_name)?;
        let password_hash = self.hasher.hash_password(password)?;

        let user = self
            .store
            .create(&CreateUser {
                username: username.to_string(),
                password_hash,
                role,
            })
            .await?;

        info!(user_id = %user.id, username, role = %role, "User registered");
        Ok(user.id)
    }
}

impl std::fmt::Debug for RegistrationService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationService").finish()
    }
}

#[cfg(test)]
mod tests {
    use warden_core::error::ErrorKind;

    use crate::store::memory::MemoryCredentialStore;

    use super::*;

    fn service() -> (RegistrationService, Arc<MemoryCredentialStore>) {
        let store = Arc::new(MemoryCredentialStore::new());
        let svc = RegistrationService::new(store.clone(), Arc::new(PasswordHasher::new()));
        (svc, store)
    }

    #[tokio::test]
    async fn test_register_stores_hash_not_plaintext() {
        let (svc, store) = service();

        let id = svc.register("alice", "hunter22", "Admin").await.unwrap();

        let user = store.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(user.role, Role::Admin);
        assert_ne!(user.password_hash, "hunter22");
    }

    #[tokio::test]
    async fn test_unknown_role_is_rejected_before_any_write() {
        let (svc, store) = service();

        let err = svc
            .register("carol", "hunter22", "NotARole")
            .await
            .unwrap_err();

        assert_eq!(err.kind, ErrorKind::Validation);
        assert_eq!(err.message, "Invalid role");
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_identity_leaves_single_record() {
        let (svc, store) = service();

        svc.register("alice", "first", "User").await.unwrap();
        let err = svc.register("alice", "second", "User").await.unwrap_err();

        assert_eq!(err.kind, ErrorKind::Conflict);
        assert_eq!(store.count().await.unwrap(), 1);
    }
}

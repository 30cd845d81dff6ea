//! Credential verification.

use std::sync::Arc;

use tracing::debug;

use warden_core::error::AppError;

use crate::password::PasswordHasher;
use crate::principal::Principal;
use crate::store::CredentialStore;

/// Verifies a presented identity + secret against the credential store.
#[derive(Clone)]
pub struct Authenticator {
    /// Credential store.
    store: Arc<dyn CredentialStore>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
}

impl Authenticator {
    /// Creates a new authenticator.
    pub fn new(store: Arc<dyn CredentialStore>, hasher: Arc<PasswordHasher>) -> Self {
        Self { store, hasher }
    }

    /// Authenticates the given credentials, yielding a [`Principal`].
    ///
    /// An unknown username and a wrong password produce the same error:
    /// the response must carry no signal usable for user enumeration.
    /// Store failures propagate unchanged; they are not credential
    /// failures.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Principal, AppError> {
        let Some(user) = self.store.find_by_username(username).await? else {
            debug!(username, "Authentication failed: unknown user");
            return Err(Self::invalid_credentials());
        };

        if !self.hasher.verify_password(password, &user.password_hash)? {
            debug!(username, "Authentication failed: wrong password");
            return Err(Self::invalid_credentials());
        }

        Ok(Principal::from(&user))
    }

    /// The single generic credential failure. Both failure paths call
    /// this so the two errors are indistinguishable.
    fn invalid_credentials() -> AppError {
        AppError::authentication("Invalid credentials")
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator").finish()
    }
}

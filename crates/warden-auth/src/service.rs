//! Login and refresh orchestration.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use warden_core::error::AppError;

use crate::authenticator::Authenticator;
use crate::jwt::{TokenIssuer, TokenPair, TokenValidator};
use crate::principal::Principal;
use crate::store::CredentialStore;

/// A freshly minted access token from a refresh.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RefreshedToken {
    /// The new access token.
    pub access: String,
    /// Its expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

/// Orchestrates the login and refresh flows.
///
/// The service holds no session state: tokens are self-contained and
/// owned by the client presenting them.
#[derive(Clone)]
pub struct AuthService {
    /// Credential store, consulted at login and refresh time.
    store: Arc<dyn CredentialStore>,
    /// Credential verifier.
    authenticator: Authenticator,
    /// Token issuer.
    issuer: Arc<TokenIssuer>,
    /// Token validator.
    validator: Arc<TokenValidator>,
}

impl AuthService {
    /// Creates a new auth service.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        authenticator: Authenticator,
        issuer: Arc<TokenIssuer>,
        validator: Arc<TokenValidator>,
    ) -> Self {
        Self {
            store,
            authenticator,
            issuer,
            validator,
        }
    }

    /// Authenticates credentials and issues a token pair.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair, AppError> {
        let principal = self.authenticator.authenticate(username, password).await?;
        let pair = self.issuer.issue_pair(&principal)?;

        info!(user_id = %principal.user_id, "Login successful");
        Ok(pair)
    }

    /// Validates a refresh token and mints a new access token.
    ///
    /// The role is looked up fresh from the credential store: this is
    /// the only point where a role change propagates to sessions.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshedToken, AppError> {
        let claims = self.validator.decode_refresh(refresh_token)?;

        let user = self
            .store
            .find_by_id(claims.sub)
            .await?
            .ok_or_else(|| AppError::token_invalid("Unknown token subject"))?;

        let (access, expires_at) = self.issuer.issue_access(&Principal::from(&user))?;

        info!(user_id = %user.id, "Access token refreshed");
        Ok(RefreshedToken { access, expires_at })
    }
}

impl std::fmt::Debug for AuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService").finish()
    }
}

#[cfg(test)]
mod tests {
    use warden_core::config::auth::AuthConfig;
    use warden_core::error::ErrorKind;
    use warden_entity::user::{CreateUser, Role};

    use crate::password::PasswordHasher;
    use crate::store::memory::MemoryCredentialStore;

    use super::*;

    async fn fixture() -> (AuthService, Arc<MemoryCredentialStore>, uuid::Uuid) {
        let config = AuthConfig {
            jwt_secret: "service-test-secret".to_string(),
            ..AuthConfig::default()
        };
        let store = Arc::new(MemoryCredentialStore::new());
        let hasher = Arc::new(PasswordHasher::new());

        let user = store
            .create(&CreateUser {
                username: "alice".to_string(),
                password_hash: hasher.hash_password("pw-alice").unwrap(),
                role: Role::User,
            })
            .await
            .unwrap();

        let service = AuthService::new(
            store.clone(),
            Authenticator::new(store.clone(), hasher),
            Arc::new(TokenIssuer::new(&config)),
            Arc::new(TokenValidator::new(&config)),
        );
        (service, store, user.id)
    }

    #[tokio::test]
    async fn test_login_issues_pair() {
        let (service, _, _) = fixture().await;

        let pair = service.login("alice", "pw-alice").await.unwrap();
        assert!(pair.access_expires_at < pair.refresh_expires_at);
        assert_ne!(pair.access, pair.refresh);
    }

    #[tokio::test]
    async fn test_login_failure_is_generic() {
        let (service, _, _) = fixture().await;

        let err = service.login("alice", "wrong").await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Authentication);
    }

    #[tokio::test]
    async fn test_refresh_picks_up_current_role() {
        let (service, store, user_id) = fixture().await;
        let config = AuthConfig {
            jwt_secret: "service-test-secret".to_string(),
            ..AuthConfig::default()
        };
        let validator = TokenValidator::new(&config);

        let pair = service.login("alice", "pw-alice").await.unwrap();

        // The original access token still carries the old role.
        let claims = validator.decode_access(&pair.access).unwrap();
        assert_eq!(claims.role, Role::User);

        // An admin changes the role mid-session.
        store.update_role(user_id, Role::Moderator).await.unwrap();

        let refreshed = service.refresh(&pair.refresh).await.unwrap();
        let claims = validator.decode_access(&refreshed.access).unwrap();
        assert_eq!(claims.role, Role::Moderator);
    }

    #[tokio::test]
    async fn test_access_token_rejected_by_refresh() {
        let (service, _, _) = fixture().await;

        let pair = service.login("alice", "pw-alice").await.unwrap();
        let err = service.refresh(&pair.access).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::TokenInvalid);
    }
}

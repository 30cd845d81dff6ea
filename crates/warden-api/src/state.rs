//! Application state shared across all handlers.

use std::sync::Arc;

use warden_auth::authenticator::Authenticator;
use warden_auth::jwt::issuer::TokenIssuer;
use warden_auth::jwt::validator::TokenValidator;
use warden_auth::password::hasher::PasswordHasher;
use warden_auth::rbac::AccessEngine;
use warden_auth::registration::RegistrationService;
use warden_auth::service::AuthService;
use warden_auth::store::CredentialStore;
use warden_core::config::AppConfig;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// JWT token validator
    pub validator: Arc<TokenValidator>,
    /// Access decision engine
    pub engine: Arc<AccessEngine>,
    /// Login and refresh flows
    pub auth_service: Arc<AuthService>,
    /// Account registration flow
    pub registration: Arc<RegistrationService>,
}

impl AppState {
    /// Wire up the full service graph over the given credential store.
    pub fn new(config: Arc<AppConfig>, store: Arc<dyn CredentialStore>) -> Self {
        let hasher = Arc::new(PasswordHasher::new());
        let issuer = Arc::new(TokenIssuer::new(&config.auth));
        let validator = Arc::new(TokenValidator::new(&config.auth));
        let engine = Arc::new(AccessEngine::new());

        let authenticator = Authenticator::new(store.clone(), hasher.clone());
        let auth_service = Arc::new(AuthService::new(
            store.clone(),
            authenticator,
            issuer,
            validator.clone(),
        ));
        let registration = Arc::new(RegistrationService::new(store, hasher));

        Self {
            config,
            validator,
            engine,
            auth_service,
            registration,
        }
    }
}

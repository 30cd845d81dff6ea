//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use warden_api::AppState;
use warden_auth::store::{CredentialStore, MemoryCredentialStore};
use warden_core::config::{AppConfig, DatabaseConfig};
use warden_core::config::auth::AuthConfig;
use warden_core::config::logging::LoggingConfig;
use warden_core::config::server::ServerConfig;

/// Test application context.
///
/// Runs the full router over the in-memory credential store, so no
/// external services are needed.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The backing store, for direct inspection
    pub store: Arc<MemoryCredentialStore>,
}

impl TestApp {
    /// Create a new test application
    pub fn new() -> Self {
        let config = Arc::new(test_config());
        let store = Arc::new(MemoryCredentialStore::new());
        let state = AppState::new(config, store.clone() as Arc<dyn CredentialStore>);
        let router = warden_api::build_router(state);

        Self { router, store }
    }

    /// Register a user through the API, asserting success
    pub async fn register(&self, username: &str, password: &str, role: &str) {
        let response = self
            .request(
                "POST",
                "/register",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                    "role": role,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );
    }

    /// Login and return the (access, refresh) token pair
    pub async fn login(&self, username: &str, password: &str) -> (String, String) {
        let response = self
            .request(
                "POST",
                "/login",
                Some(serde_json::json!({
                    "username": username,
                    "password": password,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        let access = response
            .body
            .get("access")
            .and_then(|v| v.as_str())
            .expect("No access token in login response")
            .to_string();
        let refresh = response
            .body
            .get("refresh")
            .and_then(|v| v.as_str())
            .expect("No refresh token in login response")
            .to_string();

        (access, refresh)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://unused".to_string(),
            max_connections: 1,
            min_connections: 1,
            connect_timeout_seconds: 1,
        },
        auth: AuthConfig {
            jwt_secret: "test-secret-not-for-production".to_string(),
            ..AuthConfig::default()
        },
        logging: LoggingConfig::default(),
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `error` field of an error body
    pub fn error_message(&self) -> &str {
        self.body
            .get("error")
            .and_then(|v| v.as_str())
            .unwrap_or_default()
    }
}

//! # warden-auth
//!
//! Authentication and authorization core for the Warden service.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and verification
//! - `jwt` — session token creation and validation (access + refresh pair)
//! - `rbac` — role catalog and access decision engine
//! - `store` — credential store contract (plus an in-memory implementation)
//! - `authenticator` — credential verification yielding a [`Principal`]
//! - `registration` — new user + role binding workflow
//! - `service` — login/refresh orchestration

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod principal;
pub mod rbac;
pub mod registration;
pub mod service;
pub mod store;

pub use authenticator::Authenticator;
pub use jwt::{Claims, TokenIssuer, TokenPair, TokenValidator};
pub use password::PasswordHasher;
pub use principal::Principal;
pub use rbac::{AccessEngine, Permission, RoleCatalog};
pub use registration::RegistrationService;
pub use service::AuthService;
pub use store::{CredentialStore, MemoryCredentialStore};

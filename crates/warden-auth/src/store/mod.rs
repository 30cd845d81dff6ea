//! Credential store contract.
//!
//! The core never assumes a specific storage engine: any durable backend
//! satisfying [`CredentialStore`] can hold user records. The PostgreSQL
//! implementation lives in `warden-database`; an in-memory implementation
//! is provided here for tests and local development.

pub mod memory;

pub use memory::MemoryCredentialStore;

use async_trait::async_trait;
use uuid::Uuid;

use warden_core::result::AppResult;
use warden_entity::user::{CreateUser, Role, User};

/// Durable storage contract for user records.
///
/// Implementations must enforce atomic uniqueness on the username:
/// two concurrent `create` calls with the same username must have
/// exactly one winner, the loser failing with `ErrorKind::Conflict`.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Look up a user by username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Look up a user by primary key.
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Create a new user. Fails with `Conflict` if the username is taken.
    async fn create(&self, data: &CreateUser) -> AppResult<User>;

    /// Change a user's role. Administrative operation; the new role
    /// propagates to sessions only at token refresh.
    async fn update_role(&self, id: Uuid, role: Role) -> AppResult<User>;

    /// Count stored users.
    async fn count(&self) -> AppResult<u64>;
}

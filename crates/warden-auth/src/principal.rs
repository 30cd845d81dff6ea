//! Authenticated principal.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warden_entity::user::{Role, User};

/// An authenticated identity plus its role claim.
///
/// Produced by successful credential verification or by validating a
/// session token. Downstream permission checks need nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The user's unique identifier.
    pub user_id: Uuid,
    /// The user's login name.
    pub username: String,
    /// The role claim at the time the principal was established.
    pub role: Role,
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            username: user.username.clone(),
            role: user.role,
        }
    }
}

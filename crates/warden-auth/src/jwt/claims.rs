//! JWT claims structure used in access and refresh tokens.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use warden_entity::user::Role;

use crate::principal::Principal;

/// JWT claims payload embedded in every issued token.
///
/// Tokens are immutable once issued; they are never mutated server-side,
/// only validated or rejected. The role claim is embedded directly so
/// downstream permission checks need no store lookup. This trades
/// immediate revocability for read scalability: a role change takes
/// effect only when the access token expires and is refreshed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user ID.
    pub sub: Uuid,
    /// Username for convenience.
    pub username: String,
    /// Role claim at issuance time.
    pub role: Role,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
    /// Unique token ID.
    pub jti: Uuid,
    /// Token type: access or refresh.
    pub token_type: TokenType,
}

/// Distinguishes access tokens from refresh tokens.
///
/// The two are independently signed and independently expirable; a
/// refresh token is never accepted where an access token is required,
/// and vice versa.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    /// Short-lived token presented on protected requests.
    Access,
    /// Longer-lived token used solely to mint new access tokens.
    Refresh,
}

impl Claims {
    /// Checks whether this token has expired.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Extracts the principal carried by these claims.
    pub fn principal(&self) -> Principal {
        Principal {
            user_id: self.sub,
            username: self.username.clone(),
            role: self.role,
        }
    }
}

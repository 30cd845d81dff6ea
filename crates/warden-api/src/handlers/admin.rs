//! Admin handlers.

use axum::Json;
use axum::extract::State;

use warden_auth::rbac::Permission;
use warden_core::error::AppError;

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /admin/manage
pub async fn manage_users(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .engine
        .require_permission(&auth.0, &Permission::ManageUsers)?;

    Ok(Json(MessageResponse::new("User management access granted.")))
}

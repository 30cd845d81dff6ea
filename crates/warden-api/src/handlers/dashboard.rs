//! Dashboard handler.

use axum::Json;
use axum::extract::State;

use warden_core::error::AppError;
use warden_entity::user::Role;

use crate::dto::response::MessageResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /dashboard
///
/// Gated on role membership rather than a permission: the dashboard is
/// open to staff roles as a set.
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .engine
        .require_any_role(&auth.0, &[Role::Admin, Role::Moderator])?;

    Ok(Json(MessageResponse::new("Welcome to the dashboard!")))
}

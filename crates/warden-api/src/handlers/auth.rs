//! Auth handlers — register, login, refresh.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use warden_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{MessageResponse, RefreshResponse, TokenResponse};
use crate::state::AppState;

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .registration
        .register(&req.username, &req.password, &req.role)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// POST /login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let pair = state.auth_service.login(&req.username, &req.password).await?;

    Ok(Json(TokenResponse {
        access: pair.access,
        refresh: pair.refresh,
    }))
}

/// POST /refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, AppError> {
    let refreshed = state.auth_service.refresh(&req.refresh).await?;

    Ok(Json(RefreshResponse {
        access: refreshed.access,
    }))
}

//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` impl lives in `warden-core` next to `AppError`
//! (the orphan rule requires it to be in the defining crate); this
//! module re-exports the response body type for API consumers.

pub use warden_core::error::ApiErrorResponse;

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use warden_core::error::AppError;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(AppError::validation("Invalid role")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::authentication("Invalid credentials")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::token_expired("Token has expired")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::token_invalid("Invalid token")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::authorization("Access Denied")),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_of(AppError::conflict("Username 'a' already exists")),
            StatusCode::CONFLICT
        );
    }
}

//! Error types for the Auth API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use trustbank_auth_core::AuthError;
use trustbank_types::{ApiResponse, HttpStatusTag};

/// API error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("Database error")]
    Database(#[from] trustbank_db::DbError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn status_tag(&self) -> HttpStatusTag {
        match self.status_code() {
            StatusCode::BAD_REQUEST => HttpStatusTag::BadRequest,
            _ => HttpStatusTag::InternalServerError,
        }
    }

    /// Message surfaced to the client
    ///
    /// Client errors carry their own text; anything internal collapses
    /// to a fixed message so storage or key details never leak.
    fn client_message(&self) -> String {
        match self {
            Self::Auth(e) if e.status_code() == 400 => e.to_string(),
            _ => "Internal server error".to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log internal errors
        if status.is_server_error() {
            tracing::error!(error = ?self, "Internal API error");
        }

        let body: ApiResponse<String> = ApiResponse::error(self.status_tag(), self.client_message());

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_bad_request() {
        let err = ApiError::Auth(AuthError::InvalidCredentials);
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.status_tag(), HttpStatusTag::BadRequest);
        assert_eq!(err.client_message(), "invalid login details");
    }

    #[test]
    fn test_internal_errors_hide_details() {
        let err = ApiError::Auth(AuthError::Database("connection reset".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.client_message().contains("connection reset"));
    }
}

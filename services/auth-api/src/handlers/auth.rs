//! Authentication handlers (registration, login)

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use trustbank_auth_core::{LoginRequest, RegistrationRequest};
use trustbank_types::ApiResponse;

use crate::error::ApiResult;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationBody {
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    pub phone_number: String,
    /// Birthdate in `yyyy/MM/dd` format
    pub birth_date: String,
    pub question: String,
    pub answer: String,
}

impl From<RegistrationBody> for RegistrationRequest {
    fn from(body: RegistrationBody) -> Self {
        Self {
            email: body.email,
            password: body.password,
            firstname: body.firstname,
            lastname: body.lastname,
            phone_number: body.phone_number,
            birth_date: body.birth_date,
            question: body.question,
            answer: body.answer,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /api/v1/auth/registration
///
/// Register a new user and open their bank account. The bearer token is
/// returned either way; a failed welcome mail only degrades the envelope
/// (200 with a "Failed" message instead of 201).
pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegistrationBody>,
) -> ApiResult<impl IntoResponse> {
    let outcome = state.auth.register(body.into()).await?;
    let bearer = format!("Bearer {}", outcome.token);

    let response = if outcome.mail_delivered {
        (StatusCode::CREATED, Json(ApiResponse::created(bearer)))
    } else {
        (StatusCode::OK, Json(ApiResponse::failed(bearer)))
    };

    Ok(response)
}

/// POST /api/v1/auth/login
///
/// Authenticate and issue a fresh bearer token; all prior tokens for the
/// user are revoked first.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> ApiResult<impl IntoResponse> {
    let outcome = state
        .auth
        .login(LoginRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    let bearer = format!("Bearer {}", outcome.token);
    Ok((StatusCode::OK, Json(ApiResponse::ok(bearer))))
}

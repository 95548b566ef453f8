//! API response envelope
//!
//! The wire contract every auth endpoint returns. Field names and the
//! `httpStatus` tag inside the body are part of the published contract
//! and must not drift from what existing clients parse.

use serde::{Deserialize, Serialize};

/// Status tag carried inside the response body
///
/// Note this is a payload field, not the transport status line; the two
/// can disagree (the mail-failure registration path sends `BAD_GATEWAY`
/// in a 200 response).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpStatusTag {
    Ok,
    Created,
    BadRequest,
    BadGateway,
    InternalServerError,
}

/// Standard API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Response payload, when any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Status tag inside the body
    pub http_status: HttpStatusTag,
    /// Whether the request succeeded
    pub is_successful: bool,
    /// Human-readable message
    pub message: String,
}

impl<T> ApiResponse<T> {
    /// `201`-shaped envelope for newly created resources
    pub fn created(data: T) -> Self {
        Self {
            data: Some(data),
            http_status: HttpStatusTag::Created,
            is_successful: true,
            message: "Created successfully".to_string(),
        }
    }

    /// `200`-shaped envelope with a payload
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            http_status: HttpStatusTag::Ok,
            is_successful: true,
            message: "Ok".to_string(),
        }
    }

    /// Degraded envelope returned when a downstream collaborator failed
    ///
    /// Mirrors the historical contract: the flag stays `true` and the
    /// failure is signalled only through `message` and `httpStatus`.
    pub fn failed(data: T) -> Self {
        Self {
            data: Some(data),
            http_status: HttpStatusTag::BadGateway,
            is_successful: true,
            message: "Failed".to_string(),
        }
    }

    /// Error envelope with an explicit message
    pub fn error(http_status: HttpStatusTag, message: impl Into<String>) -> Self {
        Self {
            data: None,
            http_status,
            is_successful: false,
            message: message.into(),
        }
    }
}

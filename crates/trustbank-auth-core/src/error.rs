//! Auth errors

use thiserror::Error;

/// Authentication errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Registration attempted with an email that is already taken
    #[error("{0}")]
    AlreadyExists(String),

    /// Supplied email/password pair did not authenticate
    ///
    /// Deliberately generic; the message must not reveal whether the
    /// email exists.
    #[error("invalid login details")]
    InvalidCredentials,

    /// Authenticated user vanished between verification and re-fetch
    #[error("invalid login details")]
    InvalidLogin,

    /// Birthdate did not match the `yyyy/MM/dd` contract
    #[error("invalid birth date: {0}")]
    InvalidBirthDate(String),

    /// Token encryption failed (bad or missing key material)
    #[error("encryption error: {0}")]
    Encryption(String),

    /// Token signing or validation failed
    #[error("token error: {0}")]
    Token(String),

    /// Password hashing failed
    #[error("password hashing error: {0}")]
    PasswordHash(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Database error
    #[error("database error: {0}")]
    Database(String),
}

impl AuthError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::AlreadyExists(_)
            | Self::InvalidCredentials
            | Self::InvalidLogin
            | Self::InvalidBirthDate(_) => 400,
            Self::Encryption(_)
            | Self::Token(_)
            | Self::PasswordHash(_)
            | Self::Configuration(_)
            | Self::Database(_) => 500,
        }
    }

    /// Get error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyExists(_) => "ALREADY_EXISTS",
            Self::InvalidCredentials | Self::InvalidLogin => "INVALID_LOGIN_DETAILS",
            Self::InvalidBirthDate(_) => "INVALID_BIRTH_DATE",
            Self::Encryption(_) => "ENCRYPTION_ERROR",
            Self::Token(_) => "TOKEN_ERROR",
            Self::PasswordHash(_) => "PASSWORD_HASH_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
        }
    }
}

impl From<trustbank_db::DbError> for AuthError {
    fn from(err: trustbank_db::DbError) -> Self {
        tracing::error!("Database error: {}", err);
        Self::Database(err.to_string())
    }
}

//! Configuration for the Auth API service.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::time::Duration;

use trustbank_auth_core::AuthConfig;

/// Auth API configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub http_port: u16,

    /// Database URL
    pub database_url: String,

    /// Auth core configuration
    pub auth: AuthConfig,

    /// SMTP relay settings for the welcome mail
    pub smtp: SmtpConfig,

    /// Request timeout
    pub request_timeout: Duration,
}

/// SMTP relay settings
#[derive(Clone)]
pub struct SmtpConfig {
    pub relay: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("relay", &self.relay)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        // Database
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        // Server port
        let http_port = std::env::var("HTTP_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("HTTP_PORT"))?;

        // Token signing secret (minimum length enforced by the auth core)
        let signing_secret = std::env::var("TOKEN_SIGNING_SECRET")
            .map_err(|_| ConfigError::Missing("TOKEN_SIGNING_SECRET"))?;

        // Token encryption key, base64 of exactly 32 raw bytes
        let encryption_key_b64 = std::env::var("TOKEN_ENCRYPTION_KEY")
            .map_err(|_| ConfigError::Missing("TOKEN_ENCRYPTION_KEY"))?;
        let encryption_key = STANDARD
            .decode(&encryption_key_b64)
            .map_err(|_| ConfigError::Invalid("TOKEN_ENCRYPTION_KEY must be valid base64"))?;

        // Token time-to-live (default 24 hours)
        let token_ttl_hours: u64 = std::env::var("TOKEN_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("TOKEN_TTL_HOURS"))?;

        // SMTP relay
        let smtp = SmtpConfig {
            relay: std::env::var("SMTP_RELAY").map_err(|_| ConfigError::Missing("SMTP_RELAY"))?,
            username: std::env::var("SMTP_USERNAME")
                .map_err(|_| ConfigError::Missing("SMTP_USERNAME"))?,
            password: std::env::var("SMTP_PASSWORD")
                .map_err(|_| ConfigError::Missing("SMTP_PASSWORD"))?,
        };

        // Request timeout (default 30 seconds)
        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|_| ConfigError::Invalid("REQUEST_TIMEOUT_SECS"))?;

        // Build auth config
        let auth = AuthConfig::try_new(signing_secret, encryption_key)
            .map_err(|e| ConfigError::AuthConfig(e.to_string()))?
            .with_token_ttl(Duration::from_secs(token_ttl_hours * 3600));

        Ok(Self {
            http_port,
            database_url,
            auth,
            smtp,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),

    #[error("Auth config error: {0}")]
    AuthConfig(String),
}

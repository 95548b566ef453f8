//! Configuration types for the auth core

use std::time::Duration;

use crate::error::AuthError;

/// Auth core configuration
///
/// Key material is passed in explicitly so services can construct the
/// core with rotated keys and tests can use throwaway ones; nothing in
/// this crate reads process-global state.
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC secret for signing bearer tokens
    pub signing_secret: String,
    /// 32-byte key for encrypting tokens before persistence
    pub encryption_key: Vec<u8>,
    /// How long issued tokens stay valid
    pub token_ttl: Duration,
}

impl AuthConfig {
    /// Minimum signing secret length in bytes
    pub const MIN_SECRET_LENGTH: usize = 32;

    /// Create a new config, validating the key material
    pub fn try_new(
        signing_secret: impl Into<String>,
        encryption_key: impl AsRef<[u8]>,
    ) -> Result<Self, AuthError> {
        let signing_secret = signing_secret.into();
        if signing_secret.len() < Self::MIN_SECRET_LENGTH {
            return Err(AuthError::Configuration(format!(
                "signing secret too short: got {} bytes, need at least {}",
                signing_secret.len(),
                Self::MIN_SECRET_LENGTH
            )));
        }

        let encryption_key = encryption_key.as_ref().to_vec();
        if encryption_key.len() != crate::crypto::TokenCipher::KEY_LENGTH {
            return Err(AuthError::Configuration(format!(
                "encryption key must be exactly {} bytes, got {}",
                crate::crypto::TokenCipher::KEY_LENGTH,
                encryption_key.len()
            )));
        }

        Ok(Self {
            signing_secret,
            encryption_key,
            token_ttl: Duration::from_secs(24 * 60 * 60),
        })
    }

    /// Set the token time-to-live
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

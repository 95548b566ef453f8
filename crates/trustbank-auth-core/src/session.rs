//! Session registry
//!
//! Server-side record of every issued token, with revoked/expired flags.
//! This is the revocation list that complements the stateless JWTs: a
//! token can be signed and unexpired yet still dead because its record
//! was revoked here.

use std::sync::Arc;

use trustbank_db::{CreateSessionToken, SessionTokenRepository, SessionTokenRow};
use trustbank_types::{SessionTokenId, UserId};

use crate::error::AuthError;

/// Session registry over a token repository
#[derive(Clone)]
pub struct SessionRegistry<S: SessionTokenRepository> {
    repo: Arc<S>,
}

impl<S: SessionTokenRepository> SessionRegistry<S> {
    /// Create a new session registry
    pub fn new(repo: Arc<S>) -> Self {
        Self { repo }
    }

    /// Persist a freshly issued token (already encrypted) for a user
    ///
    /// The new record starts non-revoked and non-expired.
    pub async fn save(
        &self,
        user_id: UserId,
        encrypted_token: String,
    ) -> Result<SessionTokenId, AuthError> {
        let id = SessionTokenId::new();
        let create = CreateSessionToken {
            id: id.0,
            user_id: user_id.0,
            token: encrypted_token,
        };

        self.repo.save(create).await.map_err(|e| {
            tracing::error!("Failed to persist session token: {}", e);
            AuthError::Database("failed to persist session token".to_string())
        })?;

        Ok(id)
    }

    /// All historical tokens for a user, valid or not
    pub async fn find_all_by_user(&self, user_id: UserId) -> Result<Vec<SessionTokenRow>, AuthError> {
        self.repo.find_all_by_user(user_id.0).await.map_err(|e| {
            tracing::error!("Failed to load session tokens: {}", e);
            AuthError::Database("failed to load session tokens".to_string())
        })
    }

    /// Revoke every token a user holds
    ///
    /// Sets both `revoked` and `expired` on each record. Returns the
    /// number of tokens touched; an empty history is a no-op.
    pub async fn revoke_all(&self, user_id: UserId) -> Result<u64, AuthError> {
        let count = self.repo.revoke_all_for_user(user_id.0).await.map_err(|e| {
            tracing::error!("Failed to revoke session tokens: {}", e);
            AuthError::Database("failed to revoke session tokens".to_string())
        })?;

        if count > 0 {
            tracing::debug!(user_id = %user_id, count, "Revoked prior session tokens");
        }
        Ok(count)
    }
}

impl<S: SessionTokenRepository> std::fmt::Debug for SessionRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionRegistry").finish_non_exhaustive()
    }
}

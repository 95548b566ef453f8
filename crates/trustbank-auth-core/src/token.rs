//! Bearer token issuance and validation
//!
//! Tokens are self-contained HS256 JWTs carrying the user's identity and
//! roles, so collaborators can verify them statelessly. The session
//! registry additionally records every issuance server-side, which is
//! what makes pre-expiry revocation possible at all.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;
use uuid::Uuid;

use trustbank_types::{Role, UserId};

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Claims carried by an issued bearer token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Unique token ID; timestamps alone are second-granular, so this
    /// is what keeps two issuances in the same second distinct
    pub jti: Uuid,
    /// User email
    pub email: String,
    /// Role tags
    pub roles: Vec<String>,
    /// Issued at timestamp (seconds)
    pub iat: i64,
    /// Expiration timestamp (seconds)
    pub exp: i64,
}

impl Claims {
    /// Check if the claims are past their expiry horizon
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Get the user ID from the subject claim
    pub fn user_id(&self) -> Option<UserId> {
        UserId::parse(&self.sub).ok()
    }

    /// Parse the role tags, skipping unknown entries
    pub fn role_set(&self) -> BTreeSet<Role> {
        self.roles.iter().filter_map(|r| r.parse().ok()).collect()
    }
}

/// Issues and validates signed bearer tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    token_ttl: Duration,
}

impl TokenIssuer {
    /// Create a new issuer from validated configuration
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.signing_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.signing_secret.as_bytes()),
            token_ttl: config.token_ttl,
        }
    }

    /// Issue a signed token bound to a user identity and role set
    pub fn issue(
        &self,
        user_id: UserId,
        email: &str,
        roles: &BTreeSet<Role>,
    ) -> Result<String, AuthError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            jti: Uuid::new_v4(),
            email: email.to_string(),
            roles: roles.iter().map(Role::to_string).collect(),
            iat,
            exp: iat + self.token_ttl.as_secs() as i64,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Token(e.to_string()))
    }

    /// Validate a token and return its claims
    ///
    /// No leeway is granted on expiry; the registry, not clock slack, is
    /// the mechanism for keeping sessions alive.
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            tracing::debug!("Token validation failed: {}", e);
            AuthError::Token(e.to_string())
        })?;

        Ok(data.claims)
    }
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}

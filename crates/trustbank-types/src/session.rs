//! Session token identifiers

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique session token identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionTokenId(pub Uuid);

impl SessionTokenId {
    /// Create a new random session token ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a session token ID from a string
    pub fn parse(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for SessionTokenId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionTokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for SessionTokenId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

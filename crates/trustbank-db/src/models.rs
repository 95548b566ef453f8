//! Database row models
//!
//! These types map directly to database rows using SQLx's FromRow derive.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use std::collections::BTreeSet;
use uuid::Uuid;

use trustbank_types::Role;

/// User row from the database
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    /// One-way hash; the plaintext password never reaches this layer
    pub password_hash: String,
    pub firstname: String,
    pub lastname: String,
    pub phone_number: String,
    pub birthdate: NaiveDate,
    pub age: i32,
    pub roles: Vec<String>,
    pub security_question_id: Uuid,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
}

/// Bank account row from the database
#[derive(Debug, Clone, FromRow)]
pub struct AccountRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_number: String,
    pub tier: String,
    pub balance_cents: i64,
    pub created_at: DateTime<Utc>,
}

/// Security question row from the database
#[derive(Debug, Clone, FromRow)]
pub struct SecurityQuestionRow {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// Session token row from the database
///
/// The `token` column holds the encrypted form of the issued bearer
/// token; it is written once and never decrypted by any flow.
#[derive(Debug, Clone, FromRow)]
pub struct SessionTokenRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub token: String,
    pub revoked: bool,
    pub expired: bool,
    pub created_at: DateTime<Utc>,
}

impl SessionTokenRow {
    /// A token still usable for authentication
    pub fn is_valid(&self) -> bool {
        !self.revoked && !self.expired
    }
}

impl UserRow {
    /// Convert to domain UserId
    pub fn user_id(&self) -> trustbank_types::UserId {
        trustbank_types::UserId(self.id)
    }

    /// Parse the stored role tags, skipping any unknown entries
    pub fn role_set(&self) -> BTreeSet<Role> {
        self.roles.iter().filter_map(|r| r.parse().ok()).collect()
    }
}

impl SessionTokenRow {
    /// Convert to domain SessionTokenId
    pub fn session_token_id(&self) -> trustbank_types::SessionTokenId {
        trustbank_types::SessionTokenId(self.id)
    }

    /// Convert to domain UserId
    pub fn user_id(&self) -> trustbank_types::UserId {
        trustbank_types::UserId(self.user_id)
    }
}

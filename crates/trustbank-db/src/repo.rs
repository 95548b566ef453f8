//! Repository traits
//!
//! Define async repository interfaces for database operations.

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::DbResult;
use crate::models::*;

/// User repository trait
///
/// The uniqueness of `email` is checked by callers via `find_by_email`
/// before `create`; the column also carries a unique constraint as a
/// backstop.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>>;

    /// Find a user by email
    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>>;

    /// Create a new user; `password_hash` must already be hashed
    async fn create(&self, user: CreateUser) -> DbResult<UserRow>;
}

/// Create user input
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub firstname: String,
    pub lastname: String,
    pub phone_number: String,
    pub birthdate: NaiveDate,
    pub age: i32,
    pub roles: Vec<String>,
    pub security_question_id: Uuid,
    pub enabled: bool,
}

/// Bank account repository trait
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find the account owned by a user
    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Option<AccountRow>>;

    /// Create a new account
    async fn create(&self, account: CreateAccount) -> DbResult<AccountRow>;
}

/// Create account input
#[derive(Debug, Clone)]
pub struct CreateAccount {
    pub id: Uuid,
    pub user_id: Uuid,
    pub account_number: String,
    pub tier: String,
    pub balance_cents: i64,
}

/// Security question repository trait
#[async_trait]
pub trait SecurityQuestionRepository: Send + Sync {
    /// Find a security question by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<SecurityQuestionRow>>;

    /// Create a new security question
    async fn create(&self, question: CreateSecurityQuestion) -> DbResult<SecurityQuestionRow>;
}

/// Create security question input
#[derive(Debug, Clone)]
pub struct CreateSecurityQuestion {
    pub id: Uuid,
    pub question: String,
    pub answer: String,
}

/// Session token repository trait
#[async_trait]
pub trait SessionTokenRepository: Send + Sync {
    /// Find a session token by ID
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<SessionTokenRow>>;

    /// Find all historical tokens for a user
    async fn find_all_by_user(&self, user_id: Uuid) -> DbResult<Vec<SessionTokenRow>>;

    /// Persist a new token with `revoked = false, expired = false`
    async fn save(&self, token: CreateSessionToken) -> DbResult<SessionTokenRow>;

    /// Mark every token of a user `revoked = true, expired = true`
    ///
    /// Returns the number of rows touched; zero rows is a no-op, not an
    /// error.
    async fn revoke_all_for_user(&self, user_id: Uuid) -> DbResult<u64>;
}

/// Create session token input
#[derive(Debug, Clone)]
pub struct CreateSessionToken {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Encrypted bearer token
    pub token: String,
}

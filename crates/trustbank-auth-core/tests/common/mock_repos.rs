//! Mock repositories and mailer for testing

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use trustbank_auth_core::{MailError, MailRequest, Mailer};
use trustbank_db::{
    AccountRepository, AccountRow, CreateAccount, CreateSecurityQuestion, CreateSessionToken,
    CreateUser, DbResult, SecurityQuestionRepository, SecurityQuestionRow, SessionTokenRepository,
    SessionTokenRow, UserRepository, UserRow,
};

/// In-memory user repository for testing
#[derive(Default, Clone)]
pub struct MockUserRepository {
    users: Arc<DashMap<Uuid, UserRow>>,
    by_email: Arc<DashMap<String, Uuid>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<UserRow>> {
        Ok(self.users.get(&id).map(|r| r.value().clone()))
    }

    async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRow>> {
        Ok(self
            .by_email
            .get(email)
            .and_then(|id| self.users.get(id.value()).map(|r| r.value().clone())))
    }

    async fn create(&self, user: CreateUser) -> DbResult<UserRow> {
        let row = UserRow {
            id: user.id,
            email: user.email.clone(),
            password_hash: user.password_hash,
            firstname: user.firstname,
            lastname: user.lastname,
            phone_number: user.phone_number,
            birthdate: user.birthdate,
            age: user.age,
            roles: user.roles,
            security_question_id: user.security_question_id,
            enabled: user.enabled,
            created_at: Utc::now(),
        };
        self.by_email.insert(row.email.clone(), row.id);
        self.users.insert(row.id, row.clone());
        Ok(row)
    }
}

/// In-memory account repository for testing
#[derive(Default, Clone)]
pub struct MockAccountRepository {
    accounts: Arc<DashMap<Uuid, AccountRow>>,
}

impl MockAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_user_id(&self, user_id: Uuid) -> DbResult<Option<AccountRow>> {
        Ok(self
            .accounts
            .iter()
            .find(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone()))
    }

    async fn create(&self, account: CreateAccount) -> DbResult<AccountRow> {
        let row = AccountRow {
            id: account.id,
            user_id: account.user_id,
            account_number: account.account_number,
            tier: account.tier,
            balance_cents: account.balance_cents,
            created_at: Utc::now(),
        };
        self.accounts.insert(row.id, row.clone());
        Ok(row)
    }
}

/// In-memory security question repository for testing
#[derive(Default, Clone)]
pub struct MockSecurityQuestionRepository {
    questions: Arc<DashMap<Uuid, SecurityQuestionRow>>,
}

impl MockSecurityQuestionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

#[async_trait]
impl SecurityQuestionRepository for MockSecurityQuestionRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<SecurityQuestionRow>> {
        Ok(self.questions.get(&id).map(|r| r.value().clone()))
    }

    async fn create(&self, question: CreateSecurityQuestion) -> DbResult<SecurityQuestionRow> {
        let row = SecurityQuestionRow {
            id: question.id,
            question: question.question,
            answer: question.answer,
            created_at: Utc::now(),
        };
        self.questions.insert(row.id, row.clone());
        Ok(row)
    }
}

/// In-memory session token repository for testing
#[derive(Default, Clone)]
pub struct MockSessionTokenRepository {
    tokens: Arc<DashMap<Uuid, SessionTokenRow>>,
}

impl MockSessionTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens that are neither revoked nor expired
    pub fn valid_tokens(&self, user_id: Uuid) -> Vec<SessionTokenRow> {
        self.tokens
            .iter()
            .filter(|r| r.value().user_id == user_id && r.value().is_valid())
            .map(|r| r.value().clone())
            .collect()
    }
}

#[async_trait]
impl SessionTokenRepository for MockSessionTokenRepository {
    async fn find_by_id(&self, id: Uuid) -> DbResult<Option<SessionTokenRow>> {
        Ok(self.tokens.get(&id).map(|r| r.value().clone()))
    }

    async fn find_all_by_user(&self, user_id: Uuid) -> DbResult<Vec<SessionTokenRow>> {
        Ok(self
            .tokens
            .iter()
            .filter(|r| r.value().user_id == user_id)
            .map(|r| r.value().clone())
            .collect())
    }

    async fn save(&self, token: CreateSessionToken) -> DbResult<SessionTokenRow> {
        let row = SessionTokenRow {
            id: token.id,
            user_id: token.user_id,
            token: token.token,
            revoked: false,
            expired: false,
            created_at: Utc::now(),
        };
        self.tokens.insert(row.id, row.clone());
        Ok(row)
    }

    async fn revoke_all_for_user(&self, user_id: Uuid) -> DbResult<u64> {
        let mut count = 0;
        for mut entry in self.tokens.iter_mut() {
            if entry.user_id == user_id && !entry.revoked {
                entry.revoked = true;
                entry.expired = true;
                count += 1;
            }
        }
        Ok(count)
    }
}

/// Mailer that records every send
#[derive(Default, Clone)]
pub struct MockMailer {
    sent: Arc<DashMap<usize, MailRequest>>,
    counter: Arc<AtomicUsize>,
}

impl MockMailer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.len()
    }

    pub fn last_mail(&self) -> Option<MailRequest> {
        let n = self.counter.load(Ordering::SeqCst);
        if n == 0 {
            return None;
        }
        self.sent.get(&(n - 1)).map(|r| r.value().clone())
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, mail: &MailRequest) -> Result<(), MailError> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst);
        self.sent.insert(n, mail.clone());
        Ok(())
    }
}

/// Mailer that always reports delivery failure
#[derive(Default, Clone)]
pub struct FlakyMailer;

#[async_trait]
impl Mailer for FlakyMailer {
    async fn send(&self, _mail: &MailRequest) -> Result<(), MailError> {
        Err(MailError::Address(
            "<"
                .parse::<lettre::Address>()
                .expect_err("intentionally malformed address"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_mock_session_repo_revoke_all() {
        let repo = MockSessionTokenRepository::new();
        let user_id = Uuid::new_v4();

        for i in 0..3 {
            repo.save(CreateSessionToken {
                id: Uuid::new_v4(),
                user_id,
                token: format!("ciphertext-{i}"),
            })
            .await
            .unwrap();
        }

        let count = repo.revoke_all_for_user(user_id).await.unwrap();
        assert_eq!(count, 3);

        let tokens = repo.find_all_by_user(user_id).await.unwrap();
        assert!(tokens.iter().all(|t| t.revoked && t.expired));
        assert!(repo.valid_tokens(user_id).is_empty());
    }

    #[tokio::test]
    async fn test_mock_user_repo_email_index() {
        let repo = MockUserRepository::new();
        let question_id = Uuid::new_v4();

        repo.create(CreateUser {
            id: Uuid::new_v4(),
            email: "a@b.test".to_string(),
            password_hash: "hash".to_string(),
            firstname: "Ada".to_string(),
            lastname: "Lovelace".to_string(),
            phone_number: "+100000000".to_string(),
            birthdate: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            age: 34,
            roles: vec!["user".to_string()],
            security_question_id: question_id,
            enabled: true,
        })
        .await
        .unwrap();

        assert!(repo.find_by_email("a@b.test").await.unwrap().is_some());
        assert!(repo.find_by_email("missing@b.test").await.unwrap().is_none());
    }
}

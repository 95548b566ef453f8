//! Auth service - registration and login workflows
//!
//! Ties together the credential store, password hashing, token issuance,
//! token encryption, the session registry, and the mail collaborator.

use chrono::{Datelike, Local, NaiveDate};
use rand::Rng;
use std::sync::Arc;
use uuid::Uuid;

use trustbank_db::{
    AccountRepository, CreateAccount, CreateSecurityQuestion, CreateUser,
    SecurityQuestionRepository, SessionTokenRepository, UserRepository,
};
use trustbank_types::{AccountTier, Role, UserId, INITIAL_BALANCE_CENTS};

use crate::config::AuthConfig;
use crate::crypto::TokenCipher;
use crate::error::AuthError;
use crate::mail::{MailRequest, Mailer};
use crate::password::PasswordHasher;
use crate::session::SessionRegistry;
use crate::token::TokenIssuer;

/// Date format registration requests must use for birthdates
const BIRTHDATE_FORMAT: &str = "%Y/%m/%d";

/// Registration input
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    pub email: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    pub phone_number: String,
    /// Birthdate in `yyyy/MM/dd` format
    pub birth_date: String,
    pub question: String,
    pub answer: String,
}

/// Login input
#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Result of a successful registration
#[derive(Debug, Clone)]
pub struct RegistrationOutcome {
    /// The issued bearer token, in plaintext
    pub token: String,
    /// The new user's ID
    pub user_id: UserId,
    /// The generated account number
    pub account_number: String,
    /// Whether the welcome mail was delivered
    ///
    /// A failed delivery does not abort the workflow; callers degrade
    /// the response instead.
    pub mail_delivered: bool,
}

/// Result of a successful login
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The issued bearer token, in plaintext
    pub token: String,
    /// The authenticated user's ID
    pub user_id: UserId,
}

/// Authentication service
///
/// One instance per process; every workflow call is independent and the
/// only shared mutable state lives behind the repositories.
pub struct AuthService<U, A, Q, S, M>
where
    U: UserRepository,
    A: AccountRepository,
    Q: SecurityQuestionRepository,
    S: SessionTokenRepository,
    M: Mailer,
{
    users: Arc<U>,
    accounts: Arc<A>,
    security_questions: Arc<Q>,
    registry: SessionRegistry<S>,
    mailer: Arc<M>,
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_cipher: TokenCipher,
}

impl<U, A, Q, S, M> AuthService<U, A, Q, S, M>
where
    U: UserRepository,
    A: AccountRepository,
    Q: SecurityQuestionRepository,
    S: SessionTokenRepository,
    M: Mailer,
{
    /// Create a new auth service
    ///
    /// Fails when the configured encryption key is unusable; that is a
    /// startup-time condition, not something to defer to the first
    /// request.
    pub fn new(
        config: &AuthConfig,
        users: Arc<U>,
        accounts: Arc<A>,
        security_questions: Arc<Q>,
        session_tokens: Arc<S>,
        mailer: Arc<M>,
    ) -> Result<Self, AuthError> {
        let token_cipher = TokenCipher::new(&config.encryption_key)?;

        Ok(Self {
            users,
            accounts,
            security_questions,
            registry: SessionRegistry::new(session_tokens),
            mailer,
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(config),
            token_cipher,
        })
    }

    /// Register a new user, open their account, and issue a first token
    ///
    /// The uniqueness check precedes every write; a duplicate email
    /// aborts with no side effects. Mail delivery failure does not
    /// abort: the token is still issued and persisted, and the outcome
    /// records the failed delivery for the caller to surface.
    pub async fn register(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegistrationOutcome, AuthError> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AuthError::AlreadyExists(format!(
                "User with {} already exists",
                request.email
            )));
        }

        // Validate before the first write; a bad birthdate must not
        // leave a question row behind.
        let birthdate = parse_birthdate(&request.birth_date)?;
        let age = calculate_age(birthdate, Local::now().date_naive());

        let question = self
            .security_questions
            .create(CreateSecurityQuestion {
                id: Uuid::new_v4(),
                question: request.question.clone(),
                answer: request.answer.clone(),
            })
            .await?;

        let password_hash = self.password_hasher.hash(&request.password)?;

        let user = self
            .users
            .create(CreateUser {
                id: Uuid::new_v4(),
                email: request.email.clone(),
                password_hash,
                firstname: request.firstname.clone(),
                lastname: request.lastname.clone(),
                phone_number: request.phone_number.clone(),
                birthdate,
                age,
                roles: Role::default_set().iter().map(Role::to_string).collect(),
                security_question_id: question.id,
                enabled: true,
            })
            .await?;

        let account = self
            .accounts
            .create(CreateAccount {
                id: Uuid::new_v4(),
                user_id: user.id,
                account_number: generate_account_number(),
                tier: AccountTier::lowest().to_string(),
                balance_cents: INITIAL_BALANCE_CENTS,
            })
            .await?;

        let mail = MailRequest::account_creation(
            &user.email,
            &user.firstname,
            &user.lastname,
            &account.account_number,
            account.balance_cents,
        );
        let mail_delivered = match self.mailer.send(&mail).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(email = %user.email, "Welcome mail delivery failed: {}", e);
                false
            }
        };

        let token = self.issue_and_store(user.user_id(), &user.email).await?;

        tracing::info!(user_id = %user.user_id(), "Registered new user");

        Ok(RegistrationOutcome {
            token,
            user_id: user.user_id(),
            account_number: account.account_number,
            mail_delivered,
        })
    }

    /// Authenticate a user, revoke prior sessions, and issue a new token
    pub async fn login(&self, request: LoginRequest) -> Result<LoginOutcome, AuthError> {
        self.authenticate(&request).await?;

        // Defensive re-fetch; absence here means the store changed
        // between verification and now.
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidLogin)?;

        // Prior sessions must be durably revoked before the new token
        // exists, or a narrow window allows two live sessions.
        self.registry.revoke_all(user.user_id()).await?;

        let token = self.issue_and_store(user.user_id(), &user.email).await?;

        tracing::info!(user_id = %user.user_id(), "User logged in");

        Ok(LoginOutcome {
            token,
            user_id: user.user_id(),
        })
    }

    /// Verify the supplied credentials
    ///
    /// Unknown email and wrong password collapse into the same error so
    /// responses cannot be used to probe which addresses are registered.
    async fn authenticate(&self, request: &LoginRequest) -> Result<(), AuthError> {
        let Some(user) = self.users.find_by_email(&request.email).await? else {
            return Err(AuthError::InvalidCredentials);
        };

        if !user.enabled {
            return Err(AuthError::InvalidCredentials);
        }

        if !self
            .password_hasher
            .verify(&request.password, &user.password_hash)
        {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(())
    }

    /// Issue a token for an identity, encrypt it, and persist the record
    async fn issue_and_store(&self, user_id: UserId, email: &str) -> Result<String, AuthError> {
        let token = self
            .token_issuer
            .issue(user_id, email, &Role::default_set())?;
        let encrypted = self.token_cipher.encrypt(&token)?;
        self.registry.save(user_id, encrypted).await?;
        Ok(token)
    }

    /// The session registry backing this service
    pub fn registry(&self) -> &SessionRegistry<S> {
        &self.registry
    }

    /// The token issuer, for consumers validating inbound tokens
    pub fn token_issuer(&self) -> &TokenIssuer {
        &self.token_issuer
    }
}

impl<U, A, Q, S, M> std::fmt::Debug for AuthService<U, A, Q, S, M>
where
    U: UserRepository,
    A: AccountRepository,
    Q: SecurityQuestionRepository,
    S: SessionTokenRepository,
    M: Mailer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthService")
            .field("token_issuer", &self.token_issuer)
            .finish_non_exhaustive()
    }
}

/// Parse a `yyyy/MM/dd` birthdate
pub fn parse_birthdate(raw: &str) -> Result<NaiveDate, AuthError> {
    NaiveDate::parse_from_str(raw, BIRTHDATE_FORMAT)
        .map_err(|_| AuthError::InvalidBirthDate(raw.to_string()))
}

/// Whole-year age as of `today`
///
/// Calendar arithmetic only; both dates are taken in the same local
/// calendar, no timezone normalization.
pub fn calculate_age(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age.max(0)
}

/// Generate a 10-digit account number
///
/// Uniqueness is delegated to the accounts table, not enforced here.
pub fn generate_account_number() -> String {
    rand::thread_rng()
        .gen_range(1_000_000_000u64..10_000_000_000u64)
        .to_string()
}

//! PostgreSQL repository implementations

mod account;
mod security_question;
mod session_token;
mod user;

pub use account::PgAccountRepository;
pub use security_question::PgSecurityQuestionRepository;
pub use session_token::PgSessionTokenRepository;
pub use user::PgUserRepository;

use crate::DbPool;

/// All repositories bundled together
#[derive(Clone)]
pub struct Repositories {
    pub users: PgUserRepository,
    pub accounts: PgAccountRepository,
    pub security_questions: PgSecurityQuestionRepository,
    pub session_tokens: PgSessionTokenRepository,
}

impl Repositories {
    /// Create all repositories from a database pool
    pub fn new(pool: DbPool) -> Self {
        Self {
            users: PgUserRepository::new(pool.clone()),
            accounts: PgAccountRepository::new(pool.clone()),
            security_questions: PgSecurityQuestionRepository::new(pool.clone()),
            session_tokens: PgSessionTokenRepository::new(pool),
        }
    }
}

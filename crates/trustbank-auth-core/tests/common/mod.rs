//! Common test utilities for trustbank-auth-core integration tests

pub mod mock_repos;

#[allow(unused_imports)]
pub use mock_repos::{
    FlakyMailer, MockAccountRepository, MockMailer, MockSecurityQuestionRepository,
    MockSessionTokenRepository, MockUserRepository,
};

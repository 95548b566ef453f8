//! Trust Bank Auth Core - Credential issuance and session lifecycle
//!
//! Core authentication functionality: registration and login workflows,
//! password hashing, bearer token issuance and validation, token
//! encryption at rest, and the server-side session registry that backs
//! revocation.

pub mod config;
pub mod crypto;
pub mod error;
pub mod mail;
pub mod password;
pub mod service;
pub mod session;
pub mod token;

pub use config::AuthConfig;
pub use crypto::TokenCipher;
pub use error::AuthError;
pub use mail::{Mailer, MailError, MailRequest, SmtpMailer, MAIL_FROM, MAIL_SUBJECT};
pub use password::PasswordHasher;
pub use service::{
    AuthService, LoginOutcome, LoginRequest, RegistrationOutcome, RegistrationRequest,
};
pub use session::SessionRegistry;
pub use token::{Claims, TokenIssuer};

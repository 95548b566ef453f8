//! Welcome mail contract and SMTP transport
//!
//! The workflows talk to a `Mailer` trait; production wires in the
//! lettre-backed `SmtpMailer`, tests substitute an in-memory mailer.
//! Sender address and subject are fixed constants of the product.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use thiserror::Error;

use trustbank_types::format_balance;

/// Fixed sender address for all outbound mail
pub const MAIL_FROM: &str = "noreply@trustbank.example";

/// Fixed subject line for all outbound mail
pub const MAIL_SUBJECT: &str = "Trust Bank";

/// A rendered outbound mail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailRequest {
    /// Recipient address
    pub to: String,
    /// Rendered body
    pub message: String,
}

impl MailRequest {
    /// Build the account-creation welcome mail
    pub fn account_creation(
        to: &str,
        firstname: &str,
        lastname: &str,
        account_number: &str,
        balance_cents: i64,
    ) -> Self {
        let message = format!(
            "Dear {firstname} {lastname},\n\n\
             Welcome to Trust Bank. Your new account is ready.\n\n\
             Account number: {account_number}\n\
             Current balance: {}\n\n\
             Thank you for banking with us.",
            format_balance(balance_cents)
        );
        Self {
            to: to.to_string(),
            message,
        }
    }
}

/// Mail transport errors
#[derive(Debug, Error)]
pub enum MailError {
    /// Recipient or sender address failed to parse
    #[error("invalid mail address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// Message could not be assembled
    #[error("failed to build mail: {0}")]
    Build(#[from] lettre::error::Error),

    /// SMTP delivery failed
    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound mail capability
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a rendered mail
    async fn send(&self, mail: &MailRequest) -> Result<(), MailError>;
}

/// SMTP-backed mailer
#[derive(Clone)]
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a mailer for the given relay with credentials
    pub fn new(relay: &str, username: &str, password: &str) -> Result<Self, MailError> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(relay)?
            .credentials(Credentials::new(username.to_string(), password.to_string()))
            .build();
        let from = format!("Trust Bank <{MAIL_FROM}>").parse()?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: &MailRequest) -> Result<(), MailError> {
        let message = Message::builder()
            .from(self.from.clone())
            .to(mail.to.parse()?)
            .subject(MAIL_SUBJECT)
            .body(mail.message.clone())?;

        self.transport.send(message).await?;
        Ok(())
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

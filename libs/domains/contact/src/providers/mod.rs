//! Email provider implementations.
//!
//! The `EmailProvider` trait is the seam the dispatcher iterates over;
//! `SmtpProvider` is the production implementation.

mod smtp;

pub use smtp::{SmtpProvider, SmtpProviderConfig};

use crate::error::ContactResult;
use async_trait::async_trait;

/// A rendered notification ready to hand to a mail transport.
#[derive(Debug, Clone, Default)]
pub struct EmailContent {
    /// Recipient email address
    pub to_email: String,
    /// Email subject
    pub subject: String,
    /// HTML body content
    pub html_body: String,
    /// Plain text body content
    pub text_body: String,
    /// Reply-To address, so replying reaches the submitter directly
    pub reply_to: Option<String>,
}

/// Outcome of a successful hand-off to a provider.
#[derive(Debug, Clone)]
pub struct SentEmail {
    /// Provider-assigned message id, when the server returns one
    pub message_id: Option<String>,
}

/// Trait for email sending providers.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send an email.
    async fn send(&self, email: &EmailContent) -> ContactResult<SentEmail>;

    /// Provider name for logging and delivery attribution.
    fn name(&self) -> &str;
}

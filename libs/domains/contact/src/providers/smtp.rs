//! SMTP email provider implementation using lettre.

use super::{EmailContent, EmailProvider, SentEmail};
use crate::error::{ContactError, ContactResult};
use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, MultiPart, SinglePart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use tracing::{debug, error, info};

/// Configuration for one outbound SMTP relay.
///
/// The dispatcher holds an ordered list of these; each entry is a complete
/// profile so providers can carry distinct credentials.
#[derive(Debug, Clone)]
pub struct SmtpProviderConfig {
    /// Display name used in logs and delivery attribution (e.g. "Gmail")
    pub name: String,
    /// SMTP server host
    pub host: String,
    /// SMTP server port
    pub port: u16,
    /// SMTP username; also the From address
    pub username: String,
    /// SMTP password
    pub password: String,
    /// Sender display name
    pub from_name: String,
    /// Whether to negotiate STARTTLS (false only for local dev servers)
    pub starttls: bool,
}

/// SMTP email provider over an async lettre transport.
pub struct SmtpProvider {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: SmtpProviderConfig,
}

impl SmtpProvider {
    pub fn new(config: SmtpProviderConfig) -> ContactResult<Self> {
        let transport = Self::build_transport(&config)?;
        Ok(Self { transport, config })
    }

    fn build_transport(
        config: &SmtpProviderConfig,
    ) -> ContactResult<AsyncSmtpTransport<Tokio1Executor>> {
        let credentials = Credentials::new(config.username.clone(), config.password.clone());

        let builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host).map_err(|e| {
                ContactError::Provider(format!("Invalid SMTP relay {}: {}", config.host, e))
            })?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
        };

        Ok(builder.port(config.port).credentials(credentials).build())
    }

    fn build_message(&self, email: &EmailContent) -> ContactResult<Message> {
        let from: Mailbox = format!("{} <{}>", self.config.from_name, self.config.username)
            .parse()
            .map_err(|e| ContactError::Provider(format!("Invalid from address: {}", e)))?;

        let to: Mailbox = email
            .to_email
            .parse()
            .map_err(|e| ContactError::Provider(format!("Invalid to address: {}", e)))?;

        let mut builder = Message::builder().from(from).to(to).subject(&email.subject);

        if let Some(reply_to) = &email.reply_to {
            let reply_to: Mailbox = reply_to
                .parse()
                .map_err(|e| ContactError::Provider(format!("Invalid reply-to address: {}", e)))?;
            builder = builder.reply_to(reply_to);
        }

        builder
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text_body.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html_body.clone()),
                    ),
            )
            .map_err(|e| ContactError::Provider(format!("Failed to build email message: {}", e)))
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailContent) -> ContactResult<SentEmail> {
        debug!(
            provider = %self.config.name,
            to = %email.to_email,
            subject = %email.subject,
            host = %self.config.host,
            port = %self.config.port,
            "Sending email via SMTP"
        );

        let message = self.build_message(email)?;

        let response = self.transport.send(message).await.map_err(|e| {
            error!(
                provider = %self.config.name,
                to = %email.to_email,
                error = %e,
                "SMTP send failed"
            );
            ContactError::Provider(format!("SMTP send via {} failed: {}", self.config.name, e))
        })?;

        let message_id = response.message().next().map(|s| s.to_string());

        info!(
            provider = %self.config.name,
            to = %email.to_email,
            message_id = ?message_id,
            "Email sent via SMTP"
        );

        Ok(SentEmail { message_id })
    }

    fn name(&self) -> &str {
        &self.config.name
    }
}

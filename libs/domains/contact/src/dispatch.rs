//! Notification dispatch with ordered provider fallback.
//!
//! The dispatcher walks its provider list front to back and stops at the
//! first success. A failing or hanging provider never blocks the rest of
//! the chain: every attempt is bounded by the configured timeout, and a
//! failure just moves the iteration forward. The result is always an
//! outcome value, never an Err: the dispatcher runs detached from any
//! request, so there is no caller to catch an error.

use crate::config::MailerConfig;
use crate::error::ContactResult;
use crate::models::ContactSubmission;
use crate::providers::{EmailContent, EmailProvider, SmtpProvider};
use crate::templates::TemplateEngine;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, error, info, warn};

/// One failed delivery attempt.
#[derive(Debug, Clone)]
pub struct ProviderFailure {
    pub provider: String,
    pub reason: String,
}

/// Result of dispatching one submission through the provider chain.
#[derive(Debug, Clone)]
pub enum DispatchOutcome {
    /// A provider accepted the message; attempts stopped there.
    Delivered {
        provider: String,
        message_id: Option<String>,
    },
    /// Every attempt failed; the submission stays undelivered.
    Exhausted { failures: Vec<ProviderFailure> },
}

impl DispatchOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DispatchOutcome::Delivered { .. })
    }
}

/// Walks an ordered provider list until one delivers.
pub struct Dispatcher {
    providers: Vec<Arc<dyn EmailProvider>>,
    templates: TemplateEngine,
    admin_email: String,
    attempt_timeout: Duration,
}

impl Dispatcher {
    pub fn new(
        providers: Vec<Arc<dyn EmailProvider>>,
        templates: TemplateEngine,
        admin_email: String,
        attempt_timeout: Duration,
    ) -> Self {
        Self {
            providers,
            templates,
            admin_email,
            attempt_timeout,
        }
    }

    /// Build a dispatcher with SMTP providers from configuration.
    pub fn from_config(config: &MailerConfig) -> ContactResult<Self> {
        let mut providers: Vec<Arc<dyn EmailProvider>> =
            Vec::with_capacity(config.providers.len());
        for provider_config in &config.providers {
            providers.push(Arc::new(SmtpProvider::new(provider_config.clone())?));
        }

        Ok(Self::new(
            providers,
            TemplateEngine::new()?,
            config.admin_email.clone(),
            config.attempt_timeout,
        ))
    }

    /// Attempt delivery of the notification for `submission`.
    ///
    /// Providers are tried strictly in declared order; the first success
    /// wins and no later provider is attempted. Each attempt is bounded by
    /// the configured timeout and a timeout counts as a failure for that
    /// provider only.
    pub async fn dispatch(&self, submission: &ContactSubmission) -> DispatchOutcome {
        let email = match self.build_email(submission) {
            Ok(email) => email,
            Err(e) => {
                error!(
                    submission_id = %submission.id,
                    error = %e,
                    "Failed to render notification, nothing dispatched"
                );
                return DispatchOutcome::Exhausted {
                    failures: vec![ProviderFailure {
                        provider: "render".to_string(),
                        reason: e.to_string(),
                    }],
                };
            }
        };

        let mut failures = Vec::with_capacity(self.providers.len());

        for provider in &self.providers {
            debug!(
                provider = provider.name(),
                submission_id = %submission.id,
                "Attempting notification delivery"
            );

            match timeout(self.attempt_timeout, provider.send(&email)).await {
                Ok(Ok(sent)) => {
                    info!(
                        provider = provider.name(),
                        submission_id = %submission.id,
                        message_id = ?sent.message_id,
                        "Notification delivered"
                    );
                    return DispatchOutcome::Delivered {
                        provider: provider.name().to_string(),
                        message_id: sent.message_id,
                    };
                }
                Ok(Err(e)) => {
                    warn!(
                        provider = provider.name(),
                        submission_id = %submission.id,
                        error = %e,
                        "Provider failed, trying next"
                    );
                    failures.push(ProviderFailure {
                        provider: provider.name().to_string(),
                        reason: e.to_string(),
                    });
                }
                Err(_) => {
                    warn!(
                        provider = provider.name(),
                        submission_id = %submission.id,
                        timeout = ?self.attempt_timeout,
                        "Provider timed out, trying next"
                    );
                    failures.push(ProviderFailure {
                        provider: provider.name().to_string(),
                        reason: format!("timed out after {:?}", self.attempt_timeout),
                    });
                }
            }
        }

        warn!(
            submission_id = %submission.id,
            attempts = failures.len(),
            "All providers failed, submission stays undelivered"
        );
        DispatchOutcome::Exhausted { failures }
    }

    fn build_email(&self, submission: &ContactSubmission) -> ContactResult<EmailContent> {
        let rendered = self.templates.render_notification(submission)?;

        Ok(EmailContent {
            to_email: self.admin_email.clone(),
            subject: format!("New contact message from {}", submission.name),
            html_body: rendered.html,
            text_body: rendered.text,
            reply_to: Some(submission.email.clone()),
        })
    }
}

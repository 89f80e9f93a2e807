//! Notification template rendering.
//!
//! Handlebars-based rendering of the admin notification email. The engine
//! runs in non-strict mode, so absent optional fields (provenance) render
//! as empty strings rather than failing. Rendering is total for any
//! subset of missing optional data.

use crate::error::{ContactError, ContactResult};
use crate::models::ContactSubmission;
use handlebars::Handlebars;
use serde::Serialize;

const NOTIFICATION_HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <body style="font-family: sans-serif; color: #222;">
    <h2>New contact message</h2>
    <table cellpadding="6">
      <tr><td><strong>Name</strong></td><td>{{name}}</td></tr>
      <tr><td><strong>Email</strong></td><td>{{email}}</td></tr>
      <tr><td><strong>Received</strong></td><td>{{submitted_at}}</td></tr>
      <tr><td><strong>IP address</strong></td><td>{{ip_address}}</td></tr>
      <tr><td><strong>User agent</strong></td><td>{{user_agent}}</td></tr>
      <tr><td><strong>Reference</strong></td><td>{{submission_id}}</td></tr>
    </table>
    <h3>Message</h3>
    <p style="white-space: pre-wrap;">{{message}}</p>
  </body>
</html>
"#;

const NOTIFICATION_TEXT_TEMPLATE: &str = r#"New contact message

Name: {{{name}}}
Email: {{{email}}}
Received: {{{submitted_at}}}
IP address: {{{ip_address}}}
User agent: {{{user_agent}}}
Reference: {{{submission_id}}}

Message:
{{{message}}}
"#;

/// Rendered notification bodies.
#[derive(Debug, Clone)]
pub struct RenderedNotification {
    pub html: String,
    pub text: String,
}

#[derive(Serialize)]
struct NotificationData {
    name: String,
    email: String,
    message: String,
    submission_id: String,
    submitted_at: String,
    ip_address: Option<String>,
    user_agent: Option<String>,
}

impl From<&ContactSubmission> for NotificationData {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            submission_id: submission.id.to_string(),
            submitted_at: submission.created_at.to_rfc3339(),
            ip_address: submission.ip_address.clone(),
            user_agent: submission.user_agent.clone(),
        }
    }
}

/// Template engine with the notification templates registered.
#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> ContactResult<Self> {
        let mut handlebars = Handlebars::new();

        handlebars
            .register_template_string("notification_html", NOTIFICATION_HTML_TEMPLATE)
            .map_err(|e| {
                ContactError::Template(format!("Failed to register notification_html: {}", e))
            })?;
        handlebars
            .register_template_string("notification_text", NOTIFICATION_TEXT_TEMPLATE)
            .map_err(|e| {
                ContactError::Template(format!("Failed to register notification_text: {}", e))
            })?;

        Ok(Self { handlebars })
    }

    /// Render the admin notification for a submission.
    pub fn render_notification(
        &self,
        submission: &ContactSubmission,
    ) -> ContactResult<RenderedNotification> {
        let data = NotificationData::from(submission);

        let html = self.handlebars.render("notification_html", &data)?;
        let text = self.handlebars.render("notification_text", &data)?;

        Ok(RenderedNotification { html, text })
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::ValidateEmail;

use crate::error::{ContactError, ContactResult};

/// A stored contact-form submission.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ContactSubmission {
    /// Unique identifier
    pub id: Uuid,
    /// Submitter name
    pub name: String,
    /// Submitter email (stored lowercased)
    pub email: String,
    /// Message body
    pub message: String,
    /// Client IP captured from the request, when available
    pub ip_address: Option<String>,
    /// Client user agent, when available
    pub user_agent: Option<String>,
    /// Whether the notification email went out. Starts false; flips to
    /// true at most once, and only ever forward.
    pub delivered: bool,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
}

impl ContactSubmission {
    pub fn new(input: NewSubmission) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            email: input.email,
            message: input.message,
            ip_address: input.ip_address,
            user_agent: input.user_agent,
            delivered: false,
            created_at: Utc::now(),
        }
    }
}

/// Request payload for the public submission endpoint.
///
/// Fields are optional at the serde layer so that an absent field surfaces
/// as the documented 400 response instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SubmitContact {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated, normalized submission ready to persist.
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

impl SubmitContact {
    /// Validate and normalize the payload: trim all fields, lowercase the
    /// email, and require a syntactically valid address.
    pub fn into_new_submission(
        self,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> ContactResult<NewSubmission> {
        let name = self.name.as_deref().unwrap_or_default().trim().to_string();
        let email = self
            .email
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_lowercase();
        let message = self
            .message
            .as_deref()
            .unwrap_or_default()
            .trim()
            .to_string();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::Validation(
                "Name, email, and message are required".to_string(),
            ));
        }

        if !email.validate_email() {
            return Err(ContactError::Validation(
                "Invalid email address".to_string(),
            ));
        }

        Ok(NewSubmission {
            name,
            email,
            message,
            ip_address,
            user_agent,
        })
    }
}

/// Subset of a submission echoed back from the submit endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmissionReceipt {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<&ContactSubmission> for SubmissionReceipt {
    fn from(submission: &ContactSubmission) -> Self {
        Self {
            id: submission.id,
            name: submission.name.clone(),
            email: submission.email.clone(),
            submitted_at: submission.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: &str, email: &str, message: &str) -> SubmitContact {
        SubmitContact {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_normalizes_fields() {
        let input = payload("  Ada  ", " Ada@Example.COM ", "  Hello  ");
        let new_submission = input.into_new_submission(None, None).unwrap();

        assert_eq!(new_submission.name, "Ada");
        assert_eq!(new_submission.email, "ada@example.com");
        assert_eq!(new_submission.message, "Hello");
    }

    #[test]
    fn test_missing_field_rejected() {
        let input = SubmitContact {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            message: None,
        };

        let err = input.into_new_submission(None, None).unwrap_err();
        assert!(matches!(err, ContactError::Validation(_)));
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_whitespace_only_field_rejected() {
        let input = payload("Ada", "ada@example.com", "   ");

        let err = input.into_new_submission(None, None).unwrap_err();
        assert!(matches!(err, ContactError::Validation(_)));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let input = payload("Ada", "not-an-email", "Hello");

        let err = input.into_new_submission(None, None).unwrap_err();
        assert!(err.to_string().contains("Invalid email address"));
    }

    #[test]
    fn test_new_submission_starts_undelivered() {
        let input = payload("Ada", "ada@example.com", "Hello")
            .into_new_submission(Some("203.0.113.7".to_string()), None)
            .unwrap();

        let submission = ContactSubmission::new(input);
        assert!(!submission.delivered);
        assert_eq!(submission.ip_address.as_deref(), Some("203.0.113.7"));
        assert!(submission.user_agent.is_none());
    }

    #[test]
    fn test_receipt_from_submission() {
        let submission = ContactSubmission::new(
            payload("Ada", "ada@example.com", "Hello")
                .into_new_submission(None, None)
                .unwrap(),
        );

        let receipt = SubmissionReceipt::from(&submission);
        assert_eq!(receipt.id, submission.id);
        assert_eq!(receipt.submitted_at, submission.created_at);
    }
}

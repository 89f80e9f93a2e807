use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ContactError, ContactResult};
use crate::models::{ContactSubmission, NewSubmission};

/// Repository trait for submission persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionRepository: Send + Sync {
    /// Persist a new submission with `delivered = false`
    async fn create(&self, input: NewSubmission) -> ContactResult<ContactSubmission>;

    /// Fetch a submission by id
    async fn get_by_id(&self, id: Uuid) -> ContactResult<Option<ContactSubmission>>;

    /// List all submissions, newest first
    async fn list_all(&self) -> ContactResult<Vec<ContactSubmission>>;

    /// Record a successful notification delivery.
    ///
    /// Idempotent: marking an already-delivered submission is a no-op that
    /// never reverts the flag.
    async fn mark_delivered(&self, id: Uuid) -> ContactResult<()>;
}

/// In-memory implementation of SubmissionRepository (for development and
/// testing)
#[derive(Debug, Default, Clone)]
pub struct InMemorySubmissionRepository {
    submissions: Arc<RwLock<HashMap<Uuid, ContactSubmission>>>,
}

impl InMemorySubmissionRepository {
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SubmissionRepository for InMemorySubmissionRepository {
    async fn create(&self, input: NewSubmission) -> ContactResult<ContactSubmission> {
        let submission = ContactSubmission::new(input);

        let mut submissions = self.submissions.write().await;
        submissions.insert(submission.id, submission.clone());

        tracing::info!(submission_id = %submission.id, "Stored contact submission");
        Ok(submission)
    }

    async fn get_by_id(&self, id: Uuid) -> ContactResult<Option<ContactSubmission>> {
        let submissions = self.submissions.read().await;
        Ok(submissions.get(&id).cloned())
    }

    async fn list_all(&self) -> ContactResult<Vec<ContactSubmission>> {
        let submissions = self.submissions.read().await;

        let mut result: Vec<ContactSubmission> = submissions.values().cloned().collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn mark_delivered(&self, id: Uuid) -> ContactResult<()> {
        let mut submissions = self.submissions.write().await;

        let submission = submissions.get_mut(&id).ok_or(ContactError::NotFound(id))?;
        submission.delivered = true;

        tracing::info!(submission_id = %id, "Marked submission delivered");
        Ok(())
    }
}

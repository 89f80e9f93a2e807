use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::dispatch::{DispatchOutcome, Dispatcher};
use crate::error::{ContactError, ContactResult};
use crate::models::{ContactSubmission, SubmitContact};
use crate::repository::SubmissionRepository;

/// Service layer for the contact pipeline.
///
/// `submit` is the write path: validate, persist, acknowledge. The stored
/// submission is then handed to the dispatcher on a detached task so the
/// HTTP response never waits on email delivery.
pub struct ContactService<R: SubmissionRepository> {
    repository: Arc<R>,
    dispatcher: Arc<Dispatcher>,
}

impl<R: SubmissionRepository + 'static> ContactService<R> {
    pub fn new(repository: R, dispatcher: Dispatcher) -> Self {
        Self {
            repository: Arc::new(repository),
            dispatcher: Arc::new(dispatcher),
        }
    }

    pub fn with_arcs(repository: Arc<R>, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            repository,
            dispatcher,
        }
    }

    /// Validate and persist a submission, then dispatch the notification
    /// without blocking the caller.
    ///
    /// Exactly one row is created per valid request and none for an
    /// invalid one. The returned submission still has `delivered = false`;
    /// the flag is updated later by the detached dispatch task.
    pub async fn submit(
        &self,
        input: SubmitContact,
        ip_address: Option<String>,
        user_agent: Option<String>,
    ) -> ContactResult<ContactSubmission> {
        let new_submission = input.into_new_submission(ip_address, user_agent)?;
        let submission = self.repository.create(new_submission).await?;

        info!(submission_id = %submission.id, "Contact submission accepted");

        let repository = Arc::clone(&self.repository);
        let dispatcher = Arc::clone(&self.dispatcher);
        let detached = submission.clone();
        tokio::spawn(async move {
            dispatch_and_record(dispatcher.as_ref(), repository.as_ref(), &detached).await;
        });

        Ok(submission)
    }

    /// Fetch one submission for the admin surface.
    pub async fn get_submission(&self, id: Uuid) -> ContactResult<ContactSubmission> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ContactError::NotFound(id))
    }

    /// List all submissions, newest first.
    pub async fn list_submissions(&self) -> ContactResult<Vec<ContactSubmission>> {
        self.repository.list_all().await
    }
}

impl<R: SubmissionRepository> Clone for ContactService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            dispatcher: Arc::clone(&self.dispatcher),
        }
    }
}

/// Dispatch a stored submission and record the outcome.
///
/// This is the whole detached leg: it runs after the HTTP response is
/// gone, so every failure ends here in the log. A delivery flips the
/// stored flag; a storage failure while flipping it is logged and
/// swallowed, leaving the submission undelivered.
pub async fn dispatch_and_record<R>(
    dispatcher: &Dispatcher,
    repository: &R,
    submission: &ContactSubmission,
) -> DispatchOutcome
where
    R: SubmissionRepository + ?Sized,
{
    let outcome = dispatcher.dispatch(submission).await;

    if outcome.is_delivered() {
        if let Err(e) = repository.mark_delivered(submission.id).await {
            warn!(
                submission_id = %submission.id,
                error = %e,
                "Notification delivered but the delivery flag update failed"
            );
        }
    }

    outcome
}

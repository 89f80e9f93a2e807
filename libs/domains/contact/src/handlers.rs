use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use axum_helpers::{
    AuditEvent, AuditOutcome, UuidPath, extract_ip_from_headers, extract_user_agent,
};
use serde_json::json;
use std::sync::Arc;
use utoipa::OpenApi;
use uuid::Uuid;

use crate::error::ContactResult;
use crate::models::{ContactSubmission, SubmissionReceipt, SubmitContact};
use crate::repository::SubmissionRepository;
use crate::service::ContactService;

/// OpenAPI documentation for the contact API
#[derive(OpenApi)]
#[openapi(
    paths(submit_contact, list_submissions, get_submission),
    components(schemas(SubmitContact, ContactSubmission, SubmissionReceipt)),
    tags(
        (name = "contact", description = "Contact form intake and admin listing")
    )
)]
pub struct ApiDoc;

/// Create the contact router
pub fn router<R: SubmissionRepository + 'static>(service: ContactService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/submit", post(submit_contact))
        .route("/admin", get(list_submissions))
        .route("/admin/{id}", get(get_submission))
        .with_state(shared_service)
}

/// Accept a contact-form submission.
///
/// The submission is stored and acknowledged immediately; the
/// notification email goes out on a detached task afterwards.
#[utoipa::path(
    post,
    path = "/submit",
    tag = "contact",
    request_body = SubmitContact,
    responses(
        (status = 201, description = "Submission stored; notification dispatch pending", body = SubmissionReceipt),
        (status = 400, description = "Missing field or malformed email"),
        (status = 500, description = "Submission could not be stored")
    )
)]
async fn submit_contact<R: SubmissionRepository + 'static>(
    State(service): State<Arc<ContactService<R>>>,
    headers: HeaderMap,
    Json(input): Json<SubmitContact>,
) -> ContactResult<impl IntoResponse> {
    let ip_address = extract_ip_from_headers(&headers);
    let user_agent = extract_user_agent(&headers);

    let submission = service
        .submit(input, ip_address.clone(), user_agent.clone())
        .await?;

    AuditEvent::new(
        None,
        "contact.submit",
        Some(format!("submission:{}", submission.id)),
        AuditOutcome::Success,
    )
    .with_ip(ip_address)
    .with_user_agent(user_agent)
    .log();

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Message submitted successfully!",
            "data": SubmissionReceipt::from(&submission),
        })),
    ))
}

/// List all submissions, newest first.
#[utoipa::path(
    get,
    path = "/admin",
    tag = "contact",
    responses(
        (status = 200, description = "All stored submissions, newest first", body = Vec<ContactSubmission>),
        (status = 500, description = "Listing failed")
    )
)]
async fn list_submissions<R: SubmissionRepository + 'static>(
    State(service): State<Arc<ContactService<R>>>,
) -> ContactResult<impl IntoResponse> {
    let submissions = service.list_submissions().await?;

    Ok(Json(json!({
        "success": true,
        "data": submissions,
    })))
}

/// Fetch one submission by id.
#[utoipa::path(
    get,
    path = "/admin/{id}",
    tag = "contact",
    params(
        ("id" = Uuid, Path, description = "Submission ID")
    ),
    responses(
        (status = 200, description = "Submission found", body = ContactSubmission),
        (status = 400, description = "Malformed submission id"),
        (status = 404, description = "No submission with this id")
    )
)]
async fn get_submission<R: SubmissionRepository + 'static>(
    State(service): State<Arc<ContactService<R>>>,
    UuidPath(id): UuidPath,
) -> ContactResult<impl IntoResponse> {
    let submission = service.get_submission(id).await?;

    Ok(Json(json!({
        "success": true,
        "data": submission,
    })))
}

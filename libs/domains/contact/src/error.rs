use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

pub type ContactResult<T> = Result<T, ContactError>;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("{0}")]
    Validation(String),

    #[error("Submission not found: {0}")]
    NotFound(Uuid),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Template rendering error: {0}")]
    Template(String),

    #[error("Email provider error: {0}")]
    Provider(String),
}

impl From<sea_orm::DbErr> for ContactError {
    fn from(err: sea_orm::DbErr) -> Self {
        ContactError::Database(err.to_string())
    }
}

impl From<handlebars::RenderError> for ContactError {
    fn from(err: handlebars::RenderError) -> Self {
        ContactError::Template(err.to_string())
    }
}

/// The contact endpoints answer with the `{success, message}` envelope;
/// the error body is built here, not from the generic `ErrorResponse`.
impl IntoResponse for ContactError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ContactError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ContactError::NotFound(id) => (
                StatusCode::NOT_FOUND,
                format!("Submission {} not found", id),
            ),
            ContactError::Database(_) | ContactError::Template(_) | ContactError::Provider(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

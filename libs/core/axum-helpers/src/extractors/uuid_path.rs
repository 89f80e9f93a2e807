//! UUID path parameter extractor with automatic validation.

use crate::errors::{CODE_UUID, ErrorResponse};
use axum::{
    Json,
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for UUID path parameters.
///
/// Parses the single path parameter as a UUID and rejects with a 400
/// rather than a routing-layer error when it is malformed.
///
/// ```ignore
/// async fn get_submission(UuidPath(id): UuidPath) -> String {
///     format!("Submission ID: {}", id)
/// }
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Uuid::parse_str(&raw) {
            Ok(uuid) => Ok(UuidPath(uuid)),
            Err(_) => {
                let body = Json(ErrorResponse {
                    error: "BadRequest".to_string(),
                    message: format!("Invalid UUID: {}", raw),
                    details: None,
                    code: Some(CODE_UUID),
                });
                Err((StatusCode::BAD_REQUEST, body).into_response())
            }
        }
    }
}

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{CODE_NOT_FOUND, ErrorResponse};

/// Fallback handler for unmatched routes.
pub async fn not_found() -> Response {
    let body = Json(ErrorResponse {
        error: "NotFound".to_string(),
        message: "The requested resource was not found".to_string(),
        details: None,
        code: Some(CODE_NOT_FOUND),
    });

    (StatusCode::NOT_FOUND, body).into_response()
}

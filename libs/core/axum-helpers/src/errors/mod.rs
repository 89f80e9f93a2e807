//! Structured error responses for the generic API surface.
//!
//! Domain crates own their wire contracts; this module covers the
//! cross-cutting paths (router fallback, extractor rejections) where no
//! domain is in play.

pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

// Error codes for observability: 1000s are client errors.
pub const CODE_UUID: i32 = 1002;
pub const CODE_NOT_FOUND: i32 = 1004;

/// Standard error response for the generic surface.
///
/// ```json
/// {
///   "error": "NotFound",
///   "message": "The requested resource was not found",
///   "code": 1004
/// }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Machine-readable error identifier
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional structured details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
    /// Integer error code for logging and monitoring
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
}

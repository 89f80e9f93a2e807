//! # Axum Helpers
//!
//! Utilities, middleware, and server plumbing shared by Axum applications
//! in this workspace.
//!
//! ## Modules
//!
//! - **[`server`]**: server setup, OpenAPI docs, health checks, graceful shutdown
//! - **[`http`]**: CORS and security-header middleware
//! - **[`errors`]**: structured error responses for the generic API surface
//! - **[`extractors`]**: custom extractors (UUID path parameters)
//! - **[`audit`]**: audit logging plus client ip / user-agent extraction

pub mod audit;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export server plumbing
pub use server::{
    HealthCheckFuture, HealthResponse, create_production_app, create_router, health_router,
    run_health_checks, shutdown_signal,
};

// Re-export HTTP middleware
pub use http::{create_cors_layer, security_headers};

// Re-export error types
pub use errors::ErrorResponse;

// Re-export extractors
pub use extractors::UuidPath;

// Re-export audit types
pub use audit::{AuditEvent, AuditOutcome, extract_ip_from_headers, extract_user_agent};

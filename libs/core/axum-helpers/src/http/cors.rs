use axum::http::{HeaderValue, Method};
use core_config::env_or_default;
use std::io;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::info;

/// Build the CORS layer from `CORS_ALLOWED_ORIGIN`.
///
/// Accepts a comma-separated list of origins. Defaults to the local
/// frontend dev server (`http://localhost:3000`) when unset, so a plain
/// dev start works without extra configuration.
pub fn create_cors_layer() -> io::Result<CorsLayer> {
    let origins_str = env_or_default("CORS_ALLOWED_ORIGIN", "http://localhost:3000");

    let allowed_origins: Vec<HeaderValue> = origins_str
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Invalid CORS_ALLOWED_ORIGIN value: {}", e),
            )
        })?;

    if allowed_origins.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "CORS_ALLOWED_ORIGIN cannot be empty",
        ));
    }

    info!("CORS configured with allowed origins: {}", origins_str);

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::AUTHORIZATION,
            axum::http::header::ACCEPT,
        ])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_origin() {
        temp_env::with_var_unset("CORS_ALLOWED_ORIGIN", || {
            assert!(create_cors_layer().is_ok());
        });
    }

    #[test]
    fn test_multiple_origins() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000, https://example.org"),
            || {
                assert!(create_cors_layer().is_ok());
            },
        );
    }

    #[test]
    fn test_invalid_origin_rejected() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("not a header\nvalue"), || {
            assert!(create_cors_layer().is_err());
        });
    }
}

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use serde_json::{Value, json};

use crate::state::AppState;

/// Service info at the root path.
pub async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "message": "Haven backend API",
        "version": state.config.app.version,
        "status": "running",
    }))
}

/// Readiness probe with a real database check.
pub async fn ready_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    let checks: Vec<(&str, HealthCheckFuture)> = vec![(
        "database",
        Box::pin(async {
            database::postgres::check_health(&state.db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    run_health_checks(checks).await
}

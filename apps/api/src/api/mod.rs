use axum::Router;

pub mod contact;
pub mod health;

/// API routes without the `/api` prefix; `create_router` adds it.
///
/// Sub-routers receive their state internally, so the composed router is
/// stateless from the outside.
pub fn routes(state: &crate::state::AppState) -> eyre::Result<Router> {
    Ok(Router::new().nest("/contact", contact::router(state)?))
}

/// Router with the service-info and readiness endpoints.
///
/// `/ready` runs a real database probe, unlike the static `/health`
/// liveness route.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

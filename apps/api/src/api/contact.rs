use axum::Router;
use domain_contact::{ContactService, Dispatcher, PgSubmissionRepository, handlers};

pub fn router(state: &crate::AppState) -> eyre::Result<Router> {
    let repository = PgSubmissionRepository::new(state.db.clone());
    let dispatcher = Dispatcher::from_config(&state.config.mailer)
        .map_err(|e| eyre::eyre!("Failed to build mail dispatcher: {}", e))?;
    let service = ContactService::new(repository, dispatcher);

    Ok(handlers::router(service))
}

//! Shared application state passed to request handlers.

use database::postgres::DatabaseConnection;

/// Cloned per handler; contains only cheap-to-clone handles.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
}

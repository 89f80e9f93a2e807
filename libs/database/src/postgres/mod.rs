//! PostgreSQL support built on SeaORM.

pub mod config;
pub mod connector;
pub mod health;

pub use config::PostgresConfig;
pub use connector::{
    connect, connect_from_config, connect_from_config_with_retry, connect_with_options,
    connect_with_retry, run_migrations,
};
pub use health::check_health;

// Re-export so consumers don't need a direct sea-orm dependency for the handle type
pub use sea_orm::DatabaseConnection;

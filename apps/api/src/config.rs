use core_config::{AppInfo, FromEnv, app_info, server::ServerConfig};
use database::postgres::PostgresConfig;
use domain_contact::MailerConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration, composed from the shared config components.
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub database: PostgresConfig,
    pub mailer: MailerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let server = ServerConfig::from_env()?; // Defaults: HOST=0.0.0.0, PORT=8080
        let database = PostgresConfig::from_env()?; // Required: DATABASE_URL
        let mailer = MailerConfig::from_env()?; // Required: SMTP_USERNAME, SMTP_PASSWORD

        Ok(Self {
            app: app_info!(),
            server,
            database,
            mailer,
            environment,
        })
    }
}

//! Mailer configuration.
//!
//! The dispatcher never touches the process environment; everything it
//! needs arrives through a [`MailerConfig`] built here.

use crate::error::{ContactError, ContactResult};
use crate::providers::SmtpProviderConfig;
use core_config::{ConfigError, FromEnv, env_or_default, env_required};
use std::time::Duration;

/// Relays tried in order when none are configured explicitly. All listen
/// on the standard submission port with STARTTLS.
const DEFAULT_RELAYS: &[(&str, &str, u16)] = &[
    ("Gmail", "smtp.gmail.com", 587),
    ("Outlook", "smtp.office365.com", 587),
    ("Yahoo", "smtp.mail.yahoo.com", 587),
];

const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 15;

/// Outbound mail configuration: the ordered provider list plus delivery
/// parameters.
#[derive(Debug, Clone)]
pub struct MailerConfig {
    /// Where contact notifications are sent
    pub admin_email: String,
    /// Ordered provider profiles; the dispatcher tries them front to back
    pub providers: Vec<SmtpProviderConfig>,
    /// Upper bound for a single provider attempt (connect + send)
    pub attempt_timeout: Duration,
}

impl FromEnv for MailerConfig {
    /// Reads from environment variables:
    /// - SMTP_USERNAME, SMTP_PASSWORD (required; shared across relays)
    /// - SMTP_FROM_NAME (default "Contact Form")
    /// - ADMIN_EMAIL (default: the SMTP username)
    /// - SMTP_RELAYS: comma-separated `name:host:port` entries overriding
    ///   the default Gmail/Outlook/Yahoo chain
    /// - SMTP_ATTEMPT_TIMEOUT_SECS (default 15)
    fn from_env() -> Result<Self, ConfigError> {
        let username = env_required("SMTP_USERNAME")?;
        let password = env_required("SMTP_PASSWORD")?;
        let from_name = env_or_default("SMTP_FROM_NAME", "Contact Form");
        let admin_email = env_or_default("ADMIN_EMAIL", &username);

        let relays = match std::env::var("SMTP_RELAYS") {
            Ok(raw) => parse_relays(&raw).map_err(|e| ConfigError::ParseError {
                key: "SMTP_RELAYS".to_string(),
                details: e.to_string(),
            })?,
            Err(_) => DEFAULT_RELAYS
                .iter()
                .map(|(name, host, port)| (name.to_string(), host.to_string(), *port))
                .collect(),
        };

        let attempt_timeout_secs: u64 = env_or_default(
            "SMTP_ATTEMPT_TIMEOUT_SECS",
            &DEFAULT_ATTEMPT_TIMEOUT_SECS.to_string(),
        )
        .parse()
        .map_err(|e| ConfigError::ParseError {
            key: "SMTP_ATTEMPT_TIMEOUT_SECS".to_string(),
            details: format!("{}", e),
        })?;

        let providers = relays
            .into_iter()
            .map(|(name, host, port)| SmtpProviderConfig {
                name,
                host,
                port,
                username: username.clone(),
                password: password.clone(),
                from_name: from_name.clone(),
                starttls: true,
            })
            .collect();

        Ok(Self {
            admin_email,
            providers,
            attempt_timeout: Duration::from_secs(attempt_timeout_secs),
        })
    }
}

/// Parse a `name:host:port` comma-separated relay list.
fn parse_relays(raw: &str) -> ContactResult<Vec<(String, String, u16)>> {
    let mut relays = Vec::new();

    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let mut parts = entry.split(':');
        let (Some(name), Some(host), Some(port)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ContactError::Validation(format!(
                "Relay entry '{}' must be name:host:port",
                entry
            )));
        };

        let port: u16 = port.parse().map_err(|_| {
            ContactError::Validation(format!("Relay entry '{}' has an invalid port", entry))
        })?;

        relays.push((name.to_string(), host.to_string(), port));
    }

    if relays.is_empty() {
        return Err(ContactError::Validation(
            "SMTP_RELAYS must contain at least one relay".to_string(),
        ));
    }

    Ok(relays)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relays() {
        let relays = parse_relays("Primary:smtp.example.com:587, Backup:smtp.backup.org:2525")
            .unwrap();

        assert_eq!(relays.len(), 2);
        assert_eq!(relays[0], ("Primary".into(), "smtp.example.com".into(), 587));
        assert_eq!(relays[1], ("Backup".into(), "smtp.backup.org".into(), 2525));
    }

    #[test]
    fn test_parse_relays_rejects_malformed_entry() {
        assert!(parse_relays("just-a-host").is_err());
        assert!(parse_relays("Name:host:not-a-port").is_err());
        assert!(parse_relays("  ,  ").is_err());
    }

    #[test]
    fn test_from_env_defaults() {
        temp_env::with_vars(
            [
                ("SMTP_USERNAME", Some("notify@example.com")),
                ("SMTP_PASSWORD", Some("secret")),
                ("SMTP_FROM_NAME", None),
                ("ADMIN_EMAIL", None),
                ("SMTP_RELAYS", None),
                ("SMTP_ATTEMPT_TIMEOUT_SECS", None),
            ],
            || {
                let config = MailerConfig::from_env().unwrap();

                assert_eq!(config.admin_email, "notify@example.com");
                assert_eq!(config.attempt_timeout, Duration::from_secs(15));
                assert_eq!(config.providers.len(), 3);
                assert_eq!(config.providers[0].name, "Gmail");
                assert_eq!(config.providers[1].name, "Outlook");
                assert_eq!(config.providers[2].name, "Yahoo");
                assert!(config.providers.iter().all(|p| p.starttls));
                assert!(
                    config
                        .providers
                        .iter()
                        .all(|p| p.username == "notify@example.com")
                );
            },
        );
    }

    #[test]
    fn test_from_env_requires_credentials() {
        temp_env::with_vars_unset(["SMTP_USERNAME", "SMTP_PASSWORD"], || {
            assert!(MailerConfig::from_env().is_err());
        });
    }

    #[test]
    fn test_from_env_custom_relays() {
        temp_env::with_vars(
            [
                ("SMTP_USERNAME", Some("notify@example.com")),
                ("SMTP_PASSWORD", Some("secret")),
                ("ADMIN_EMAIL", Some("inbox@example.org")),
                ("SMTP_RELAYS", Some("Primary:mail.example.com:587")),
            ],
            || {
                let config = MailerConfig::from_env().unwrap();

                assert_eq!(config.admin_email, "inbox@example.org");
                assert_eq!(config.providers.len(), 1);
                assert_eq!(config.providers[0].host, "mail.example.com");
            },
        );
    }
}

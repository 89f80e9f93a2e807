//! Contact Domain
//!
//! Contact-form intake with best-effort email notification delivery.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │   Handlers   │  ← HTTP endpoints (submit, admin listing)
//! └──────┬───────┘
//!        │
//! ┌──────▼───────┐
//! │   Service    │  ← validation, persistence, detached dispatch
//! └──┬────────┬──┘
//!    │        │
//! ┌──▼─────┐ ┌▼───────────┐
//! │  Repo  │ │ Dispatcher │  ← ordered SMTP provider fallback
//! └────────┘ └────────────┘
//! ```
//!
//! A submission is persisted and acknowledged immediately; the
//! notification email is attempted on a detached task, walking the
//! configured provider list in order until one accepts the message. The
//! stored `delivered` flag records the outcome: it starts false and is
//! flipped exactly once on success.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_contact::{
//!     ContactService, Dispatcher, MailerConfig, handlers,
//!     repository::InMemorySubmissionRepository,
//! };
//! use core_config::FromEnv;
//!
//! let config = MailerConfig::from_env().unwrap();
//! let dispatcher = Dispatcher::from_config(&config).unwrap();
//! let service = ContactService::new(InMemorySubmissionRepository::new(), dispatcher);
//! let router = handlers::router(service);
//! ```

pub mod config;
pub mod dispatch;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod providers;
pub mod repository;
pub mod service;
pub mod templates;

// Re-export commonly used types
pub use config::MailerConfig;
pub use dispatch::{DispatchOutcome, Dispatcher, ProviderFailure};
pub use error::{ContactError, ContactResult};
pub use models::{ContactSubmission, NewSubmission, SubmissionReceipt, SubmitContact};
pub use postgres::PgSubmissionRepository;
pub use providers::{EmailContent, EmailProvider, SentEmail, SmtpProvider, SmtpProviderConfig};
pub use repository::{InMemorySubmissionRepository, SubmissionRepository};
pub use service::ContactService;
pub use templates::TemplateEngine;

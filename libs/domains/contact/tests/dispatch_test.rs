//! Dispatcher tests: ordered fallback, first-success-wins, bounded
//! attempts.

mod common;

use common::{Behavior, ScriptedProvider, attempt_log, attempts};
use domain_contact::models::{ContactSubmission, NewSubmission};
use domain_contact::{DispatchOutcome, Dispatcher, EmailProvider, TemplateEngine};
use std::sync::Arc;
use std::time::Duration;

fn submission() -> ContactSubmission {
    ContactSubmission::new(NewSubmission {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        message: "Hello".to_string(),
        ip_address: Some("203.0.113.7".to_string()),
        user_agent: Some("integration-test/1.0".to_string()),
    })
}

fn dispatcher(providers: Vec<Arc<dyn EmailProvider>>, attempt_timeout: Duration) -> Dispatcher {
    Dispatcher::new(
        providers,
        TemplateEngine::new().unwrap(),
        "admin@example.com".to_string(),
        attempt_timeout,
    )
}

#[tokio::test]
async fn test_first_success_stops_the_chain() {
    let log = attempt_log();
    let dispatcher = dispatcher(
        vec![
            ScriptedProvider::new("Primary", Behavior::Fail, log.clone()),
            ScriptedProvider::new("Backup", Behavior::Succeed, log.clone()),
            ScriptedProvider::new("LastResort", Behavior::Succeed, log.clone()),
        ],
        Duration::from_secs(5),
    );

    let outcome = dispatcher.dispatch(&submission()).await;

    match outcome {
        DispatchOutcome::Delivered {
            provider,
            message_id,
        } => {
            assert_eq!(provider, "Backup");
            assert_eq!(message_id.as_deref(), Some("Backup-message-id"));
        }
        DispatchOutcome::Exhausted { .. } => panic!("expected delivery via Backup"),
    }

    // Primary was tried first, the chain stopped at Backup
    assert_eq!(attempts(&log), vec!["Primary", "Backup"]);
}

#[tokio::test]
async fn test_exhaustion_attempts_every_provider_once_in_order() {
    let log = attempt_log();
    let dispatcher = dispatcher(
        vec![
            ScriptedProvider::new("Primary", Behavior::Fail, log.clone()),
            ScriptedProvider::new("Backup", Behavior::Fail, log.clone()),
            ScriptedProvider::new("LastResort", Behavior::Fail, log.clone()),
        ],
        Duration::from_secs(5),
    );

    let outcome = dispatcher.dispatch(&submission()).await;

    match outcome {
        DispatchOutcome::Exhausted { failures } => {
            assert_eq!(failures.len(), 3);
            assert_eq!(failures[0].provider, "Primary");
            assert_eq!(failures[1].provider, "Backup");
            assert_eq!(failures[2].provider, "LastResort");
            assert!(failures[0].reason.contains("connection refused"));
        }
        DispatchOutcome::Delivered { .. } => panic!("expected exhaustion"),
    }

    assert_eq!(attempts(&log), vec!["Primary", "Backup", "LastResort"]);
}

#[tokio::test(start_paused = true)]
async fn test_hanging_provider_times_out_and_chain_proceeds() {
    let log = attempt_log();
    let dispatcher = dispatcher(
        vec![
            ScriptedProvider::new("Primary", Behavior::Hang, log.clone()),
            ScriptedProvider::new("Backup", Behavior::Succeed, log.clone()),
        ],
        Duration::from_millis(50),
    );

    let outcome = dispatcher.dispatch(&submission()).await;

    match outcome {
        DispatchOutcome::Delivered { provider, .. } => assert_eq!(provider, "Backup"),
        DispatchOutcome::Exhausted { .. } => panic!("expected delivery via Backup"),
    }

    assert_eq!(attempts(&log), vec!["Primary", "Backup"]);
}

#[tokio::test(start_paused = true)]
async fn test_all_providers_timing_out_exhausts() {
    let log = attempt_log();
    let dispatcher = dispatcher(
        vec![
            ScriptedProvider::new("Primary", Behavior::Hang, log.clone()),
            ScriptedProvider::new("Backup", Behavior::Hang, log.clone()),
        ],
        Duration::from_millis(50),
    );

    let outcome = dispatcher.dispatch(&submission()).await;

    match outcome {
        DispatchOutcome::Exhausted { failures } => {
            assert_eq!(failures.len(), 2);
            assert!(failures.iter().all(|f| f.reason.contains("timed out")));
        }
        DispatchOutcome::Delivered { .. } => panic!("expected exhaustion"),
    }
}

#[tokio::test]
async fn test_single_provider_success() {
    let log = attempt_log();
    let dispatcher = dispatcher(
        vec![ScriptedProvider::new(
            "Primary",
            Behavior::Succeed,
            log.clone(),
        )],
        Duration::from_secs(5),
    );

    let outcome = dispatcher.dispatch(&submission()).await;

    assert!(outcome.is_delivered());
    assert_eq!(attempts(&log), vec!["Primary"]);
}

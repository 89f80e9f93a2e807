//! Shared fixtures for contact domain integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use domain_contact::{
    ContactError, ContactResult, EmailContent, EmailProvider, SentEmail,
};
use std::sync::{Arc, Mutex};

/// What a scripted provider does when the dispatcher reaches it.
#[derive(Clone, Copy)]
pub enum Behavior {
    Succeed,
    Fail,
    Hang,
}

/// Test provider that records every attempt in a shared log.
pub struct ScriptedProvider {
    name: String,
    behavior: Behavior,
    attempts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedProvider {
    pub fn new(
        name: &str,
        behavior: Behavior,
        attempts: Arc<Mutex<Vec<String>>>,
    ) -> Arc<dyn EmailProvider> {
        Arc::new(Self {
            name: name.to_string(),
            behavior,
            attempts,
        })
    }
}

#[async_trait]
impl EmailProvider for ScriptedProvider {
    async fn send(&self, _email: &EmailContent) -> ContactResult<SentEmail> {
        self.attempts.lock().unwrap().push(self.name.clone());

        match self.behavior {
            Behavior::Succeed => Ok(SentEmail {
                message_id: Some(format!("{}-message-id", self.name)),
            }),
            Behavior::Fail => Err(ContactError::Provider(format!(
                "{}: connection refused",
                self.name
            ))),
            Behavior::Hang => std::future::pending().await,
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

pub fn attempt_log() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn attempts(log: &Arc<Mutex<Vec<String>>>) -> Vec<String> {
    log.lock().unwrap().clone()
}

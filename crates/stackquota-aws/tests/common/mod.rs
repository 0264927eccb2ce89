#![allow(dead_code)]

use async_trait::async_trait;
use aws_credential_types::Credentials;
use aws_credential_types::provider::error::CredentialsError;
use stackquota::{QuotaError, QuotaLogger, QuotaSession, QuotaSource, ResourceKind, Result};
use stackquota_aws::CredentialSource;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Logger that keeps every line
#[derive(Default)]
pub struct CapturingLogger {
    pub info: Mutex<Vec<String>>,
    pub error: Mutex<Vec<String>>,
}

impl CapturingLogger {
    pub fn info_lines(&self) -> Vec<String> {
        self.info.lock().unwrap().clone()
    }

    pub fn error_lines(&self) -> Vec<String> {
        self.error.lock().unwrap().clone()
    }
}

impl QuotaLogger for CapturingLogger {
    fn info(&self, message: &str) {
        self.info.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.error.lock().unwrap().push(message.to_string());
    }
}

/// Session source with canned answers that records every call in order
#[derive(Default)]
pub struct FakeSource {
    limits: HashMap<ResourceKind, u64>,
    usages: HashMap<ResourceKind, u64>,
    open_error: Option<QuotaError>,
    open_errors: HashMap<ResourceKind, QuotaError>,
    usage_errors: HashMap<ResourceKind, QuotaError>,
    events: Arc<Mutex<Vec<String>>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, kind: ResourceKind, limit: u64) -> Self {
        self.limits.insert(kind, limit);
        self
    }

    pub fn with_usage(mut self, kind: ResourceKind, usage: u64) -> Self {
        self.usages.insert(kind, usage);
        self
    }

    pub fn failing_open(mut self, error: QuotaError) -> Self {
        self.open_error = Some(error);
        self
    }

    pub fn failing_open_for(mut self, kind: ResourceKind, error: QuotaError) -> Self {
        self.open_errors.insert(kind, error);
        self
    }

    pub fn failing_usage_for(mut self, kind: ResourceKind, error: QuotaError) -> Self {
        self.usage_errors.insert(kind, error);
        self
    }

    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuotaSource for FakeSource {
    async fn open(&self, kind: ResourceKind) -> Result<Box<dyn QuotaSession>> {
        self.events.lock().unwrap().push(format!("open {}", kind));
        if let Some(error) = self.open_errors.get(&kind).or(self.open_error.as_ref()) {
            return Err(error.clone());
        }
        Ok(Box::new(FakeSession {
            limit: self.limits.get(&kind).copied(),
            usage: self.usages.get(&kind).copied(),
            usage_error: self.usage_errors.get(&kind).cloned(),
            events: self.events.clone(),
        }))
    }
}

struct FakeSession {
    limit: Option<u64>,
    usage: Option<u64>,
    usage_error: Option<QuotaError>,
    events: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl QuotaSession for FakeSession {
    async fn quota_limit(&self, kind: ResourceKind) -> Result<Option<u64>> {
        self.events.lock().unwrap().push(format!("quota_limit {}", kind));
        Ok(self.limit)
    }

    async fn current_usage(&self, kind: ResourceKind) -> Result<Option<u64>> {
        self.events
            .lock()
            .unwrap()
            .push(format!("current_usage {}", kind));
        match &self.usage_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.usage),
        }
    }
}

/// Credential source with a fixed answer
pub struct StaticSource {
    name: &'static str,
    credentials: Option<Credentials>,
    calls: AtomicUsize,
}

impl StaticSource {
    pub fn some(name: &'static str, access_key_id: &str) -> Self {
        Self {
            name,
            credentials: Some(Credentials::new(
                access_key_id,
                "secret",
                None,
                None,
                "static",
            )),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn none(name: &'static str) -> Self {
        Self {
            name,
            credentials: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CredentialSource for StaticSource {
    fn name(&self) -> &str {
        self.name
    }

    async fn load(&self) -> std::result::Result<Credentials, CredentialsError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.credentials
            .clone()
            .ok_or_else(|| CredentialsError::not_loaded("no credentials configured"))
    }
}

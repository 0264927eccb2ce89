#![allow(dead_code)]

use async_trait::async_trait;
use stackquota::{
    DiffRecord, QuotaCheck, QuotaError, QuotaLogger, QuotaViolation, ResourceKind, Result,
};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Logger that keeps every line
#[derive(Default)]
pub struct CapturingLogger {
    pub info: Mutex<Vec<String>>,
    pub error: Mutex<Vec<String>>,
}

impl QuotaLogger for CapturingLogger {
    fn info(&self, message: &str) {
        self.info.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.error.lock().unwrap().push(message.to_string());
    }
}

/// Check that records its calls and optionally fails
pub struct RecordingCheck {
    kind: ResourceKind,
    fail: bool,
    calls: AtomicUsize,
    seen: Mutex<Vec<DiffRecord>>,
}

impl RecordingCheck {
    pub fn passing(kind: ResourceKind) -> Self {
        Self {
            kind,
            fail: false,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(kind: ResourceKind) -> Self {
        Self {
            fail: true,
            ..Self::passing(kind)
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<DiffRecord> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuotaCheck for RecordingCheck {
    fn kind(&self) -> ResourceKind {
        self.kind
    }

    async fn check(&self, records: &[DiffRecord]) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().extend_from_slice(records);
        if self.fail {
            return Err(QuotaError::QuotaExceeded(QuotaViolation {
                kind: self.kind,
                requested: 1,
                remaining: 0,
                reason: format!("{} is full", self.kind),
            }));
        }
        Ok(())
    }
}

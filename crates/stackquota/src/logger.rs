//! Logging capability injected into checkers and the dispatcher

use std::sync::Arc;

/// Sink for the progress and failure lines a host shows to its user
pub trait QuotaLogger: Send + Sync {
    fn info(&self, message: &str);

    fn error(&self, message: &str);
}

/// Forwards to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl QuotaLogger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!("{}", message);
    }
}

/// Discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl QuotaLogger for NoopLogger {
    fn info(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}

pub type SharedLogger = Arc<dyn QuotaLogger>;

pub fn default_logger() -> SharedLogger {
    Arc::new(TracingLogger)
}

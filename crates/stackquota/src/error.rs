//! Quota check error types

use crate::kind::ResourceKind;
use thiserror::Error;

/// Message carried by every quota violation
pub const QUOTA_LIMIT_REACHED: &str = "Quota Limit Reached!";

/// Quota check errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum QuotaError {
    /// No credential source yielded usable credentials
    #[error("{message}")]
    CredentialsNotFound {
        message: String,
        reason: String,
        hints: Vec<String>,
    },

    /// Planned creations would exceed the quota
    #[error("Quota Limit Reached!")]
    QuotaExceeded(QuotaViolation),

    /// A provider call failed
    #[error("{operation} failed while checking {kind} quota: {message}")]
    Api {
        kind: ResourceKind,
        operation: &'static str,
        message: String,
    },
}

impl QuotaError {
    pub fn credentials_not_found(
        message: impl Into<String>,
        reason: impl Into<String>,
        hints: Vec<String>,
    ) -> Self {
        QuotaError::CredentialsNotFound {
            message: message.into(),
            reason: reason.into(),
            hints,
        }
    }

    pub fn api(kind: ResourceKind, operation: &'static str, message: impl Into<String>) -> Self {
        QuotaError::Api {
            kind,
            operation,
            message: message.into(),
        }
    }

    /// Short headline
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Detailed explanation
    pub fn reason(&self) -> &str {
        match self {
            QuotaError::CredentialsNotFound { reason, .. } => reason,
            QuotaError::QuotaExceeded(violation) => &violation.reason,
            QuotaError::Api { message, .. } => message,
        }
    }

    /// Remediation hints; quota violations embed theirs in the reason
    pub fn hints(&self) -> &[String] {
        match self {
            QuotaError::CredentialsNotFound { hints, .. } => hints,
            _ => &[],
        }
    }

    /// Kind whose check raised this error, when known
    pub fn kind(&self) -> Option<ResourceKind> {
        match self {
            QuotaError::CredentialsNotFound { .. } => None,
            QuotaError::QuotaExceeded(violation) => Some(violation.kind),
            QuotaError::Api { kind, .. } => Some(*kind),
        }
    }

    /// Message suitable for showing to the person running the deployment
    pub fn user_message(&self) -> String {
        let mut out = format!("{}\n\n{}", self.message(), self.reason());
        let hints = self.hints();
        if !hints.is_empty() {
            out.push('\n');
            for hint in hints {
                out.push_str(&format!("\n- {}", hint));
            }
        }
        out
    }
}

/// Planned creations exceed the available quota
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotaViolation {
    pub kind: ResourceKind,
    /// New resources the deployment would create
    pub requested: u64,
    /// May be negative when usage already exceeds the quota
    pub remaining: i64,
    pub reason: String,
}

impl QuotaViolation {
    pub fn message(&self) -> &'static str {
        QUOTA_LIMIT_REACHED
    }
}

impl From<QuotaViolation> for QuotaError {
    fn from(violation: QuotaViolation) -> Self {
        QuotaError::QuotaExceeded(violation)
    }
}

pub type Result<T> = std::result::Result<T, QuotaError>;

//! The quota verification protocol shared by every resource kind
//!
//! A check counts the pending creations of one kind, opens a provider
//! session, reads the quota limit and current usage, and fails when the
//! projected count would go over the limit.

use crate::diff::{self, DiffRecord};
use crate::error::{QuotaViolation, Result};
use crate::kind::ResourceKind;
use crate::logger::SharedLogger;
use async_trait::async_trait;
use std::sync::Arc;

/// A quota check for one resource kind
#[async_trait]
pub trait QuotaCheck: Send + Sync {
    /// Kind this check is responsible for
    fn kind(&self) -> ResourceKind;

    /// Fail if creating the records' new resources would exceed the quota
    async fn check(&self, records: &[DiffRecord]) -> Result<()>;
}

/// Opens provider sessions
///
/// Opening a session resolves credentials, so it must not happen unless
/// there is something to check.
#[async_trait]
pub trait QuotaSource: Send + Sync {
    async fn open(&self, kind: ResourceKind) -> Result<Box<dyn QuotaSession>>;
}

/// Provider lookups available once credentials are resolved
#[async_trait]
pub trait QuotaSession: Send + Sync {
    /// Quota limit for `kind`; `None` when the provider reported nothing
    async fn quota_limit(&self, kind: ResourceKind) -> Result<Option<u64>>;

    /// Resources of `kind` that already exist; `None` when unreported
    async fn current_usage(&self, kind: ResourceKind) -> Result<Option<u64>>;
}

/// Per-kind constants and wording
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaProfile {
    pub kind: ResourceKind,
    /// Used when the quota lookup returns nothing
    pub default_quota: u64,
    /// Used when the usage listing returns nothing; never zero
    pub default_usage: u64,
    /// Logged once a check has creations to verify
    pub log_line: &'static str,
    /// e.g. "S3 bucket(s)"
    pub noun: &'static str,
    /// Inserted after "more can be created", e.g. " within this region"
    pub scope: &'static str,
    /// Appended after the limit sentence, leading whitespace included
    pub remediation: &'static str,
}

impl QuotaProfile {
    pub fn reason(&self, requested: u64, remaining: i64) -> String {
        format!(
            "This stack needs to create {} {}, but only {} more can be created{} with the current quota limit!{}",
            requested, self.noun, remaining, self.scope, self.remediation
        )
    }
}

/// Limit and usage for one kind, fetched fresh for every check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaSnapshot {
    pub limit: u64,
    pub usage: u64,
}

impl QuotaSnapshot {
    /// Apply the profile's fallbacks to raw lookup results
    pub fn resolve(profile: &QuotaProfile, limit: Option<u64>, usage: Option<u64>) -> Self {
        Self {
            limit: limit.filter(|l| *l > 0).unwrap_or(profile.default_quota),
            usage: usage.filter(|u| *u > 0).unwrap_or(profile.default_usage),
        }
    }

    pub fn remaining(&self) -> i64 {
        self.limit as i64 - self.usage as i64
    }

    /// Compare `requested` new resources against this snapshot
    pub fn evaluate(
        &self,
        profile: &QuotaProfile,
        requested: u64,
    ) -> std::result::Result<(), QuotaViolation> {
        let proposed = self.usage + requested;
        if self.limit < proposed {
            let remaining = self.remaining();
            return Err(QuotaViolation {
                kind: profile.kind,
                requested,
                remaining,
                reason: profile.reason(requested, remaining),
            });
        }
        Ok(())
    }
}

/// Generic checker bound to one profile
pub struct KindChecker {
    profile: QuotaProfile,
    source: Arc<dyn QuotaSource>,
    logger: SharedLogger,
}

impl KindChecker {
    pub fn new(profile: QuotaProfile, source: Arc<dyn QuotaSource>, logger: SharedLogger) -> Self {
        Self {
            profile,
            source,
            logger,
        }
    }
}

#[async_trait]
impl QuotaCheck for KindChecker {
    fn kind(&self) -> ResourceKind {
        self.profile.kind
    }

    async fn check(&self, records: &[DiffRecord]) -> Result<()> {
        let requested = diff::count_creates(records, self.profile.kind) as u64;
        if requested == 0 {
            return Ok(());
        }

        self.logger.info(self.profile.log_line);

        let session = self.source.open(self.profile.kind).await?;
        let limit = session.quota_limit(self.profile.kind).await?;
        let usage = session.current_usage(self.profile.kind).await?;

        let snapshot = QuotaSnapshot::resolve(&self.profile, limit, usage);
        tracing::debug!(
            "{} quota: limit={}, usage={}, requested={}",
            self.profile.kind,
            snapshot.limit,
            snapshot.usage,
            requested
        );

        snapshot.evaluate(&self.profile, requested)?;
        Ok(())
    }
}

//! Routes diff records to the quota check for their kind

use crate::diff::{DiffRecord, DiffSummary};
use crate::error::{QuotaError, Result};
use crate::kind::{self, ResourceKind};
use crate::logger::SharedLogger;
use crate::options::CheckOptions;
use crate::quota::QuotaCheck;
use async_trait::async_trait;
use futures_util::future::join_all;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Quota checking capability a host wires into its deployment pipeline
#[async_trait]
pub trait QuotaChecker: Send + Sync {
    /// Returns the checker name (e.g., "aws")
    fn name(&self) -> &str;

    /// Returns the checker display name for UI
    fn display_name(&self) -> &str;

    /// Check records of a single resource type.
    ///
    /// Errors propagate as-is; an unsupported type is not an error.
    async fn check_quota(
        &self,
        resource_type: &str,
        records: &[DiffRecord],
        options: &CheckOptions,
    ) -> Result<()>;

    /// Check a mixed set of records, collecting every kind's failure
    async fn check_batch(&self, records: &[DiffRecord]) -> Vec<QuotaError>;

    /// Check a whole template; failures are logged and returned, never raised
    async fn check_template(&self, records: &[DiffRecord], options: &CheckOptions)
    -> Vec<QuotaError>;
}

/// Table from resource kind to its check
pub struct QuotaDispatcher {
    name: String,
    display_name: String,
    checks: BTreeMap<ResourceKind, Arc<dyn QuotaCheck>>,
    logger: SharedLogger,
}

impl QuotaDispatcher {
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, logger: SharedLogger) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            checks: BTreeMap::new(),
            logger,
        }
    }

    /// Register a check under its own kind, replacing any previous one
    pub fn with_check(mut self, check: Arc<dyn QuotaCheck>) -> Self {
        let kind = check.kind();
        if !kind.is_supported() {
            tracing::warn!("Ignoring quota check registered for unsupported kind");
            return self;
        }
        self.checks.insert(kind, check);
        self
    }

    pub fn kinds(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        self.checks.keys().copied()
    }

    /// Run the check registered for `kind`, if any
    pub async fn check_kind(&self, kind: ResourceKind, records: &[DiffRecord]) -> Result<()> {
        match self.checks.get(&kind) {
            Some(check) => check.check(records).await,
            None => {
                tracing::debug!("No quota check for {}", kind);
                Ok(())
            }
        }
    }

    fn group_by_kind(records: &[DiffRecord]) -> BTreeMap<ResourceKind, Vec<DiffRecord>> {
        let mut groups: BTreeMap<ResourceKind, Vec<DiffRecord>> = BTreeMap::new();
        for record in records {
            let kind = record.kind();
            if kind.is_supported() {
                groups.entry(kind).or_default().push(record.clone());
            } else {
                tracing::trace!(
                    "Skipping {} ({}): no quota applies",
                    record.label(),
                    record.resource_type
                );
            }
        }
        groups
    }
}

/// Resolve a single-type entry point argument: a raw template type or a
/// canonical kind name
fn resolve_kind(resource_type: &str) -> ResourceKind {
    match kind::classify(resource_type) {
        ResourceKind::Unsupported => resource_type.parse().unwrap_or(ResourceKind::Unsupported),
        kind => kind,
    }
}

#[async_trait]
impl QuotaChecker for QuotaDispatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn display_name(&self) -> &str {
        &self.display_name
    }

    async fn check_quota(
        &self,
        resource_type: &str,
        records: &[DiffRecord],
        _options: &CheckOptions,
    ) -> Result<()> {
        self.check_kind(resolve_kind(resource_type), records).await
    }

    async fn check_batch(&self, records: &[DiffRecord]) -> Vec<QuotaError> {
        let checks = Self::group_by_kind(records)
            .into_iter()
            .filter_map(|(kind, group)| {
                let check = self.checks.get(&kind)?.clone();
                Some(async move { check.check(&group).await })
            });

        join_all(checks)
            .await
            .into_iter()
            .filter_map(|result| result.err())
            .collect()
    }

    async fn check_template(
        &self,
        records: &[DiffRecord],
        _options: &CheckOptions,
    ) -> Vec<QuotaError> {
        tracing::debug!(
            "Checking {} quotas: {}",
            self.display_name,
            DiffSummary::of(records)
        );

        let errors = self.check_batch(records).await;
        for error in &errors {
            self.logger.error(&format!("{}: {}", error.message(), error.reason()));
        }
        errors
    }
}

//! AWS quota checker entry point

use crate::config::AwsQuotaConfig;
use crate::session::AwsQuotaSource;
use crate::{eip, s3, vpc};
use async_trait::async_trait;
use stackquota::{
    CheckOptions, DiffRecord, QuotaChecker, QuotaDispatcher, QuotaError, QuotaSource,
    ResourceKind, Result, SharedLogger, default_logger,
};
use std::sync::Arc;

/// Quota checks for S3 buckets, VPCs and Elastic IPs
pub struct AwsQuotaChecker {
    dispatcher: QuotaDispatcher,
}

impl AwsQuotaChecker {
    pub fn new(config: AwsQuotaConfig) -> Self {
        Self::with_source(Arc::new(AwsQuotaSource::new(config)), default_logger())
    }

    /// Build the checker around any session source and log sink
    pub fn with_source(source: Arc<dyn QuotaSource>, logger: SharedLogger) -> Self {
        let dispatcher = QuotaDispatcher::new("aws", "AWS", logger.clone())
            .with_check(Arc::new(s3::checker(source.clone(), logger.clone())))
            .with_check(Arc::new(vpc::checker(source.clone(), logger.clone())))
            .with_check(Arc::new(eip::checker(source, logger)));

        Self { dispatcher }
    }

    /// Run the check for one canonical kind
    pub async fn check_kind(&self, kind: ResourceKind, records: &[DiffRecord]) -> Result<()> {
        self.dispatcher.check_kind(kind, records).await
    }
}

impl Default for AwsQuotaChecker {
    fn default() -> Self {
        Self::new(AwsQuotaConfig::default())
    }
}

#[async_trait]
impl QuotaChecker for AwsQuotaChecker {
    fn name(&self) -> &str {
        self.dispatcher.name()
    }

    fn display_name(&self) -> &str {
        self.dispatcher.display_name()
    }

    async fn check_quota(
        &self,
        resource_type: &str,
        records: &[DiffRecord],
        options: &CheckOptions,
    ) -> Result<()> {
        self.dispatcher
            .check_quota(resource_type, records, options)
            .await
    }

    async fn check_batch(&self, records: &[DiffRecord]) -> Vec<QuotaError> {
        self.dispatcher.check_batch(records).await
    }

    async fn check_template(
        &self,
        records: &[DiffRecord],
        options: &CheckOptions,
    ) -> Vec<QuotaError> {
        self.dispatcher.check_template(records, options).await
    }
}

//! S3 bucket quota

use crate::session::{AwsQuotaSource, QuotaLookup, ServiceQuotaCode};
use aws_sdk_s3::error::DisplayErrorContext;
use stackquota::{
    DiffRecord, KindChecker, QuotaCheck, QuotaError, QuotaProfile, QuotaSource, ResourceKind,
    Result, SharedLogger, default_logger,
};
use std::sync::Arc;

pub const PROFILE: QuotaProfile = QuotaProfile {
    kind: ResourceKind::StorageBucket,
    default_quota: 100,
    default_usage: 1,
    log_line: "Checking S3 bucket service quota...",
    noun: "S3 bucket(s)",
    scope: "",
    remediation: "  Request a quota increase to continue.",
};

/// "Buckets" under Amazon S3
pub const QUOTA: ServiceQuotaCode = ServiceQuotaCode {
    service_code: "s3",
    quota_code: "L-DC2B2D3D",
    lookup: QuotaLookup::AwsDefault,
};

pub fn checker(source: Arc<dyn QuotaSource>, logger: SharedLogger) -> KindChecker {
    KindChecker::new(PROFILE, source, logger)
}

/// Check bucket creations with default credentials and `tracing` output
pub async fn check_bucket_quota(records: &[DiffRecord]) -> Result<()> {
    checker(Arc::new(AwsQuotaSource::default()), default_logger())
        .check(records)
        .await
}

pub(crate) async fn count_buckets(client: &aws_sdk_s3::Client) -> Result<Option<u64>> {
    let output = client.list_buckets().send().await.map_err(|e| {
        QuotaError::api(PROFILE.kind, "ListBuckets", DisplayErrorContext(&e).to_string())
    })?;

    Ok(Some(output.buckets().len() as u64))
}

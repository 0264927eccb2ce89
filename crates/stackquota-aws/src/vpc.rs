//! VPC quota

use crate::session::{AwsQuotaSource, QuotaLookup, ServiceQuotaCode};
use aws_sdk_ec2::error::DisplayErrorContext;
use stackquota::{
    DiffRecord, KindChecker, QuotaCheck, QuotaError, QuotaProfile, QuotaSource, ResourceKind,
    Result, SharedLogger, default_logger,
};
use std::sync::Arc;

pub const PROFILE: QuotaProfile = QuotaProfile {
    kind: ResourceKind::VirtualNetwork,
    default_quota: 5,
    default_usage: 1,
    log_line: "Checking VPC service quota...",
    noun: "VPC(s)",
    scope: "",
    remediation: " Request a quota increase or choose another region to continue.",
};

/// "VPCs per Region"
pub const QUOTA: ServiceQuotaCode = ServiceQuotaCode {
    service_code: "vpc",
    quota_code: "L-F678F1CE",
    lookup: QuotaLookup::Applied,
};

pub fn checker(source: Arc<dyn QuotaSource>, logger: SharedLogger) -> KindChecker {
    KindChecker::new(PROFILE, source, logger)
}

/// Check VPC creations with default credentials and `tracing` output
pub async fn check_vpc_quota(records: &[DiffRecord]) -> Result<()> {
    checker(Arc::new(AwsQuotaSource::default()), default_logger())
        .check(records)
        .await
}

pub(crate) async fn count_vpcs(client: &aws_sdk_ec2::Client) -> Result<Option<u64>> {
    let output = client.describe_vpcs().send().await.map_err(|e| {
        QuotaError::api(PROFILE.kind, "DescribeVpcs", DisplayErrorContext(&e).to_string())
    })?;

    Ok(Some(output.vpcs().len() as u64))
}

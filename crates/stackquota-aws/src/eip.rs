//! Elastic IP quota

use crate::session::{AwsQuotaSource, QuotaLookup, ServiceQuotaCode};
use aws_sdk_ec2::error::DisplayErrorContext;
use stackquota::{
    DiffRecord, KindChecker, QuotaCheck, QuotaError, QuotaProfile, QuotaSource, ResourceKind,
    Result, SharedLogger, default_logger,
};
use std::sync::Arc;

/// The default quota matches the AWS default of five addresses per region.
pub const PROFILE: QuotaProfile = QuotaProfile {
    kind: ResourceKind::ElasticAddress,
    default_quota: 5,
    default_usage: 1,
    log_line: "Checking Elastic IP service quota...",
    noun: "elastic IP address(es)",
    scope: " within this region",
    remediation: " Release any unassociated EIPs, request a quota increase, or choose another region to continue.",
};

/// "EC2-VPC Elastic IPs"
pub const QUOTA: ServiceQuotaCode = ServiceQuotaCode {
    service_code: "ec2",
    quota_code: "L-0263D0A3",
    lookup: QuotaLookup::Applied,
};

pub fn checker(source: Arc<dyn QuotaSource>, logger: SharedLogger) -> KindChecker {
    KindChecker::new(PROFILE, source, logger)
}

/// Check Elastic IP creations with default credentials and `tracing` output
pub async fn check_eip_quota(records: &[DiffRecord]) -> Result<()> {
    checker(Arc::new(AwsQuotaSource::default()), default_logger())
        .check(records)
        .await
}

pub(crate) async fn count_addresses(client: &aws_sdk_ec2::Client) -> Result<Option<u64>> {
    let output = client.describe_addresses().send().await.map_err(|e| {
        QuotaError::api(
            PROFILE.kind,
            "DescribeAddresses",
            DisplayErrorContext(&e).to_string(),
        )
    })?;

    Ok(Some(output.addresses().len() as u64))
}

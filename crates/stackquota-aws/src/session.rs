//! Per-check AWS sessions
//!
//! Every check opens its own session: credentials are resolved, an SDK
//! config is built around them, and the session's clients are created from
//! it. Nothing outlives the check.

use crate::config::AwsQuotaConfig;
use crate::credentials::CredentialResolver;
use crate::{eip, s3, vpc};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_servicequotas::error::DisplayErrorContext;
use stackquota::{QuotaError, QuotaSession, QuotaSource, ResourceKind, Result};

/// Which Service Quotas operation answers for a kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotaLookup {
    /// `GetServiceQuota`: the value applied to this account
    Applied,
    /// `GetAWSDefaultServiceQuota`: the AWS default value
    AwsDefault,
}

/// Service Quotas identifiers for one kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceQuotaCode {
    pub service_code: &'static str,
    pub quota_code: &'static str,
    pub lookup: QuotaLookup,
}

impl ServiceQuotaCode {
    pub fn for_kind(kind: ResourceKind) -> Option<Self> {
        match kind {
            ResourceKind::StorageBucket => Some(s3::QUOTA),
            ResourceKind::VirtualNetwork => Some(vpc::QUOTA),
            ResourceKind::ElasticAddress => Some(eip::QUOTA),
            ResourceKind::Unsupported => None,
        }
    }
}

/// Opens [`AwsSession`]s
#[derive(Clone, Default)]
pub struct AwsQuotaSource {
    resolver: CredentialResolver,
    config: AwsQuotaConfig,
}

impl AwsQuotaSource {
    pub fn new(config: AwsQuotaConfig) -> Self {
        Self {
            resolver: CredentialResolver::new(&config),
            config,
        }
    }

    pub fn with_resolver(mut self, resolver: CredentialResolver) -> Self {
        self.resolver = resolver;
        self
    }
}

#[async_trait]
impl QuotaSource for AwsQuotaSource {
    async fn open(&self, kind: ResourceKind) -> Result<Box<dyn QuotaSession>> {
        let credentials = self.resolver.resolve().await?;
        let sdk = self.config.load_sdk_config(credentials).await;
        tracing::debug!(
            "Opened AWS session for {} in {}",
            kind,
            sdk.region().map(|r| r.as_ref()).unwrap_or("default region")
        );
        Ok(Box::new(AwsSession::new(&sdk)))
    }
}

/// Service Quotas, S3 and EC2 clients sharing one set of credentials
#[derive(Clone)]
pub struct AwsSession {
    quotas: aws_sdk_servicequotas::Client,
    s3: aws_sdk_s3::Client,
    ec2: aws_sdk_ec2::Client,
}

impl AwsSession {
    pub fn new(sdk: &SdkConfig) -> Self {
        Self::from_clients(
            aws_sdk_servicequotas::Client::new(sdk),
            aws_sdk_s3::Client::new(sdk),
            aws_sdk_ec2::Client::new(sdk),
        )
    }

    /// Build a session around preconfigured clients
    pub fn from_clients(
        quotas: aws_sdk_servicequotas::Client,
        s3: aws_sdk_s3::Client,
        ec2: aws_sdk_ec2::Client,
    ) -> Self {
        Self { quotas, s3, ec2 }
    }
}

#[async_trait]
impl QuotaSession for AwsSession {
    async fn quota_limit(&self, kind: ResourceKind) -> Result<Option<u64>> {
        let Some(code) = ServiceQuotaCode::for_kind(kind) else {
            return Ok(None);
        };

        let value = match code.lookup {
            QuotaLookup::Applied => self
                .quotas
                .get_service_quota()
                .service_code(code.service_code)
                .quota_code(code.quota_code)
                .send()
                .await
                .map_err(|e| {
                    QuotaError::api(kind, "GetServiceQuota", DisplayErrorContext(&e).to_string())
                })?
                .quota()
                .and_then(|q| q.value()),
            QuotaLookup::AwsDefault => self
                .quotas
                .get_aws_default_service_quota()
                .service_code(code.service_code)
                .quota_code(code.quota_code)
                .send()
                .await
                .map_err(|e| {
                    QuotaError::api(
                        kind,
                        "GetAWSDefaultServiceQuota",
                        DisplayErrorContext(&e).to_string(),
                    )
                })?
                .quota()
                .and_then(|q| q.value()),
        };

        Ok(quota_value(value))
    }

    async fn current_usage(&self, kind: ResourceKind) -> Result<Option<u64>> {
        match kind {
            ResourceKind::StorageBucket => s3::count_buckets(&self.s3).await,
            ResourceKind::VirtualNetwork => vpc::count_vpcs(&self.ec2).await,
            ResourceKind::ElasticAddress => eip::count_addresses(&self.ec2).await,
            ResourceKind::Unsupported => Ok(None),
        }
    }
}

/// Service Quotas reports limits as doubles
fn quota_value(value: Option<f64>) -> Option<u64> {
    value
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u64)
}

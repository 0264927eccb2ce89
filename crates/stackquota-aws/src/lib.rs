//! AWS provider for stackquota
//!
//! Checks planned S3 bucket, VPC and Elastic IP creations against the
//! account's Service Quotas before a deployment runs.
//!
//! # Requirements
//!
//! - AWS credentials in the environment (`AWS_ACCESS_KEY_ID`,
//!   `AWS_SECRET_ACCESS_KEY`) or anywhere the default provider chain looks
//! - Permission for `servicequotas:GetServiceQuota`,
//!   `servicequotas:GetAWSDefaultServiceQuota`, `s3:ListAllMyBuckets`,
//!   `ec2:DescribeVpcs` and `ec2:DescribeAddresses`
//!
//! # Example
//!
//! ```ignore
//! use stackquota::{CheckOptions, QuotaChecker};
//! use stackquota_aws::{AwsQuotaChecker, AwsQuotaConfig};
//!
//! let checker = AwsQuotaChecker::new(AwsQuotaConfig::new().with_region("us-east-1"));
//!
//! // Every failing kind is logged and returned; nothing is raised
//! let errors = checker.check_template(&records, &CheckOptions::default()).await;
//! if !errors.is_empty() {
//!     std::process::exit(1);
//! }
//! ```

pub mod checker;
pub mod config;
pub mod credentials;
pub mod eip;
pub mod s3;
pub mod session;
pub mod vpc;

pub use checker::AwsQuotaChecker;
pub use config::AwsQuotaConfig;
pub use credentials::{
    CredentialResolver, CredentialSource, EnvironmentSource, ProviderChainSource,
    credentials_not_found,
};
pub use eip::check_eip_quota;
pub use s3::check_bucket_quota;
pub use session::{AwsQuotaSource, AwsSession, QuotaLookup, ServiceQuotaCode};
pub use vpc::check_vpc_quota;

//! Canonical resource kinds and the raw-type classifier

use crate::diff::IacFormat;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Provider resource category, independent of template vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    StorageBucket,
    VirtualNetwork,
    ElasticAddress,
    /// Anything the classifier does not know
    Unsupported,
}

impl ResourceKind {
    /// Kinds that can carry a quota check
    pub const SUPPORTED: [ResourceKind; 3] = [
        ResourceKind::StorageBucket,
        ResourceKind::VirtualNetwork,
        ResourceKind::ElasticAddress,
    ];

    pub fn is_supported(&self) -> bool {
        !matches!(self, ResourceKind::Unsupported)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::StorageBucket => "storage-bucket",
            ResourceKind::VirtualNetwork => "virtual-network",
            ResourceKind::ElasticAddress => "elastic-address",
            ResourceKind::Unsupported => "unsupported",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = std::convert::Infallible;

    /// Parses a canonical name; unknown names become `Unsupported`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ResourceKind::SUPPORTED
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .unwrap_or(ResourceKind::Unsupported))
    }
}

/// CloudFormation type names (what CDK diffs report)
const CLOUDFORMATION_TYPES: &[(&str, ResourceKind)] = &[
    ("AWS::S3::Bucket", ResourceKind::StorageBucket),
    ("AWS::EC2::VPC", ResourceKind::VirtualNetwork),
    ("AWS::EC2::EIP", ResourceKind::ElasticAddress),
];

/// Terraform resource names
const TERRAFORM_TYPES: &[(&str, ResourceKind)] = &[
    ("aws_s3_bucket", ResourceKind::StorageBucket),
    ("aws_vpc", ResourceKind::VirtualNetwork),
    ("aws_eip", ResourceKind::ElasticAddress),
];

fn vocabulary(format: IacFormat) -> &'static [(&'static str, ResourceKind)] {
    match format {
        IacFormat::AwsCdk => CLOUDFORMATION_TYPES,
        IacFormat::Terraform => TERRAFORM_TYPES,
    }
}

/// Map a raw resource type to its canonical kind.
pub fn classify(resource_type: &str) -> ResourceKind {
    match IacFormat::detect(resource_type) {
        Some(format) => classify_with_format(resource_type, format),
        None => ResourceKind::Unsupported,
    }
}

/// Same as [`classify`], restricted to one vocabulary.
pub fn classify_with_format(resource_type: &str, format: IacFormat) -> ResourceKind {
    vocabulary(format)
        .iter()
        .find(|(raw, _)| *raw == resource_type)
        .map(|(_, kind)| *kind)
        .unwrap_or(ResourceKind::Unsupported)
}

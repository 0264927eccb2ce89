//! Diff records handed over by the host's planning stage

use crate::kind::{self, ResourceKind};
use serde::{Deserialize, Serialize};

/// One resource affected by a planned deployment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRecord {
    /// Raw, format-specific type (e.g., "AWS::S3::Bucket", "aws_vpc")
    pub resource_type: String,

    /// Planned change for this resource
    pub change_type: ChangeType,

    /// Template vocabulary the record came from, if the host knows it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<IacFormat>,

    /// Logical name of the resource inside the template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logical_id: Option<String>,

    /// Resource properties; shape depends on kind and format
    #[serde(default)]
    pub properties: serde_json::Value,
}

impl DiffRecord {
    pub fn new(resource_type: impl Into<String>, change_type: ChangeType) -> Self {
        Self {
            resource_type: resource_type.into(),
            change_type,
            format: None,
            logical_id: None,
            properties: serde_json::Value::Null,
        }
    }

    pub fn with_format(mut self, format: IacFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_logical_id(mut self, logical_id: impl Into<String>) -> Self {
        self.logical_id = Some(logical_id.into());
        self
    }

    pub fn with_properties(mut self, properties: serde_json::Value) -> Self {
        self.properties = properties;
        self
    }

    /// Canonical kind of this record, decided by the type's spelling alone.
    ///
    /// A declared format that disagrees with the spelling does not hide the
    /// record from its quota check.
    pub fn kind(&self) -> ResourceKind {
        kind::classify(&self.resource_type)
    }

    /// Logical id when known, raw type otherwise
    pub fn label(&self) -> &str {
        self.logical_id.as_deref().unwrap_or(&self.resource_type)
    }

    pub fn is_create(&self) -> bool {
        self.change_type == ChangeType::Create
    }
}

/// Type of planned change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeType {
    #[serde(alias = "CREATE")]
    Create,
    #[serde(alias = "UPDATE")]
    Update,
    #[serde(alias = "DELETE")]
    Delete,
    #[serde(alias = "NO_CHANGE", alias = "NONE")]
    NoOp,
}

impl std::fmt::Display for ChangeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeType::Create => write!(f, "create"),
            ChangeType::Update => write!(f, "update"),
            ChangeType::Delete => write!(f, "delete"),
            ChangeType::NoOp => write!(f, "no-op"),
        }
    }
}

/// Declarative template vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IacFormat {
    /// CloudFormation type names, as emitted by CDK synth/diff
    #[serde(alias = "awsCdk", alias = "cloudformation")]
    AwsCdk,
    /// Terraform resource names
    #[serde(alias = "tf")]
    Terraform,
}

impl IacFormat {
    /// Guess the vocabulary from the spelling of a raw type
    pub fn detect(resource_type: &str) -> Option<Self> {
        if resource_type.starts_with("AWS::") {
            Some(IacFormat::AwsCdk)
        } else if resource_type.starts_with("aws_") {
            Some(IacFormat::Terraform)
        } else {
            None
        }
    }
}

impl std::fmt::Display for IacFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IacFormat::AwsCdk => write!(f, "aws-cdk"),
            IacFormat::Terraform => write!(f, "terraform"),
        }
    }
}

/// Summary of planned changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub create: usize,
    pub update: usize,
    pub delete: usize,
    pub no_change: usize,
}

impl DiffSummary {
    pub fn of(records: &[DiffRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            match record.change_type {
                ChangeType::Create => summary.create += 1,
                ChangeType::Update => summary.update += 1,
                ChangeType::Delete => summary.delete += 1,
                ChangeType::NoOp => summary.no_change += 1,
            }
        }
        summary
    }
}

impl std::fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to create, {} to update, {} to delete, {} unchanged",
            self.create, self.update, self.delete, self.no_change
        )
    }
}

/// Number of records that would create a resource of `kind`
pub fn count_creates(records: &[DiffRecord], kind: ResourceKind) -> usize {
    records
        .iter()
        .filter(|r| r.is_create() && r.kind() == kind)
        .count()
}

//! AWS settings for quota sessions

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use serde::{Deserialize, Serialize};

/// Where quota lookups go.
///
/// Unset fields fall back to the SDK's own resolution (environment,
/// shared config files, instance metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsQuotaConfig {
    /// Region to query, e.g. "us-east-1"
    #[serde(default)]
    pub region: Option<String>,

    /// Named profile from the shared config files
    #[serde(default)]
    pub profile_name: Option<String>,
}

impl AwsQuotaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_profile_name(mut self, profile_name: impl Into<String>) -> Self {
        self.profile_name = Some(profile_name.into());
        self
    }

    pub fn region(&self) -> Option<Region> {
        self.region.clone().map(Region::new)
    }

    /// Build an SDK config bound to already-resolved credentials
    pub async fn load_sdk_config(&self, credentials: Credentials) -> SdkConfig {
        let mut loader =
            aws_config::defaults(BehaviorVersion::latest()).credentials_provider(credentials);

        if let Some(region) = self.region() {
            loader = loader.region(region);
        }

        if let Some(profile) = &self.profile_name {
            loader = loader.profile_name(profile);
        }

        loader.load().await
    }
}

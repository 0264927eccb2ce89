//! AWS credential resolution
//!
//! Credentials from environment variables win; the default provider chain
//! (shared config files, SSO, container and instance metadata) is only
//! consulted when the environment has none. Nothing is cached: every quota
//! check resolves again.

use crate::config::AwsQuotaConfig;
use async_trait::async_trait;
use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_config::environment::EnvironmentVariableCredentialsProvider;
use aws_credential_types::Credentials;
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::provider::error::CredentialsError;
use stackquota::{QuotaError, Result};
use std::sync::Arc;

const NOT_FOUND_MESSAGE: &str = "Failed to detect AWS credentials!";
const NOT_FOUND_REASON: &str = "AWS credentials were not found in the environment or anywhere else on the node chain provider.";
const NOT_FOUND_HINT: &str =
    "Make sure you are authenticated to the AWS account you plan to deploy to.";

/// The error raised when no source yields credentials
pub fn credentials_not_found() -> QuotaError {
    QuotaError::credentials_not_found(
        NOT_FOUND_MESSAGE,
        NOT_FOUND_REASON,
        vec![NOT_FOUND_HINT.to_string()],
    )
}

/// A place credentials can come from
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Source name for diagnostics
    fn name(&self) -> &str;

    async fn load(&self) -> std::result::Result<Credentials, CredentialsError>;
}

/// `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY` / `AWS_SESSION_TOKEN`
#[derive(Debug)]
pub struct EnvironmentSource {
    provider: EnvironmentVariableCredentialsProvider,
}

impl EnvironmentSource {
    pub fn new() -> Self {
        Self {
            provider: EnvironmentVariableCredentialsProvider::new(),
        }
    }
}

impl Default for EnvironmentSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialSource for EnvironmentSource {
    fn name(&self) -> &str {
        "environment"
    }

    async fn load(&self) -> std::result::Result<Credentials, CredentialsError> {
        self.provider.provide_credentials().await
    }
}

/// The SDK's default provider chain
#[derive(Debug, Clone, Default)]
pub struct ProviderChainSource {
    config: AwsQuotaConfig,
}

impl ProviderChainSource {
    pub fn new(config: AwsQuotaConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CredentialSource for ProviderChainSource {
    fn name(&self) -> &str {
        "provider chain"
    }

    async fn load(&self) -> std::result::Result<Credentials, CredentialsError> {
        let mut builder = DefaultCredentialsChain::builder();
        if let Some(region) = self.config.region() {
            builder = builder.region(region);
        }
        if let Some(profile) = &self.config.profile_name {
            builder = builder.profile_name(profile);
        }

        let chain = builder.build().await;
        chain.provide_credentials().await
    }
}

/// Environment first, provider chain second
#[derive(Clone)]
pub struct CredentialResolver {
    environment: Arc<dyn CredentialSource>,
    chain: Arc<dyn CredentialSource>,
}

impl CredentialResolver {
    pub fn new(config: &AwsQuotaConfig) -> Self {
        Self::with_sources(
            Arc::new(EnvironmentSource::new()),
            Arc::new(ProviderChainSource::new(config.clone())),
        )
    }

    pub fn with_sources(
        environment: Arc<dyn CredentialSource>,
        chain: Arc<dyn CredentialSource>,
    ) -> Self {
        Self { environment, chain }
    }

    pub async fn resolve(&self) -> Result<Credentials> {
        for source in [&self.environment, &self.chain] {
            match source.load().await {
                Ok(credentials) => {
                    tracing::debug!("Using AWS credentials from {}", source.name());
                    return Ok(credentials);
                }
                Err(e) => {
                    tracing::debug!("No AWS credentials from {}: {}", source.name(), e);
                }
            }
        }

        Err(credentials_not_found())
    }
}

impl Default for CredentialResolver {
    fn default() -> Self {
        Self::new(&AwsQuotaConfig::default())
    }
}

//! Azure OpenAI provider handler.
//!
//! Azure deployments are reached through a customer-specific service URL,
//! configured under `azureServiceUrl`. The URL's host is registered as a DNS
//! service and its scheme decides protocol and port.

use crate::config::{provider_type, Configuration};
use crate::endpoint::{RegistryType, ServiceProtocol};
use crate::error::ConfigValidationError;
use crate::handler::ProviderHandler;
use crate::uri::ServiceUri;
use tracing::trace;

/// Azure OpenAI provider handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct AzureHandler;

impl AzureHandler {
    /// Configuration key holding the service URL.
    pub const SERVICE_URL_KEY: &'static str = "azureServiceUrl";

    const DISPLAY_NAME: &'static str = "Azure";

    /// Create a new Azure handler.
    pub fn new() -> Self {
        Self
    }

    fn service_uri(config: Option<&Configuration>) -> Result<ServiceUri, ConfigValidationError> {
        let config = config
            .filter(|c| !c.is_empty())
            .ok_or(ConfigValidationError::MissingConfiguration {
                provider: Self::DISPLAY_NAME,
            })?;

        let service_url = config
            .get(Self::SERVICE_URL_KEY)
            .and_then(|v| v.as_str())
            .ok_or(ConfigValidationError::NotAString {
                key: Self::SERVICE_URL_KEY,
            })?;

        if service_url.is_empty() {
            return Err(ConfigValidationError::EmptyValue {
                key: Self::SERVICE_URL_KEY,
            });
        }

        trace!(service_url, "Parsing Azure service URL");

        ServiceUri::parse(service_url).map_err(|source| ConfigValidationError::InvalidUrl {
            key: Self::SERVICE_URL_KEY,
            source,
        })
    }
}

impl ProviderHandler for AzureHandler {
    fn provider_type(&self) -> &str {
        provider_type::AZURE
    }

    fn aliases(&self) -> &[&str] {
        &["azure-openai"]
    }

    fn validate_config(&self, config: Option<&Configuration>) -> Result<(), ConfigValidationError> {
        let uri = Self::service_uri(config)?;
        let scheme = uri
            .scheme()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigValidationError::MissingScheme {
                provider: Self::DISPLAY_NAME,
            })?;

        match ServiceProtocol::parse_scheme(scheme) {
            Some(_) => Ok(()),
            None => Err(ConfigValidationError::UnsupportedScheme {
                provider: Self::DISPLAY_NAME,
                scheme: scheme.to_string(),
            }),
        }
    }

    fn resolve_registry_type(
        &self,
        config: Option<&Configuration>,
    ) -> Result<RegistryType, ConfigValidationError> {
        Self::service_uri(config)?;
        Ok(RegistryType::Dns)
    }

    fn resolve_domain(&self, config: Option<&Configuration>) -> Result<String, ConfigValidationError> {
        let uri = Self::service_uri(config)?;
        Ok(uri.host().unwrap_or_default().to_string())
    }

    fn resolve_port(&self, config: Option<&Configuration>) -> Result<u16, ConfigValidationError> {
        Ok(self.resolve_protocol(config)?.default_port())
    }

    fn resolve_protocol(
        &self,
        config: Option<&Configuration>,
    ) -> Result<ServiceProtocol, ConfigValidationError> {
        let uri = Self::service_uri(config)?;
        Ok(ServiceProtocol::from_scheme(uri.scheme()))
    }
}

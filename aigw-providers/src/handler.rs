//! Provider handler trait.
//!
//! A handler knows how to validate one provider type's raw configuration and
//! derive the endpoint the service-registration layer registers for it.
//! Handlers are stateless: every operation is a pure function of the
//! configuration passed in.

use crate::config::Configuration;
use crate::endpoint::{RegistryType, ResolvedEndpoint, ServiceProtocol};
use crate::error::ConfigValidationError;
use std::sync::Arc;

/// Provider handler trait - validates and resolves one provider type.
///
/// The `resolve_*` operations can be called without a prior
/// [`validate_config`](ProviderHandler::validate_config). They re-extract
/// whatever they need from the configuration and fail the same way
/// validation would when it is unusable.
pub trait ProviderHandler: Send + Sync + std::fmt::Debug {
    /// Provider type tag (e.g., "azure").
    fn provider_type(&self) -> &str;

    /// Get alternate type tags for this handler.
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Check that the configuration is complete and well-formed.
    fn validate_config(&self, config: Option<&Configuration>)
        -> Result<(), ConfigValidationError>;

    /// How the provider's location should be resolved.
    fn resolve_registry_type(
        &self,
        config: Option<&Configuration>,
    ) -> Result<RegistryType, ConfigValidationError>;

    /// The provider's domain. Empty if the configured location has no host.
    fn resolve_domain(&self, config: Option<&Configuration>)
        -> Result<String, ConfigValidationError>;

    /// The provider's port.
    fn resolve_port(&self, config: Option<&Configuration>) -> Result<u16, ConfigValidationError>;

    /// The protocol used to reach the provider.
    fn resolve_protocol(
        &self,
        config: Option<&Configuration>,
    ) -> Result<ServiceProtocol, ConfigValidationError>;

    /// Validate the configuration and derive the full endpoint.
    fn resolve_endpoint(
        &self,
        config: Option<&Configuration>,
    ) -> Result<ResolvedEndpoint, ConfigValidationError> {
        self.validate_config(config)?;
        Ok(ResolvedEndpoint {
            registry_type: self.resolve_registry_type(config)?,
            domain: self.resolve_domain(config)?,
            port: self.resolve_port(config)?,
            protocol: self.resolve_protocol(config)?,
        })
    }
}

/// Type alias for shared handlers.
pub type BoxedHandler = Arc<dyn ProviderHandler>;

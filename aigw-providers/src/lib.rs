//! LLM provider handlers for AI gateway service registration.
//!
//! Each LLM vendor is represented by a [`ProviderHandler`] that validates the
//! vendor's raw configuration and derives the endpoint the gateway registers
//! for it:
//!
//! - **Azure** - Azure OpenAI Service, located by `azureServiceUrl`
//!
//! Handlers are selected by provider type tag through a
//! [`ProviderHandlerRegistry`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use aigw_providers::{LlmProviderDefinition, ProviderHandlerRegistry};
//!
//! let registry = ProviderHandlerRegistry::with_builtin_handlers();
//!
//! let definition = LlmProviderDefinition::new("azure-prod", "azure")
//!     .with_raw_config("azureServiceUrl", "https://my-azure.example.com/openai");
//!
//! let endpoint = registry.resolve(&definition)?;
//! assert_eq!(endpoint.domain, "my-azure.example.com");
//! assert_eq!(endpoint.port, 443);
//! ```
//!
//! ## Resolved Endpoints
//!
//! Every handler produces the same four facts:
//!
//! - `registryType` - how the location is resolved (`DNS`)
//! - `domain` - the service host
//! - `port` - `443` for https, `80` otherwise
//! - `protocol` - `http` or `https`

mod config;
mod endpoint;
mod error;
mod handler;
mod registry;
mod uri;

// Handler implementations
#[cfg(feature = "azure")]
mod azure;

// Re-exports
pub use config::*;
pub use endpoint::*;
pub use error::*;
pub use handler::*;
pub use registry::*;
pub use uri::ServiceUri;

#[cfg(feature = "azure")]
pub use azure::AzureHandler;

/// Validate a provider definition using the global registry.
pub fn validate(definition: &LlmProviderDefinition) -> Result<()> {
    global_registry().validate(definition)
}

/// Resolve a provider definition's endpoint using the global registry.
pub fn resolve(definition: &LlmProviderDefinition) -> Result<ResolvedEndpoint> {
    global_registry().resolve(definition)
}

/// Prelude for common imports.
pub mod prelude {
    pub use crate::{
        global_registry, resolve, validate, BoxedHandler, ConfigValidationError, Configuration,
        LlmProviderDefinition, ProviderError, ProviderHandler, ProviderHandlerRegistry,
        ResolvedEndpoint, ServiceProtocol,
    };

    #[cfg(feature = "azure")]
    pub use crate::AzureHandler;
}

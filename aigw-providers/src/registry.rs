//! Handler registry for strategy dispatch.
//!
//! The registry maps provider type tags (and their aliases) to handlers and
//! supports:
//! - Lookup by type tag
//! - Validation and endpoint resolution of stored provider definitions
//! - A process-wide default registry with the builtin handlers

use crate::config::LlmProviderDefinition;
use crate::endpoint::ResolvedEndpoint;
use crate::error::ProviderError;
use crate::handler::BoxedHandler;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Registry for looking up handlers by provider type.
#[derive(Debug, Default)]
pub struct ProviderHandlerRegistry {
    handlers: RwLock<HashMap<String, BoxedHandler>>,
}

impl ProviderHandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Create a registry with every handler compiled into this crate.
    pub fn with_builtin_handlers() -> Self {
        let registry = Self::new();

        #[cfg(feature = "azure")]
        registry.register(Arc::new(crate::AzureHandler::new()));

        registry
    }

    /// Register a handler under its type tag and aliases.
    pub fn register(&self, handler: BoxedHandler) {
        let mut handlers = self.handlers.write();
        let provider_type = handler.provider_type().to_string();

        handlers.insert(provider_type, Arc::clone(&handler));

        for alias in handler.aliases() {
            handlers.insert((*alias).to_string(), Arc::clone(&handler));
        }
    }

    /// Get a handler by provider type.
    pub fn get(&self, provider_type: &str) -> Option<BoxedHandler> {
        let handlers = self.handlers.read();
        handlers.get(provider_type).cloned()
    }

    /// Get a handler by provider type, failing if none is registered.
    pub fn handler(&self, provider_type: &str) -> Result<BoxedHandler, ProviderError> {
        self.get(provider_type)
            .ok_or_else(|| ProviderError::UnknownProvider(provider_type.to_string()))
    }

    /// Check if a handler exists for the provider type.
    pub fn contains(&self, provider_type: &str) -> bool {
        let handlers = self.handlers.read();
        handlers.contains_key(provider_type)
    }

    /// List all registered type tags, aliases included.
    pub fn list(&self) -> Vec<String> {
        let handlers = self.handlers.read();
        handlers.keys().cloned().collect()
    }

    /// Remove a handler registration.
    pub fn remove(&self, provider_type: &str) -> Option<BoxedHandler> {
        let mut handlers = self.handlers.write();
        handlers.remove(provider_type)
    }

    /// Clear all handlers.
    pub fn clear(&self) {
        let mut handlers = self.handlers.write();
        handlers.clear();
    }

    /// Validate a provider definition with the handler for its type.
    pub fn validate(&self, definition: &LlmProviderDefinition) -> Result<(), ProviderError> {
        let handler = self.handler(&definition.provider_type)?;
        handler
            .validate_config(definition.configuration())
            .map_err(|err| {
                debug!(
                    provider = %definition.name,
                    provider_type = %definition.provider_type,
                    error = %err,
                    "Provider configuration rejected"
                );
                err.into()
            })
    }

    /// Validate a provider definition and resolve its service endpoint.
    pub fn resolve(
        &self,
        definition: &LlmProviderDefinition,
    ) -> Result<ResolvedEndpoint, ProviderError> {
        let handler = self.handler(&definition.provider_type)?;
        let endpoint = handler
            .resolve_endpoint(definition.configuration())
            .map_err(|err| {
                debug!(
                    provider = %definition.name,
                    provider_type = %definition.provider_type,
                    error = %err,
                    "Provider configuration rejected"
                );
                ProviderError::from(err)
            })?;

        debug!(
            provider = %definition.name,
            endpoint = %endpoint,
            "Resolved provider endpoint"
        );
        Ok(endpoint)
    }
}

/// Global default registry.
static GLOBAL_REGISTRY: std::sync::OnceLock<ProviderHandlerRegistry> = std::sync::OnceLock::new();

/// Get the global handler registry, pre-populated with the builtin handlers.
pub fn global_registry() -> &'static ProviderHandlerRegistry {
    GLOBAL_REGISTRY.get_or_init(ProviderHandlerRegistry::with_builtin_handlers)
}

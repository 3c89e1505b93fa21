//! Provider definitions and raw configuration.

use crate::error::ProviderError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Untyped, provider-specific settings.
pub type Configuration = serde_json::Map<String, Value>;

/// Known provider type tags.
pub mod provider_type {
    /// Azure OpenAI Service.
    pub const AZURE: &str = "azure";
}

/// An LLM provider as stored by the control plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmProviderDefinition {
    /// Unique provider name.
    pub name: String,
    /// Provider type tag, used to select a handler.
    #[serde(rename = "type")]
    pub provider_type: String,
    /// Provider-specific settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_configs: Option<Configuration>,
}

impl LlmProviderDefinition {
    /// Create a definition with no raw configuration.
    pub fn new(name: impl Into<String>, provider_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            provider_type: provider_type.into(),
            raw_configs: None,
        }
    }

    /// Parse a definition from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a definition from a JSON value.
    pub fn from_value(value: Value) -> Result<Self, ProviderError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Set a single raw configuration entry.
    #[must_use]
    pub fn with_raw_config(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.raw_configs
            .get_or_insert_with(Configuration::new)
            .insert(key.into(), value.into());
        self
    }

    /// Borrow the raw configuration, if present.
    pub fn configuration(&self) -> Option<&Configuration> {
        self.raw_configs.as_ref()
    }
}

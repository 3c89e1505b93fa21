//! Error types for provider handlers.
//!
//! Validation failures are terminal: they are returned to the caller as-is
//! and never retried or recovered internally.

use thiserror::Error;

/// A provider configuration failed validation.
///
/// Every failure path has its own variant so callers can report exactly
/// which part of the configuration is wrong.
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    /// The configuration map was absent or empty.
    #[error("Missing {provider} specific configurations.")]
    MissingConfiguration {
        /// Display name of the provider.
        provider: &'static str,
    },

    /// The field was absent or held a non-string value.
    #[error("{key} must be a string.")]
    NotAString {
        /// Configuration key.
        key: &'static str,
    },

    /// The field was an empty string.
    #[error("{key} cannot be empty.")]
    EmptyValue {
        /// Configuration key.
        key: &'static str,
    },

    /// The field could not be parsed as a URI.
    #[error("{key} is not a valid URL.")]
    InvalidUrl {
        /// Configuration key.
        key: &'static str,
        /// Underlying parse failure.
        #[source]
        source: UriSyntaxError,
    },

    /// The URI has no scheme.
    #[error("{provider} service URL must have a scheme.")]
    MissingScheme {
        /// Display name of the provider.
        provider: &'static str,
    },

    /// The URI scheme is not `http` or `https`.
    #[error("{provider} service URL must have a valid scheme.")]
    UnsupportedScheme {
        /// Display name of the provider.
        provider: &'static str,
        /// The rejected scheme, as written.
        scheme: String,
    },
}

impl ConfigValidationError {
    /// The configuration key this error refers to, if any.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Self::NotAString { key } | Self::EmptyValue { key } | Self::InvalidUrl { key, .. } => {
                Some(*key)
            }
            _ => None,
        }
    }
}

/// A string could not be parsed as a URI reference.
#[derive(Debug, Error)]
#[error("Malformed URI reference {input:?}: {source}")]
pub struct UriSyntaxError {
    /// The rejected input.
    pub input: String,
    /// Failure reported by the IRI validator.
    #[source]
    pub source: iri_string::validate::Error,
}

/// Errors raised while dispatching to a provider handler.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// No handler is registered for the provider type.
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// The provider's configuration is invalid.
    #[error(transparent)]
    Validation(#[from] ConfigValidationError),

    /// A provider definition could not be deserialized.
    #[error("Invalid provider definition: {0}")]
    InvalidDefinition(#[from] serde_json::Error),
}

/// Result type alias using ProviderError.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_validation_messages() {
        let err = ConfigValidationError::MissingConfiguration { provider: "Azure" };
        assert_eq!(err.to_string(), "Missing Azure specific configurations.");

        let err = ConfigValidationError::NotAString {
            key: "azureServiceUrl",
        };
        assert_eq!(err.to_string(), "azureServiceUrl must be a string.");

        let err = ConfigValidationError::UnsupportedScheme {
            provider: "Azure",
            scheme: "ftp".to_string(),
        };
        assert_eq!(err.to_string(), "Azure service URL must have a valid scheme.");
    }

    #[test]
    fn test_invalid_url_carries_cause() {
        let source = crate::uri::ServiceUri::parse("bad url").unwrap_err();
        let err = ConfigValidationError::InvalidUrl {
            key: "azureServiceUrl",
            source,
        };

        assert_eq!(err.key(), Some("azureServiceUrl"));
        let cause = err.source().expect("cause should be attached");
        assert!(cause.to_string().starts_with("Malformed URI reference \"bad url\""));
        assert!(cause.source().is_some());
    }

    #[test]
    fn test_provider_error_is_transparent() {
        let err: ProviderError = ConfigValidationError::EmptyValue {
            key: "azureServiceUrl",
        }
        .into();
        assert_eq!(err.to_string(), "azureServiceUrl cannot be empty.");
    }
}

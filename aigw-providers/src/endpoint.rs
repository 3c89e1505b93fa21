//! Resolved service endpoints.
//!
//! A [`ResolvedEndpoint`] is what the service-registration layer needs to
//! route traffic to a provider: how to look the service up, where it lives,
//! and how to talk to it.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// How the routing layer resolves a provider's network location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RegistryType {
    /// Resolve the domain via DNS.
    #[serde(rename = "DNS")]
    Dns,
}

impl RegistryType {
    /// Tag string for this registry type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dns => "DNS",
        }
    }
}

impl fmt::Display for RegistryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Protocol used to reach a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceProtocol {
    /// Plain HTTP.
    #[default]
    Http,
    /// HTTP over TLS.
    Https,
}

impl ServiceProtocol {
    /// Protocol string, always lowercase.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }

    /// Default port for this protocol.
    pub fn default_port(&self) -> u16 {
        match self {
            Self::Http => 80,
            Self::Https => 443,
        }
    }

    /// Parse a scheme strictly, ignoring case.
    ///
    /// Returns `None` for anything other than `http` or `https`.
    pub fn parse_scheme(scheme: &str) -> Option<Self> {
        if scheme.eq_ignore_ascii_case("http") {
            Some(Self::Http)
        } else if scheme.eq_ignore_ascii_case("https") {
            Some(Self::Https)
        } else {
            None
        }
    }

    /// Map a scheme leniently: absent or unrecognized schemes become HTTP.
    pub fn from_scheme(scheme: Option<&str>) -> Self {
        match scheme {
            None => Self::Http,
            Some(scheme) => Self::parse_scheme(scheme).unwrap_or_else(|| {
                debug!(scheme, "Unrecognized scheme, falling back to http");
                Self::Http
            }),
        }
    }
}

impl fmt::Display for ServiceProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized location of a provider, ready for service registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedEndpoint {
    /// How the location is resolved.
    pub registry_type: RegistryType,
    /// Host name, as parsed from the service URL.
    pub domain: String,
    /// Service port.
    pub port: u16,
    /// Service protocol.
    pub protocol: ServiceProtocol,
}

impl fmt::Display for ResolvedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}", self.protocol, self.domain, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_protocol_from_scheme() {
        assert_eq!(ServiceProtocol::from_scheme(Some("http")), ServiceProtocol::Http);
        assert_eq!(ServiceProtocol::from_scheme(Some("HTTPS")), ServiceProtocol::Https);
        assert_eq!(ServiceProtocol::from_scheme(Some("ftp")), ServiceProtocol::Http);
        assert_eq!(ServiceProtocol::from_scheme(None), ServiceProtocol::Http);
    }

    #[test]
    fn test_protocol_default_port() {
        assert_eq!(ServiceProtocol::Http.default_port(), 80);
        assert_eq!(ServiceProtocol::Https.default_port(), 443);
    }

    #[test]
    fn test_parse_scheme_is_strict() {
        assert_eq!(ServiceProtocol::parse_scheme("Http"), Some(ServiceProtocol::Http));
        assert_eq!(ServiceProtocol::parse_scheme("ws"), None);
    }

    #[test]
    fn test_endpoint_serialization() {
        let endpoint = ResolvedEndpoint {
            registry_type: RegistryType::Dns,
            domain: "my-azure.example.com".to_string(),
            port: 443,
            protocol: ServiceProtocol::Https,
        };

        let json = serde_json::to_value(&endpoint).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "registryType": "DNS",
                "domain": "my-azure.example.com",
                "port": 443,
                "protocol": "https",
            })
        );

        let back: ResolvedEndpoint = serde_json::from_value(json).unwrap();
        assert_eq!(back, endpoint);
    }

    #[test]
    fn test_endpoint_display() {
        let endpoint = ResolvedEndpoint {
            registry_type: RegistryType::Dns,
            domain: "example.com".to_string(),
            port: 80,
            protocol: ServiceProtocol::Http,
        };
        assert_eq!(endpoint.to_string(), "http://example.com:80");
        assert_eq!(RegistryType::Dns.to_string(), "DNS");
    }
}

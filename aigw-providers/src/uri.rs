//! Service URI parsing.
//!
//! Provider configurations carry their upstream location as a URL string.
//! It is parsed as an RFC 3987 IRI reference: malformed percent-escapes and
//! characters that can never appear in a URI (whitespace, `"<>\^`{|}`) are
//! rejected, while components are kept exactly as written. Hosts are not
//! case-folded or punycode-encoded, ports are not range-checked, and an empty
//! authority (`http:///path`) yields no host. Scheme-less references such as
//! `example.com/openai` parse with no scheme, leaving the decision about
//! whether that is acceptable to the caller.

use crate::error::UriSyntaxError;
use iri_string::types::IriReferenceStr;

/// A parsed service URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUri {
    scheme: Option<String>,
    host: Option<String>,
}

impl ServiceUri {
    /// Parse a URI reference.
    pub fn parse(input: &str) -> Result<Self, UriSyntaxError> {
        let reference = IriReferenceStr::new(input).map_err(|source| UriSyntaxError {
            input: input.to_string(),
            source,
        })?;

        let host = reference
            .authority_components()
            .map(|authority| authority.host())
            .filter(|host| !host.is_empty())
            .map(str::to_string);

        Ok(Self {
            scheme: reference.scheme_str().map(str::to_string),
            host,
        })
    }

    /// The scheme as written, if the reference is absolute.
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// The host component as written, if non-empty.
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }
}

impl std::str::FromStr for ServiceUri {
    type Err = UriSyntaxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_absolute() {
        let uri = ServiceUri::parse("https://my-azure.example.com/openai").unwrap();
        assert_eq!(uri.scheme(), Some("https"));
        assert_eq!(uri.host(), Some("my-azure.example.com"));
    }

    #[test]
    fn test_parse_keeps_case() {
        let uri = ServiceUri::parse("HTTPS://Example.com").unwrap();
        assert_eq!(uri.scheme(), Some("HTTPS"));
        assert_eq!(uri.host(), Some("Example.com"));
    }

    #[test]
    fn test_parse_keeps_unicode_host() {
        let uri = ServiceUri::parse("https://bücher.example/x").unwrap();
        assert_eq!(uri.host(), Some("bücher.example"));
    }

    #[test]
    fn test_parse_other_scheme() {
        let uri = ServiceUri::parse("ftp://host/path").unwrap();
        assert_eq!(uri.scheme(), Some("ftp"));
        assert_eq!(uri.host(), Some("host"));
    }

    #[rstest]
    #[case("http:///path")]
    #[case("http://")]
    #[case("https://?api-version=1")]
    fn test_parse_empty_authority_has_no_host(#[case] input: &str) {
        let uri = ServiceUri::parse(input).unwrap();
        assert!(uri.scheme().is_some());
        assert_eq!(uri.host(), None);
    }

    #[test]
    fn test_parse_keeps_ip_literal_and_drops_userinfo_and_port() {
        let uri = ServiceUri::parse("https://user@[::1]:8443/v1").unwrap();
        assert_eq!(uri.host(), Some("[::1]"));
    }

    #[test]
    fn test_parse_does_not_range_check_port() {
        let uri = ServiceUri::parse("http://example.com:99999").unwrap();
        assert_eq!(uri.host(), Some("example.com"));
    }

    #[rstest]
    #[case("not a url with spaces")]
    #[case("https://example.com/a b")]
    #[case("https://host/%zz")]
    #[case("https://host/%4")]
    #[case("https://exa<mple>.com")]
    fn test_parse_rejects_malformed(#[case] input: &str) {
        let err = ServiceUri::parse(input).unwrap_err();
        assert_eq!(err.input, input);
    }

    #[test]
    fn test_parse_relative_path_has_no_scheme() {
        let uri = ServiceUri::parse("example.com/openai").unwrap();
        assert_eq!(uri.scheme(), None);
        assert_eq!(uri.host(), None);
    }

    #[test]
    fn test_parse_network_path_keeps_host() {
        let uri = ServiceUri::parse("//example.com/openai").unwrap();
        assert_eq!(uri.scheme(), None);
        assert_eq!(uri.host(), Some("example.com"));
    }

    #[test]
    fn test_from_str() {
        let uri: ServiceUri = "http://localhost:8080".parse().unwrap();
        assert_eq!(uri.host(), Some("localhost"));
    }
}

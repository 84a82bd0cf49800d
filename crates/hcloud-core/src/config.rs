//! Configuration structures for Hetzner Cloud clients.
//!
//! The configuration carries the API origin, the bearer token and optional
//! transport settings. It is validated once, when the client is built.

use crate::types::DEFAULT_API_URL;
use crate::Error;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;
use validator::{Validate, ValidationError};

/// Configuration for a Hetzner Cloud client instance.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct HcloudClientConfig {
    /// API base URL
    #[validate(url)]
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Bearer token; never serialized, checked by [`HcloudClientConfig::check`]
    #[serde(skip_serializing)]
    pub token: SecretString,

    /// Optional request timeout in seconds; no timeout when unset
    #[validate(range(min = 1, max = 300))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    /// Optional User-Agent override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn validate_token(token: &SecretString) -> Result<(), ValidationError> {
    if token.expose_secret().trim().is_empty() {
        return Err(ValidationError::new("blank_token"));
    }
    Ok(())
}

impl HcloudClientConfig {
    /// Create a configuration for the default API origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the token is blank.
    pub fn new(token: impl Into<String>) -> Result<Self, Error> {
        Self::with_api_url(DEFAULT_API_URL, token)
    }

    /// Create a configuration for a specific API origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the URL is blank or invalid, or the
    /// token is blank.
    pub fn with_api_url(api_url: impl Into<String>, token: impl Into<String>) -> Result<Self, Error> {
        let api_url = api_url.into();
        if api_url.trim().is_empty() {
            return Err(Error::ConfigError("API URL must not be blank".to_string()));
        }

        let config = Self {
            api_url,
            token: SecretString::from(token.into()),
            request_timeout_secs: None,
            user_agent: None,
        };

        config.check()?;
        Ok(config)
    }

    /// Set the request timeout in seconds.
    #[must_use]
    pub const fn with_timeout(mut self, seconds: u64) -> Self {
        self.request_timeout_secs = Some(seconds);
        self
    }

    /// Set the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Get the request timeout as a Duration, if set.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] describing every invalid field.
    pub fn check(&self) -> Result<(), Error> {
        validate_token(&self.token)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: token: {e}")))?;
        self.validate()
            .map_err(|e| Error::ConfigError(format!("Invalid configuration: {e}")))
    }

    /// Parse and validate the API URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed.
    pub fn parse_api_url(&self) -> Result<Url, Error> {
        Url::parse(&self.api_url).map_err(|e| Error::ConfigError(format!("Invalid API URL: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = HcloudClientConfig::new("secret-token").unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.token.expose_secret(), "secret-token");
        assert!(config.timeout().is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn test_config_blank_token() {
        assert!(matches!(
            HcloudClientConfig::new("  "),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_check_rejects_token_blanked_after_construction() {
        let mut config = HcloudClientConfig::new("t").unwrap();
        config.token = SecretString::from("   ".to_string());
        let err = config.check().unwrap_err();
        assert!(matches!(&err, Error::ConfigError(msg) if msg.contains("blank_token")));
    }

    #[test]
    fn test_config_blank_or_invalid_url() {
        assert!(matches!(
            HcloudClientConfig::with_api_url("", "token"),
            Err(Error::ConfigError(_))
        ));
        assert!(matches!(
            HcloudClientConfig::with_api_url("not-a-url", "token"),
            Err(Error::ConfigError(_))
        ));
    }

    #[test]
    fn test_config_builder() {
        let config = HcloudClientConfig::with_api_url("http://localhost:8080/v1", "t")
            .unwrap()
            .with_timeout(45)
            .with_user_agent("tests/1.0");

        assert_eq!(config.timeout(), Some(Duration::from_secs(45)));
        assert_eq!(config.user_agent.as_deref(), Some("tests/1.0"));
        let url = config.parse_api_url().unwrap();
        assert_eq!(url.host_str(), Some("localhost"));
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_config_validation_timeout_range() {
        let mut config = HcloudClientConfig::new("t").unwrap();
        config.request_timeout_secs = Some(0);
        assert!(config.check().is_err());

        config.request_timeout_secs = Some(301);
        assert!(config.check().is_err());

        config.request_timeout_secs = Some(30);
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_config_serialization_omits_token() {
        let config = HcloudClientConfig::new("very-secret").unwrap().with_timeout(10);
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("very-secret"));
        assert!(json.contains("request_timeout_secs"));
    }

    #[test]
    fn test_config_deserialization() {
        let config: HcloudClientConfig =
            serde_json::from_str(r#"{"token":"abc","request_timeout_secs":20}"#).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.token.expose_secret(), "abc");
        assert!(config.check().is_ok());
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = HcloudClientConfig::new("very-secret").unwrap();
        assert!(!format!("{config:?}").contains("very-secret"));
    }
}

//! Error types for Hetzner Cloud operations.
//!
//! This module provides the error taxonomy every call can fail with, and the
//! typed shape of the error envelope returned by the API on non-2xx responses.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Main error type for Hetzner Cloud operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid client setup (blank base URL, blank token, bad timeout).
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Connection failure, or a non-2xx response without a readable error envelope.
    #[error("Transport error{}: {body}", .status.map(|s| format!(" (HTTP {s})")).unwrap_or_default())]
    Transport {
        /// HTTP status, when a response was received
        status: Option<u16>,
        /// Raw response body or connection error text
        body: String,
    },

    /// Non-2xx response carrying a decoded API error envelope.
    #[error("API error (HTTP {status}): {error}")]
    Api {
        /// HTTP status of the response
        status: u16,
        /// Decoded error payload
        error: ApiError,
    },

    /// A 2xx response that could not be mapped onto the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// A composite operation was cancelled while waiting.
    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

/// Specialized result type for Hetzner Cloud operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns a stable code for this error variant.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::Transport { .. } => "TRANSPORT_ERROR",
            Self::Api { .. } => "API_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::Cancelled(_) => "CANCELLED",
        }
    }

    /// Returns the decoded API error, if the remote service returned one.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Returns the API error code, if the remote service returned one.
    #[must_use]
    pub const fn api_code(&self) -> Option<&ErrorCode> {
        match self {
            Self::Api { error, .. } => Some(&error.code),
            _ => None,
        }
    }

    /// Returns the HTTP status associated with this error, if any.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns true if this error should be logged as a serious error.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        matches!(
            self,
            Self::ConfigError(_) | Self::Transport { .. } | Self::Decode(_)
        )
    }
}

wire_enum! {
    /// Error codes documented by the API.
    pub enum ErrorCode {
        /// Insufficient permissions for this request
        Forbidden => "forbidden",
        /// Request was made with an invalid or unknown token
        Unauthorized => "unauthorized",
        /// Error while parsing or processing the input
        InvalidInput => "invalid_input",
        /// Invalid JSON input in the request
        JsonError => "json_error",
        /// The item you are trying to access is locked
        Locked => "locked",
        /// Entity not found
        NotFound => "not_found",
        /// Error when sending too many requests
        RateLimitExceeded => "rate_limit_exceeded",
        /// Error when exceeding the maximum quantity of a resource
        ResourceLimitExceeded => "resource_limit_exceeded",
        /// The requested resource is currently unavailable
        ResourceUnavailable => "resource_unavailable",
        /// Error within the API backend
        ServerError => "server_error",
        /// Error within a downstream service
        ServiceError => "service_error",
        /// One or more fields must be unique
        UniquenessError => "uniqueness_error",
        /// The action cannot be performed due to delete protection
        Protected => "protected",
        /// Cannot perform operation due to maintenance
        Maintenance => "maintenance",
        /// The resource has changed during the request
        Conflict => "conflict",
        /// The corresponding resource does not support the action
        UnsupportedError => "unsupported_error",
        /// The token is only allowed to perform GET requests
        TokenReadonly => "token_readonly",
        /// A service or product is currently not available
        Unavailable => "unavailable",
        /// The request could not be answered in time
        Timeout => "timeout",
        /// The server could not be placed according to its placement group
        PlacementError => "placement_error",
    }
}

/// Top-level error envelope: `{"error": {...}}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Error details
    pub error: ApiError,
}

/// Error payload returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Field-level details, present for input validation failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<ErrorDetails>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl ApiError {
    /// Returns the messages reported for a single input field.
    #[must_use]
    pub fn field_messages(&self, name: &str) -> Option<&[String]> {
        self.details
            .as_ref()?
            .fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.messages.as_slice())
    }
}

/// Additional error details.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ErrorDetails {
    /// Per-field validation messages
    #[serde(default)]
    pub fields: Vec<FieldError>,
}

/// Validation messages for one input field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    /// Name of the offending field
    pub name: String,
    /// Messages describing what is wrong with it
    #[serde(default)]
    pub messages: Vec<String>,
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport {
            status: err.status().map(|status| status.as_u16()),
            body: err.to_string(),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigError(format!("Invalid URL: {err}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ConfigError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOT_FOUND_ENVELOPE: &str = r#"{"error":{"code":"not_found","message":"action with ID '999999' not found","details":{"fields":[{"name":"id","messages":["unknown id"]}]}}}"#;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::Transport {
                status: None,
                body: "test".to_string()
            }
            .error_code(),
            "TRANSPORT_ERROR"
        );
        assert_eq!(Error::Decode("test".to_string()).error_code(), "DECODE_ERROR");
        assert_eq!(Error::Cancelled("test".to_string()).error_code(), "CANCELLED");
    }

    #[test]
    fn test_error_display() {
        let err = Error::Transport {
            status: Some(502),
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Transport error (HTTP 502): bad gateway");

        let err = Error::Transport {
            status: None,
            body: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "Transport error: connection refused");

        let err = Error::Api {
            status: 423,
            error: ApiError {
                code: ErrorCode::Locked,
                message: "server is locked".to_string(),
                details: None,
            },
        };
        assert_eq!(err.to_string(), "API error (HTTP 423): locked: server is locked");
    }

    #[test]
    fn test_error_envelope_roundtrip() {
        let envelope: ErrorResponse = serde_json::from_str(NOT_FOUND_ENVELOPE).unwrap();
        assert_eq!(envelope.error.code, ErrorCode::NotFound);
        assert_eq!(envelope.error.message, "action with ID '999999' not found");
        assert_eq!(
            envelope.error.field_messages("id"),
            Some(&["unknown id".to_string()][..])
        );

        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(json, NOT_FOUND_ENVELOPE);
    }

    #[test]
    fn test_unknown_error_code_is_retained() {
        let json = r#"{"error":{"code":"brand_new_code","message":"later"}}"#;
        let envelope: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            envelope.error.code,
            ErrorCode::Unrecognized("brand_new_code".to_string())
        );
        assert!(envelope.error.code.is_unrecognized());
        assert_eq!(serde_json::to_string(&envelope).unwrap(), json);
    }

    #[test]
    fn test_error_code_wire_names() {
        assert_eq!(ErrorCode::InvalidInput.as_str(), "invalid_input");
        assert_eq!(ErrorCode::TokenReadonly.to_string(), "token_readonly");
        assert_eq!(
            "resource_limit_exceeded".parse::<ErrorCode>().unwrap(),
            ErrorCode::ResourceLimitExceeded
        );
    }

    #[test]
    fn test_details_are_optional() {
        let json = r#"{"code":"forbidden","message":"nope","details":{}}"#;
        let error: ApiError = serde_json::from_str(json).unwrap();
        assert_eq!(error.details, Some(ErrorDetails::default()));
        assert!(error.field_messages("name").is_none());
    }

    #[test]
    fn test_api_accessors() {
        let err = Error::Api {
            status: 404,
            error: ApiError {
                code: ErrorCode::NotFound,
                message: "missing".to_string(),
                details: None,
            },
        };
        assert_eq!(err.api_code(), Some(&ErrorCode::NotFound));
        assert_eq!(err.status(), Some(404));
        assert!(!err.should_log());

        let err = Error::Decode("bad".to_string());
        assert!(err.api_error().is_none());
        assert!(err.should_log());
    }

    #[test]
    fn test_from_url_parse_error() {
        let err = url::Url::parse("not a url").unwrap_err();
        let hcloud_err: Error = err.into();
        assert!(matches!(hcloud_err, Error::ConfigError(_)));
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let hcloud_err: Error = err.into();
        assert!(matches!(hcloud_err, Error::Decode(_)));
    }

    #[test]
    fn test_error_partial_eq() {
        let err1 = Error::Decode("test".to_string());
        let err2 = Error::Decode("test".to_string());
        let err3 = Error::Decode("other".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}

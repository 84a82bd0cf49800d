//! HTTP transport seam.
//!
//! The dispatcher only needs to send a fully prepared request and read back a
//! status and body. [`ReqwestTransport`] does that over HTTPS; tests plug in
//! mocks through the [`Transport`] trait.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::{Client, ClientBuilder, Method, StatusCode};
use std::time::Duration;
use tracing::debug;

use crate::error::{Error, Result};

/// A fully prepared HTTP request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute target URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Serialized JSON body
    pub body: Option<Vec<u8>>,
}

/// Raw HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response body text
    pub body: String,
}

impl HttpResponse {
    /// Create a response from a status code and body.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends prepared requests. Implementations must be safe for concurrent use.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when no response could be obtained.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// [`Transport`] backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Build a transport with an optional request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the HTTP client cannot be built.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = ClientBuilder::new().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|err| Error::ConfigError(format!("Failed to build HTTP client: {err}")))?;

        Ok(Self { http })
    }

    /// Wrap an existing `reqwest` client.
    #[must_use]
    pub const fn from_client(http: Client) -> Self {
        Self { http }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self
            .http
            .request(request.method, request.url.as_str())
            .headers(request.headers);
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|err| {
            debug!(url = %request.url, error = %err, "transport failure");
            Error::Transport {
                status: None,
                body: err.to_string(),
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|err| Error::Transport {
            status: Some(status.as_u16()),
            body: format!("Failed to read response body: {err}"),
        })?;

        Ok(HttpResponse { status, body })
    }
}

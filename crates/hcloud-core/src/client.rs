//! Request dispatcher shared by every endpoint.
//!
//! [`ApiClient`] attaches credentials and JSON headers, sends exactly one
//! request through the configured [`Transport`], and classifies the response:
//!
//! - 2xx: the body is decoded into the requested type, or [`Error::Decode`].
//! - non-2xx with an error envelope: [`Error::Api`].
//! - non-2xx without one: [`Error::Transport`] with the raw status and body.
//!
//! There is no retry, backoff or caching.

use reqwest::header::{self, HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::HcloudClientConfig;
use crate::error::{Error, ErrorResponse, Result};
use crate::query::UrlBuilder;
use crate::transport::{HttpRequest, HttpResponse, ReqwestTransport, Transport};

/// Default User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("hcloud-rust/", env!("CARGO_PKG_VERSION"));

const JSON: &str = "application/json";

/// Builder for [`ApiClient`].
pub struct ApiClientBuilder {
    config: HcloudClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ApiClientBuilder {
    /// Create a builder from a configuration.
    #[must_use]
    pub fn new(config: HcloudClientConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    /// Use a custom transport instead of the default `reqwest` one.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the dispatcher.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the configuration is invalid or the
    /// HTTP client cannot be created.
    pub fn build(self) -> Result<ApiClient> {
        self.config.check()?;
        self.config.parse_api_url()?;

        let user_agent = self.config.user_agent.as_deref().unwrap_or(USER_AGENT);
        let user_agent_header = HeaderValue::from_str(user_agent)
            .map_err(|_| Error::ConfigError("User-Agent contains invalid header characters".to_string()))?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::new(user_agent, self.config.timeout())?),
        };

        Ok(ApiClient {
            transport,
            user_agent: user_agent_header,
            base_url: self.config.api_url.trim_end_matches('/').to_string(),
            token: Arc::new(self.config.token),
        })
    }
}

/// Authenticated request dispatcher.
///
/// Cloning is cheap; clones share the transport and the credential.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    base_url: String,
    user_agent: HeaderValue,
    token: Arc<SecretString>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Start a builder from a configuration.
    #[must_use]
    pub fn builder(config: HcloudClientConfig) -> ApiClientBuilder {
        ApiClientBuilder::new(config)
    }

    /// Return the API base URL, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Start a URL for a path relative to the API base.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the resulting base is blank.
    pub fn url(&self, path: &str) -> Result<UrlBuilder> {
        UrlBuilder::new(format!("{}/{}", self.base_url, path.trim_start_matches('/')))
    }

    /// Send a GET request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn get<R>(&self, url: &UrlBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.execute::<(), R>(Method::GET, url, None).await
    }

    /// Send a POST request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn post<B, R>(&self, url: &UrlBuilder, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.execute(Method::POST, url, body).await
    }

    /// Send a PUT request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn put<B, R>(&self, url: &UrlBuilder, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.execute(Method::PUT, url, Some(body)).await
    }

    /// Send a DELETE request.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::execute`].
    pub async fn delete<R>(&self, url: &UrlBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.execute::<(), R>(Method::DELETE, url, None).await
    }

    /// Send one request and classify the response.
    ///
    /// # Errors
    ///
    /// - [`Error::Decode`] if the body cannot be serialized or a 2xx body does
    ///   not match `R`.
    /// - [`Error::Api`] for a non-2xx response with an error envelope.
    /// - [`Error::Transport`] for connection failures and non-2xx responses
    ///   without an envelope.
    pub async fn execute<B, R>(&self, method: Method, url: &UrlBuilder, body: Option<&B>) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        let body = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|err| Error::Decode(format!("Failed to encode request body: {err}")))?;

        let request = HttpRequest {
            method,
            url: url.to_uri(),
            headers: self.headers()?,
            body,
        };

        debug!(method = %request.method, url = %request.url, "Sending API request");
        let response = self.transport.send(request).await?;
        decode_response(response)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token.expose_secret()))
            .map_err(|_| Error::ConfigError("Token contains invalid header characters".to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
        headers.insert(header::USER_AGENT, self.user_agent.clone());
        Ok(headers)
    }
}

/// Classify a raw response into a typed value or a typed failure.
///
/// An empty 2xx body is decoded as JSON `null`, so `()` and `Option<T>`
/// targets accept `204 No Content`.
///
/// # Errors
///
/// See [`ApiClient::execute`].
pub fn decode_response<R>(response: HttpResponse) -> Result<R>
where
    R: DeserializeOwned,
{
    let HttpResponse { status, body } = response;

    if status.is_success() {
        let payload = if body.trim().is_empty() { "null" } else { body.as_str() };
        return serde_json::from_str(payload).map_err(|err| {
            Error::Decode(format!("Failed to decode {status} response: {err}"))
        });
    }

    match serde_json::from_str::<ErrorResponse>(&body) {
        Ok(envelope) => {
            debug!(status = status.as_u16(), code = %envelope.error.code, "API request rejected");
            Err(Error::Api {
                status: status.as_u16(),
                error: envelope.error,
            })
        }
        Err(_) => {
            warn!(status = status.as_u16(), "API error response without error envelope");
            Err(Error::Transport {
                status: Some(status.as_u16()),
                body,
            })
        }
    }
}

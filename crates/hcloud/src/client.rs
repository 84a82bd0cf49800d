//! Asynchronous Hetzner Cloud client.

use crate::Result;
use hcloud_core::client::{ApiClient, ApiClientBuilder};
use hcloud_core::config::HcloudClientConfig;
use hcloud_core::transport::Transport;
use hcloud_core::types::{Action, ActionResponse};
use hcloud_core::{QueryParams, UrlBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Builder for [`HcloudClient`].
pub struct HcloudClientBuilder {
    config: HcloudClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl HcloudClientBuilder {
    /// Create a builder for the default API origin.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token is blank.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Ok(Self::from_config(HcloudClientConfig::new(token)?))
    }

    /// Create a builder from an existing configuration.
    #[must_use]
    pub fn from_config(config: HcloudClientConfig) -> Self {
        Self {
            config,
            transport: None,
        }
    }

    /// Override the API base URL.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.config.api_url = api_url.into();
        self
    }

    /// Set a request timeout in seconds.
    #[must_use]
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.config = self.config.with_timeout(seconds);
        self
    }

    /// Override the User-Agent header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    /// Use a custom transport.
    #[must_use]
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the configuration is invalid.
    pub fn build(self) -> Result<HcloudClient> {
        let mut builder = ApiClientBuilder::new(self.config);
        if let Some(transport) = self.transport {
            builder = builder.with_transport(transport);
        }
        let inner = builder.build()?;
        Ok(HcloudClient { inner })
    }
}

/// Asynchronous Hetzner Cloud client.
///
/// Endpoint methods live in the [`crate::api`] modules, composite workflows in
/// [`crate::composite`]. The client holds no mutable state and can be cloned
/// and shared across tasks.
#[derive(Clone, Debug)]
pub struct HcloudClient {
    inner: ApiClient,
}

impl HcloudClient {
    /// Construct a client for the default API origin.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token is blank.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        HcloudClientBuilder::new(token)?.build()
    }

    /// Start a builder.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token is blank.
    pub fn builder(token: impl Into<String>) -> Result<HcloudClientBuilder> {
        HcloudClientBuilder::new(token)
    }

    /// Return the base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.inner.base_url()
    }

    pub(crate) fn url(&self, path: &str) -> Result<UrlBuilder> {
        self.inner.url(path)
    }

    pub(crate) fn list_url<P>(&self, path: &str, params: &P) -> Result<UrlBuilder>
    where
        P: QueryParams + ?Sized,
    {
        Ok(params.apply(self.url(path)?))
    }

    pub(crate) async fn get_json<R>(&self, url: UrlBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.inner.get(&url).await
    }

    pub(crate) async fn post_json<B, R>(&self, url: UrlBuilder, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.inner.post(&url, Some(body)).await
    }

    pub(crate) async fn post_empty<R>(&self, url: UrlBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.inner.post::<(), R>(&url, None).await
    }

    pub(crate) async fn post_action<B>(&self, url: UrlBuilder, body: Option<&B>) -> Result<Action>
    where
        B: Serialize + ?Sized + Sync,
    {
        let response: ActionResponse = self.inner.post(&url, body).await?;
        Ok(response.action)
    }

    pub(crate) async fn put_json<B, R>(&self, url: UrlBuilder, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized + Sync,
        R: DeserializeOwned,
    {
        self.inner.put(&url, body).await
    }

    pub(crate) async fn delete_json<R>(&self, url: UrlBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.inner.delete(&url).await
    }
}

//! Entry point: the async [`Client`] and its builder.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::environment::Environment;
use crate::error::{MergeError, Result};
use crate::http::HttpTransport;
use crate::http::reqwest_transport::ReqwestTransport;
use crate::request::RequestClient;
use crate::retry::RetryConfig;

#[cfg(feature = "accounting")]
use crate::accounting::AccountingClient;
#[cfg(feature = "ats")]
use crate::ats::AtsClient;
#[cfg(feature = "crm")]
use crate::crm::CrmClient;
#[cfg(feature = "filestorage")]
use crate::filestorage::FileStorageClient;
#[cfg(feature = "hris")]
use crate::hris::HrisClient;
#[cfg(feature = "ticketing")]
use crate::ticketing::TicketingClient;

/// Async client for every category.
///
/// Cloning is cheap; clones share one connection pool and configuration.
///
/// ```ignore
/// use merge_api::{Client, Environment, ListParams};
///
/// let client = Client::builder()
///     .api_key(std::env::var("MERGE_API_KEY")?)
///     .account_token(account_token)
///     .environment(Environment::Sandbox)
///     .build()?;
///
/// let employees = client.hris().employees().list(&ListParams::new(), None).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<RequestClient>,
}

impl Client {
    /// Production client with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder().api_key(api_key).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Build a client from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Config`] when no API key is configured.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| MergeError::config("no API key configured (set MERGE_API_KEY)"))?;

        let mut builder = Self::builder()
            .api_key(api_key)
            .environment(config.environment)
            .max_retries(config.max_retries)
            .timeout(config.timeout());
        if let Some(ref token) = config.account_token {
            builder = builder.account_token(token.clone());
        }
        if let Some(ref base_url) = config.base_url {
            builder = builder.base_url(base_url.clone());
        }
        builder.build()
    }

    /// Build a client from config files and `MERGE_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClientConfig::load())
    }

    /// The shared request client, for endpoints without a typed wrapper.
    pub fn request_client(&self) -> &RequestClient {
        &self.inner
    }

    #[cfg(feature = "ats")]
    pub fn ats(&self) -> AtsClient<'_> {
        AtsClient::new(&self.inner)
    }

    #[cfg(feature = "hris")]
    pub fn hris(&self) -> HrisClient<'_> {
        HrisClient::new(&self.inner)
    }

    #[cfg(feature = "crm")]
    pub fn crm(&self) -> CrmClient<'_> {
        CrmClient::new(&self.inner)
    }

    #[cfg(feature = "accounting")]
    pub fn accounting(&self) -> AccountingClient<'_> {
        AccountingClient::new(&self.inner)
    }

    #[cfg(feature = "ticketing")]
    pub fn ticketing(&self) -> TicketingClient<'_> {
        TicketingClient::new(&self.inner)
    }

    #[cfg(feature = "filestorage")]
    pub fn filestorage(&self) -> FileStorageClient<'_> {
        FileStorageClient::new(&self.inner)
    }
}

/// Builder for [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    api_key: Option<String>,
    account_token: Option<String>,
    environment: Environment,
    base_url: Option<String>,
    retry: RetryConfig,
    timeout: Option<Duration>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl ClientBuilder {
    #[must_use]
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Linked account every request acts on, unless overridden per call.
    #[must_use]
    pub fn account_token(mut self, account_token: impl Into<String>) -> Self {
        self.account_token = Some(account_token.into());
        self
    }

    #[must_use]
    pub fn environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Use this base URL instead of the environment's.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    #[must_use]
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.retry = self.retry.with_max_retries(max_retries);
        self
    }

    /// Replace the whole retry policy, including backoff delays.
    #[must_use]
    pub fn retry_config(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Default per-request timeout (60 seconds if unset).
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send requests through a custom transport.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// # Errors
    ///
    /// Returns [`MergeError::Config`] for a missing or unusable API key or
    /// account token, and [`MergeError::Url`] for a malformed base URL.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| MergeError::config("API key is required"))?;

        let base_url = self
            .base_url
            .unwrap_or_else(|| self.environment.base_url().to_string());
        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport: Arc<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Arc::new(ReqwestTransport::with_timeout(timeout)?),
        };

        let mut request = RequestClient::new(&base_url, &api_key, transport)?
            .with_retry(self.retry)
            .with_timeout(Some(timeout));
        if let Some(ref token) = self.account_token {
            request = request.with_account_token(token)?;
        }

        tracing::debug!("Created client for {}", base_url);

        Ok(Client {
            inner: Arc::new(request),
        })
    }
}

//! The card service client and builder.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::actions::{CardActions, SettingsActions, StatsActions, WordActions};
use crate::error::{Error, Result};
use crate::response::ErrorBody;

/// Default URL for the card review service.
const DEFAULT_URL: &str = "http://127.0.0.1:5001";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// The main client for interacting with the card review service.
///
/// # Example
///
/// ```no_run
/// use kelime::KelimeClient;
///
/// # async fn example() -> kelime::Result<()> {
/// // Create a client with default settings
/// let client = KelimeClient::new();
///
/// // Check the collection counts
/// let stats = client.stats().fetch().await?;
/// println!("{} cards total", stats.total);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct KelimeClient {
    http_client: Client,
    base_url: String,
}

impl KelimeClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://127.0.0.1:5001` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access card operations.
    pub fn cards(&self) -> CardActions<'_> {
        CardActions { client: self }
    }

    /// Access dictionary lookup operations.
    pub fn words(&self) -> WordActions<'_> {
        WordActions { client: self }
    }

    /// Access settings operations.
    pub fn settings(&self) -> SettingsActions<'_> {
        SettingsActions { client: self }
    }

    /// Access collection statistics operations.
    pub fn stats(&self) -> StatsActions<'_> {
        StatsActions { client: self }
    }

    /// Issue a GET request for the given API path.
    pub(crate) async fn get<R>(&self, path: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.send(self.request(Method::GET, path)).await
    }

    /// Issue a GET request with query parameters.
    pub(crate) async fn get_with_query<Q, R>(&self, path: &str, query: &Q) -> Result<R>
    where
        Q: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    /// Issue a POST request with a JSON body.
    pub(crate) async fn post<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// Issue a PUT request with a JSON body.
    pub(crate) async fn put<B, R>(&self, path: &str, body: &B) -> Result<R>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), path);
        self.http_client.request(method, url)
    }

    /// Send a request and decode the response body, shaping service errors.
    async fn send<R>(&self, request: RequestBuilder) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() {
                Error::ConnectionRefused
            } else {
                Error::Http(e)
            }
        })?;

        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(Self::api_error(status, response.bytes().await?.as_ref()))
        }
    }

    /// Build an [`Error::Api`] from a non-success response body.
    ///
    /// The service reports failures as `{"error": "<message>"}`; anything else
    /// falls back to the status line so the caller still gets a usable message.
    fn api_error(status: StatusCode, body: &[u8]) -> Error {
        let message = match serde_json::from_slice::<ErrorBody>(body) {
            Ok(body) => body.error,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string(),
        };
        Error::Api {
            status: status.as_u16(),
            message,
        }
    }
}

impl Default for KelimeClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`KelimeClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use kelime::KelimeClient;
///
/// let client = KelimeClient::builder()
///     .url("http://localhost:5001")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the card service URL.
    ///
    /// Defaults to `http://127.0.0.1:5001`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> KelimeClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        KelimeClient {
            http_client,
            base_url: self.base_url,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

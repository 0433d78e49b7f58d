use std::time::Duration;

use reqwest::Method;

pub mod classify;
pub mod error;
pub mod feedback;
pub mod normalize;
pub mod projects;
mod response;

pub use classify::ClassifyOptions;
pub use error::ClassifaiError;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.classifai.dev";

/// Configuration for the ClassifAI client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent as `X-API-Key`. `None` for anonymous access, which is
    /// subject to global rate limits.
    pub api_key: Option<String>,
    pub base_url: String,
    /// Timeout for API calls. The service does not mandate one; 60s is the
    /// crate default and callers with stricter bounds should lower it.
    pub timeout: Duration,
    /// Timeout for downloading URL content during normalization.
    pub fetch_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(60),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Create config for anonymous access.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Create config with an API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL. Trailing slashes are stripped.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn fetch_timeout(mut self, fetch_timeout: Duration) -> Self {
        self.fetch_timeout = fetch_timeout;
        self
    }
}

/// The ClassifAI API client.
///
/// Holds its own base URL and headers; no global state is shared between
/// instances.
pub struct ClassifaiClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
}

impl ClassifaiClient {
    pub fn new(mut config: ClientConfig) -> Result<Self, ClassifaiError> {
        config.base_url = config.base_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClassifaiError::Client(e.to_string()))?;
        Ok(Self { http, config })
    }

    /// Get a reference to the client config.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build an API request with the standard headers. Content downloads
    /// during normalization do not go through here, so the API key is never
    /// sent to third-party hosts.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut req = self
            .http
            .request(method, &url)
            .header("content-type", "application/json");
        if let Some(api_key) = &self.config.api_key {
            req = req.header("X-API-Key", api_key);
        }
        req
    }
}

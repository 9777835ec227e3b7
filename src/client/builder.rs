use crate::client::core::ApiClient;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Where the Protocol Builder server listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// Builder for creating clients with custom configuration.
///
/// Keep this surface small and predictable: a base URL (the usual override is
/// a mock server in tests) and an optional request timeout.
pub struct ApiClientBuilder {
    base_url: String,
    timeout: Option<Duration>,
}

impl ApiClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }

    /// Set the server base URL. A trailing slash is tolerated.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds, overridable via
    /// `PB_HTTP_TIMEOUT_SECS`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client. Fails if the base URL does not parse.
    pub fn build(self) -> Result<ApiClient> {
        let transport = HttpTransport::new(&self.base_url, self.timeout)?;
        Ok(ApiClient {
            transport: Arc::new(transport),
        })
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

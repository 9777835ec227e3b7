use crate::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::env;
use std::time::Duration;
use url::Url;

/// A response as read off the wire: status, content type, body text.
///
/// The endpoint wrappers decide what the body means; the transport only
/// guarantees it has been fully read, so a later decode step cannot hit the
/// network again.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: String,
    pub body: String,
}

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| Error::configuration(format!("invalid base URL {base_url:?}: {e}")))?;

        // Minimal production-friendly defaults (env-overridable).
        let timeout = timeout.unwrap_or_else(default_timeout);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(
                env::var("PB_HTTP_POOL_MAX_IDLE_PER_HOST")
                    .ok()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(8),
            )
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue one request and read the whole response.
    ///
    /// `path` must start with `/`. A `body` is sent as JSON with the matching
    /// content type; `None` sends no body at all.
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<RawResponse> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "issuing request");

        let mut req = self.client.request(method, &url);
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = response.text().await?;

        tracing::debug!(%url, status, bytes = body.len(), "response received");
        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }

    pub async fn get(&self, path: &str) -> Result<RawResponse> {
        self.request(Method::GET, path, None).await
    }
}

fn default_timeout() -> Duration {
    let secs = env::var("PB_HTTP_TIMEOUT_SECS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(30);
    Duration::from_secs(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_garbage_base_url() {
        let err = HttpTransport::new("not a url", None).err();
        assert!(matches!(err, Some(Error::Configuration { .. })));
    }

    #[test]
    fn trims_trailing_slash() {
        let transport = HttpTransport::new("http://localhost:3001/", None).unwrap();
        assert_eq!(transport.base_url, "http://localhost:3001");
    }
}

use crate::render;
use crate::transport::{HttpTransport, RawResponse};
use crate::types::health::HealthStatus;
use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Client for the Protocol Builder REST API.
///
/// One method per endpoint, grouped across `flows.rs` (CRUD and raw YAML) and
/// `ai.rs` (assistant status and chat). Every method prints a response banner
/// before returning; see [`crate::render`].
pub struct ApiClient {
    pub(crate) transport: Arc<HttpTransport>,
}

impl ApiClient {
    /// Create a client for the given base URL with default settings.
    pub fn new(base_url: &str) -> Result<Self> {
        crate::client::builder::ApiClientBuilder::new()
            .base_url(base_url)
            .build()
    }

    /// `GET /health`. Returns the payload whatever the HTTP status is; the
    /// caller inspects the status field.
    pub async fn health(&self) -> Result<HealthStatus> {
        let response = self.transport.get("/health").await?;
        render::print_response("Health Check", &response);
        decode_any_status(&response)
    }
}

/// Decode the body of an endpoint that reports through its payload rather
/// than its status code. An undecodable body here is a real error, carrying
/// the status for diagnosis, not a panic.
pub(crate) fn decode_any_status<T: DeserializeOwned>(response: &RawResponse) -> Result<T> {
    serde_json::from_str(&response.body)
        .map_err(|e| Error::unexpected_body(response.status, e.to_string()))
}

/// Decode the body only when the status matches; any other status is the
/// server saying no, reported as `None`.
pub(crate) fn decode_if_status<T: DeserializeOwned>(
    response: &RawResponse,
    expected: u16,
) -> Result<Option<T>> {
    if response.status != expected {
        return Ok(None);
    }
    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|e| Error::unexpected_body(response.status, e.to_string()))
}

/// Raw-text variant of [`decode_if_status`] for the YAML endpoints.
pub(crate) fn text_if_status(response: &RawResponse, expected: u16) -> Option<String> {
    (response.status == expected).then(|| response.body.clone())
}

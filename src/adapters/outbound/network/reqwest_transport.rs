use crate::ports::outbound::{HttpResponse, HttpTransport, TransportError};
use crate::shared::Result;
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// ReqwestTransport adapter implementing the HttpTransport port
///
/// Uses the async reqwest client with a fixed user agent and an explicit
/// per-request timeout.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECONDS))
    }

    /// Creates a transport whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("wanted-list/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

// Note: no Default implementation, client creation can fail.
// Use ReqwestTransport::new() and handle the Result.

/// Maps a reqwest error onto the transport failure categories
///
/// Builder errors are raised before anything is sent; every other
/// failure means the server could not be reached or the exchange broke off.
fn classify_error(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::Request(error.to_string())
    } else {
        TransportError::Connect(error.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError> {
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify_error)?;

        Ok(HttpResponse { status, body })
    }
}

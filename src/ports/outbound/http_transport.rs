use async_trait::async_trait;
use thiserror::Error;

/// Raw HTTP response as seen by the data access layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure below the HTTP status level
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// No connection could be established (includes transport timeouts)
    #[error("connection failed: {0}")]
    Connect(String),
    /// The request could not be built or sent from the client side
    #[error("request failed: {0}")]
    Request(String),
}

/// HttpTransport port supplying the GET capability
///
/// Implementations carry default headers and timeouts. Any received HTTP
/// response, including error statuses, is returned as `Ok`.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request against an absolute URL
    async fn get(&self, url: &str) -> std::result::Result<HttpResponse, TransportError>;
}

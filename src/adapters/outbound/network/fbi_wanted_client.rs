use crate::ports::outbound::{FetchResult, HttpTransport, TransportError, WantedRepository};
use crate::shared::error::FetchError;
use crate::shared::security::validate_url_component;
use crate::wanted_listing::domain::{ApiResponse, SearchParams, WantedPerson};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// FbiWantedClient adapter for the FBI Wanted API
///
/// Implements the WantedRepository port on top of any HttpTransport.
/// Every request is retried up to [`FbiWantedClient::RETRY_COUNT`] extra
/// times, sequentially and without delay, then the last failure is
/// returned as a normalized [`FetchError`].
pub struct FbiWantedClient<T: HttpTransport> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> FbiWantedClient<T> {
    pub const API_BASE_URL: &'static str = "https://api.fbi.gov/wanted/v1";
    /// Additional attempts after the first one
    pub const RETRY_COUNT: u32 = 2;

    /// Creates a client against the public API
    pub fn new(transport: T) -> Self {
        Self::with_base_url(transport, Self::API_BASE_URL)
    }

    /// Creates a client against another base URL (mirrors, test servers)
    pub fn with_base_url(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn list_url(&self) -> String {
        format!("{}/list", self.base_url)
    }

    /// GETs `url` and decodes the body, applying the retry policy
    async fn get_json<D>(&self, url: &str) -> FetchResult<D>
    where
        D: DeserializeOwned + Send,
    {
        let mut retries = 0;

        loop {
            match self.attempt(url).await {
                Ok(value) => return Ok(value),
                // Nothing was sent, repeating the same request cannot help
                Err(error) if error.is_client_side() => return Err(error),
                Err(error) if retries >= Self::RETRY_COUNT => return Err(error),
                Err(_) => retries += 1,
            }
        }
    }

    async fn attempt<D>(&self, url: &str) -> FetchResult<D>
    where
        D: DeserializeOwned + Send,
    {
        let response = self
            .transport
            .get(url)
            .await
            .map_err(normalize_transport_error)?;

        if !response.is_success() {
            return Err(FetchError::from_status(response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| FetchError::UpstreamError {
            status: response.status,
            detail: Some(format!("invalid response body ({})", e)),
        })
    }
}

fn normalize_transport_error(error: TransportError) -> FetchError {
    match error {
        TransportError::Connect(_) => FetchError::ConnectivityFailure,
        TransportError::Request(detail) => FetchError::ClientSideFailure { detail },
    }
}

#[async_trait]
impl<T: HttpTransport> WantedRepository for FbiWantedClient<T> {
    async fn get_all_wanted_persons(&self) -> FetchResult<Vec<WantedPerson>> {
        let response: ApiResponse = self.get_json(&self.list_url()).await?;
        Ok(response.items)
    }

    async fn get_wanted_person_by_id(&self, uid: &str) -> FetchResult<WantedPerson> {
        validate_url_component(uid, "uid")
            .map_err(|detail| FetchError::ClientSideFailure { detail })?;

        let url = format!("{}/{}", self.base_url, urlencoding::encode(uid));
        self.get_json(&url).await
    }

    async fn search_wanted_persons(&self, params: &SearchParams) -> FetchResult<ApiResponse> {
        let query = params.to_query_string();
        let url = if query.is_empty() {
            self.list_url()
        } else {
            format!("{}?{}", self.list_url(), query)
        };

        self.get_json(&url).await
    }
}

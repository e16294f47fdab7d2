use crate::shared::error::FetchError;
use crate::wanted_listing::domain::{ApiResponse, SearchParams, WantedPerson};
use async_trait::async_trait;

/// Tagged result of every networked operation
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// WantedRepository port for reading wanted-person records
///
/// This port abstracts the remote listing API. Every failure reaches the
/// caller as exactly one normalized [`FetchError`], never as a raw
/// transport error.
#[async_trait]
pub trait WantedRepository: Send + Sync {
    /// Fetches the full listing
    ///
    /// # Returns
    /// The `items` of the listing response in API order, or an empty list
    /// when the response has no `items` field
    async fn get_all_wanted_persons(&self) -> FetchResult<Vec<WantedPerson>>;

    /// Fetches one record by uid
    ///
    /// # Errors
    /// `FetchError::ClientSideFailure` without any request when `uid` is
    /// empty or unsafe as a URL path component
    async fn get_wanted_person_by_id(&self, uid: &str) -> FetchResult<WantedPerson>;

    /// Fetches one listing page filtered by the present parameters
    async fn search_wanted_persons(&self, params: &SearchParams) -> FetchResult<ApiResponse>;
}

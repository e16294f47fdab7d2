use serde::Deserialize;

/// One image attached to a wanted-person record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WantedImage {
    pub original: String,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
}

impl WantedImage {
    pub fn new(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            thumb: None,
            large: None,
            caption: None,
        }
    }
}

/// A wanted-person record as returned by the FBI Wanted API
///
/// Records are immutable once fetched. Optional fields that the API sends
/// as `null` decode as `None`; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WantedPerson {
    /// Stable identifier, unique within a response set
    pub uid: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Date-like publication timestamp (e.g. "2024-01-04T09:39:00")
    pub publication: String,
    #[serde(default)]
    pub images: Option<Vec<WantedImage>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub warning_message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    /// External official detail page
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub poster_classification: Option<String>,
}

impl WantedPerson {
    /// Creates a record with only the required fields set
    pub fn new(
        uid: impl Into<String>,
        title: impl Into<String>,
        publication: impl Into<String>,
    ) -> Self {
        Self {
            uid: uid.into(),
            title: title.into(),
            description: None,
            publication: publication.into(),
            images: None,
            status: None,
            sex: None,
            warning_message: None,
            details: None,
            url: None,
            poster_classification: None,
        }
    }

    pub fn with_images(mut self, images: Vec<WantedImage>) -> Self {
        self.images = Some(images);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_poster_classification(mut self, classification: impl Into<String>) -> Self {
        self.poster_classification = Some(classification.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_warning_message(mut self, warning: impl Into<String>) -> Self {
        self.warning_message = Some(warning.into());
        self
    }
}

/// One page of the listing endpoint
///
/// Transient: only lives for the duration of one fetch.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub items: Vec<WantedPerson>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u64,
}

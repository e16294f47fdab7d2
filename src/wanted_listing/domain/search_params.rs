/// Optional filters for the listing endpoint
///
/// Only parameters that are set end up in the query string; absent
/// parameters are never sent as empty values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub field_offices: Option<String>,
    pub poster_classification: Option<String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn field_offices(mut self, field_offices: impl Into<String>) -> Self {
        self.field_offices = Some(field_offices.into());
        self
    }

    pub fn poster_classification(mut self, classification: impl Into<String>) -> Self {
        self.poster_classification = Some(classification.into());
        self
    }

    /// Whether no parameter is set
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
            && self.page_size.is_none()
            && self.field_offices.is_none()
            && self.poster_classification.is_none()
    }

    /// Builds the percent-encoded query string without the leading `?`
    ///
    /// Parameters keep the order `page`, `pageSize`, `field_offices`,
    /// `poster_classification`.
    pub fn to_query_string(&self) -> String {
        let page = self.page.map(|v| v.to_string());
        let page_size = self.page_size.map(|v| v.to_string());

        [
            ("page", page.as_deref()),
            ("pageSize", page_size.as_deref()),
            ("field_offices", self.field_offices.as_deref()),
            ("poster_classification", self.poster_classification.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| format!("{}={}", key, urlencoding::encode(v))))
        .collect::<Vec<_>>()
        .join("&")
    }
}

//! Card view for a single rendered record
//!
//! A flattened, render-ready projection of a `WantedPerson`.

use crate::wanted_listing::domain::WantedPerson;
use crate::wanted_listing::services::{format_publication_date, person_image_url, Keyed};

/// Render-ready card for one wanted person
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Record uid, also the list-diffing key
    pub uid: String,
    pub title: String,
    /// Primary image; `None` renders the placeholder
    pub image_url: Option<String>,
    /// Status and poster classification tags (blank values omitted)
    pub tags: Vec<String>,
    /// Long-form publication date
    pub published: String,
    pub description: Option<String>,
    pub warning_message: Option<String>,
    /// Target of the "official details" action
    pub details_url: Option<String>,
}

impl CardView {
    pub fn from_person(person: &WantedPerson) -> Self {
        let tags = [person.status.as_deref(), person.poster_classification.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            uid: person.uid.clone(),
            title: person.title.clone(),
            image_url: person_image_url(person).map(str::to_string),
            tags,
            published: format_publication_date(&person.publication),
            description: non_blank(person.description.as_deref()),
            warning_message: non_blank(person.warning_message.as_deref()),
            details_url: non_blank(person.url.as_deref()),
        }
    }
}

impl Keyed for CardView {
    fn key(&self) -> &str {
        &self.uid
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

use crate::wanted_listing::domain::WantedPerson;

/// Returns the `original` URL of the person's first image
///
/// `None` when the record has no image list or an empty one.
pub fn person_image_url(person: &WantedPerson) -> Option<&str> {
    person
        .images
        .as_ref()
        .and_then(|images| images.first())
        .map(|image| image.original.as_str())
}

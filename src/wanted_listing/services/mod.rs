mod keyed_list;
mod person_image;
mod publication_date;

pub use keyed_list::{Keyed, KeyedEntry, KeyedList, ReconcileStats};
pub use person_image::person_image_url;
pub use publication_date::format_publication_date;

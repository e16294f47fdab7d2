pub mod search_params;
pub mod view_state;
pub mod wanted_person;

pub use search_params::SearchParams;
pub use view_state::ViewState;
pub use wanted_person::{ApiResponse, WantedImage, WantedPerson};

/// Use cases module containing application business logic orchestration
mod open_official_details;
mod wanted_list;

pub use open_official_details::OpenOfficialDetailsUseCase;
pub use wanted_list::{ListSource, LoadTicket, WantedListView};

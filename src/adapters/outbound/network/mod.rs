/// Network adapters for external API calls
mod fbi_wanted_client;
mod reqwest_transport;

pub use fbi_wanted_client::FbiWantedClient;
pub use reqwest_transport::{ReqwestTransport, DEFAULT_TIMEOUT_SECONDS};

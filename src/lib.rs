//! wanted-list - terminal viewer for the FBI Wanted API
//!
//! This library fetches wanted-person records from the FBI Wanted API and
//! renders them as text cards, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`wanted_listing`): Records, view state and pure helpers
//! - **Application Layer** (`application`): The list view and its use cases
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use wanted_list::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let catalog = Catalog::load(Locale::En)?;
//!
//! // Create adapters
//! let repository = FbiWantedClient::new(ReqwestTransport::new()?);
//! let renderer = TerminalView::new(
//!     CardFormatter::plain(catalog.clone()),
//!     StdoutPresenter::new(),
//! );
//!
//! // Create the view and run one fetch-and-render cycle
//! let mut view = WantedListView::new(repository, renderer, catalog);
//! let state = view.activate().await?;
//! println!("{} record(s)", state.items().len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod ports;
pub mod shared;
pub mod wanted_listing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::browser::SystemBrowserLauncher;
    pub use crate::adapters::outbound::console::{StderrProgressReporter, TerminalView};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::CardFormatter;
    pub use crate::adapters::outbound::network::{FbiWantedClient, ReqwestTransport};
    pub use crate::application::read_models::CardView;
    pub use crate::application::use_cases::{
        ListSource, LoadTicket, OpenOfficialDetailsUseCase, WantedListView,
    };
    pub use crate::i18n::{Catalog, Locale};
    pub use crate::ports::outbound::{
        BrowserLauncher, FetchResult, HttpResponse, HttpTransport, OutputPresenter,
        ProgressReporter, TransportError, ViewFrame, ViewRenderer, WantedRepository,
    };
    pub use crate::shared::error::{ExitCode, FetchError, WantedError};
    pub use crate::shared::Result;
    pub use crate::wanted_listing::domain::{
        ApiResponse, SearchParams, ViewState, WantedImage, WantedPerson,
    };
    pub use crate::wanted_listing::services::{
        format_publication_date, person_image_url, KeyedEntry, KeyedList, ReconcileStats,
    };
}

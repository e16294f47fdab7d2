/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, browser, console, etc.).
pub mod browser_launcher;
pub mod http_transport;
pub mod output_presenter;
pub mod progress_reporter;
pub mod view_renderer;
pub mod wanted_repository;

pub use browser_launcher::BrowserLauncher;
pub use http_transport::{HttpResponse, HttpTransport, TransportError};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use view_renderer::{ViewFrame, ViewRenderer};
pub use wanted_repository::{FetchResult, WantedRepository};

/// Mock implementations for testing
mod mock_browser_launcher;
mod mock_view_renderer;
mod mock_wanted_repository;

pub use mock_browser_launcher::MockBrowserLauncher;
pub use mock_view_renderer::{MockViewRenderer, RecordedFrame};
pub use mock_wanted_repository::MockWantedRepository;

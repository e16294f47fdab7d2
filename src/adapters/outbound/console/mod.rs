/// Console adapters for stderr progress and the terminal view
mod progress_reporter;
mod terminal_view;

pub use progress_reporter::StderrProgressReporter;
pub use terminal_view::TerminalView;

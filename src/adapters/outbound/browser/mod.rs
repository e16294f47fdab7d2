/// Browser adapters for opening external pages
mod system_browser;

pub use system_browser::SystemBrowserLauncher;

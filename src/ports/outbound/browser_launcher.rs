use crate::shared::Result;

/// BrowserLauncher port for opening external pages
///
/// Implementations open the URL in a new, unrelated browsing context that
/// holds no handle back to this process.
pub trait BrowserLauncher {
    /// Opens an already validated http(s) URL
    ///
    /// # Errors
    /// Returns an error if the browser could not be launched
    fn launch(&self, url: &str) -> Result<()>;
}

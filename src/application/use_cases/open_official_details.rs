use crate::ports::outbound::BrowserLauncher;
use crate::shared::security::validate_external_url;
use crate::shared::Result;

/// OpenOfficialDetailsUseCase - opens a record's official FBI page
///
/// An absent or blank URL is a no-op, never an error. Present URLs must be
/// absolute http(s) URLs before they reach the launcher.
pub struct OpenOfficialDetailsUseCase<B: BrowserLauncher> {
    launcher: B,
}

impl<B: BrowserLauncher> OpenOfficialDetailsUseCase<B> {
    pub fn new(launcher: B) -> Self {
        Self { launcher }
    }

    /// Opens `url` in a new, unrelated browser context
    ///
    /// # Returns
    /// `true` when a page was opened, `false` for the no-op case
    ///
    /// # Errors
    /// Returns an error if the URL is not an http(s) URL or the browser
    /// could not be launched
    pub fn execute(&self, url: Option<&str>) -> Result<bool> {
        let Some(url) = url.map(str::trim).filter(|u| !u.is_empty()) else {
            return Ok(false);
        };

        validate_external_url(url)?;
        self.launcher.launch(url)?;
        Ok(true)
    }
}

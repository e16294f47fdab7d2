use crate::shared::Result;

/// OutputPresenter port for presenting rendered output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the rendered card list is written.
pub trait OutputPresenter {
    /// Presents the rendered content to the output destination
    ///
    /// # Errors
    /// Returns an error if writing to the destination fails
    fn present(&self, content: &str) -> Result<()>;
}

impl<P: OutputPresenter + ?Sized> OutputPresenter for Box<P> {
    fn present(&self, content: &str) -> Result<()> {
        (**self).present(content)
    }
}

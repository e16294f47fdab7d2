use crate::application::read_models::CardView;
use crate::shared::Result;
use crate::wanted_listing::services::KeyedEntry;

/// What the view asks its renderer to show
///
/// Each variant carries only what that state may show: a loading frame
/// has no cards and no error, an error frame has no cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewFrame<'a> {
    Loading,
    Error { message: &'a str },
    Loaded { cards: &'a [KeyedEntry<CardView>] },
}

/// ViewRenderer port invoked on every view state change
pub trait ViewRenderer {
    /// Renders one frame
    ///
    /// # Errors
    /// Returns an error if the output destination cannot be written
    fn render(&mut self, frame: ViewFrame<'_>) -> Result<()>;
}

use super::WantedPerson;

/// Page-level view state of the wanted list
///
/// An immutable value: every transition replaces the whole state.
/// `Loading` is the initial state and is only re-entered at the start of
/// a fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Error(String),
    Loaded(Vec<WantedPerson>),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded items; empty for every state other than `Loaded`
    pub fn items(&self) -> &[WantedPerson] {
        match self {
            ViewState::Loaded(items) => items,
            _ => &[],
        }
    }
}

use crate::application::read_models::CardView;
use crate::application::use_cases::OpenOfficialDetailsUseCase;
use crate::i18n::Catalog;
use crate::ports::outbound::{BrowserLauncher, FetchResult, ViewFrame, ViewRenderer, WantedRepository};
use crate::shared::error::{FetchError, WantedError};
use crate::shared::Result;
use crate::wanted_listing::domain::{SearchParams, ViewState, WantedPerson};
use crate::wanted_listing::services::{KeyedEntry, KeyedList, ReconcileStats};

/// Which request an activation issues
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ListSource {
    /// The full listing (`get_all_wanted_persons`)
    #[default]
    All,
    /// One filtered listing page (`search_wanted_persons`)
    Search(SearchParams),
    /// A single record (`get_wanted_person_by_id`)
    Single(String),
}

/// Proof that a load was started for a specific activation
///
/// Consumed by [`WantedListView::settle`]; a ticket from before a
/// teardown no longer matches and its outcome is discarded.
#[derive(Debug)]
#[must_use]
pub struct LoadTicket {
    generation: u64,
}

/// WantedListView - page-level presentation of the wanted list
///
/// Owns the view state and drives exactly one fetch per activation:
/// `Loading` -> `Loaded(items)` | `Error(message)`, both terminal.
/// The renderer is invoked after every state change.
///
/// # Type Parameters
/// * `R` - WantedRepository implementation
/// * `V` - ViewRenderer implementation
pub struct WantedListView<R, V> {
    repository: R,
    renderer: V,
    catalog: Catalog,
    source: ListSource,
    state: ViewState,
    cards: KeyedList<CardView>,
    last_reconcile: ReconcileStats,
    generation: u64,
    activated: bool,
    torn_down: bool,
}

impl<R, V> WantedListView<R, V>
where
    R: WantedRepository,
    V: ViewRenderer,
{
    /// Creates a view over the full listing with injected collaborators
    pub fn new(repository: R, renderer: V, catalog: Catalog) -> Self {
        Self {
            repository,
            renderer,
            catalog,
            source: ListSource::All,
            state: ViewState::Loading,
            cards: KeyedList::new(),
            last_reconcile: ReconcileStats::default(),
            generation: 0,
            activated: false,
            torn_down: false,
        }
    }

    /// Replaces the request issued on activation
    pub fn with_source(mut self, source: ListSource) -> Self {
        self.source = source;
        self
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Rendered cards, empty unless the view is `Loaded`
    pub fn cards(&self) -> &[KeyedEntry<CardView>] {
        self.cards.entries()
    }

    /// Diff statistics of the most recent card reconcile
    pub fn last_reconcile(&self) -> ReconcileStats {
        self.last_reconcile
    }

    pub fn renderer(&self) -> &V {
        &self.renderer
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Runs the activation lifecycle: one fetch, then the terminal state
    ///
    /// Calling it on a view that was already activated or torn down does
    /// nothing and returns the current state.
    pub async fn activate(&mut self) -> Result<&ViewState> {
        if let Some(ticket) = self.begin_load()? {
            let outcome = self.fetch().await;
            self.settle(ticket, outcome)?;
        }
        Ok(&self.state)
    }

    /// Enters `Loading` and renders it
    ///
    /// # Returns
    /// `None` if this view was already activated or torn down
    pub fn begin_load(&mut self) -> Result<Option<LoadTicket>> {
        if self.activated || self.torn_down {
            return Ok(None);
        }

        self.activated = true;
        self.transition(ViewState::Loading)?;
        Ok(Some(LoadTicket {
            generation: self.generation,
        }))
    }

    /// Issues the request for this view's source
    ///
    /// Only borrows the view, so callers can race it against teardown.
    pub async fn fetch(&self) -> FetchResult<Vec<WantedPerson>> {
        match &self.source {
            ListSource::All => self.repository.get_all_wanted_persons().await,
            ListSource::Search(params) => self
                .repository
                .search_wanted_persons(params)
                .await
                .map(|response| response.items),
            ListSource::Single(uid) => self
                .repository
                .get_wanted_person_by_id(uid)
                .await
                .map(|person| vec![person]),
        }
    }

    /// Applies a settled fetch
    ///
    /// # Returns
    /// `false` when the ticket is stale (the view was torn down after the
    /// load started); the outcome is then dropped without rendering
    pub fn settle(&mut self, ticket: LoadTicket, outcome: FetchResult<Vec<WantedPerson>>) -> Result<bool> {
        if self.torn_down || ticket.generation != self.generation {
            return Ok(false);
        }

        let next = match outcome {
            Ok(items) => ViewState::Loaded(items),
            Err(error) => ViewState::Error(self.error_message(&error)),
        };

        self.transition(next)?;
        Ok(true)
    }

    /// Tears the view down; late fetch outcomes are discarded
    pub fn deactivate(&mut self) {
        self.torn_down = true;
        self.generation += 1;
    }

    /// Re-renders the current state, diffing cards by uid
    pub fn rerender(&mut self) -> Result<ReconcileStats> {
        self.sync_cards();
        self.render()?;
        Ok(self.last_reconcile)
    }

    /// Runs the "official details" action of a loaded card
    ///
    /// # Returns
    /// Whether a page was opened (`false` for records without a URL)
    ///
    /// # Errors
    /// `WantedError::UnknownRecord` if no loaded card has this uid
    pub fn open_details<B: BrowserLauncher>(
        &self,
        uid: &str,
        opener: &OpenOfficialDetailsUseCase<B>,
    ) -> Result<bool> {
        let entry = self.cards.get(uid).ok_or_else(|| WantedError::UnknownRecord {
            uid: uid.to_string(),
        })?;

        opener.execute(entry.item().details_url.as_deref())
    }

    fn error_message(&self, error: &FetchError) -> String {
        let message = self.catalog.describe_error(error);
        if message.trim().is_empty() {
            self.catalog.load_error.clone()
        } else {
            message
        }
    }

    fn transition(&mut self, next: ViewState) -> Result<()> {
        self.state = next;
        self.sync_cards();
        self.render()
    }

    fn sync_cards(&mut self) {
        let cards = self.state.items().iter().map(CardView::from_person).collect();
        self.last_reconcile = self.cards.reconcile(cards);
    }

    fn render(&mut self) -> Result<()> {
        let frame = match &self.state {
            ViewState::Loading => ViewFrame::Loading,
            ViewState::Error(message) => ViewFrame::Error { message },
            ViewState::Loaded(_) => ViewFrame::Loaded {
                cards: self.cards.entries(),
            },
        };
        self.renderer.render(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use crate::wanted_listing::domain::ApiResponse;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Repository returning fixed outcomes and counting calls
    struct StubRepository {
        outcome: FetchResult<Vec<WantedPerson>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubRepository {
        fn with(outcome: FetchResult<Vec<WantedPerson>>) -> Self {
            Self {
                outcome,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WantedRepository for StubRepository {
        async fn get_all_wanted_persons(&self) -> FetchResult<Vec<WantedPerson>> {
            self.calls.lock().unwrap().push("all".to_string());
            self.outcome.clone()
        }

        async fn get_wanted_person_by_id(&self, uid: &str) -> FetchResult<WantedPerson> {
            self.calls.lock().unwrap().push(format!("by_id:{}", uid));
            self.outcome
                .clone()
                .and_then(|items| items.into_iter().next().ok_or(FetchError::NotFound))
        }

        async fn search_wanted_persons(&self, params: &SearchParams) -> FetchResult<ApiResponse> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("search:{}", params.to_query_string()));
            self.outcome.clone().map(|items| ApiResponse {
                total: items.len() as u64,
                page: 1,
                items,
            })
        }
    }

    /// Renderer recording a summary of every frame
    #[derive(Default)]
    struct RecordingRenderer {
        frames: Vec<String>,
    }

    impl ViewRenderer for RecordingRenderer {
        fn render(&mut self, frame: ViewFrame<'_>) -> Result<()> {
            let summary = match frame {
                ViewFrame::Loading => "loading".to_string(),
                ViewFrame::Error { message } => format!("error:{}", message),
                ViewFrame::Loaded { cards } => format!("loaded:{}", cards.len()),
            };
            self.frames.push(summary);
            Ok(())
        }
    }

    fn people(count: usize) -> Vec<WantedPerson> {
        (0..count)
            .map(|i| WantedPerson::new(format!("uid-{}", i), format!("PERSON {}", i), "2024-01-04T09:39:00"))
            .collect()
    }

    fn view(outcome: FetchResult<Vec<WantedPerson>>) -> WantedListView<StubRepository, RecordingRenderer> {
        WantedListView::new(
            StubRepository::with(outcome),
            RecordingRenderer::default(),
            Catalog::load(Locale::En).unwrap(),
        )
    }

    #[test]
    fn test_initial_state_is_loading_without_render() {
        let view = view(Ok(vec![]));
        assert!(view.state().is_loading());
        assert!(view.cards().is_empty());
        assert!(view.renderer().frames.is_empty());
    }

    #[tokio::test]
    async fn test_activation_loads_items() {
        let mut view = view(Ok(people(3)));

        let state = view.activate().await.unwrap();

        assert_eq!(state.items().len(), 3);
        assert_eq!(view.cards().len(), 3);
        assert_eq!(view.renderer().frames, vec!["loading", "loaded:3"]);
        assert_eq!(view.repository.calls(), vec!["all"]);
    }

    #[tokio::test]
    async fn test_activation_fetches_exactly_once() {
        let mut view = view(Ok(people(1)));

        view.activate().await.unwrap();
        view.activate().await.unwrap();

        assert_eq!(view.repository.calls().len(), 1);
        assert_eq!(view.renderer().frames.len(), 2);
    }

    #[tokio::test]
    async fn test_not_found_ends_in_error_without_cards() {
        let mut view = view(Err(FetchError::NotFound));

        view.activate().await.unwrap();

        let message = view.state().error_message().unwrap();
        assert!(message.contains("not found"));
        assert!(view.cards().is_empty());
        assert_eq!(
            view.renderer().frames,
            vec![
                "loading".to_string(),
                format!("error:{}", FetchError::NotFound)
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_error_message_falls_back_to_generic() {
        let mut view = WantedListView::new(
            StubRepository::with(Err(FetchError::ClientSideFailure {
                detail: String::new(),
            })),
            RecordingRenderer::default(),
            {
                let mut catalog = Catalog::load(Locale::En).unwrap();
                catalog.errors.connection_error = "{detail}".to_string();
                catalog
            },
        );

        view.activate().await.unwrap();

        assert_eq!(
            view.state().error_message(),
            Some("Error loading wanted persons information")
        );
    }

    #[tokio::test]
    async fn test_spanish_error_message() {
        let mut view = WantedListView::new(
            StubRepository::with(Err(FetchError::RateLimited)),
            RecordingRenderer::default(),
            Catalog::load(Locale::Es).unwrap(),
        );

        view.activate().await.unwrap();

        assert!(view
            .state()
            .error_message()
            .unwrap()
            .contains("Demasiadas solicitudes"));
    }

    #[tokio::test]
    async fn test_stale_outcome_after_teardown_is_discarded() {
        let mut view = view(Ok(people(2)));

        let ticket = view.begin_load().unwrap().unwrap();
        let outcome = view.fetch().await;
        view.deactivate();

        assert!(!view.settle(ticket, outcome).unwrap());
        assert!(view.state().is_loading());
        assert!(view.cards().is_empty());
        assert_eq!(view.renderer().frames, vec!["loading"]);
        assert!(view.is_torn_down());
    }

    #[tokio::test]
    async fn test_torn_down_view_does_not_activate() {
        let mut view = view(Ok(people(2)));
        view.deactivate();

        view.activate().await.unwrap();

        assert!(view.repository.calls().is_empty());
        assert!(view.renderer().frames.is_empty());
    }

    #[tokio::test]
    async fn test_rerender_keeps_card_identity() {
        let mut view = view(Ok(people(50)));
        view.activate().await.unwrap();
        let before: Vec<u64> = view.cards().iter().map(|c| c.instance_id()).collect();

        let stats = view.rerender().unwrap();

        let after: Vec<u64> = view.cards().iter().map(|c| c.instance_id()).collect();
        assert_eq!(before, after);
        assert_eq!(
            stats,
            ReconcileStats {
                created: 0,
                retained: 50,
                removed: 0
            }
        );
        assert_eq!(view.renderer().frames, vec!["loading", "loaded:50", "loaded:50"]);
    }

    #[tokio::test]
    async fn test_search_source() {
        let mut view = view(Ok(people(2)))
            .with_source(ListSource::Search(SearchParams::new().page(2)));

        view.activate().await.unwrap();

        assert_eq!(view.repository.calls(), vec!["search:page=2"]);
        assert_eq!(view.cards().len(), 2);
    }

    #[tokio::test]
    async fn test_single_source() {
        let mut view = view(Ok(people(1))).with_source(ListSource::Single("uid-0".to_string()));

        view.activate().await.unwrap();

        assert_eq!(view.repository.calls(), vec!["by_id:uid-0"]);
        assert_eq!(view.cards()[0].item().uid, "uid-0");
    }

    #[tokio::test]
    async fn test_open_details_unknown_uid() {
        use crate::adapters::outbound::browser::SystemBrowserLauncher;

        let mut view = view(Ok(people(1)));
        view.activate().await.unwrap();
        let opener = OpenOfficialDetailsUseCase::new(SystemBrowserLauncher::with_command(
            "definitely-not-a-browser-xyz",
            &[],
        ));

        let error = view.open_details("missing", &opener).unwrap_err();
        assert!(error.to_string().contains("Unknown record: missing"));

        // uid-0 has no details URL, so the action is a no-op
        assert!(!view.open_details("uid-0", &opener).unwrap());
    }
}

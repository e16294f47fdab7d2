use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use wanted_list::prelude::*;

/// Mock WantedRepository replaying scripted outcomes
///
/// Every call pops the next outcome; once the script is exhausted the
/// last outcome is repeated.
#[derive(Clone, Default)]
pub struct MockWantedRepository {
    outcomes: Arc<Mutex<VecDeque<FetchResult<Vec<WantedPerson>>>>>,
    last: Arc<Mutex<Option<FetchResult<Vec<WantedPerson>>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockWantedRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_outcome(self, outcome: FetchResult<Vec<WantedPerson>>) -> Self {
        self.outcomes.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_persons(self, persons: Vec<WantedPerson>) -> Self {
        self.with_outcome(Ok(persons))
    }

    pub fn with_error(self, error: FetchError) -> Self {
        self.with_outcome(Err(error))
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next_outcome(&self, call: String) -> FetchResult<Vec<WantedPerson>> {
        self.calls.lock().unwrap().push(call);

        let mut last = self.last.lock().unwrap();
        if let Some(outcome) = self.outcomes.lock().unwrap().pop_front() {
            *last = Some(outcome);
        }
        last.clone().unwrap_or_else(|| Ok(Vec::new()))
    }
}

#[async_trait]
impl WantedRepository for MockWantedRepository {
    async fn get_all_wanted_persons(&self) -> FetchResult<Vec<WantedPerson>> {
        self.next_outcome("all".to_string())
    }

    async fn get_wanted_person_by_id(&self, uid: &str) -> FetchResult<WantedPerson> {
        self.next_outcome(format!("by_id:{}", uid))?
            .into_iter()
            .find(|person| person.uid == uid)
            .ok_or(FetchError::NotFound)
    }

    async fn search_wanted_persons(&self, params: &SearchParams) -> FetchResult<ApiResponse> {
        let items = self.next_outcome(format!("search:{}", params.to_query_string()))?;
        Ok(ApiResponse {
            total: items.len() as u64,
            page: params.page.unwrap_or(1) as u64,
            items,
        })
    }
}

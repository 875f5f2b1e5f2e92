//! Search Orchestration
//!
//! Decides when typed queries reach the backend and which responses are
//! allowed to replace the working set. Timers and fetches live in the UI
//! layer; this module only holds the bookkeeping so it can be tested
//! without a browser.

use crate::api::{ApiError, ApiProjectCard, ApiResult};
use crate::convert::convert_project_cards;
use crate::models::ConstructionObject;

/// Handle for one scheduled debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceTicket(u64);

/// Trailing-edge debouncer: every `schedule` supersedes the previous one, and
/// only the newest ticket yields its value when its timer elapses.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    latest: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            latest: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, value: T) -> DebounceTicket {
        self.latest += 1;
        self.pending = Some(value);
        DebounceTicket(self.latest)
    }

    /// Value to act on when `ticket`'s timer elapses; `None` if superseded
    /// or already fired.
    pub fn fire(&mut self, ticket: DebounceTicket) -> Option<T> {
        if ticket.0 == self.latest {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Generation tag of one backend request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Tracks which request is authoritative. Only the newest request's response
/// is applied; older ones are stale.
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    latest: u64,
    outstanding: bool,
}

impl RequestTracker {
    pub fn begin(&mut self) -> RequestId {
        self.latest += 1;
        self.outstanding = true;
        RequestId(self.latest)
    }

    /// Mark `id` finished. Returns false for a stale request.
    pub fn finish(&mut self, id: RequestId) -> bool {
        if id.0 != self.latest {
            return false;
        }
        self.outstanding = false;
        true
    }

    pub fn is_loading(&self) -> bool {
        self.outstanding
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPlan {
    FetchAll,
    Search(String),
}

impl SearchPlan {
    /// Blank queries list everything; anything else goes to remote search as typed.
    pub fn for_query(query: &str) -> Self {
        if query.trim().is_empty() {
            SearchPlan::FetchAll
        } else {
            SearchPlan::Search(query.to_string())
        }
    }
}

/// How a completed request changes the displayed state.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// New working set; always replaces the previous one
    pub objects: Vec<ConstructionObject>,
    /// Remote results are shown without the local text filter on top
    pub clear_local_query: bool,
    pub error: Option<ApiError>,
}

#[derive(Debug, Clone, Default)]
pub struct SearchOrchestrator {
    query: String,
    debouncer: Debouncer<String>,
    /// Last value that survived the quiet period
    settled: String,
    requests: RequestTracker,
    initial_load_done: bool,
}

impl SearchOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw query as last typed.
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn initial_load_done(&self) -> bool {
        self.initial_load_done
    }

    pub fn is_loading(&self) -> bool {
        self.requests.is_loading()
    }

    /// Record a keystroke and restart the quiet period.
    pub fn on_query_change(&mut self, query: &str) -> DebounceTicket {
        self.query = query.to_string();
        self.debouncer.schedule(query.to_string())
    }

    /// Called when a debounce timer elapses. Yields a plan only for the newest
    /// ticket, only when the settled value changed, and only once the initial
    /// load has completed.
    pub fn on_debounce_elapsed(&mut self, ticket: DebounceTicket) -> Option<SearchPlan> {
        let query = self.debouncer.fire(ticket)?;
        if query == self.settled {
            return None;
        }
        self.settled = query.clone();
        if !self.initial_load_done {
            log::debug!("query {:?} settled before initial load, ignored", query);
            return None;
        }
        Some(SearchPlan::for_query(&query))
    }

    pub fn begin_request(&mut self) -> RequestId {
        self.requests.begin()
    }

    /// Apply a finished request. `None` means the response is stale and must
    /// not touch the displayed state.
    pub fn complete_request(
        &mut self,
        id: RequestId,
        result: ApiResult<Vec<ApiProjectCard>>,
    ) -> Option<Reconciliation> {
        self.initial_load_done = true;
        if !self.requests.finish(id) {
            log::debug!("discarding stale response {:?}", id);
            return None;
        }

        let reconciliation = match result {
            Ok(cards) if !cards.is_empty() => Reconciliation {
                objects: convert_project_cards(&cards),
                clear_local_query: true,
                error: None,
            },
            Ok(_) => Reconciliation {
                objects: Vec::new(),
                clear_local_query: false,
                error: None,
            },
            Err(err) => {
                log::error!("project request failed: {} (status {})", err, err.status);
                Reconciliation {
                    objects: Vec::new(),
                    clear_local_query: false,
                    error: Some(err),
                }
            }
        };
        Some(reconciliation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cards(titles: &[&str]) -> Vec<ApiProjectCard> {
        titles
            .iter()
            .enumerate()
            .map(|(i, title)| ApiProjectCard {
                id: (i + 1).to_string(),
                title: title.to_string(),
                ..Default::default()
            })
            .collect()
    }

    fn loaded() -> SearchOrchestrator {
        let mut orchestrator = SearchOrchestrator::new();
        let id = orchestrator.begin_request();
        orchestrator.complete_request(id, Ok(cards(&["г.Киров, ЖК Знак"])));
        orchestrator
    }

    #[test]
    fn test_debouncer_fires_only_newest() {
        let mut debouncer = Debouncer::new();
        let first = debouncer.schedule("a");
        let second = debouncer.schedule("ab");

        assert_eq!(debouncer.fire(first), None);
        assert!(debouncer.is_pending());
        assert_eq!(debouncer.fire(second), Some("ab"));
        assert_eq!(debouncer.fire(second), None);
    }

    #[test]
    fn test_burst_triggers_one_search_with_last_value() {
        let mut orchestrator = loaded();
        let tickets: Vec<DebounceTicket> = ["З", "Зн", "Зна", "Знак"]
            .iter()
            .map(|q| orchestrator.on_query_change(q))
            .collect();

        let plans: Vec<SearchPlan> = tickets
            .into_iter()
            .filter_map(|t| orchestrator.on_debounce_elapsed(t))
            .collect();

        assert_eq!(plans, vec![SearchPlan::Search("Знак".to_string())]);
        assert_eq!(orchestrator.query(), "Знак");
    }

    #[test]
    fn test_unchanged_settled_query_does_not_search_again() {
        let mut orchestrator = loaded();
        let ticket = orchestrator.on_query_change("Знак");
        assert_eq!(
            orchestrator.on_debounce_elapsed(ticket),
            Some(SearchPlan::Search("Знак".to_string()))
        );

        orchestrator.on_query_change("Знак1");
        let ticket = orchestrator.on_query_change("Знак");
        assert_eq!(orchestrator.on_debounce_elapsed(ticket), None);

        let ticket = orchestrator.on_query_change("");
        assert_eq!(orchestrator.on_debounce_elapsed(ticket), Some(SearchPlan::FetchAll));
    }

    #[test]
    fn test_typing_back_to_blank_before_settling_is_a_no_op() {
        let mut orchestrator = loaded();
        orchestrator.on_query_change("З");
        let ticket = orchestrator.on_query_change("");
        assert_eq!(orchestrator.on_debounce_elapsed(ticket), None);
    }

    #[test]
    fn test_blank_query_fetches_all() {
        let mut orchestrator = loaded();
        let ticket = orchestrator.on_query_change("   ");
        assert_eq!(orchestrator.on_debounce_elapsed(ticket), Some(SearchPlan::FetchAll));
        assert_eq!(SearchPlan::for_query(""), SearchPlan::FetchAll);
    }

    #[test]
    fn test_queries_before_initial_load_are_ignored() {
        let mut orchestrator = SearchOrchestrator::new();
        let initial = orchestrator.begin_request();
        let ticket = orchestrator.on_query_change("Знак");

        assert_eq!(orchestrator.on_debounce_elapsed(ticket), None);
        assert!(orchestrator.is_loading());

        orchestrator.complete_request(initial, Ok(Vec::new()));
        assert!(orchestrator.initial_load_done());
        assert!(!orchestrator.is_loading());
    }

    #[test]
    fn test_results_replace_working_set_and_clear_local_query() {
        let mut orchestrator = loaded();
        let id = orchestrator.begin_request();
        let update = orchestrator
            .complete_request(id, Ok(cards(&["г.Ижевск, ЖК Игикай", "г.Киров, ЖК Знак"])))
            .unwrap();

        assert_eq!(update.objects.len(), 2);
        assert_eq!(update.objects[0].city, "Ижевск");
        assert!(update.clear_local_query);
        assert_eq!(update.error, None);
    }

    #[test]
    fn test_empty_and_failed_responses_empty_the_set() {
        let mut orchestrator = loaded();

        let id = orchestrator.begin_request();
        let update = orchestrator.complete_request(id, Ok(Vec::new())).unwrap();
        assert!(update.objects.is_empty());
        assert!(!update.clear_local_query);

        let id = orchestrator.begin_request();
        let update = orchestrator
            .complete_request(id, Err(ApiError::http(500, "Internal Server Error")))
            .unwrap();
        assert!(update.objects.is_empty());
        assert_eq!(update.error.map(|e| e.status), Some(500));
        assert!(!orchestrator.is_loading());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut orchestrator = loaded();
        let slow = orchestrator.begin_request();
        let fast = orchestrator.begin_request();

        let update = orchestrator.complete_request(fast, Ok(cards(&["г.Киров, ЖК Знак"])));
        assert_eq!(update.map(|u| u.objects.len()), Some(1));

        assert_eq!(
            orchestrator.complete_request(slow, Ok(cards(&["a", "b", "c"]))),
            None
        );
        assert!(!orchestrator.is_loading());
    }

    #[test]
    fn test_loading_until_newest_request_finishes() {
        let mut orchestrator = loaded();
        let older = orchestrator.begin_request();
        let newer = orchestrator.begin_request();

        orchestrator.complete_request(older, Ok(Vec::new()));
        assert!(orchestrator.is_loading());

        orchestrator.complete_request(newer, Ok(Vec::new()));
        assert!(!orchestrator.is_loading());
    }
}

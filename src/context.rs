//! Dashboard Context
//!
//! Shared state and actions provided via Leptos Context API.
//! Owns the search orchestrator and drives the debounce timer and project
//! requests on its behalf.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, SearchParams};
use crate::config::DashboardConfig;
use crate::models::ConstructionObject;
use crate::pagination::Paginator;
use crate::search::{SearchOrchestrator, SearchPlan};
use crate::store::{
    store_apply_reconciliation, store_close_details, store_open_details, DashboardStateStoreFields,
    DashboardStore,
};

/// Dashboard-wide signals and actions provided via context
#[derive(Clone, Copy)]
pub struct DashboardContext {
    pub store: DashboardStore,
    config: StoredValue<DashboardConfig>,
    orchestrator: StoredValue<SearchOrchestrator>,
    /// Raw query as typed - read
    pub query: ReadSignal<String>,
    /// Raw query as typed - write
    set_query: WriteSignal<String>,
    /// Current page over the filtered list
    pub paginator: RwSignal<Paginator>,
}

impl DashboardContext {
    pub fn new(store: DashboardStore, config: DashboardConfig) -> Self {
        let (query, set_query) = signal(String::new());
        let paginator = RwSignal::new(Paginator::new(config.items_per_page));
        Self {
            store,
            config: StoredValue::new(config),
            orchestrator: StoredValue::new(SearchOrchestrator::new()),
            query,
            set_query,
            paginator,
        }
    }

    pub fn max_visible_pages(&self) -> usize {
        self.config.with_value(|c| c.max_visible_pages)
    }

    // ========================
    // Search
    // ========================

    /// Record a keystroke: filter locally now, hit the backend once typing settles
    pub fn handle_search_change(&self, query: String) {
        self.set_query.set(query.clone());
        self.store.filters().update(|f| f.set_search_query(&query));

        let Some(ticket) = self.orchestrator.try_update_value(|o| o.on_query_change(&query)) else {
            return;
        };
        let delay = self.config.with_value(|c| c.debounce_ms);
        let ctx = *self;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let plan = ctx
                .orchestrator
                .try_update_value(|o| o.on_debounce_elapsed(ticket))
                .flatten();
            if let Some(plan) = plan {
                ctx.run_plan(plan).await;
            }
        });
    }

    /// Fetch the full project list (initial load and retry)
    pub fn load_all(&self) {
        let ctx = *self;
        spawn_local(async move {
            ctx.run_plan(SearchPlan::FetchAll).await;
        });
    }

    async fn run_plan(self, plan: SearchPlan) {
        let Some(id) = self.orchestrator.try_update_value(|o| o.begin_request()) else {
            return;
        };
        self.store.loading().set(true);

        let client = ApiClient::from_config(&self.config.get_value());
        let result = match &plan {
            SearchPlan::FetchAll => {
                log::info!("fetching all projects");
                client.get_all_projects().await
            }
            SearchPlan::Search(query) => {
                log::info!("searching projects for {:?}", query);
                client.search_projects(&SearchParams::new(query.clone())).await
            }
        };
        if let Ok(cards) = &result {
            log::debug!("{:?} returned {} cards", id, cards.len());
        }

        let Some(update) = self
            .orchestrator
            .try_update_value(|o| o.complete_request(id, result))
        else {
            return;
        };
        let still_loading = self.orchestrator.with_value(|o| o.is_loading());
        self.store.loading().set(still_loading);

        if let Some(update) = update {
            store_apply_reconciliation(&self.store, update);
        }
    }

    // ========================
    // Filters
    // ========================

    pub fn set_city(&self, city: String) {
        self.store.filters().update(|f| f.set_city(&city));
    }

    pub fn set_residential_complex(&self, complex: String) {
        self.store.filters().update(|f| f.set_residential_complex(&complex));
    }

    // ========================
    // Pagination
    // ========================

    pub fn set_page(&self, page: usize) {
        self.paginator.update(|p| p.set_page(page));
        scroll_to_top();
    }

    pub fn previous_page(&self) {
        let mut moved = false;
        self.paginator.update(|p| moved = p.previous_page());
        if moved {
            scroll_to_top();
        }
    }

    pub fn next_page(&self) {
        let mut moved = false;
        self.paginator.update(|p| moved = p.next_page());
        if moved {
            scroll_to_top();
        }
    }

    // ========================
    // Details
    // ========================

    pub fn open_details(&self, object: ConstructionObject) {
        log::debug!("opening details for object {}", object.id);
        store_open_details(&self.store, object);
    }

    pub fn close_details(&self) {
        store_close_details(&self.store);
    }
}

/// Get the dashboard context
pub fn use_dashboard() -> DashboardContext {
    expect_context::<DashboardContext>()
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

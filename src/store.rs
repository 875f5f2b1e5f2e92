//! Global Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::ApiError;
use crate::filters::FilterState;
use crate::models::{ConstructionObject, PersonFromExcel};
use crate::search::Reconciliation;

/// Dashboard-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Working set from the latest authoritative response
    pub objects: Vec<ConstructionObject>,
    pub filters: FilterState,
    /// A project request is in flight
    pub loading: bool,
    /// Last request failure, shown with a retry button
    pub api_error: Option<ApiError>,
    /// Object shown in the details panel
    pub selected_object: Option<ConstructionObject>,
    /// Team roster for the person picker
    pub people: Vec<PersonFromExcel>,
    pub people_loading: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            loading: true,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the working set after an authoritative response
pub fn store_apply_reconciliation(store: &DashboardStore, update: Reconciliation) {
    store.objects().set(update.objects);
    if update.clear_local_query {
        store.filters().write().set_search_query("");
    }
    store.api_error().set(update.error);
}

pub fn store_open_details(store: &DashboardStore, object: ConstructionObject) {
    store.selected_object().set(Some(object));
}

pub fn store_close_details(store: &DashboardStore) {
    store.selected_object().set(None);
}

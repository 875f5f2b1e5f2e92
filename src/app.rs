//! Objects Dashboard App
//!
//! Main application component: search and filters on top, a paged grid of
//! object cards, and a details panel for the selected object.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::components::{ApiStatus, ObjectCard, ObjectDetails, PaginationBar, SearchAndFilter};
use crate::config::DashboardConfig;
use crate::context::DashboardContext;
use crate::filters::filter_objects;
use crate::models::ConstructionObject;
use crate::personnel;
use crate::store::{DashboardState, DashboardStateStoreFields, DashboardStore};

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::from_build_env();
    let store = DashboardStore::new(DashboardState::new());
    let ctx = DashboardContext::new(store, config.clone());

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Initial fetch of the full project list
    ctx.load_all();

    // Backend health probe; failure only surfaces if nothing else reported
    let health_config = config.clone();
    spawn_local(async move {
        match ApiClient::from_config(&health_config).check_health().await {
            Ok(status) => log::debug!("backend health: {}", status),
            Err(err) => {
                log::warn!("health check failed: {}", err);
                if store.api_error().with_untracked(|e| e.is_none()) && !store.loading().get_untracked() {
                    store.api_error().set(Some(err));
                }
            }
        }
    });

    // Team roster for the person picker
    store.people_loading().set(true);
    spawn_local(async move {
        let roster = personnel::load_roster(&config).await;
        log::info!("roster ready with {} people", roster.len());
        store.people().set(roster);
        store.people_loading().set(false);
    });

    let filtered = Memo::new(move |_| {
        store
            .objects()
            .with(|objects| store.filters().with(|filters| filter_objects(objects, filters)))
    });

    // Back to page 1 whenever the filtered list changes size
    Effect::new(move |_| {
        let count = filtered.with(|f| f.len());
        ctx.paginator.update(|p| {
            if p.sync_item_count(count) {
                log::debug!("filtered list now has {} objects", count);
            }
        });
    });

    let page_items = move || {
        let paginator = ctx.paginator.get();
        filtered.with(|f| paginator.page_slice(f).to_vec())
    };

    view! {
        <div class="dashboard-layout">
            <header class="dashboard-header">
                <h1>"Объекты строительства"</h1>
                <ApiStatus />
            </header>

            <SearchAndFilter />

            <main class="objects-content">
                {move || {
                    let items = page_items();
                    if items.is_empty() && !store.loading().get() {
                        view! {
                            <p class="objects-empty">"Объекты не найдены"</p>
                        }.into_any()
                    } else {
                        view! {
                            <div class="objects-grid">
                                <For
                                    each=move || page_items().into_iter().enumerate()
                                    key=|(slot, object): &(usize, ConstructionObject)| (*slot, object.id)
                                    children=move |(_, object): (usize, ConstructionObject)| {
                                        view! {
                                            <ObjectCard
                                                object=object
                                                on_open=Callback::new(move |o: ConstructionObject| ctx.open_details(o))
                                            />
                                        }
                                    }
                                />
                            </div>
                        }.into_any()
                    }
                }}

                <PaginationBar />

                <p class="objects-count">
                    {move || format!("Показано {} из {}", filtered.with(|f| f.len()), store.objects().with(|o| o.len()))}
                </p>
            </main>

            <ObjectDetails />
        </div>
    }
}

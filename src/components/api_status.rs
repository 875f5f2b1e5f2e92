//! API Status Component
//!
//! Connection badge: loading, error with retry, or connected.

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::store::DashboardStateStoreFields;

#[component]
pub fn ApiStatus() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;

    move || {
        if store.loading().get() {
            return view! {
                <div class="api-status loading">"Загрузка данных..."</div>
            }
            .into_any();
        }

        match store.api_error().get() {
            Some(err) => view! {
                <div class="api-status error">
                    <span>{format!("Ошибка подключения к API: {}", err)}</span>
                    <button on:click=move |_| ctx.load_all()>"Повторить"</button>
                </div>
            }
            .into_any(),
            None => view! {
                <div class="api-status connected">
                    {move || format!("API подключено · объектов: {}", store.objects().with(|o| o.len()))}
                </div>
            }
            .into_any(),
        }
    }
}

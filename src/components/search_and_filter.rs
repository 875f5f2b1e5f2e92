//! Search And Filter Component
//!
//! Query input plus city and residential complex selectors.

use leptos::prelude::*;

use crate::constants::ALL_OPTION;
use crate::context::use_dashboard;
use crate::filters::{residential_complexes_by_city, unique_cities};
use crate::store::DashboardStateStoreFields;

#[component]
pub fn SearchAndFilter() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;

    let cities = Memo::new(move |_| store.objects().with(|objects| unique_cities(objects)));
    let city = Memo::new(move |_| store.filters().with(|f| f.city.clone()));
    let complexes = Memo::new(move |_| {
        let city = city.get();
        store
            .objects()
            .with(|objects| residential_complexes_by_city(objects, &city))
    });
    let complex = Memo::new(move |_| store.filters().with(|f| f.residential_complex.clone()));

    let select_value = |value: String| {
        if value.is_empty() {
            ALL_OPTION.to_string()
        } else {
            value
        }
    };

    view! {
        <section class="search-and-filter">
            <input
                type="search"
                class="search-input"
                placeholder="Поиск по названию, адресу, ЖК..."
                autocomplete="off"
                prop:value=move || ctx.query.get()
                on:input=move |ev| ctx.handle_search_change(event_target_value(&ev))
            />

            <select
                class="filter-select"
                prop:value=move || select_value(city.get())
                on:change=move |ev| ctx.set_city(event_target_value(&ev))
            >
                <option value=ALL_OPTION>"Все города"</option>
                <For
                    each=move || cities.get()
                    key=|name| name.clone()
                    children=move |name| {
                        view! { <option value=name.clone()>{name.clone()}</option> }
                    }
                />
            </select>

            <select
                class="filter-select"
                disabled=move || city.with(|c| c.is_empty())
                prop:value=move || select_value(complex.get())
                on:change=move |ev| ctx.set_residential_complex(event_target_value(&ev))
            >
                <option value=ALL_OPTION>"Все ЖК"</option>
                <For
                    each=move || complexes.get()
                    key=|name| name.clone()
                    children=move |name| {
                        view! { <option value=name.clone()>{name.clone()}</option> }
                    }
                />
            </select>
        </section>
    }
}

//! Object Card Component
//!
//! Summary tile for one construction object in the grid.

use leptos::prelude::*;

use crate::formatters::indicator_value_with_unit;
use crate::models::ConstructionObject;

/// Indicators surfaced on the card, looked up by name
const CARD_INDICATORS: [&str; 3] = ["Общая площадь", "Количество этажей", "Количество квартир"];

#[component]
pub fn ObjectCard(
    object: ConstructionObject,
    #[prop(into)] on_open: Callback<ConstructionObject>,
) -> impl IntoView {
    let highlights: Vec<(&'static str, String)> = CARD_INDICATORS
        .iter()
        .filter_map(|name| {
            indicator_value_with_unit(&object.project_indicators, name).map(|value| (*name, value))
        })
        .collect();
    let people = object.responsible_persons.len();
    let dates = format!("{} - {}", object.start_date, object.end_date);
    let title = object.project_name.clone();
    let complex = object.residential_complex.clone();
    let city = object.city.clone();
    let address = object.full_address.clone();
    let status = object.status.clone();

    view! {
        <article class="object-card" on:click=move |_| on_open.run(object.clone())>
            <header class="object-card-header">
                <span class="object-card-complex">{complex}</span>
                <span class="object-card-status">{status}</span>
            </header>
            <h3 class="object-card-title">{title}</h3>
            <p class="object-card-address">{format!("{}, {}", city, address)}</p>
            <p class="object-card-dates">{dates}</p>
            <ul class="object-card-indicators">
                {highlights
                    .into_iter()
                    .map(|(name, value)| view! { <li><span>{name}</span>" "<strong>{value}</strong></li> })
                    .collect_view()}
            </ul>
            {(people > 0).then(|| view! {
                <p class="object-card-people">{format!("Ответственных: {}", people)}</p>
            })}
        </article>
    }
}

//! Indicators Table Component
//!
//! One row per indicator, one column per building section, plus the total.

use leptos::prelude::*;

use crate::formatters::{format_value, indicator_name, max_sections, section_headers};
use crate::models::ProjIndicators;

#[component]
pub fn IndicatorsTable(indicators: ProjIndicators) -> impl IntoView {
    if indicators.indicators.is_empty() {
        return view! { <p class="indicators-empty">"Показатели отсутствуют"</p> }.into_any();
    }

    let columns = max_sections(&indicators);
    let headers = section_headers(columns);

    view! {
        <table class="indicators-table">
            <thead>
                <tr>
                    <th>"Показатель"</th>
                    {headers.into_iter().map(|h| view! { <th>{h}</th> }).collect_view()}
                    <th>"Итого"</th>
                </tr>
            </thead>
            <tbody>
                {indicators
                    .indicators
                    .iter()
                    .enumerate()
                    .map(|(index, indicator)| {
                        let name = indicator_name(indicator, index);
                        // short rows are padded so every row spans all section columns
                        let cells: Vec<String> = (0..columns)
                            .map(|i| indicator.section.get(i).map_or(0.0, |s| s.value))
                            .map(format_value)
                            .collect();
                        let total = format_value(indicator.sum);
                        view! {
                            <tr>
                                <td class="indicator-name">{name}</td>
                                {cells.into_iter().map(|c| view! { <td>{c}</td> }).collect_view()}
                                <td class="indicator-total">{total}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
    .into_any()
}

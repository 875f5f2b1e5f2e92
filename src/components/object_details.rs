//! Object Details Component
//!
//! Side panel for the selected object: general info, responsible persons,
//! document links, the indicators table and the team picker.

use leptos::prelude::*;

use crate::components::{IndicatorsTable, PersonCombobox};
use crate::context::use_dashboard;
use crate::formatters::{extract_district, is_web_resource, resource_icon};
use crate::models::{ConstructionObject, DocumentLink, PersonFromExcel, ResponsiblePerson};
use crate::store::DashboardStateStoreFields;

#[component]
pub fn ObjectDetails() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;

    // People picked for the open object; reset when another object opens
    let added = RwSignal::new(Vec::<PersonFromExcel>::new());
    Effect::new(move |_| {
        let _ = store.selected_object().with(|o| o.as_ref().map(|o| o.id));
        added.set(Vec::new());
    });

    let exclude = Signal::derive(move || {
        let mut people: Vec<PersonFromExcel> = store.selected_object().with(|o| {
            o.as_ref()
                .map(|o| o.responsible_persons.iter().map(PersonFromExcel::from).collect())
                .unwrap_or_default()
        });
        people.extend(added.get());
        people
    });

    move || {
        let Some(object) = store.selected_object().get() else {
            return view! { <div></div> }.into_any();
        };
        view! {
            <aside class="object-details">
                <button class="object-details-close" on:click=move |_| ctx.close_details()>"×"</button>
                <ObjectSummary object=object.clone() />
                <ResponsiblePersons persons=object.responsible_persons.clone() />
                <DocumentLinks links=object.document_links.clone() />
                <section class="object-details-indicators">
                    <h3>"Технико-экономические показатели"</h3>
                    <IndicatorsTable indicators=object.project_indicators.clone() />
                </section>
                <section class="object-details-team">
                    <h3>"Команда"</h3>
                    <ul>
                        {move || added.get().into_iter().map(|person| view! {
                            <li>{person.name.clone()}{person.role.map(|r| format!(" ({})", r))}</li>
                        }).collect_view()}
                    </ul>
                    <PersonCombobox
                        exclude=exclude
                        on_select=Callback::new(move |person: PersonFromExcel| {
                            log::debug!("added {} to the team", person.name);
                            added.update(|a| a.push(person));
                        })
                    />
                </section>
            </aside>
        }
        .into_any()
    }
}

#[component]
fn ObjectSummary(object: ConstructionObject) -> impl IntoView {
    let district = extract_district(&object.full_address);
    view! {
        <section class="object-details-summary">
            <p class="object-details-complex">{object.residential_complex}</p>
            <h2>{object.project_name}</h2>
            <dl>
                <dt>"Город"</dt><dd>{object.city}</dd>
                <dt>"Район"</dt><dd>{district}</dd>
                <dt>"Адрес"</dt><dd>{object.full_address}</dd>
                <dt>"Статус"</dt><dd>{object.status}</dd>
                <dt>"Сроки"</dt><dd>{format!("{} - {}", object.start_date, object.end_date)}</dd>
                <dt>"Обновлено"</dt><dd>{object.last_update}</dd>
            </dl>
        </section>
    }
}

#[component]
fn ResponsiblePersons(persons: Vec<ResponsiblePerson>) -> impl IntoView {
    if persons.is_empty() {
        return view! { <div></div> }.into_any();
    }
    view! {
        <section class="object-details-persons">
            <h3>"Ответственные лица"</h3>
            <ul>
                {persons
                    .into_iter()
                    .map(|p| {
                        let contacts = [p.phone, p.email].into_iter().flatten().collect::<Vec<_>>().join(", ");
                        view! {
                            <li>
                                <span class="person-role">{p.role}</span>
                                <span class="person-name">{p.name}</span>
                                <span class="person-contacts">{contacts}</span>
                                {p.comment.map(|c| view! { <span class="person-comment">{c}</span> })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
    .into_any()
}

#[component]
fn DocumentLinks(links: Vec<DocumentLink>) -> impl IntoView {
    if links.is_empty() {
        return view! { <div></div> }.into_any();
    }
    view! {
        <section class="object-details-documents">
            <h3>"Документы"</h3>
            <ul>
                {links
                    .into_iter()
                    .map(|link| {
                        let icon = resource_icon(&link.url);
                        let url = link.url.clone();
                        view! {
                            <li>
                                <button class="document-link" on:click=move |_| open_resource(&url)>
                                    {icon}" "{link.document_type}
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
    .into_any()
}

/// Web links open in a new tab; anything else is treated as a file path.
fn open_resource(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let target = if is_web_resource(url) { "_blank" } else { "_self" };
    if let Err(err) = window.open_with_url_and_target(url, target) {
        log::warn!("cannot open {}: {:?}", url, err);
    }
}

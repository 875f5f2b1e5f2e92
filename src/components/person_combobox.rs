//! Person Combobox Component
//!
//! Roster lookup with a role filter and a free-text query. People passed in
//! `exclude` are never offered.

use leptos::prelude::*;

use crate::models::PersonFromExcel;
use crate::personnel::{available_roles, PersonFilter};
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn PersonCombobox(
    #[prop(into)] exclude: Signal<Vec<PersonFromExcel>>,
    #[prop(into)] on_select: Callback<PersonFromExcel>,
) -> impl IntoView {
    let store = use_dashboard_store();
    let filter = RwSignal::new(PersonFilter::default());
    let (open, set_open) = signal(false);

    let roles = Memo::new(move |_| store.people().with(|people| available_roles(people)));
    let options = Memo::new(move |_| {
        let exclude = exclude.get();
        filter.with(|f| store.people().with(|people| f.apply(people, &exclude)))
    });

    let pick = move |person: PersonFromExcel| {
        on_select.run(person);
        filter.update(|f| f.clear());
        set_open.set(false);
    };

    view! {
        <div class="person-combobox">
            <div class="person-combobox-controls">
                <input
                    type="text"
                    placeholder="Поиск сотрудника..."
                    autocomplete="off"
                    prop:value=move || filter.with(|f| f.query.clone())
                    on:focus=move |_| set_open.set(true)
                    on:input=move |ev| {
                        let query = event_target_value(&ev);
                        filter.update(|f| f.query = query);
                        set_open.set(true);
                    }
                />
                <select
                    prop:value=move || filter.with(|f| f.role.clone())
                    on:change=move |ev| {
                        let role = event_target_value(&ev);
                        filter.update(|f| f.role = role);
                    }
                >
                    <option value="">"Все роли"</option>
                    <For
                        each=move || roles.get()
                        key=|role| role.clone()
                        children=move |role| {
                            view! { <option value=role.clone()>{role.clone()}</option> }
                        }
                    />
                </select>
            </div>

            {move || {
                if !open.get() {
                    return view! { <div></div> }.into_any();
                }
                if store.people_loading().get() {
                    return view! { <div class="person-combobox-empty">"Загрузка..."</div> }.into_any();
                }
                let people = options.get();
                if people.is_empty() {
                    return view! { <div class="person-combobox-empty">"Никого не найдено"</div> }.into_any();
                }
                view! {
                    <ul class="person-combobox-list">
                        {people
                            .into_iter()
                            .map(|person| {
                                let label = person.name.clone();
                                let detail = [person.role.clone(), person.department.clone()]
                                    .into_iter()
                                    .flatten()
                                    .collect::<Vec<_>>()
                                    .join(" · ");
                                view! {
                                    <li>
                                        <button
                                            type="button"
                                            class="person-combobox-item"
                                            on:click=move |_| pick(person.clone())
                                        >
                                            <span class="person-name">{label}</span>
                                            <span class="person-detail">{detail}</span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_any()
            }}
        </div>
    }
}

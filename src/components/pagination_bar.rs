//! Pagination Bar Component

use leptos::prelude::*;

use crate::context::use_dashboard;

/// Previous/next buttons with a window of page links. Hidden for a single page.
#[component]
pub fn PaginationBar() -> impl IntoView {
    let ctx = use_dashboard();
    let max_visible = ctx.max_visible_pages();
    let paginator = ctx.paginator;

    move || {
        let pager = paginator.get();
        if pager.total_pages() <= 1 {
            return view! { <div></div> }.into_any();
        }
        let current = pager.current_page();
        let total = pager.total_pages();

        view! {
            <nav class="pagination-bar">
                <button
                    class="pagination-prev"
                    disabled=!pager.has_previous()
                    on:click=move |_| ctx.previous_page()
                >
                    "‹"
                </button>
                {pager
                    .visible_pages(max_visible)
                    .into_iter()
                    .map(|page| {
                        let class = if page == current { "pagination-page active" } else { "pagination-page" };
                        view! {
                            <button class=class on:click=move |_| ctx.set_page(page)>
                                {page}
                            </button>
                        }
                    })
                    .collect_view()}
                {pager.show_ellipsis(max_visible).then(|| view! {
                    <span class="pagination-ellipsis">"…"</span>
                    <button class="pagination-page" on:click=move |_| ctx.set_page(total)>
                        {total}
                    </button>
                })}
                <button
                    class="pagination-next"
                    disabled=!pager.has_next()
                    on:click=move |_| ctx.next_page()
                >
                    "›"
                </button>
            </nav>
        }
        .into_any()
    }
}

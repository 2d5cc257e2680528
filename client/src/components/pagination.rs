//! Table footer with page size selector and prev/next controls.

use leptos::prelude::*;

use crate::state::admin::{Pager, ROWS_PER_PAGE_OPTIONS};

#[component]
pub fn Pagination(pager: RwSignal<Pager>) -> impl IntoView {
    view! {
        <div class="pagination">
            <label class="pagination__rows">
                "Rows per page"
                <select
                    prop:value=move || pager.get().rows_per_page.to_string()
                    on:change=move |ev| {
                        if let Ok(rows) = event_target_value(&ev).parse::<u32>() {
                            pager.update(|p| p.set_rows(rows));
                        }
                    }
                >
                    {ROWS_PER_PAGE_OPTIONS
                        .iter()
                        .map(|rows| view! { <option value=rows.to_string()>{rows.to_string()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <span class="pagination__range">{move || pager.get().range_label()}</span>
            <button
                class="btn pagination__prev"
                disabled=move || !pager.get().has_prev()
                on:click=move |_| pager.update(Pager::prev)
            >
                "Prev"
            </button>
            <button
                class="btn pagination__next"
                disabled=move || !pager.get().has_next()
                on:click=move |_| pager.update(Pager::next)
            >
                "Next"
            </button>
        </div>
    }
}

//! Windowed page selector for the query list.

use leptos::prelude::*;

use crate::state::query_list::QueryListState;

/// Previous/next plus up to five numbered buttons around the current page.
#[component]
pub fn Pagination(state: RwSignal<QueryListState>, on_page: Callback<u32>) -> impl IntoView {
    let page = move || state.with(|s| s.pagination.page);

    view! {
        <Show when=move || state.with(|s| s.total_pages() > 1)>
            <nav class="pagination">
                <button
                    class="pagination__btn"
                    disabled=move || !state.with(QueryListState::has_prev)
                    on:click=move |_| on_page.run(page().saturating_sub(1))
                >
                    "Previous"
                </button>
                <For each=move || state.with(QueryListState::page_window) key=|n| *n let:n>
                    <button
                        class="pagination__btn"
                        class:pagination__btn--active=move || page() == n
                        on:click=move |_| on_page.run(n)
                    >
                        {n}
                    </button>
                </For>
                <button
                    class="pagination__btn"
                    disabled=move || !state.with(QueryListState::has_next)
                    on:click=move |_| on_page.run(page() + 1)
                >
                    "Next"
                </button>
                <span class="pagination__summary">
                    {move || state.with(|s| format!("Page {} of {} ({} queries)", s.pagination.page, s.total_pages(), s.total))}
                </span>
            </nav>
        </Show>
    }
}

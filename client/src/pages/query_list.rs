//! Slow-query list page: filters, paginated results, and the error modal.
//!
//! SYSTEM CONTEXT
//! ==============
//! Filter and page live in one `RwSignal<QueryListState>`. The request
//! parameters are derived through a `Memo`, so the load effect re-runs only
//! when the outgoing request would actually differ.

use leptos::prelude::*;

use crate::components::error_modal::ErrorModal;
use crate::components::multi_select::MultiSelect;
use crate::components::pagination::Pagination;
use crate::components::query_item::QueryItem;
use crate::state::query_list::{LoadStatus, QueryListState};

#[component]
pub fn QueryListPage() -> impl IntoView {
    let state = RwSignal::new(QueryListState::default());
    let params = Memo::new(move |_| state.with(QueryListState::query_params));
    // Bumped by the retry button after a dismissed failure.
    let reload = RwSignal::new(0_u32);

    #[cfg(feature = "hydrate")]
    let client = crate::net::http::ApiClient::from_context();

    // Filter options are fetched once per mount.
    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_databases(&client).await {
                Ok(options) => state.update(|s| s.database_options = options),
                Err(err) => log::warn!("database options unavailable: {err}"),
            }
            match crate::net::api::fetch_usernames(&client).await {
                Ok(names) => state.update(|s| s.username_options = names),
                Err(err) => log::warn!("username options unavailable: {err}"),
            }
        });
    }

    Effect::new(move || {
        let params = params.get();
        reload.track();
        let seq = state.try_update(QueryListState::begin_load).unwrap_or_default();
        #[cfg(feature = "hydrate")]
        let client = client.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_queries(&client, &params).await;
            state.update(|s| {
                if !s.finish_load(seq, result) {
                    log::debug!("dropped stale query page #{seq}");
                }
            });
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (params, seq);
    });

    let error = Signal::derive(move || state.with(|s| s.error().map(str::to_owned)));
    let on_close_error = Callback::new(move |()| state.update(QueryListState::clear_error));
    let on_page = Callback::new(move |page: u32| state.update(|s| s.go_to_page(page)));
    let on_databases = Callback::new(move |names: Vec<String>| state.update(|s| s.set_databases(names)));

    let database_options = Signal::derive(move || state.with(|s| s.database_options.clone()));
    let selected_databases = Signal::derive(move || state.with(|s| s.selected_databases.clone()));

    view! {
        <div class="page page--queries">
            <header class="page__header">
                <h1>"Slow Queries"</h1>
                <span class="page__count">{move || state.with(|s| format!("{} fingerprints", s.total))}</span>
            </header>
            <section class="filters">
                <label class="filters__field">
                    <span>"User"</span>
                    <input
                        class="filters__input"
                        type="search"
                        list="username-options"
                        placeholder="Filter by username"
                        prop:value=move || state.with(|s| s.username.clone())
                        on:input=move |ev| state.update(|s| s.set_username(&event_target_value(&ev)))
                    />
                    <datalist id="username-options">
                        <For each=move || state.with(|s| s.username_options.clone()) key=|name| name.clone() let:name>
                            <option value=name></option>
                        </For>
                    </datalist>
                </label>
                <div class="filters__field">
                    <span>"Databases"</span>
                    <MultiSelect options=database_options selected=selected_databases on_change=on_databases />
                </div>
            </section>
            <Show
                when=move || !state.with(QueryListState::is_loading)
                fallback=|| view! { <div class="page-loading">"Loading..."</div> }
            >
                <Show
                    when=move || state.with(|s| !s.items.is_empty())
                    fallback=move || {
                        view! {
                            <Show when=move || state.with(|s| s.status == LoadStatus::Success)>
                                <p class="empty-state">"No slow queries match these filters."</p>
                            </Show>
                        }
                    }
                >
                    <div class="query-list">
                        <For each=move || state.with(|s| s.items.clone()) key=|q| q.checksum.clone() let:query>
                            <QueryItem query=query />
                        </For>
                    </div>
                </Show>
            </Show>
            <Show when=move || state.with(QueryListState::can_retry)>
                <div class="retry">
                    <button class="btn btn--outline" on:click=move |_| reload.update(|n| *n += 1)>"Retry"</button>
                </div>
            </Show>
            <Pagination state=state on_page=on_page />
            <ErrorModal message=error on_close=on_close_error />
        </div>
    }
}

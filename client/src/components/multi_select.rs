//! Searchable multi-select dropdown for the database filter.

#[cfg(test)]
#[path = "multi_select_test.rs"]
mod multi_select_test;

use leptos::prelude::*;

use crate::net::types::DatabaseOption;

/// Selected names spelled out before collapsing to a count.
pub const MAX_DISPLAY_ITEMS: usize = 2;

/// Options whose name contains `term`, case-insensitively.
pub fn filter_options<'a>(options: &'a [DatabaseOption], term: &str) -> Vec<&'a DatabaseOption> {
    let term = term.trim().to_lowercase();
    options
        .iter()
        .filter(|option| term.is_empty() || option.dbname.to_lowercase().contains(&term))
        .collect()
}

/// Add `name` if absent, remove it if present. Order of the rest is kept.
pub fn toggle_selection(selected: &[String], name: &str) -> Vec<String> {
    if selected.iter().any(|s| s == name) {
        selected.iter().filter(|s| *s != name).cloned().collect()
    } else {
        let mut next = selected.to_vec();
        next.push(name.to_owned());
        next
    }
}

/// Whether every visible option is already selected.
pub fn all_visible_selected(selected: &[String], visible: &[&DatabaseOption]) -> bool {
    !visible.is_empty() && visible.iter().all(|option| selected.contains(&option.dbname))
}

/// Select every visible option, or clear the selection if they already are.
pub fn toggle_all(selected: &[String], visible: &[&DatabaseOption]) -> Vec<String> {
    if all_visible_selected(selected, visible) {
        Vec::new()
    } else {
        visible.iter().map(|option| option.dbname.clone()).collect()
    }
}

/// Summary shown in the closed dropdown.
pub fn display_text(selected: &[String], placeholder: &str) -> String {
    match selected.len() {
        0 => placeholder.to_owned(),
        n if n <= MAX_DISPLAY_ITEMS => selected.join(", "),
        n => format!("{} and {} more", selected[..MAX_DISPLAY_ITEMS].join(", "), n - MAX_DISPLAY_ITEMS),
    }
}

#[component]
pub fn MultiSelect(
    #[prop(into)] options: Signal<Vec<DatabaseOption>>,
    #[prop(into)] selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let open = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    let visible = move || options.with(|all| filter_options(all, &search.get()).into_iter().cloned().collect::<Vec<_>>());

    let on_toggle_all = move |_| {
        let visible = visible();
        let refs = visible.iter().collect::<Vec<_>>();
        on_change.run(toggle_all(&selected.get(), &refs));
    };

    view! {
        <div class="multi-select" class:multi-select--disabled=move || disabled.get()>
            <button
                type="button"
                class="multi-select__toggle"
                disabled=move || disabled.get()
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class:multi-select__placeholder=move || selected.with(Vec::is_empty)>
                    {move || display_text(&selected.get(), "All databases")}
                </span>
                <span class="multi-select__caret">{move || if open.get() { "▲" } else { "▼" }}</span>
            </button>
            <div class="multi-select__chips">
                <For each=move || selected.get() key=|name| name.clone() let:name>
                    <span class="chip">
                        {name.clone()}
                        <button
                            type="button"
                            class="chip__remove"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_change.run(toggle_selection(&selected.get(), &name));
                            }
                        >
                            "×"
                        </button>
                    </span>
                </For>
            </div>
            <Show when=move || open.get() && !disabled.get()>
                <div class="multi-select__menu">
                    <input
                        class="multi-select__search"
                        type="text"
                        placeholder="Search databases..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <div class="multi-select__actions">
                        <button type="button" class="btn btn--small" on:click=on_toggle_all>
                            {move || {
                                let visible = visible();
                                let refs = visible.iter().collect::<Vec<_>>();
                                if all_visible_selected(&selected.get(), &refs) { "Deselect all" } else { "Select all" }
                            }}
                        </button>
                        <button
                            type="button"
                            class="btn btn--small btn--outline"
                            disabled=move || selected.with(Vec::is_empty)
                            on:click=move |_| on_change.run(Vec::new())
                        >
                            "Clear"
                        </button>
                    </div>
                    <ul class="multi-select__options">
                        <For each=visible key=|option| option.dbname.clone() let:option>
                            {
                                let name = option.dbname.clone();
                                let checked_name = name.clone();
                                view! {
                                    <li class="multi-select__option">
                                        <label>
                                            <input
                                                type="checkbox"
                                                prop:checked=move || selected.with(|s| s.contains(&checked_name))
                                                on:change=move |_| on_change.run(toggle_selection(&selected.get(), &name))
                                            />
                                            <span class="multi-select__name">{option.dbname.clone()}</span>
                                            <span class="multi-select__count">
                                                {format!("{} queries / {} runs", option.query_count, option.total_occurrences)}
                                            </span>
                                        </label>
                                    </li>
                                }
                            }
                        </For>
                        <Show when=move || visible().is_empty()>
                            <li class="multi-select__empty">"No matching databases"</li>
                        </Show>
                    </ul>
                </div>
            </Show>
        </div>
    }
}

//! One row of the slow-query list.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::ConsoleConfig;
use crate::net::types::QueryFingerprint;
use crate::state::query_detail::{status_badge_class, status_label};
use crate::util::format::{display_last_occurrence, format_number, short_checksum};

/// Coloured review-status badge.
#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let class = status_badge_class(&status);
    let label = status_label(&status).to_owned();
    view! { <span class=class>{label}</span> }
}

#[component]
pub fn QueryItem(query: QueryFingerprint) -> impl IntoView {
    let offset = use_context::<ConsoleConfig>().unwrap_or_default().display_offset_hours;
    let href = format!("/query/{}", urlencoding::encode(&query.checksum));
    let last_seen = display_last_occurrence(query.last_occurrence.as_deref(), offset);
    let checksum = short_checksum(&query.checksum);

    view! {
        <A href=href attr:class="query-item">
            <div class="query-item__meta">
                <StatusBadge status=query.reviewed_status.clone() />
                <span class="query-item__db">{query.dbname.clone()}</span>
                <span class="query-item__user">{query.username.clone()}</span>
                <span class="query-item__time">{last_seen}</span>
                <span class="query-item__count">{format!("{} runs", format_number(query.total_occurrences))}</span>
                <span class="query-item__checksum" title=query.checksum.clone()>{checksum}</span>
            </div>
            <pre class="query-item__sql">{query.normalized_sql.clone()}</pre>
        </A>
    }
}

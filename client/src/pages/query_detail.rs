//! Detail page for one fingerprint: latest execution, trend, and review form.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::charts::{ChartPoint, LineChart};
use crate::components::guard::RequirePermission;
use crate::components::query_item::StatusBadge;
use crate::config::ConsoleConfig;
use crate::state::auth::{AuthState, OPTIMIZATION_EDIT};
use crate::state::query_detail::{QueryDetailState, ReviewStatus, SaveStatus};
use crate::util::format::{date_label, display_timestamp, format_number, format_time};

#[component]
pub fn QueryDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let offset = use_context::<ConsoleConfig>().unwrap_or_default().display_offset_hours;
    let params = use_params_map();
    let checksum = Memo::new(move |_| params.with(|p| p.get("checksum").unwrap_or_default()));
    let state = RwSignal::new(QueryDetailState {
        loading: true,
        ..QueryDetailState::default()
    });
    // Bumped after a successful save to refetch.
    let reload = RwSignal::new(0_u32);
    let can_edit = move || auth.with(AuthState::can_edit_reviews);

    #[cfg(feature = "hydrate")]
    let client = crate::net::http::ApiClient::from_context();

    {
        #[cfg(feature = "hydrate")]
        let client = client.clone();
        Effect::new(move || {
            let checksum = checksum.get();
            reload.track();
            state.update(|s| s.begin_load(&checksum));
            #[cfg(feature = "hydrate")]
            {
                let client = client.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::fetch_query_detail(&client, &checksum).await {
                        Ok(detail) => state.update(|s| s.apply_detail(detail)),
                        Err(err) => state.update(|s| s.apply_error(err.user_message())),
                    }
                });
            }
        });
    }

    let on_save = Callback::new(move |()| {
        if !can_edit() || state.with(|s| s.save == SaveStatus::Saving) {
            return;
        }
        let update = state.with(|s| s.form.to_update());
        state.update(|s| s.save = SaveStatus::Saving);
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let checksum = checksum.get_untracked();
            leptos::task::spawn_local(async move {
                match crate::net::api::update_review(&client, &checksum, &update).await {
                    Ok(()) => {
                        state.update(|s| s.save = SaveStatus::Saved);
                        reload.update(|n| *n += 1);
                    }
                    Err(err) => state.update(|s| s.save = SaveStatus::Failed(err.user_message())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = update;
    });

    let trend_points = Signal::derive(move || {
        state.with(|s| {
            s.detail
                .as_ref()
                .map(|d| d.trend.iter().map(|t| ChartPoint::new(date_label(&t.date), t.query_time)).collect::<Vec<_>>())
                .unwrap_or_default()
        })
    });

    let primary = move || state.with(|s| s.primary().cloned());
    let field = move |f: fn(&crate::net::types::DetailRecord) -> Option<String>| {
        move || primary().and_then(|record| f(&record)).unwrap_or_else(|| "-".to_owned())
    };

    view! {
        <div class="page page--detail">
            <A href="/" attr:class="page__back">"← Back to list"</A>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <div class="alert alert--danger">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
                </Show>
                <Show when=move || state.with(QueryDetailState::is_not_found)>
                    <div class="alert alert--warning">"No query with this checksum was found."</div>
                </Show>
                <Show when=move || primary().is_some()>
                    <header class="page__header">
                        <h1>"Query " <code>{move || checksum.get()}</code></h1>
                        <StatusBadge status=primary().and_then(|r| r.reviewed_status).unwrap_or_default() />
                    </header>
                    <section class="detail-grid">
                        <div class="detail-grid__item">
                            <span class="detail-grid__label">"Database"</span>
                            <span>{field(|r| Some(r.dbname.clone()))}</span>
                        </div>
                        <div class="detail-grid__item">
                            <span class="detail-grid__label">"User"</span>
                            <span>{field(|r| Some(r.username.clone()))}</span>
                        </div>
                        <div class="detail-grid__item">
                            <span class="detail-grid__label">"Last execution"</span>
                            <span>
                                {move || {
                                    primary()
                                        .and_then(|r| r.timestamp)
                                        .map(|raw| display_timestamp(&raw, offset).unwrap_or(raw))
                                        .unwrap_or_else(|| "-".to_owned())
                                }}
                            </span>
                        </div>
                        <div class="detail-grid__item">
                            <span class="detail-grid__label">"Query time"</span>
                            <span>{field(|r| r.query_time.map(format_time))}</span>
                        </div>
                        <div class="detail-grid__item">
                            <span class="detail-grid__label">"Rows examined"</span>
                            <span>{field(|r| r.rows_examined.map(rows))}</span>
                        </div>
                        <div class="detail-grid__item">
                            <span class="detail-grid__label">"Rows sent"</span>
                            <span>{field(|r| r.rows_sent.map(rows))}</span>
                        </div>
                    </section>
                    <section class="detail-sql">
                        <h2>"Normalized SQL"</h2>
                        <pre class="sql-block">{field(|r| Some(r.normalized_sql.clone()))}</pre>
                        <Show when=move || primary().is_some_and(|r| r.sql_text.is_some())>
                            <h2>"Sample statement"</h2>
                            <pre class="sql-block">{field(|r| r.sql_text.clone())}</pre>
                        </Show>
                    </section>
                    <Show when=move || trend_points.with(|p| !p.is_empty())>
                        <LineChart title="Query time trend" points=trend_points color="#3b82f6" format=format_time />
                    </Show>
                    <section class="review-form">
                        <h2>"Review"</h2>
                        <label class="review-form__field">
                            <span>"Status"</span>
                            <select
                                disabled=move || !can_edit()
                                prop:value=move || state.with(|s| s.form.status.as_str())
                                on:change=move |ev| {
                                    let status = ReviewStatus::parse(&event_target_value(&ev)).unwrap_or_default();
                                    state.update(|s| s.form.status = status);
                                }
                            >
                                {ReviewStatus::ALL
                                    .into_iter()
                                    .map(|status| view! { <option value=status.as_str()>{status.as_str()}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <label class="review-form__field">
                            <span>"Comments"</span>
                            <textarea
                                rows="4"
                                disabled=move || !can_edit()
                                prop:value=move || state.with(|s| s.form.comments.clone())
                                on:input=move |ev| {
                                    let comments = event_target_value(&ev);
                                    state.update(|s| s.form.comments = comments);
                                }
                            ></textarea>
                        </label>
                        <RequirePermission permission=OPTIMIZATION_EDIT>
                            <button
                                class="btn btn--primary"
                                disabled=move || state.with(|s| s.save == SaveStatus::Saving)
                                on:click=move |_| on_save.run(())
                            >
                                {move || if state.with(|s| s.save == SaveStatus::Saving) { "Saving..." } else { "Save review" }}
                            </button>
                        </RequirePermission>
                        {move || match state.with(|s| s.save.clone()) {
                            SaveStatus::Saved => view! { <p class="alert alert--success">"Review saved."</p> }.into_any(),
                            SaveStatus::Failed(message) => view! { <p class="alert alert--danger">{message}</p> }.into_any(),
                            _ => ().into_any(),
                        }}
                    </section>
                </Show>
            </Show>
        </div>
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rows(value: f64) -> String {
    format_number(value.max(0.0).round() as u64)
}

//! Per-user statistics page: aggregate charts and a drill-down for one user.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::charts::{BarChart, ChartPoint, LineChart, PieChart};
use crate::components::query_item::StatusBadge;
use crate::net::types::UserStat;
use crate::state::user_stats::{UserStatsState, bar_chart_users, pie_chart_users};
use crate::util::format::{date_label, format_number, format_time, truncate_sql};

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(value: f64) -> String {
    format_number(value.max(0.0).round() as u64)
}

fn chart_points<F>(rows: &[UserStat], value: F) -> Vec<ChartPoint>
where
    F: Fn(&UserStat) -> f64,
{
    rows.iter().map(|row| ChartPoint::new(row.username.clone(), value(row))).collect()
}

#[component]
pub fn UserStatsPage() -> impl IntoView {
    let state = RwSignal::new(UserStatsState {
        loading: true,
        ..UserStatsState::default()
    });

    #[cfg(feature = "hydrate")]
    let client = crate::net::http::ApiClient::from_context();

    #[cfg(feature = "hydrate")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_user_stats(&client).await {
                Ok(summary) => state.update(|s| s.apply_summary(summary)),
                Err(err) => state.update(|s| s.apply_error(err.user_message())),
            }
        });
    }

    let on_select = Callback::new(move |username: String| {
        if state.with(|s| s.is_current(&username)) {
            return;
        }
        state.update(|s| s.select(&username));
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_user_detail_stats(&client, &username)
                    .await
                    .map_err(|err| err.user_message());
                state.update(|s| s.apply_detail(&username, result));
            });
        }
    });

    #[allow(clippy::cast_precision_loss)]
    let occurrences = Signal::derive(move || {
        state.with(|s| chart_points(bar_chart_users(&s.stats), |row| row.total_occurrences as f64))
    });
    #[allow(clippy::cast_precision_loss)]
    let unique = Signal::derive(move || {
        state.with(|s| chart_points(pie_chart_users(&s.stats), |row| row.unique_queries as f64))
    });
    let avg_time = Signal::derive(move || state.with(|s| chart_points(bar_chart_users(&s.stats), |row| row.avg_query_time)));
    #[allow(clippy::cast_precision_loss)]
    let daily = Signal::derive(move || {
        state.with(|s| {
            s.detail
                .as_ref()
                .map(|d| {
                    d.time_distribution
                        .iter()
                        .map(|day| ChartPoint::new(date_label(&day.query_date), day.daily_count as f64))
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default()
        })
    });

    view! {
        <div class="page page--stats">
            <header class="page__header">
                <h1>"User Statistics"</h1>
            </header>
            <Show when=move || !state.with(|s| s.loading) fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <div class="alert alert--danger">{move || state.with(|s| s.error.clone().unwrap_or_default())}</div>
                </Show>
                <section class="stat-cards">
                    <div class="stat-card">
                        <span class="stat-card__label">"Users"</span>
                        <span class="stat-card__value">{move || state.with(|s| format_number(s.totals().total_users))}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Unique queries"</span>
                        <span class="stat-card__value">{move || state.with(|s| format_number(s.totals().total_unique_queries))}</span>
                    </div>
                    <div class="stat-card">
                        <span class="stat-card__label">"Executions"</span>
                        <span class="stat-card__value">{move || state.with(|s| format_number(s.totals().total_occurrences))}</span>
                    </div>
                </section>
                <section class="chart-grid">
                    <BarChart title="Top users by executions" points=occurrences color="#ef4444" format=count />
                    <PieChart title="Unique queries by user" points=unique />
                    <BarChart title="Average query time" points=avg_time color="#f59e0b" format=format_time />
                </section>
                <table class="table table--users">
                    <thead>
                        <tr>
                            <th>"User"</th>
                            <th>"Executions"</th>
                            <th>"Unique queries"</th>
                            <th>"Avg time"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For each=move || state.with(|s| s.stats.clone()) key=|row| row.username.clone() let:row>
                            {
                                let name = row.username.clone();
                                let active_name = name.clone();
                                view! {
                                    <tr
                                        class="table__row"
                                        class:table__row--active=move || state.with(|s| s.selected.as_deref() == Some(active_name.as_str()))
                                        on:click=move |_| on_select.run(name.clone())
                                    >
                                        <td>{row.username.clone()}</td>
                                        <td>{format_number(row.total_occurrences)}</td>
                                        <td>{format_number(row.unique_queries)}</td>
                                        <td>{format_time(row.avg_query_time)}</td>
                                    </tr>
                                }
                            }
                        </For>
                    </tbody>
                </table>
                <Show when=move || state.with(|s| s.selected.is_some())>
                    <section class="user-detail">
                        <h2>{move || state.with(|s| s.selected.clone().unwrap_or_default())}</h2>
                        <Show when=move || !state.with(|s| s.detail_loading) fallback=|| view! { <div class="page-loading">"Loading..."</div> }>
                            <Show when=move || state.with(|s| s.detail_error.is_some())>
                                <div class="alert alert--danger">{move || state.with(|s| s.detail_error.clone().unwrap_or_default())}</div>
                            </Show>
                            <Show when=move || daily.with(|d| !d.is_empty())>
                                <LineChart title="Daily executions (30 days)" points=daily color="#3b82f6" format=count />
                            </Show>
                            <h3>"Databases"</h3>
                            <ul class="db-shares">
                                {move || {
                                    state.with(|s| {
                                        s.detail
                                            .as_ref()
                                            .map(|d| d.db_distribution.clone())
                                            .unwrap_or_default()
                                    })
                                        .into_iter()
                                        .map(|share| {
                                            view! {
                                                <li class="db-shares__item">
                                                    <span class="db-shares__name">{share.dbname.unwrap_or_else(|| "(unknown)".to_owned())}</span>
                                                    <span>{format!("{} queries", format_number(share.unique_queries))}</span>
                                                    <span>{format!("{} runs", format_number(share.total_occurrences))}</span>
                                                    <span>{format_time(share.avg_query_time)}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                            <h3>"Top problem queries"</h3>
                            <ol class="problem-queries">
                                {move || {
                                    state.with(|s| s.top_problem_queries().to_vec())
                                        .into_iter()
                                        .map(|query| {
                                            let href = format!("/query/{}", urlencoding::encode(&query.checksum));
                                            view! {
                                                <li class="problem-queries__item">
                                                    <A href=href>
                                                        <StatusBadge status=query.reviewed_status.clone() />
                                                        <span class="problem-queries__db">{query.dbname.clone()}</span>
                                                        <span>{format!("{} runs", format_number(query.occurrences))}</span>
                                                        <span>{format!("avg {}", format_time(query.avg_query_time))}</span>
                                                        <code class="problem-queries__sql">{truncate_sql(&query.normalized_sql)}</code>
                                                    </A>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ol>
                        </Show>
                    </section>
                </Show>
            </Show>
        </div>
    }
}

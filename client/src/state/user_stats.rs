//! Aggregate and per-user statistics state.

#[cfg(test)]
#[path = "user_stats_test.rs"]
mod user_stats_test;

use crate::net::types::{TotalStats, UserDetailStats, UserQuery, UserStat, UserStatsSummary};

/// Users shown in the occurrence and average-time bar charts.
pub const TOP_USERS: usize = 10;
/// Users shown in the unique-query pie chart.
pub const PIE_USERS: usize = 8;
/// Problem queries listed for the selected user.
pub const TOP_QUERIES: usize = 5;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserStatsState {
    pub loading: bool,
    pub error: Option<String>,
    pub stats: Vec<UserStat>,
    pub total: Option<TotalStats>,
    pub selected: Option<String>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,
    pub detail: Option<UserDetailStats>,
}

impl UserStatsState {
    pub fn apply_summary(&mut self, summary: UserStatsSummary) {
        self.stats = summary.user_stats;
        self.total = summary.total_stats;
        self.error = None;
        self.loading = false;
    }

    pub fn apply_error(&mut self, message: String) {
        self.stats.clear();
        self.total = None;
        self.error = Some(message);
        self.loading = false;
    }

    /// Select `username` and drop the previous user's detail.
    pub fn select(&mut self, username: &str) {
        self.selected = Some(username.to_owned());
        self.detail = None;
        self.detail_error = None;
        self.detail_loading = true;
    }

    /// Whether `username` is selected with its detail loaded or in flight.
    /// A failed fetch does not count, so selecting again retries.
    pub fn is_current(&self, username: &str) -> bool {
        self.selected.as_deref() == Some(username) && (self.detail.is_some() || self.detail_loading)
    }

    /// Apply a detail response, ignoring it if the selection moved on.
    pub fn apply_detail(&mut self, username: &str, result: Result<UserDetailStats, String>) {
        if self.selected.as_deref() != Some(username) {
            return;
        }
        match result {
            Ok(detail) => self.detail = Some(detail),
            Err(message) => self.detail_error = Some(message),
        }
        self.detail_loading = false;
    }

    /// Totals row, derived from the per-user rows when the service omits it.
    pub fn totals(&self) -> TotalStats {
        self.total.clone().unwrap_or_else(|| TotalStats {
            total_unique_queries: self.stats.iter().map(|s| s.unique_queries).sum(),
            total_occurrences: self.stats.iter().map(|s| s.total_occurrences).sum(),
            total_users: self.stats.len() as u64,
        })
    }

    pub fn selected_stat(&self) -> Option<&UserStat> {
        let selected = self.selected.as_deref()?;
        self.stats.iter().find(|stat| stat.username == selected)
    }

    pub fn top_problem_queries(&self) -> &[UserQuery] {
        match &self.detail {
            Some(detail) => &detail.queries[..detail.queries.len().min(TOP_QUERIES)],
            None => &[],
        }
    }
}

/// The first `n` rows in service order.
///
/// The service ranks users by occurrences, then average time, so every chart
/// plots the same leading users.
pub fn leading_users(stats: &[UserStat], n: usize) -> &[UserStat] {
    &stats[..stats.len().min(n)]
}

/// Rows for the occurrence and average-time bar charts.
pub fn bar_chart_users(stats: &[UserStat]) -> &[UserStat] {
    leading_users(stats, TOP_USERS)
}

/// Rows for the unique-query pie chart.
pub fn pie_chart_users(stats: &[UserStat]) -> &[UserStat] {
    leading_users(stats, PIE_USERS)
}

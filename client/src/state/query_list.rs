//! Filter, pagination, and load state for the slow-query list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owned by the list page as an `RwSignal<QueryListState>`. Every load is
//! tagged with a sequence number; a response whose tag is no longer current
//! is dropped so a slow earlier request cannot overwrite a newer filter.

#[cfg(test)]
#[path = "query_list_test.rs"]
mod query_list_test;

use crate::net::error::ApiError;
use crate::net::types::{DatabaseOption, QueryFingerprint, QueryPage};

/// Rows per page unless the caller overrides it.
pub const DEFAULT_PER_PAGE: u32 = 20;
/// Page buttons shown on either side of the current page.
pub const PAGE_WINDOW_RADIUS: u32 = 2;

/// Where the list is in its fetch cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryListState {
    /// Username substring filter as typed.
    pub username: String,
    /// Selected database names in selection order.
    pub selected_databases: Vec<String>,
    pub pagination: Pagination,
    pub status: LoadStatus,
    pub items: Vec<QueryFingerprint>,
    pub total: u64,
    pub database_options: Vec<DatabaseOption>,
    pub username_options: Vec<String>,
    request_seq: u64,
}

impl QueryListState {
    /// Change the username filter; returns to page 1.
    pub fn set_username(&mut self, username: &str) {
        self.username = username.to_owned();
        self.pagination.page = 1;
    }

    /// Replace the database selection; returns to page 1.
    pub fn set_databases(&mut self, databases: Vec<String>) {
        self.selected_databases = databases;
        self.pagination.page = 1;
    }

    /// Change page size; returns to page 1.
    pub fn set_per_page(&mut self, per_page: u32) {
        self.pagination.per_page = per_page.max(1);
        self.pagination.page = 1;
    }

    /// Jump to `page`, clamped to the known page range. Filters are untouched.
    pub fn go_to_page(&mut self, page: u32) {
        self.pagination.page = page.clamp(1, self.total_pages().max(1));
    }

    /// Request parameters for `GET /queries` (and the export).
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::with_capacity(4);
        let username = self.username.trim();
        if !username.is_empty() {
            params.push(("username", username.to_owned()));
        }
        params.push(("page", self.pagination.page.to_string()));
        params.push(("per_page", self.pagination.per_page.to_string()));
        if !self.selected_databases.is_empty() {
            params.push(("dbname", self.selected_databases.join(",")));
        }
        params
    }

    /// `ceil(total / per_page)`.
    pub fn total_pages(&self) -> u32 {
        let per_page = u64::from(self.pagination.per_page.max(1));
        u32::try_from(self.total.div_ceil(per_page)).unwrap_or(u32::MAX)
    }

    /// Page buttons to render: `[max(1, page-2), min(total_pages, page+2)]`.
    pub fn page_window(&self) -> Vec<u32> {
        let page = self.pagination.page;
        let start = page.saturating_sub(PAGE_WINDOW_RADIUS).max(1);
        let end = page.saturating_add(PAGE_WINDOW_RADIUS).min(self.total_pages());
        (start..=end).collect()
    }

    pub fn has_prev(&self) -> bool {
        self.pagination.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.pagination.page < self.total_pages()
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Enter `Loading` and return the tag for the request about to be sent.
    pub fn begin_load(&mut self) -> u64 {
        self.request_seq += 1;
        self.status = LoadStatus::Loading;
        self.request_seq
    }

    /// Apply a response. Returns false (and changes nothing) when `seq` is stale.
    pub fn finish_load(&mut self, seq: u64, result: Result<QueryPage, ApiError>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        match result {
            Ok(page) => {
                self.items = page.data;
                self.total = page.total;
                self.status = LoadStatus::Success;
            }
            Err(err) => {
                self.items.clear();
                self.total = 0;
                self.status = LoadStatus::Error(err.user_message());
            }
        }
        true
    }

    /// Message of the current failure, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Dismiss the error modal without reloading.
    pub fn clear_error(&mut self) {
        if matches!(self.status, LoadStatus::Error(_)) {
            self.status = LoadStatus::Idle;
        }
    }

    /// True once a failed load has been dismissed and nothing replaced it.
    pub fn can_retry(&self) -> bool {
        self.status == LoadStatus::Idle && self.request_seq > 0
    }
}

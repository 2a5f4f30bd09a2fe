//! Review status vocabulary and the editable review form.
//!
//! The service stores review status as free text but only ever writes one of
//! the fixed strings below; unknown values read back as the default.

#[cfg(test)]
#[path = "query_detail_test.rs"]
mod query_detail_test;

use crate::net::types::{DetailRecord, QueryDetail, ReviewUpdate};

/// Disposition of a slow-query fingerprint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReviewStatus {
    #[default]
    PendingOptimization,
    IndexAdded,
    IndexAddedByOwner,
    PeriodicBatch,
    AlreadyOptimal,
    RewriteRequired,
    ImplicitConversion,
    AbandonFullScan,
    AbandonFullAggregate,
    AbandonRowsOver400k,
    AbandonFuzzySearch,
    AbandonFuzzySearchWithOr,
    AbandonPagination,
    AbandonOrQuery,
}

impl ReviewStatus {
    /// Every status in the order the selector lists them.
    pub const ALL: [Self; 14] = [
        Self::PendingOptimization,
        Self::IndexAdded,
        Self::IndexAddedByOwner,
        Self::PeriodicBatch,
        Self::AlreadyOptimal,
        Self::RewriteRequired,
        Self::ImplicitConversion,
        Self::AbandonFullScan,
        Self::AbandonFullAggregate,
        Self::AbandonRowsOver400k,
        Self::AbandonFuzzySearch,
        Self::AbandonFuzzySearchWithOr,
        Self::AbandonPagination,
        Self::AbandonOrQuery,
    ];

    /// Exact wire string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingOptimization => "待优化",
            Self::IndexAdded => "已加索引优化",
            Self::IndexAddedByOwner => "已自主添加索引优化",
            Self::PeriodicBatch => "周期性跑批",
            Self::AlreadyOptimal => "SQL已最优",
            Self::RewriteRequired => "需研发修改SQL~SQL改写",
            Self::ImplicitConversion => "需研发修改SQL~隐式转换",
            Self::AbandonFullScan => "放弃-1.全表扫描",
            Self::AbandonFullAggregate => "放弃-2.全表聚合",
            Self::AbandonRowsOver400k => "放弃-3.扫描行数超40W",
            Self::AbandonFuzzySearch => "放弃-模糊查询",
            Self::AbandonFuzzySearchWithOr => "放弃-模糊查询+or查询",
            Self::AbandonPagination => "放弃-分页查询",
            Self::AbandonOrQuery => "放弃-or查询",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL.into_iter().find(|status| status.as_str() == raw)
    }

    /// Parse, falling back to the default for blank or unknown values.
    pub fn from_wire(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }
}

/// Older rows carry this status, which the selector no longer offers.
pub const LEGACY_SUGGESTED: &str = "SQL已有优化建议";

/// Badge colour class for a raw status string.
pub fn status_badge_class(raw: &str) -> &'static str {
    if raw.trim() == LEGACY_SUGGESTED {
        return "badge badge--success";
    }
    match ReviewStatus::parse(raw) {
        Some(ReviewStatus::PendingOptimization) => "badge badge--danger",
        Some(ReviewStatus::AlreadyOptimal) => "badge badge--success",
        _ => "badge badge--secondary",
    }
}

/// Label for a raw status; blank renders as the default status.
pub fn status_label(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        ReviewStatus::default().as_str()
    } else {
        trimmed
    }
}

/// Local editable review fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReviewForm {
    pub status: ReviewStatus,
    pub comments: String,
}

impl ReviewForm {
    pub fn from_detail(detail: &DetailRecord) -> Self {
        Self {
            status: ReviewStatus::from_wire(detail.reviewed_status.as_deref()),
            comments: detail.comments.clone().unwrap_or_default(),
        }
    }

    pub fn to_update(&self) -> ReviewUpdate {
        ReviewUpdate {
            comments: self.comments.clone(),
            reviewed_status: self.status.as_str().to_owned(),
        }
    }
}

/// Outcome of the most recent save.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

/// Everything the detail page renders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryDetailState {
    pub loading: bool,
    pub error: Option<String>,
    pub detail: Option<QueryDetail>,
    pub form: ReviewForm,
    pub save: SaveStatus,
    /// Fingerprint the current data belongs to.
    pub checksum: Option<String>,
}

impl QueryDetailState {
    /// Most recent execution record, if the fingerprint has any.
    pub fn primary(&self) -> Option<&DetailRecord> {
        self.detail.as_ref().and_then(|detail| detail.details.first())
    }

    /// Loaded, no error, yet nothing to show.
    pub fn is_not_found(&self) -> bool {
        !self.loading && self.error.is_none() && self.primary().is_none()
    }

    /// Start loading `checksum`. Save feedback is kept only when reloading
    /// the same fingerprint.
    pub fn begin_load(&mut self, checksum: &str) {
        if self.checksum.as_deref() != Some(checksum) {
            self.checksum = Some(checksum.to_owned());
            self.save = SaveStatus::Idle;
        }
        self.loading = true;
    }

    /// Install a fresh response and reset the form from it.
    pub fn apply_detail(&mut self, detail: QueryDetail) {
        self.form = detail.details.first().map(ReviewForm::from_detail).unwrap_or_default();
        self.detail = Some(detail);
        self.error = None;
        self.loading = false;
    }

    pub fn apply_error(&mut self, message: String) {
        self.detail = None;
        self.error = Some(message);
        self.loading = false;
    }
}

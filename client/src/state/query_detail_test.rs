use super::*;

fn record(status: Option<&str>, comments: Option<&str>) -> DetailRecord {
    DetailRecord {
        checksum: "ABCDEF0123".to_owned(),
        reviewed_status: status.map(str::to_owned),
        comments: comments.map(str::to_owned),
        ..DetailRecord::default()
    }
}

#[test]
fn all_fourteen_statuses_round_trip_through_wire_strings() {
    assert_eq!(ReviewStatus::ALL.len(), 14);
    for status in ReviewStatus::ALL {
        assert_eq!(ReviewStatus::parse(status.as_str()), Some(status));
    }
}

#[test]
fn default_status_is_pending_optimization() {
    assert_eq!(ReviewStatus::default().as_str(), "待优化");
    assert_eq!(ReviewStatus::from_wire(None), ReviewStatus::PendingOptimization);
    assert_eq!(ReviewStatus::from_wire(Some("")), ReviewStatus::PendingOptimization);
    assert_eq!(ReviewStatus::from_wire(Some("unknown")), ReviewStatus::PendingOptimization);
}

#[test]
fn parse_trims_whitespace() {
    assert_eq!(ReviewStatus::parse(" SQL已最优 "), Some(ReviewStatus::AlreadyOptimal));
    assert_eq!(ReviewStatus::parse("optimal"), None);
}

#[test]
fn badge_class_highlights_pending_and_optimal() {
    assert_eq!(status_badge_class("待优化"), "badge badge--danger");
    assert_eq!(status_badge_class("SQL已最优"), "badge badge--success");
    assert_eq!(status_badge_class("周期性跑批"), "badge badge--secondary");
    assert_eq!(status_badge_class("whatever"), "badge badge--secondary");
}

#[test]
fn blank_status_labels_as_default() {
    assert_eq!(status_label(""), "待优化");
    assert_eq!(status_label("放弃-or查询"), "放弃-or查询");
}

#[test]
fn form_reads_detail_and_builds_update() {
    let form = ReviewForm::from_detail(&record(Some("已加索引优化"), Some("added idx_user")));
    assert_eq!(form.status, ReviewStatus::IndexAdded);
    assert_eq!(
        form.to_update(),
        ReviewUpdate {
            comments: "added idx_user".to_owned(),
            reviewed_status: "已加索引优化".to_owned(),
        }
    );
}

#[test]
fn form_defaults_when_detail_unset() {
    let form = ReviewForm::from_detail(&record(None, None));
    assert_eq!(form, ReviewForm::default());
    assert_eq!(form.to_update().reviewed_status, "待优化");
}

#[test]
fn apply_detail_resets_form_and_error() {
    let mut state = QueryDetailState {
        loading: true,
        error: Some("old".to_owned()),
        ..QueryDetailState::default()
    };
    state.apply_detail(QueryDetail {
        details: vec![record(Some("SQL已最优"), None)],
        trend: Vec::new(),
    });
    assert!(!state.loading);
    assert!(state.error.is_none());
    assert_eq!(state.form.status, ReviewStatus::AlreadyOptimal);
    assert!(state.primary().is_some());
    assert!(!state.is_not_found());
}

#[test]
fn empty_details_is_not_found() {
    let mut state = QueryDetailState::default();
    state.apply_detail(QueryDetail::default());
    assert!(state.is_not_found());
}

#[test]
fn error_is_not_not_found() {
    let mut state = QueryDetailState::default();
    state.apply_error("boom".to_owned());
    assert!(!state.is_not_found());
    assert_eq!(state.error.as_deref(), Some("boom"));
}

#[test]
fn switching_fingerprint_clears_save_feedback() {
    let mut state = QueryDetailState::default();
    state.begin_load("AAA");
    state.save = SaveStatus::Saved;

    state.begin_load("AAA");
    assert_eq!(state.save, SaveStatus::Saved);
    assert!(state.loading);

    state.begin_load("BBB");
    assert_eq!(state.save, SaveStatus::Idle);
    assert_eq!(state.checksum.as_deref(), Some("BBB"));
}

#[test]
fn legacy_suggestion_status_gets_success_badge() {
    assert_eq!(status_badge_class("SQL已有优化建议"), "badge badge--success");
    assert_eq!(status_badge_class(" SQL已有优化建议 "), "badge badge--success");
}

use super::*;
use serde_json::json;

// =============================================================
// Envelope
// =============================================================

#[test]
fn envelope_into_data_returns_payload() {
    let envelope: Envelope<LoginData> = serde_json::from_value(json!({
        "success": true,
        "message": "登录成功",
        "data": {
            "token": "t1",
            "user": { "username": "alice", "permissions": [], "roles": [] }
        }
    }))
    .unwrap();
    let data = envelope.into_data().unwrap();
    assert_eq!(data.token, "t1");
    assert_eq!(data.user.username, "alice");
    assert!(data.user.permissions.is_empty());
}

#[test]
fn envelope_failure_becomes_rejected() {
    let envelope: Envelope<LoginData> = serde_json::from_value(json!({
        "success": false,
        "message": "用户名或密码错误",
        "data": null
    }))
    .unwrap();
    assert_eq!(envelope.into_data(), Err(ApiError::Rejected("用户名或密码错误".to_owned())));
}

#[test]
fn envelope_success_without_data_is_decode_error() {
    let envelope: Envelope<QueryPage> = serde_json::from_value(json!({ "success": true })).unwrap();
    assert!(matches!(envelope.into_data(), Err(ApiError::Decode(_))));
}

#[test]
fn envelope_into_unit_ignores_null_data() {
    let envelope: Envelope<serde_json::Value> =
        serde_json::from_value(json!({ "success": true, "message": "更新成功", "data": null })).unwrap();
    assert_eq!(envelope.into_unit(), Ok(()));
}

// =============================================================
// Tolerant numbers
// =============================================================

#[test]
fn fingerprint_accepts_decimal_strings_and_nulls() {
    let fp: QueryFingerprint = serde_json::from_value(json!({
        "checksum": "ABCDEF123456",
        "normalized_sql": "select * from t where id = ?",
        "dbname": "orders",
        "username": "bob",
        "total_occurrences": "12",
        "last_occurrence": "Tue, 15 Oct 2024 10:00:00 GMT",
        "reviewed_status": "待优化",
        "comments": null,
        "avg_query_time": "1.2500"
    }))
    .unwrap();
    assert_eq!(fp.total_occurrences, 12);
    assert_eq!(fp.avg_query_time, Some(1.25));
    assert_eq!(fp.comments, None);
}

#[test]
fn fingerprint_defaults_missing_and_null_fields() {
    let fp: QueryFingerprint = serde_json::from_value(json!({
        "checksum": "X",
        "dbname": null,
        "total_occurrences": null
    }))
    .unwrap();
    assert_eq!(fp.dbname, "");
    assert_eq!(fp.total_occurrences, 0);
    assert_eq!(fp.last_occurrence, None);
    assert_eq!(fp.reviewed_status, "");
}

#[test]
fn negative_count_is_rejected() {
    let result: Result<QueryPage, _> = serde_json::from_value(json!({ "data": [], "total": -1 }));
    assert!(result.is_err());
}

#[test]
fn non_numeric_string_is_rejected() {
    let result: Result<TrendPoint, _> = serde_json::from_value(json!({ "date": "2024-10-15", "query_time": "slow" }));
    assert!(result.is_err());
}

#[test]
fn user_accepts_null_permission_lists() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "username": "carol",
        "permissions": null,
        "roles": ["ADMIN"]
    }))
    .unwrap();
    assert_eq!(user.id, Some(7));
    assert!(user.permissions.is_empty());
    assert_eq!(user.roles, vec!["ADMIN".to_owned()]);
}

// =============================================================
// Payload shapes
// =============================================================

#[test]
fn query_detail_parses_details_and_trend() {
    let detail: QueryDetail = serde_json::from_value(json!({
        "details": [{
            "checksum": "ABC",
            "normalized_sql": "select ?",
            "sql_text": "select 1",
            "username": "bob",
            "dbname": "orders",
            "timestamp": "Tue, 15 Oct 2024 10:00:00 GMT",
            "query_time": 2.5,
            "rows_examined": 1000,
            "rows_sent": 1,
            "reviewed_status": null,
            "comments": null
        }],
        "trend": [
            { "date": "Mon, 14 Oct 2024 00:00:00 GMT", "query_time": "2.0000", "occurrences": 3 },
            { "date": "Tue, 15 Oct 2024 00:00:00 GMT", "query_time": 2.5, "occurrences": 1 }
        ]
    }))
    .unwrap();
    assert_eq!(detail.details.len(), 1);
    assert_eq!(detail.details[0].sql_text.as_deref(), Some("select 1"));
    assert_eq!(detail.details[0].reviewed_status, None);
    assert_eq!(detail.trend[0].query_time, 2.0);
    assert_eq!(detail.trend[1].occurrences, Some(1.0));
}

#[test]
fn user_stats_summary_parses_totals() {
    let summary: UserStatsSummary = serde_json::from_value(json!({
        "user_stats": [
            { "username": "bob", "unique_queries": 4, "total_occurrences": 120, "avg_query_time": "3.1415" }
        ],
        "total_stats": { "total_unique_queries": 10, "total_occurrences": "300", "total_users": 3 },
        "time_range": { "start_time": null, "end_time": null }
    }))
    .unwrap();
    assert_eq!(summary.user_stats[0].total_occurrences, 120);
    assert!((summary.user_stats[0].avg_query_time - 3.1415).abs() < 1e-9);
    assert_eq!(summary.total_stats.map(|t| t.total_occurrences), Some(300));
}

#[test]
fn review_update_serializes_wire_field_names() {
    let update = ReviewUpdate {
        comments: "added index".to_owned(),
        reviewed_status: "已加索引优化".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&update).unwrap(),
        json!({ "comments": "added index", "reviewed_status": "已加索引优化" })
    );
}

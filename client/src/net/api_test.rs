use super::*;

#[test]
fn query_detail_path_encodes_checksum() {
    assert_eq!(query_detail_path("A1B2C3"), "/queries/A1B2C3");
    assert_eq!(query_detail_path("a/b"), "/queries/a%2Fb");
}

#[test]
fn review_path_targets_review_endpoint() {
    assert_eq!(review_path("A1B2C3"), "/queries/A1B2C3/review");
}

#[test]
fn user_detail_stats_path_encodes_username() {
    assert_eq!(user_detail_stats_path("bob"), "/queries/stats/by-user/bob");
    assert_eq!(user_detail_stats_path("app user"), "/queries/stats/by-user/app%20user");
}

#[test]
fn fixed_paths_match_service_routes() {
    assert_eq!(LOGIN_PATH, "/login");
    assert_eq!(LOGOUT_PATH, "/logout");
    assert_eq!(USER_INFO_PATH, "/user/info");
    assert_eq!(EXPORT_PATH, "/queries/export");
    assert_eq!(USER_STATS_PATH, "/queries/stats/by-user");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn endpoints_are_unavailable_during_ssr() {
    let client = ApiClient::default();
    let result = futures::executor::block_on(fetch_query_detail(&client, "abc"));
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(login(&client, "alice", "x"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

//! Endpoint helpers for the slow-query REST service.
//!
//! Each function maps one service endpoint onto [`ApiClient`]; path segments
//! taken from user data are percent-encoded here so callers pass raw values.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http::{ApiClient, UnauthorizedPolicy};
use super::types::{
    DatabaseOption, LoginData, LoginRequest, QueryDetail, QueryPage, ReviewUpdate, User, UserDetailStats,
    UserStatsSummary,
};

pub const LOGIN_PATH: &str = "/login";
pub const LOGOUT_PATH: &str = "/logout";
pub const USER_INFO_PATH: &str = "/user/info";
pub const QUERIES_PATH: &str = "/queries";
pub const EXPORT_PATH: &str = "/queries/export";
pub const USER_STATS_PATH: &str = "/queries/stats/by-user";
pub const DATABASES_PATH: &str = "/queries/databases";
pub const USERNAMES_PATH: &str = "/queries/usernames";

fn query_detail_path(checksum: &str) -> String {
    format!("{QUERIES_PATH}/{}", urlencoding::encode(checksum))
}

fn review_path(checksum: &str) -> String {
    format!("{QUERIES_PATH}/{}/review", urlencoding::encode(checksum))
}

fn user_detail_stats_path(username: &str) -> String {
    format!("{USER_STATS_PATH}/{}", urlencoding::encode(username))
}

/// Exchange credentials for a token and user via `POST /login`.
///
/// # Errors
///
/// Returns [`ApiError::Rejected`] with the service message on bad credentials.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<LoginData, ApiError> {
    let body = LoginRequest {
        username: username.to_owned(),
        password: password.to_owned(),
    };
    client.post(LOGIN_PATH, &body, UnauthorizedPolicy::Silent).await
}

/// Invalidate the session remotely via `POST /logout`.
///
/// # Errors
///
/// Any [`ApiError`]; callers treat this call as best-effort.
pub async fn logout(client: &ApiClient) -> Result<(), ApiError> {
    client
        .post_unit(LOGOUT_PATH, &serde_json::Value::Null, UnauthorizedPolicy::Silent)
        .await
}

/// Validate the stored token via `GET /user/info`. Never redirects.
///
/// # Errors
///
/// Any [`ApiError`]; a 401 comes back as [`ApiError::Unauthorized`].
pub async fn fetch_user_info(client: &ApiClient) -> Result<User, ApiError> {
    client.get(USER_INFO_PATH, &[], UnauthorizedPolicy::Silent).await
}

/// One page of fingerprints via `GET /queries`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn fetch_queries(client: &ApiClient, params: &[(&str, String)]) -> Result<QueryPage, ApiError> {
    client.get(QUERIES_PATH, params, UnauthorizedPolicy::Redirect).await
}

/// Detail and trend for one fingerprint via `GET /queries/:checksum`.
///
/// # Errors
///
/// Any [`ApiError`]; an unknown checksum is a 404 [`ApiError::Status`].
pub async fn fetch_query_detail(client: &ApiClient, checksum: &str) -> Result<QueryDetail, ApiError> {
    client
        .get(&query_detail_path(checksum), &[], UnauthorizedPolicy::Redirect)
        .await
}

/// Store a review status and comment via `POST /queries/:checksum/review`.
///
/// # Errors
///
/// Any [`ApiError`]; the service answers 403 without `OPTIMIZATION_EDIT`.
pub async fn update_review(client: &ApiClient, checksum: &str, update: &ReviewUpdate) -> Result<(), ApiError> {
    client
        .post_unit(&review_path(checksum), update, UnauthorizedPolicy::Redirect)
        .await
}

/// Binary export of the filtered list via `GET /queries/export`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn export_queries(client: &ApiClient, params: &[(&str, String)]) -> Result<Vec<u8>, ApiError> {
    client.get_bytes(EXPORT_PATH, params).await
}

/// Aggregate per-user statistics via `GET /queries/stats/by-user`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn fetch_user_stats(client: &ApiClient) -> Result<UserStatsSummary, ApiError> {
    client.get(USER_STATS_PATH, &[], UnauthorizedPolicy::Redirect).await
}

/// One user's breakdown via `GET /queries/stats/by-user/:username`.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn fetch_user_detail_stats(client: &ApiClient, username: &str) -> Result<UserDetailStats, ApiError> {
    client
        .get(&user_detail_stats_path(username), &[], UnauthorizedPolicy::Redirect)
        .await
}

/// Distinct databases with counts, for the database filter.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn fetch_databases(client: &ApiClient) -> Result<Vec<DatabaseOption>, ApiError> {
    client.get(DATABASES_PATH, &[], UnauthorizedPolicy::Redirect).await
}

/// Distinct usernames, for the username filter suggestions.
///
/// # Errors
///
/// Any [`ApiError`].
pub async fn fetch_usernames(client: &ApiClient) -> Result<Vec<String>, ApiError> {
    client.get(USERNAMES_PATH, &[], UnauthorizedPolicy::Redirect).await
}

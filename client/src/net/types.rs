//! REST DTOs for the slow-query service.
//!
//! DESIGN
//! ======
//! These types mirror the service's JSON payloads. The service serialises SQL
//! aggregates inconsistently (decimal strings, integral floats, `null`), so
//! numeric fields go through tolerant deserializers instead of failing the
//! whole page on one odd cell.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;

/// Response wrapper used by every endpoint: `{ success, data, message }`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// Payload of a successful response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false and
    /// [`ApiError::Decode`] when a successful response carries no payload.
    pub fn into_data(self) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::rejected(self.message));
        }
        self.data
            .ok_or_else(|| ApiError::Decode("response is missing `data`".to_owned()))
    }

    /// Accept a successful response whose payload is irrelevant.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when `success` is false.
    pub fn into_unit(self) -> Result<(), ApiError> {
        if !self.success {
            return Err(ApiError::rejected(self.message));
        }
        Ok(())
    }
}

/// Signed-in user as returned by `/login` and `/user/info`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Service-side user id, if reported.
    #[serde(default, deserialize_with = "opt_i64_from_any")]
    pub id: Option<i64>,
    pub username: String,
    /// Human-readable role label shown in the navigation bar.
    #[serde(default)]
    pub role_name: Option<String>,
    /// Permission codes such as `SLOW_QUERY_VIEW` or `OPTIMIZATION_EDIT`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub permissions: Vec<String>,
    /// Role codes such as `ADMIN`.
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
}

/// `POST /login` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /login` payload.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: User,
}

/// One normalized query shape as listed by `GET /queries`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFingerprint {
    /// Stable hash of the normalized query; primary key for all other calls.
    pub checksum: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub normalized_sql: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dbname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub total_occurrences: u64,
    /// Raw service timestamp of the most recent execution.
    #[serde(default)]
    pub last_occurrence: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviewed_status: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub avg_query_time: Option<f64>,
    #[serde(default)]
    pub first_seen: Option<String>,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub total_rows_examined: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub total_rows_sent: Option<f64>,
}

/// `GET /queries` payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QueryPage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Vec<QueryFingerprint>,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub total: u64,
}

/// Latest execution record joined with its fingerprint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DetailRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub checksum: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub normalized_sql: String,
    /// Literal SQL of the latest sample, if one was captured.
    #[serde(default)]
    pub sql_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dbname: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub query_time: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub rows_examined: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub rows_sent: Option<f64>,
    #[serde(default)]
    pub reviewed_status: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

/// One day of aggregate execution time for a fingerprint.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TrendPoint {
    pub date: String,
    /// Average query time in seconds for that day.
    #[serde(default, deserialize_with = "f64_from_any")]
    pub query_time: f64,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub occurrences: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub rows_examined: Option<f64>,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub rows_sent: Option<f64>,
}

/// `GET /queries/:checksum` payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QueryDetail {
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<DetailRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trend: Vec<TrendPoint>,
}

/// `POST /queries/:checksum/review` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReviewUpdate {
    pub comments: String,
    pub reviewed_status: String,
}

/// Database filter option with per-database counts.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DatabaseOption {
    pub dbname: String,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub query_count: u64,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub total_occurrences: u64,
}

/// Aggregate slow-query statistics for one database user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserStat {
    pub username: String,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub total_occurrences: u64,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub unique_queries: u64,
    /// Average query time in seconds.
    #[serde(default, deserialize_with = "f64_from_any")]
    pub avg_query_time: f64,
    #[serde(default)]
    pub last_query_time: Option<String>,
    #[serde(default)]
    pub first_query_time: Option<String>,
}

/// Totals across every user.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct TotalStats {
    #[serde(default, deserialize_with = "u64_from_any")]
    pub total_unique_queries: u64,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub total_occurrences: u64,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub total_users: u64,
}

/// `GET /queries/stats/by-user` payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserStatsSummary {
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_stats: Vec<UserStat>,
    #[serde(default)]
    pub total_stats: Option<TotalStats>,
}

/// A problem query in a user's detail view.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserQuery {
    #[serde(default, deserialize_with = "null_as_default")]
    pub checksum: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub normalized_sql: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dbname: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub reviewed_status: String,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub occurrences: u64,
    #[serde(default, deserialize_with = "f64_from_any")]
    pub avg_query_time: f64,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub max_query_time: Option<f64>,
    #[serde(default)]
    pub last_occurrence: Option<String>,
}

/// Per-database share of one user's slow queries.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DatabaseShare {
    #[serde(default)]
    pub dbname: Option<String>,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub unique_queries: u64,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub total_occurrences: u64,
    #[serde(default, deserialize_with = "f64_from_any")]
    pub avg_query_time: f64,
}

/// Slow-query count for one calendar day.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DailyCount {
    pub query_date: String,
    #[serde(default, deserialize_with = "u64_from_any")]
    pub daily_count: u64,
    #[serde(default, deserialize_with = "opt_f64_from_any")]
    pub avg_daily_time: Option<f64>,
}

/// `GET /queries/stats/by-user/:username` payload.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserDetailStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub queries: Vec<UserQuery>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time_distribution: Vec<DailyCount>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub db_distribution: Vec<DatabaseShare>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn number_from_value<E: serde::de::Error>(value: &serde_json::Value) -> Result<Option<f64>, E> {
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::Number(number) => number
            .as_f64()
            .map(Some)
            .ok_or_else(|| E::custom("number out of range")),
        serde_json::Value::String(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| E::custom(format!("expected numeric string, got {raw:?}")))
        }
        _ => Err(E::custom("expected number")),
    }
}

fn opt_f64_from_any<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    number_from_value::<D::Error>(&value)
}

fn f64_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_f64_from_any(deserializer)?.unwrap_or(0.0))
}

fn opt_i64_from_any<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(float) = opt_f64_from_any(deserializer)? else {
        return Ok(None);
    };
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    if float.is_finite() && float.fract() == 0.0 && float >= i64::MIN as f64 && float <= i64::MAX as f64 {
        return Ok(Some(float as i64));
    }
    Err(D::Error::custom("expected integer-compatible number"))
}

fn u64_from_any<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(float) = opt_f64_from_any(deserializer)? else {
        return Ok(0);
    };
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    if float.is_finite() && float >= 0.0 && float <= u64::MAX as f64 {
        return Ok(float.round() as u64);
    }
    Err(D::Error::custom(format!("value {float} out of range for u64")))
}

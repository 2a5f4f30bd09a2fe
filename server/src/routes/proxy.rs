//! `/api/*` passthrough to the slow-query REST service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls relative `/api/...` paths. This handler forwards
//! method, path, query, body, and end-to-end headers (including
//! `Authorization`) unchanged, and relays the upstream status and body as-is.
//! Only failures to reach the service are answered locally, as a 502 in the
//! service's own `{success, data, message}` envelope.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

/// Headers that describe a single connection and must not be forwarded.
const HOP_BY_HOP: [&str; 9] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("slow-query service timed out")]
    Timeout,
    #[error("slow-query service unreachable: {0}")]
    Unreachable(String),
    #[error("invalid response from slow-query service: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_decode() || err.is_body() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::Unreachable(err.to_string())
        }
    }
}

/// Failure body in the service's envelope shape.
#[derive(Debug, Serialize)]
struct FailureEnvelope {
    success: bool,
    data: Option<()>,
    message: String,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = FailureEnvelope {
            success: false,
            data: None,
            message: self.to_string(),
        };
        (StatusCode::BAD_GATEWAY, axum::Json(body)).into_response()
    }
}

/// Upstream URL for an incoming request: base + incoming path + query.
pub fn upstream_url(base: &str, uri: &Uri) -> String {
    let path_and_query = uri.path_and_query().map_or("/", |pq| pq.as_str());
    format!("{}{path_and_query}", base.trim_end_matches('/'))
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy end-to-end headers; `content-length` is recomputed by the client.
pub fn forward_headers(incoming: &HeaderMap) -> HeaderMap {
    incoming
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name) && *name != header::CONTENT_LENGTH)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Forward one request upstream and relay the response.
///
/// # Errors
///
/// Returns [`ProxyError`] when the service cannot be reached or its body
/// cannot be read.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = upstream_url(&state.upstream, &uri);
    tracing::debug!(%method, %url, "proxying request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forward_headers(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::warn!(%method, %url, error = %e, "upstream request failed");
            ProxyError::from(e)
        })?;

    let status = upstream.status();
    let response_headers = forward_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "upstream error status");
    }

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}

use super::*;

use axum::http::HeaderValue;

// =============================================================================
// upstream_url
// =============================================================================

#[test]
fn upstream_url_keeps_api_prefix_and_query() {
    let uri: Uri = "/api/queries?page=2&per_page=20&dbname=a%2Cb".parse().unwrap();
    assert_eq!(
        upstream_url("http://localhost:5172", &uri),
        "http://localhost:5172/api/queries?page=2&per_page=20&dbname=a%2Cb"
    );
}

#[test]
fn upstream_url_trims_trailing_slash_on_base() {
    let uri: Uri = "/api/user/info".parse().unwrap();
    assert_eq!(upstream_url("http://svc:5172/", &uri), "http://svc:5172/api/user/info");
}

#[test]
fn upstream_url_preserves_encoded_segments() {
    let uri: Uri = "/api/queries/stats/by-user/%E5%BC%A0%E4%B8%89".parse().unwrap();
    assert_eq!(
        upstream_url("http://svc", &uri),
        "http://svc/api/queries/stats/by-user/%E5%BC%A0%E4%B8%89"
    );
}

// =============================================================================
// forward_headers
// =============================================================================

#[test]
fn forward_headers_keeps_authorization_and_drops_hop_by_hop() {
    let mut headers = HeaderMap::new();
    headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t1"));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::HOST, HeaderValue::from_static("console:3000"));
    headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from_static("12"));
    headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));

    let forwarded = forward_headers(&headers);
    assert_eq!(forwarded.get(header::AUTHORIZATION).unwrap(), "Bearer t1");
    assert_eq!(forwarded.get(header::CONTENT_TYPE).unwrap(), "application/json");
    assert!(forwarded.get(header::HOST).is_none());
    assert!(forwarded.get(header::CONNECTION).is_none());
    assert!(forwarded.get(header::CONTENT_LENGTH).is_none());
    assert!(forwarded.get(header::TRANSFER_ENCODING).is_none());
}

// =============================================================================
// ProxyError
// =============================================================================

#[tokio::test]
async fn proxy_error_renders_envelope_502() {
    let response = ProxyError::Unreachable("connection refused".to_owned()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
    assert!(body["data"].is_null());
    assert_eq!(body["message"], "slow-query service unreachable: connection refused");
}

#[tokio::test]
async fn timeout_message_is_stable() {
    let response = ProxyError::Timeout.into_response();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["message"], "slow-query service timed out");
}

#[tokio::test]
async fn unreachable_upstream_yields_bad_gateway() {
    // Port 9 (discard) on loopback is closed in test environments.
    let config = crate::config::HostConfig {
        upstream: "http://127.0.0.1:9".to_owned(),
        proxy_timeout_secs: 2,
        ..crate::config::HostConfig::default()
    };
    let state = AppState::new(&config).unwrap();
    let uri: Uri = "/api/user/info".parse().unwrap();
    let result = forward(State(state), Method::GET, uri, HeaderMap::new(), Bytes::new()).await;
    let err = result.unwrap_err();
    assert!(matches!(err, ProxyError::Unreachable(_) | ProxyError::Timeout), "{err:?}");
}

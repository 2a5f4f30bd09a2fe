use super::*;

use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState::new(&crate::config::HostConfig::default()).unwrap()
}

#[tokio::test]
async fn healthz_returns_ok() {
    let response = api_routes(test_state())
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

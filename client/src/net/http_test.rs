use std::cell::RefCell;

use super::*;
use crate::net::types::{Envelope, LoginData, QueryPage, User};
use crate::util::storage::MemoryStore;

#[test]
fn build_url_joins_base_and_path() {
    assert_eq!(build_url("/api", "/queries", &[]), "/api/queries");
    assert_eq!(build_url("http://localhost:5172/api/", "user/info", &[]), "http://localhost:5172/api/user/info");
}

#[test]
fn build_url_encodes_query_parameters() {
    let params = [
        ("page", "1".to_owned()),
        ("per_page", "20".to_owned()),
        ("username", "bob smith".to_owned()),
        ("dbname", "orders,billing".to_owned()),
    ];
    assert_eq!(
        build_url("/api", "/queries", &params),
        "/api/queries?page=1&per_page=20&username=bob%20smith&dbname=orders%2Cbilling"
    );
}

#[test]
fn client_url_uses_configured_base() {
    let config = ConsoleConfig {
        api_base: "https://slow.example.com/api".to_owned(),
        ..ConsoleConfig::default()
    };
    let client = ApiClient::new(&config);
    assert_eq!(client.url("/queries/export", &[]), "https://slow.example.com/api/queries/export");
}

#[test]
fn unauthorized_clears_session_and_navigates_once() {
    let session = SessionStore::new(MemoryStore::default());
    session.save("t1", &User {
        username: "alice".to_owned(),
        ..User::default()
    });
    let visits = RefCell::new(Vec::new());

    handle_unauthorized(&session, |route| visits.borrow_mut().push(route.to_owned()));

    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert_eq!(*visits.borrow(), vec!["/login".to_owned()]);
}

#[test]
fn decode_envelope_reads_payload() {
    let body = r#"{"success":true,"message":"查询成功","data":{"data":[],"total":45}}"#;
    let envelope: Envelope<QueryPage> = decode_envelope(body).unwrap();
    assert_eq!(envelope.into_data().unwrap().total, 45);
}

#[test]
fn decode_envelope_reads_login_payload() {
    let body = r#"{"success":true,"message":"登录成功","data":{"token":"t1","user":{"username":"alice","permissions":["OPTIMIZATION_EDIT"],"roles":[]}}}"#;
    let envelope: Envelope<LoginData> = decode_envelope(body).unwrap();
    let data = envelope.into_data().unwrap();
    assert_eq!(data.token, "t1");
    assert_eq!(data.user.permissions, vec!["OPTIMIZATION_EDIT".to_owned()]);
}

#[test]
fn decode_envelope_without_data_field() {
    let envelope: Envelope<QueryPage> = decode_envelope(r#"{"success":false,"message":"未授权"}"#).unwrap();
    assert_eq!(envelope.data, None);
    assert_eq!(envelope.into_data(), Err(ApiError::Rejected("未授权".to_owned())));
}

#[test]
fn decode_envelope_rejects_garbage() {
    let result: Result<Envelope<QueryPage>, ApiError> = decode_envelope("<html>");
    assert!(matches!(result, Err(ApiError::Decode(_))));
}

#[test]
fn status_error_keeps_envelope_message() {
    let err = status_error(404, r#"{"success":false,"message":"查询不存在","data":null}"#);
    assert_eq!(err, ApiError::Status {
        status: 404,
        message: Some("查询不存在".to_owned()),
    });
}

#[test]
fn status_error_without_envelope_has_no_message() {
    let err = status_error(502, "Bad Gateway");
    assert_eq!(err, ApiError::Status { status: 502, message: None });
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn calls_are_unavailable_outside_browser() {
    let client = ApiClient::default();
    let result = futures::executor::block_on(client.get::<QueryPage>("/queries", &[], UnauthorizedPolicy::Redirect));
    assert_eq!(result, Err(ApiError::Unavailable));
}

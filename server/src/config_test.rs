use super::*;

#[test]
fn defaults_when_unset() {
    assert_eq!(HostConfig::from_values(None, None, None), Ok(HostConfig::default()));
}

#[test]
fn parses_all_values() {
    let config = HostConfig::from_values(Some("8080"), Some("https://slowlog.internal:5172/"), Some("5")).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.upstream, "https://slowlog.internal:5172");
    assert_eq!(config.proxy_timeout_secs, 5);
}

#[test]
fn blank_values_use_defaults() {
    let config = HostConfig::from_values(Some(" "), Some(""), Some("")).unwrap();
    assert_eq!(config, HostConfig::default());
}

#[test]
fn invalid_port_is_an_error() {
    assert_eq!(
        HostConfig::from_values(Some("http"), None, None),
        Err(ConfigError::Invalid {
            var: "PORT",
            value: "http".to_owned()
        })
    );
    assert!(HostConfig::from_values(Some("70000"), None, None).is_err());
}

#[test]
fn upstream_must_be_http() {
    let err = HostConfig::from_values(None, Some("localhost:5172"), None).unwrap_err();
    assert_eq!(err.to_string(), "invalid SLOWLOG_API_UPSTREAM: \"localhost:5172\"");
}

#[test]
fn bad_timeout_falls_back() {
    for raw in ["0", "-1", "soon"] {
        let config = HostConfig::from_values(None, None, Some(raw)).unwrap();
        assert_eq!(config.proxy_timeout_secs, DEFAULT_PROXY_TIMEOUT_SECS, "{raw:?}");
    }
}

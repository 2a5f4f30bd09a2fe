use super::*;

#[test]
fn default_matches_documented_values() {
    let config = ConsoleConfig::default();
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.timeout_ms, 10_000);
    assert_eq!(config.display_offset_hours, 8);
}

#[test]
fn from_values_trims_trailing_slash_on_base() {
    let config = ConsoleConfig::from_values(Some("http://localhost:5172/api/"), None, None);
    assert_eq!(config.api_base, "http://localhost:5172/api");
}

#[test]
fn from_values_parses_timeout_and_offset() {
    let config = ConsoleConfig::from_values(None, Some("2500"), Some("0"));
    assert_eq!(config.api_base, "/api");
    assert_eq!(config.timeout_ms, 2500);
    assert_eq!(config.display_offset_hours, 0);
}

#[test]
fn from_values_rejects_invalid_numbers() {
    let config = ConsoleConfig::from_values(Some("   "), Some("0"), Some("ninety"));
    assert_eq!(config, ConsoleConfig::default());

    let config = ConsoleConfig::from_values(None, Some("-5"), Some("48"));
    assert_eq!(config, ConsoleConfig::default());
}

#[test]
fn from_values_accepts_negative_offset() {
    let config = ConsoleConfig::from_values(None, None, Some("-3"));
    assert_eq!(config.display_offset_hours, -3);
}

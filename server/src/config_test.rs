use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_nothing_set() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.port, 3000);
    assert_eq!(config.submit_delay, Duration::from_secs(2));
    assert_eq!(config.viewer, ViewerMode::Anonymous);
    assert!(config.cors_allow_any);
}

#[test]
fn reads_every_variable() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("SUBMIT_DELAY_MS", "0"),
        ("VIEWER", "member"),
        ("CORS_ALLOW_ANY", "false"),
    ]))
    .unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.submit_delay, Duration::ZERO);
    assert_eq!(config.viewer, ViewerMode::Member);
    assert!(!config.cors_allow_any);
}

#[test]
fn malformed_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".into() });
}

#[test]
fn unknown_viewer_is_an_error() {
    let err = ServerConfig::from_lookup(lookup(&[("VIEWER", "admin")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid VIEWER: admin");
}

#[test]
fn member_mode_serves_demo_member() {
    assert_eq!(ViewerMode::Anonymous.viewer(), Viewer::Anonymous);
    let viewer = ViewerMode::Member.viewer();
    assert_eq!(viewer.member().map(|m| m.display_name.as_str()), Some("John Doe"));
}

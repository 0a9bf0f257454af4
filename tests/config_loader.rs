use std::fs;

use octoview::config::{Config, ConfigError};
use tempfile::TempDir;

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, content).expect("Failed to write config");
    (dir, path)
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::load_from(&dir.path().join("nope.toml")).expect("expected defaults");
    assert_eq!(config.api.base_url, "https://api.github.com");
    assert_eq!(config.ui.tick_rate_ms, 250);
    assert_eq!(config.pinned.len(), 2);
}

#[test]
fn empty_file_uses_all_defaults() {
    let (_dir, path) = write_config("");
    let config = Config::load_from(&path).expect("expected defaults");
    assert_eq!(config.api.base_url, "https://api.github.com");
    assert_eq!(config.pinned[0].username, "jimmynono");
    assert_eq!(config.pinned[1].username, "rainycitycoder");
}

#[test]
fn partial_file_fills_in_defaults() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "http://localhost:8080"
"#,
    );
    let config = Config::load_from(&path).expect("expected config");
    assert_eq!(config.api.base_url, "http://localhost:8080");
    assert_eq!(config.ui.tick_rate_ms, 250);
}

#[test]
fn pinned_profiles_are_parsed() {
    let (_dir, path) = write_config(
        r#"
[[pinned]]
label = "Work"
username = "octocat"
"#,
    );
    let config = Config::load_from(&path).expect("expected config");
    assert_eq!(config.pinned.len(), 1);
    assert_eq!(config.pinned[0].label, "Work");
    assert_eq!(config.pinned[0].username, "octocat");
}

#[test]
fn non_http_base_url_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[api]
base_url = "ftp://example.com"
"#,
    );
    let err = Config::load_from(&path).expect_err("expected validation error");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn zero_tick_rate_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[ui]
tick_rate_ms = 0
"#,
    );
    let err = Config::load_from(&path).expect_err("expected validation error");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn empty_pinned_username_fails_validation() {
    let (_dir, path) = write_config(
        r#"
[[pinned]]
label = "Broken"
username = "  "
"#,
    );
    let err = Config::load_from(&path).expect_err("expected validation error");
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("this is not toml [");
    let err = Config::load_from(&path).expect_err("expected parse error");
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

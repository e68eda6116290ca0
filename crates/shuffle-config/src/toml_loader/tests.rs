//! Tests for TOML config loading and path resolution.

use super::*;
use crate::schema::LogLevel;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_shuffle_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[auto_scroll]
max_pixel_scroll = 36.0
accelerate_at_ms = 200

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.auto_scroll.max_pixel_scroll - 36.0).abs() < f64::EPSILON);
    assert_eq!(config.auto_scroll.accelerate_at_ms, 200);
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert!(config.session.window_scroll_allowed);
    assert_eq!(config.auto_scroll.stop_dampening_at_ms, 1200);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_falls_back_to_default() {
    let config = load_from_str(
        r#"
[auto_scroll]
start_scrolling_from = 3.0
"#,
    )
    .unwrap();
    assert_eq!(config, ShuffleConfig::default());
}

#[test]
fn default_config_path_ends_with_shuffle_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("shuffle/config.toml"));
    }
}

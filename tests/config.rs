//! Configuration system tests
//!
//! Tests for config paths and sidebar config loading/saving.

use context_sidebar::config::{ButtonMetrics, SidebarConfig};
use context_sidebar::config_paths;
use context_sidebar::sidebar::SidebarPos;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("context-sidebar"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(file) = config_paths::config_file() {
        assert_eq!(file.file_name().unwrap(), "config.yaml");
    }
}

#[test]
fn test_logs_dir_is_under_config_dir() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Sidebar Config Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = SidebarConfig::default();
    assert_eq!(config.drag_threshold_px, 6.0);
    assert_eq!(config.content_min_width, 350.0);
    assert_eq!(config.content_size_hint, 400.0);
    assert_eq!(config.floating_width, 350.0);
    assert_eq!(config.button, ButtonMetrics::default());
    assert_eq!(
        config.default_slots.for_pos(SidebarPos::TopRight),
        &["Variables", "Stack", "Memory Map"]
    );
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");

    let mut config = SidebarConfig::default();
    config.drag_threshold_px = 10.0;
    config.default_slots.bottom_right.push("Strings".to_string());
    config.save_to(&path).unwrap();

    assert!(path.exists());
    let loaded = SidebarConfig::load_from(&path);
    assert_eq!(loaded, config);
}

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = SidebarConfig::load_from(&dir.path().join("absent.yaml"));
    assert_eq!(loaded, SidebarConfig::default());
}

#[test]
fn test_invalid_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "drag_threshold_px: [not, a, number]\n").unwrap();
    assert_eq!(SidebarConfig::load_from(&path), SidebarConfig::default());
}

#[test]
fn test_partial_file_overrides_named_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "floating_width: 500\nbutton:\n  char_width: 9\ndefault_slots:\n  top_left: [Strings]\n",
    )
    .unwrap();

    let config = SidebarConfig::load_from(&path);
    assert_eq!(config.floating_width, 500.0);
    assert_eq!(config.button.char_width, 9.0);
    assert_eq!(config.button.line_height, ButtonMetrics::default().line_height);
    assert_eq!(config.default_slots.top_left, vec!["Strings"]);
    assert_eq!(config.drag_threshold_px, 6.0);
}

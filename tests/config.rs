//! Configuration system tests
//!
//! Tests for config paths and inspector config loading/saving.

use syntax_inspector::config::InspectorConfig;
use syntax_inspector::config_paths;
use syntax_inspector::panel::DockPosition;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("syntax-inspector"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("inspector.yaml"));
    }
}

#[test]
fn test_logs_dir_is_subdir_of_config() {
    if let (Some(config), Some(logs)) = (config_paths::config_dir(), config_paths::logs_dir()) {
        assert!(logs.starts_with(&config));
    }
}

// ========================================================================
// Inspector Config Tests
// ========================================================================

#[test]
fn test_defaults() {
    let config = InspectorConfig::default();
    assert_eq!(config.dock, DockPosition::Right);
    assert_eq!(config.panel_size, 280.0);
    assert_eq!(config.indent_width, 2);
    assert_eq!(config.row_height, 18.0);
    assert!(!config.show_anonymous_nodes);
    assert!(config.footer);
}

#[test]
fn test_save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("inspector.yaml");

    let config = InspectorConfig {
        dock: DockPosition::Bottom,
        panel_size: 220.0,
        indent_width: 4,
        row_height: 20.0,
        show_anonymous_nodes: true,
        footer: false,
    };
    config.save_to(&path).unwrap();

    let loaded = InspectorConfig::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_file_fills_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inspector.yaml");
    std::fs::write(&path, "dock: left\nindent_width: 3\n").unwrap();

    let loaded = InspectorConfig::load_from(&path).unwrap();
    assert_eq!(loaded.dock, DockPosition::Left);
    assert_eq!(loaded.indent_width, 3);
    assert_eq!(loaded.panel_size, 280.0);
    assert!(loaded.footer);
}

#[test]
fn test_invalid_yaml_is_an_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inspector.yaml");
    std::fs::write(&path, "dock: [sideways").unwrap();

    let err = InspectorConfig::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("inspector.yaml"));
}

#[test]
fn test_unknown_dock_position_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inspector.yaml");
    std::fs::write(&path, "dock: top\n").unwrap();
    assert!(InspectorConfig::load_from(&path).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(InspectorConfig::load_from(&dir.path().join("nope.yaml")).is_err());
}

#[test]
fn test_indent_width_drives_row_text() {
    use syntax_inspector::host::HeadlessEditor;
    use syntax_inspector::model::{ParseTree, SyntaxNode};
    use syntax_inspector::panel::InspectorPanel;

    let tree = ParseTree::new(
        SyntaxNode::new("Root", 0, 2).with_children(vec![SyntaxNode::new("Leaf", 0, 1)]),
    );
    let mut host = HeadlessEditor::with_tree("ab", tree);
    let config = InspectorConfig {
        indent_width: 4,
        footer: false,
        ..InspectorConfig::default()
    };
    let panel = InspectorPanel::attach(&mut host, config);
    assert_eq!(panel.view().unwrap().lines(), vec!["Root", "    Leaf"]);
}

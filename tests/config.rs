//! Configuration system tests
//!
//! Tests for settings files on disk, user directory resolution, and key
//! binding loading/merging.

mod common;

use std::time::Duration;

use common::{event, settings_file};
use squirrel_keys::config::{ConfigError, NotificationPolicy, SquirrelSettings};
use squirrel_keys::config_paths;
use squirrel_keys::keybinding::{
    default_bindings, default_settings_yaml, load_key_bindings, load_key_bindings_file,
    merge_bindings, Condition, KeyBinder, KeyBinding, KeyContext,
};

// ========================================================================
// Settings Files
// ========================================================================

#[test]
fn test_load_settings_file() {
    let (_dir, path) = settings_file(
        r#"
keyboard_layout: com.apple.keylayout.US
chord_duration: 0.05
show_notifications_when: always
"#,
    );

    let settings = SquirrelSettings::load_from(&path).unwrap();
    assert_eq!(settings.keyboard_layout, "com.apple.keylayout.US");
    assert_eq!(settings.chord_duration(), Duration::from_millis(50));
    assert_eq!(settings.show_notifications_when, NotificationPolicy::Always);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = SquirrelSettings::load_from(&dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(ConfigError::Io { .. })));
}

#[test]
fn test_malformed_yaml_is_parse_error() {
    let (_dir, path) = settings_file("keyboard_layout: [unclosed\n");
    assert!(matches!(
        SquirrelSettings::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("squirrel.yaml");

    let mut settings = SquirrelSettings::default();
    settings.keyboard_layout = "com.apple.keylayout.Dvorak".to_string();
    settings.show_notifications_when = NotificationPolicy::Never;
    settings.save_to(&path).unwrap();

    assert_eq!(SquirrelSettings::load_from(&path).unwrap(), settings);
}

#[test]
fn test_embedded_defaults_are_valid_settings() {
    let settings = SquirrelSettings::from_yaml(default_settings_yaml()).unwrap();
    assert_eq!(settings.keyboard_layout, "last");
    assert!(settings.app_options_for("com.apple.Terminal").is_some());
    assert_eq!(settings.key_bindings().unwrap(), default_bindings());
}

// ========================================================================
// User Directory
// ========================================================================

#[test]
fn test_user_dir_override() {
    let dir = tempfile::tempdir().unwrap();
    std::env::set_var(config_paths::USER_DIR_ENV, dir.path());

    assert_eq!(config_paths::user_dir(), Some(dir.path().to_path_buf()));
    assert_eq!(
        config_paths::settings_file(),
        Some(dir.path().join("squirrel.yaml"))
    );
    assert_eq!(config_paths::logs_dir(), Some(dir.path().join("logs")));

    // nothing saved yet
    assert_eq!(SquirrelSettings::load(), SquirrelSettings::default());

    let mut settings = SquirrelSettings::default();
    settings.chord_duration = 0.2;
    let saved = settings.save().unwrap();
    assert_eq!(saved, dir.path().join("squirrel.yaml"));
    assert_eq!(SquirrelSettings::load(), settings);

    // unreadable settings fall back to defaults
    std::fs::write(&saved, "chord_duration: [").unwrap();
    assert_eq!(SquirrelSettings::load(), SquirrelSettings::default());

    let logs = config_paths::ensure_logs_dir().unwrap();
    assert!(logs.is_dir());
    assert_eq!(
        config_paths::log_file(),
        Some(logs.join("squirrel-keys.log"))
    );

    std::env::remove_var(config_paths::USER_DIR_ENV);
}

// ========================================================================
// Key Binding Loading
// ========================================================================

#[test]
fn test_load_key_bindings_file() {
    let (_dir, path) = settings_file(
        r#"
key_bindings:
  - { when: paging, accept: "Shift+Tab", send: "Page_Up" }
"#,
    );
    let bindings = load_key_bindings_file(&path).unwrap();
    assert_eq!(
        bindings,
        vec![KeyBinding::new(event("Shift+Tab"), event("Page_Up")).when(Condition::Paging)]
    );
}

#[test]
fn test_invalid_binding_reports_entry() {
    let (_dir, path) = settings_file(
        r#"
key_bindings:
  - { accept: "Control+p", send: "Up" }
  - { accept: "Control+n", send: "Down" }
  - { accept: "Cmd+n", send: "Down" }
"#,
    );
    let err = load_key_bindings_file(&path).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidKeyBinding {
            index: 2,
            field: "accept",
            ..
        }
    ));
    assert!(err.to_string().contains("Cmd"));
}

#[test]
fn test_user_bindings_merge_over_defaults() {
    let settings = SquirrelSettings::from_yaml(
        r#"
key_bindings:
  - { when: has_menu, accept: "minus", send: "VoidSymbol" }
  - { when: composing, accept: "Control+p", send: "Page_Up" }
  - { when: has_menu, accept: "bracketleft", send: "Page_Up" }
"#,
    )
    .unwrap();

    let merged = load_key_bindings(&settings);
    let defaults = default_bindings();
    assert_eq!(merged.len(), defaults.len());

    let binder = KeyBinder::with_bindings(merged);
    let menu = KeyContext::with_menu();
    assert_eq!(binder.remap(&event("minus"), &menu), None);
    assert_eq!(binder.remap(&event("Control+p"), &menu), Some(event("Page_Up")));
    assert_eq!(binder.remap(&event("bracketleft"), &menu), Some(event("Page_Up")));
}

#[test]
fn test_merge_preserves_order_of_untouched_defaults() {
    let defaults = default_bindings();
    let merged = merge_bindings(defaults.clone(), Vec::new());
    assert_eq!(merged, defaults);
}

//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::PathBuf;

use squirrel_keys::keycode::{
    translate_key_down, EngineKeyEvent, PlatformKeyEvent, PlatformModifiers, VirtualKeyCode,
};
use tempfile::TempDir;

/// Translate a key-down and return the event text
pub fn key_down(raw: VirtualKeyCode, character: Option<char>, mods: PlatformModifiers) -> String {
    translate_key_down(&PlatformKeyEvent::new(raw, character, mods)).to_string()
}

/// Parse key-binding text, panicking on bad input
pub fn event(text: &str) -> EngineKeyEvent {
    text.parse()
        .unwrap_or_else(|e| panic!("bad event {:?}: {}", text, e))
}

/// Write `content` to `squirrel.yaml` in a fresh temp dir
pub fn settings_file(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("squirrel.yaml");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

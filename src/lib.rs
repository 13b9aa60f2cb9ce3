//! Squirrel key translation
//!
//! This crate provides the key handling of the Squirrel input method front-end:
//! translating macOS key events into Rime key events, chord typing, key
//! remapping and the `squirrel.yaml` settings that drive them.

pub mod chord;
pub mod cli;
pub mod config;
pub mod config_paths;
pub mod keybinding;
pub mod keycode;
pub mod tracing;

// Re-export commonly used types
pub use chord::ChordBuffer;
pub use config::{ConfigError, SquirrelSettings};
pub use keybinding::{KeyBinder, KeyBinding, KeyContext};
pub use keycode::{EngineKeyEvent, EngineModifiers, KeySym, PlatformKeyEvent, PlatformModifiers};

//! Configurable key remapping
//!
//! This module provides a data-driven key binder that:
//! - Rewrites engine key events before they reach the engine
//! - Applies bindings only while the session is composing, showing a menu or paging
//! - Enables user customization via `squirrel.yaml`
//!
//! # Architecture
//!
//! ```text
//! EngineKeyEvent + KeyContext → KeyBinder::remap() → EngineKeyEvent
//! ```
//!
//! # Loading Bindings
//!
//! ```ignore
//! // Embedded defaults only
//! let binder = KeyBinder::with_bindings(default_bindings());
//!
//! // Defaults merged with the user's settings
//! let binder = KeyBinder::with_bindings(load_key_bindings(&SquirrelSettings::load()));
//! ```

mod binder;
mod binding;
mod config;
mod context;
mod defaults;

pub use binder::KeyBinder;
pub use binding::KeyBinding;
pub use config::{
    load_key_bindings_file, parse_key_bindings, parse_key_bindings_yaml, KeyBindingConfig,
};
pub use context::{Condition, KeyContext};
pub use defaults::{default_bindings, default_settings_yaml, load_key_bindings, merge_bindings};

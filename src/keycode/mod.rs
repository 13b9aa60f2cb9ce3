//! Keycode and modifier translation between macOS and the Rime engine
//!
//! This module provides table-driven mappings that:
//! - Turn `NSEvent` virtual key codes and typed characters into engine keysyms
//! - Re-project `NSEvent.ModifierFlags` onto the engine's modifier mask
//! - Parse and print the key-binding names used in configuration files
//!
//! # Architecture
//!
//! ```text
//! NSEvent → PlatformKeyEvent → translate_key_down() → EngineKeyEvent → process_key
//! flagsChanged → modifier_change_events() → Vec<EngineKeyEvent>
//! "Control+Page_Up" → EngineKeyEvent::from_str()
//! ```
//!
//! # Example
//!
//! ```
//! use squirrel_keys::keycode::{translate_key_down, PlatformKeyEvent, PlatformModifiers};
//! use squirrel_keys::keycode::platform::VK_ANSI_A;
//!
//! let event = PlatformKeyEvent::new(VK_ANSI_A, Some('a'), PlatformModifiers::SHIFT);
//! assert_eq!(translate_key_down(&event).to_string(), "Shift+A");
//! ```

mod event;
mod keysym;
mod modifiers;
mod names;
pub mod platform;
mod translate;

pub use event::{EngineKeyEvent, PlatformKeyEvent};
pub use keysym::KeySym;
pub use modifiers::{EngineModifiers, PlatformModifiers};
pub use names::{
    engine_modifier_names, key_names, keysym_name, parse_engine_keycode_name,
    parse_engine_modifier_name, parse_platform_modifier_name, platform_modifier_names,
    KeyNameError,
};
pub use platform::VirtualKeyCode;
pub use translate::{
    keycode_from_character, keycode_from_platform_code, modifier_change_events,
    modifiers_to_engine_mask, translate_key_down,
};

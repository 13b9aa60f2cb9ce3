//! Key-binding names: the text vocabulary used in configuration files
//!
//! Lookups are exact and case-sensitive. An unknown token is an error, never
//! a guess.

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use super::keysym::{
    KeySym, ASCII_NAMES, FUNCTION_KEY_NAMES, KEYPAD_DIGIT_NAMES, LATIN1_NAMES, SPECIAL_KEY_NAMES,
};
use super::modifiers::{
    EngineModifiers, PlatformModifiers, ENGINE_MODIFIER_NAMES, PLATFORM_MODIFIER_NAMES,
};

/// Errors from parsing key-binding names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyNameError {
    #[error("unrecognized key name: {0:?}")]
    UnknownKey(String),
    #[error("unrecognized modifier name: {0:?}")]
    UnknownModifier(String),
    #[error("empty key binding")]
    Empty,
}

/// Every documented key name with its keysym, aliases included
fn all_key_names() -> impl Iterator<Item = (&'static str, KeySym)> {
    let ascii = ASCII_NAMES
        .iter()
        .zip(0x20u32..)
        .map(|(name, code)| (*name, KeySym::new(code)));
    let latin1 = LATIN1_NAMES
        .iter()
        .zip(0xa0u32..)
        .map(|(name, code)| (*name, KeySym::new(code)));
    let function = FUNCTION_KEY_NAMES
        .iter()
        .zip(1u8..)
        .filter_map(|(name, n)| KeySym::function(n).map(|sym| (*name, sym)));
    let keypad = KEYPAD_DIGIT_NAMES
        .iter()
        .zip(0u8..)
        .filter_map(|(name, n)| KeySym::keypad_digit(n).map(|sym| (*name, sym)));

    ascii
        .chain(latin1)
        .chain(SPECIAL_KEY_NAMES.iter().copied())
        .chain(function)
        .chain(keypad)
}

static KEY_BY_NAME: LazyLock<HashMap<&'static str, KeySym>> =
    LazyLock::new(|| all_key_names().collect());

static NAME_BY_KEY: LazyLock<HashMap<KeySym, &'static str>> = LazyLock::new(|| {
    let mut names = HashMap::new();
    for (name, sym) in all_key_names() {
        // first name listed is canonical
        names.entry(sym).or_insert(name);
    }
    names
});

/// Parse an engine keysym name such as `"Page_Up"`, `"F5"` or `"a"`
pub fn parse_engine_keycode_name(name: &str) -> Result<KeySym, KeyNameError> {
    KEY_BY_NAME
        .get(name)
        .copied()
        .ok_or_else(|| KeyNameError::UnknownKey(name.to_string()))
}

/// Parse an engine modifier name such as `"Control"` into its single mask bit
pub fn parse_engine_modifier_name(name: &str) -> Result<EngineModifiers, KeyNameError> {
    ENGINE_MODIFIER_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, flag)| *flag)
        .ok_or_else(|| KeyNameError::UnknownModifier(name.to_string()))
}

/// Parse a macOS modifier name such as `"Option"` into its flag
pub fn parse_platform_modifier_name(name: &str) -> Result<PlatformModifiers, KeyNameError> {
    PLATFORM_MODIFIER_NAMES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, flag)| *flag)
        .ok_or_else(|| KeyNameError::UnknownModifier(name.to_string()))
}

/// Canonical name of a keysym, if it has one
pub fn keysym_name(sym: KeySym) -> Option<&'static str> {
    NAME_BY_KEY.get(&sym).copied()
}

/// All documented key names, aliases included, in table order
pub fn key_names() -> impl Iterator<Item = (&'static str, KeySym)> {
    all_key_names()
}

/// All documented engine modifier names, in bit order
pub fn engine_modifier_names() -> impl Iterator<Item = (&'static str, EngineModifiers)> {
    ENGINE_MODIFIER_NAMES.iter().copied()
}

/// All documented platform modifier names, in bit order
pub fn platform_modifier_names() -> impl Iterator<Item = (&'static str, PlatformModifiers)> {
    PLATFORM_MODIFIER_NAMES.iter().copied()
}

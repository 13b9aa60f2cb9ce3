//! Default key bindings
//!
//! The defaults ship inside the binary as `squirrel.yaml` at the crate root;
//! the user's `squirrel.yaml` in the Rime directory is merged over them.

use super::binding::KeyBinding;
use super::config::{parse_key_bindings, parse_key_bindings_yaml};
use crate::config::SquirrelSettings;

/// Default settings YAML embedded at compile time
const DEFAULT_SETTINGS_YAML: &str = include_str!("../../squirrel.yaml");

/// The embedded default settings document
pub fn default_settings_yaml() -> &'static str {
    DEFAULT_SETTINGS_YAML
}

/// Key bindings from the embedded defaults
pub fn default_bindings() -> Vec<KeyBinding> {
    match parse_key_bindings_yaml(DEFAULT_SETTINGS_YAML) {
        Ok(bindings) => bindings,
        Err(e) => {
            tracing::error!("Failed to parse embedded key bindings: {}", e);
            Vec::new()
        }
    }
}

/// Defaults merged with the user's bindings from `settings`.
///
/// A bad user entry is logged and the user's bindings are ignored as a whole.
pub fn load_key_bindings(settings: &SquirrelSettings) -> Vec<KeyBinding> {
    let bindings = default_bindings();
    tracing::debug!("Loaded {} default key bindings", bindings.len());

    if settings.key_bindings.is_empty() {
        return bindings;
    }

    match parse_key_bindings(&settings.key_bindings) {
        Ok(user) => {
            tracing::info!("Merging {} user key bindings", user.len());
            merge_bindings(bindings, user)
        }
        Err(e) => {
            tracing::warn!("Ignoring user key bindings: {}", e);
            bindings
        }
    }
}

/// Merge user bindings into base bindings
///
/// - same `accept` and `when` as a base binding → replaces it
/// - `send: VoidSymbol` → removes base bindings with the same `accept` and `when`
/// - otherwise → appended
pub fn merge_bindings(base: Vec<KeyBinding>, user: Vec<KeyBinding>) -> Vec<KeyBinding> {
    let mut result = base;

    for user_binding in user {
        let same_slot =
            |b: &KeyBinding| b.accept == user_binding.accept && b.when == user_binding.when;

        if user_binding.is_unbind() {
            result.retain(|b| !same_slot(b));
            continue;
        }

        match result.iter().position(same_slot) {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

//! YAML parsing for key bindings
//!
//! Reads the `key_bindings` list of a settings file into `KeyBinding`s.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::binding::KeyBinding;
use super::context::Condition;
use crate::config::ConfigError;
use crate::keycode::EngineKeyEvent;

/// A single binding entry as written in YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBindingConfig {
    pub accept: String,
    pub send: String,
    #[serde(default)]
    pub when: Condition,
}

impl KeyBindingConfig {
    /// Resolve the key names. `index` is the entry's position, for error reports.
    pub fn to_binding(&self, index: usize) -> Result<KeyBinding, ConfigError> {
        let accept = parse_event(&self.accept, index, "accept")?;
        let send = parse_event(&self.send, index, "send")?;
        Ok(KeyBinding::new(accept, send).when(self.when))
    }
}

impl From<&KeyBinding> for KeyBindingConfig {
    fn from(binding: &KeyBinding) -> Self {
        Self {
            accept: binding.accept.to_string(),
            send: binding.send.to_string(),
            when: binding.when,
        }
    }
}

/// The part of a settings document that holds key bindings
#[derive(Debug, Default, Deserialize)]
struct KeyBindingsDocument {
    #[serde(default)]
    key_bindings: Vec<KeyBindingConfig>,
}

fn parse_event(text: &str, index: usize, field: &'static str) -> Result<EngineKeyEvent, ConfigError> {
    text.parse()
        .map_err(|source| ConfigError::InvalidKeyBinding {
            index,
            field,
            source,
        })
}

/// Resolve a list of binding entries, failing on the first bad key name
pub fn parse_key_bindings(entries: &[KeyBindingConfig]) -> Result<Vec<KeyBinding>, ConfigError> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| entry.to_binding(index))
        .collect()
}

/// Parse key bindings from a YAML settings document
pub fn parse_key_bindings_yaml(yaml: &str) -> Result<Vec<KeyBinding>, ConfigError> {
    let document: Option<KeyBindingsDocument> = serde_yaml::from_str(yaml)?;
    parse_key_bindings(&document.unwrap_or_default().key_bindings)
}

/// Load key bindings from a YAML settings file
pub fn load_key_bindings_file(path: &Path) -> Result<Vec<KeyBinding>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_key_bindings_yaml(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keycode::{EngineModifiers, KeyNameError, KeySym};

    #[test]
    fn test_parse_bindings() {
        let yaml = r#"
key_bindings:
  - { when: composing, accept: "Control+p", send: "Up" }
  - { when: has_menu, accept: "minus", send: "Page_Up" }
  - { accept: "Control+Shift+0x4e2d", send: "Escape" }
"#;
        let bindings = parse_key_bindings_yaml(yaml).unwrap();
        assert_eq!(bindings.len(), 3);

        assert_eq!(
            bindings[0].accept,
            EngineKeyEvent::new(KeySym::from_char('p'), EngineModifiers::CONTROL)
        );
        assert_eq!(bindings[0].send, EngineKeyEvent::key(KeySym::UP));
        assert_eq!(bindings[0].when, Condition::Composing);

        assert_eq!(bindings[1].accept, EngineKeyEvent::key(KeySym::MINUS));
        assert_eq!(bindings[1].when, Condition::HasMenu);

        assert_eq!(bindings[2].accept.keycode, KeySym::new(0x4e2d));
        assert_eq!(bindings[2].when, Condition::Always);
    }

    #[test]
    fn test_unknown_key_names_the_entry() {
        let yaml = r#"
key_bindings:
  - { accept: "Control+p", send: "Up" }
  - { accept: "Control+n", send: "ArrowDown" }
"#;
        let err = parse_key_bindings_yaml(yaml).unwrap_err();
        match err {
            ConfigError::InvalidKeyBinding {
                index,
                field,
                source,
            } => {
                assert_eq!(index, 1);
                assert_eq!(field, "send");
                assert_eq!(source, KeyNameError::UnknownKey("ArrowDown".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_modifier_is_rejected() {
        let yaml = "key_bindings:\n  - { accept: \"Ctrl+p\", send: \"Up\" }\n";
        assert!(matches!(
            parse_key_bindings_yaml(yaml),
            Err(ConfigError::InvalidKeyBinding { field: "accept", .. })
        ));
    }

    #[test]
    fn test_unknown_condition_is_parse_error() {
        let yaml = "key_bindings:\n  - { when: selection, accept: \"a\", send: \"b\" }\n";
        assert!(matches!(
            parse_key_bindings_yaml(yaml),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_section_is_empty() {
        assert!(parse_key_bindings_yaml("keyboard_layout: last\n").unwrap().is_empty());
        assert!(parse_key_bindings_yaml("").unwrap().is_empty());
    }

    #[test]
    fn test_config_from_binding() {
        let binding = KeyBinding::new(
            EngineKeyEvent::new(KeySym::from_char('v'), EngineModifiers::ALT),
            EngineKeyEvent::key(KeySym::PAGE_UP),
        )
        .when(Condition::HasMenu);
        let entry = KeyBindingConfig::from(&binding);
        assert_eq!(entry.accept, "Alt+v");
        assert_eq!(entry.send, "Page_Up");
        assert_eq!(entry.to_binding(0).unwrap(), binding);
    }
}

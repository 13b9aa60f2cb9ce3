//! Conditions for key bindings
//!
//! A binding applies only while the input session is in a given state,
//! such as "minus pages up while the candidate menu is shown".

use serde::{Deserialize, Serialize};

/// Input session state used to evaluate binding conditions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyContext {
    /// Input is being composed
    pub composing: bool,
    /// The candidate menu is shown
    pub has_menu: bool,
    /// The menu is past its first page
    pub paging: bool,
}

impl KeyContext {
    /// Composing with the candidate menu shown
    pub fn with_menu() -> Self {
        Self {
            composing: true,
            has_menu: true,
            paging: false,
        }
    }

    /// Composing with the menu shown and turned past the first page
    pub fn paging() -> Self {
        Self {
            composing: true,
            has_menu: true,
            paging: true,
        }
    }
}

/// When a key binding applies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    #[default]
    Always,
    Composing,
    HasMenu,
    Paging,
}

impl Condition {
    pub fn evaluate(self, ctx: &KeyContext) -> bool {
        match self {
            Condition::Always => true,
            Condition::Composing => ctx.composing,
            Condition::HasMenu => ctx.has_menu,
            Condition::Paging => ctx.paging,
        }
    }

    /// Higher wins when several bindings accept the same key
    pub fn specificity(self) -> u8 {
        match self {
            Condition::Always => 0,
            Condition::Composing => 1,
            Condition::HasMenu => 2,
            Condition::Paging => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Always => "always",
            Condition::Composing => "composing",
            Condition::HasMenu => "has_menu",
            Condition::Paging => "paging",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = KeyContext::default();
        assert!(Condition::Always.evaluate(&ctx));
        assert!(!Condition::Composing.evaluate(&ctx));
        assert!(!Condition::HasMenu.evaluate(&ctx));
        assert!(!Condition::Paging.evaluate(&ctx));
    }

    #[test]
    fn test_menu_context() {
        let ctx = KeyContext::with_menu();
        assert!(Condition::Composing.evaluate(&ctx));
        assert!(Condition::HasMenu.evaluate(&ctx));
        assert!(!Condition::Paging.evaluate(&ctx));
        assert!(Condition::Paging.evaluate(&KeyContext::paging()));
    }

    #[test]
    fn test_specificity_order() {
        assert!(Condition::Always.specificity() < Condition::Composing.specificity());
        assert!(Condition::Composing.specificity() < Condition::HasMenu.specificity());
        assert!(Condition::HasMenu.specificity() < Condition::Paging.specificity());
    }

    #[test]
    fn test_condition_yaml_names() {
        let when: Condition = serde_yaml::from_str("has_menu").unwrap();
        assert_eq!(when, Condition::HasMenu);
        assert!(serde_yaml::from_str::<Condition>("selection").is_err());
        assert_eq!(Condition::default(), Condition::Always);
        assert_eq!(Condition::Paging.as_str(), "paging");
    }
}

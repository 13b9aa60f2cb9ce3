//! A single remapping from one engine key event to another

use std::fmt;

use super::context::{Condition, KeyContext};
use crate::keycode::EngineKeyEvent;

/// Send `send` to the engine in place of `accept` while `when` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub accept: EngineKeyEvent,
    pub send: EngineKeyEvent,
    pub when: Condition,
}

impl KeyBinding {
    /// Create a binding that always applies
    pub fn new(accept: EngineKeyEvent, send: EngineKeyEvent) -> Self {
        Self {
            accept,
            send,
            when: Condition::Always,
        }
    }

    /// Restrict this binding to a condition (builder pattern)
    pub fn when(mut self, condition: Condition) -> Self {
        self.when = condition;
        self
    }

    /// Check if this binding accepts the event in the given context
    pub fn matches(&self, event: &EngineKeyEvent, ctx: &KeyContext) -> bool {
        self.accept == *event && self.when.evaluate(ctx)
    }

    /// A binding that sends `VoidSymbol` removes bindings instead of adding one
    pub fn is_unbind(&self) -> bool {
        self.send.is_void()
    }
}

impl fmt::Display for KeyBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} ({})", self.accept, self.send, self.when.as_str())
    }
}

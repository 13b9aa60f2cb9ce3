//! KeyBinder: stores key bindings and rewrites events through them

use std::collections::HashMap;

use super::binding::KeyBinding;
use super::context::KeyContext;
use crate::keycode::EngineKeyEvent;

/// Stores all key bindings and handles lookup
#[derive(Debug, Clone, Default)]
pub struct KeyBinder {
    bindings: Vec<KeyBinding>,
    /// Indices into `bindings`, keyed by accepted event.
    /// Several bindings can accept the same event under different conditions.
    by_accept: HashMap<EngineKeyEvent, Vec<usize>>,
}

impl KeyBinder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a binder with the given bindings
    pub fn with_bindings(bindings: Vec<KeyBinding>) -> Self {
        let mut binder = Self::new();
        for binding in bindings {
            binder.add_binding(binding);
        }
        binder
    }

    /// Add a binding. Unbind entries carry no mapping and are skipped.
    pub fn add_binding(&mut self, binding: KeyBinding) {
        if binding.is_unbind() {
            return;
        }
        let idx = self.bindings.len();
        self.by_accept.entry(binding.accept).or_default().push(idx);
        self.bindings.push(binding);
    }

    /// The event to send in place of `event`, if a binding applies.
    ///
    /// Among applicable bindings the most specific condition wins; within one
    /// condition the earliest binding wins.
    pub fn remap(&self, event: &EngineKeyEvent, ctx: &KeyContext) -> Option<EngineKeyEvent> {
        let indices = self.by_accept.get(event)?;

        let mut best: Option<&KeyBinding> = None;
        for binding in indices.iter().map(|&idx| &self.bindings[idx]) {
            if !binding.when.evaluate(ctx) {
                continue;
            }
            match best {
                Some(current) if current.when.specificity() >= binding.when.specificity() => {}
                _ => best = Some(binding),
            }
        }

        best.map(|binding| binding.send)
    }

    /// Pass `event` through the bindings, returning it unchanged if none applies
    pub fn apply(&self, event: EngineKeyEvent, ctx: &KeyContext) -> EngineKeyEvent {
        self.remap(&event, ctx).unwrap_or(event)
    }

    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// All bindings accepting an event, regardless of condition
    pub fn bindings_for(&self, event: &EngineKeyEvent) -> Vec<&KeyBinding> {
        self.by_accept
            .get(event)
            .map(|indices| indices.iter().map(|&idx| &self.bindings[idx]).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

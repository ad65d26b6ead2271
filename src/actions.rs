//! Pre-action callback table.
//!
//! Steps may name a host callback to run immediately before they are
//! displayed (switching to a tab, expanding a panel, and so on). The host
//! registers callbacks by name; the controller invokes them at step
//! activation. An unknown name is a non-fatal condition: it is logged and
//! the tour proceeds.

use std::collections::HashMap;

/// Callback invoked on the host before a step is displayed.
pub type PreAction = Box<dyn FnMut() + 'static>;

/// Name-to-callback table for step pre-actions.
#[derive(Default)]
pub struct PreActionRegistry {
    actions: HashMap<String, PreAction>,
}

impl PreActionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, action: impl FnMut() + 'static) {
        self.actions.insert(name.into(), Box::new(action));
    }

    /// Whether a callback is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Invoke a named pre-action. Returns false when no callback is
    /// registered under the name.
    pub fn invoke(&mut self, name: &str) -> bool {
        match self.actions.get_mut(name) {
            Some(action) => {
                action();
                true
            }
            None => false,
        }
    }
}

// Input configuration and remapping system

use super::action::{default_bindings, Action, Binding};
use super::InputSource;
use std::collections::HashMap;

/// Maps actions to every binding that can trigger them
#[derive(Debug, Clone)]
pub struct InputConfig {
    bindings: HashMap<Action, Vec<Binding>>,
}

impl InputConfig {
    /// Create an empty configuration (nothing is bound)
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind an input to an action
    ///
    /// A binding drives at most one action; rebinding moves it.
    pub fn bind(&mut self, binding: Binding, action: Action) {
        self.unbind(binding);
        self.bindings.entry(action).or_default().push(binding);
    }

    /// Remove a binding from whichever action holds it
    pub fn unbind(&mut self, binding: Binding) {
        for sources in self.bindings.values_mut() {
            sources.retain(|b| *b != binding);
        }
        self.bindings.retain(|_, sources| !sources.is_empty());
    }

    /// Get all bindings for an action
    pub fn get_bindings(&self, action: Action) -> &[Binding] {
        self.bindings
            .get(&action)
            .map(|sources| sources.as_slice())
            .unwrap_or(&[])
    }

    /// Check if an action has any bindings
    pub fn has_binding(&self, action: Action) -> bool {
        self.bindings.contains_key(&action)
    }

    /// Clear all bindings
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    /// Reset to the default keyboard and touch layout
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (binding, action) in default_bindings() {
            self.bind(binding, action);
        }
    }

    /// Check whether any binding of `action` is currently down
    pub fn is_active(&self, action: Action, input: &dyn InputSource) -> bool {
        self.get_bindings(action).iter().any(|binding| match *binding {
            Binding::Keyboard(key) => input.is_key_pressed(key),
            Binding::TouchZone { start, end } => input.is_touched(start, end),
        })
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        let mut config = Self::new();
        config.reset_to_defaults();
        config
    }
}

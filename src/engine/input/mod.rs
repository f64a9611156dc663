// Input handling system
//
// The game never reads window events directly. Each frame it asks an
// `InputSource` whether keys are held or a pointer sits inside a horizontal
// screen strip, and maps those answers to actions through an `InputConfig`.
//
// ## Architecture
//
// - `action`: Keys, actions and default bindings
// - `config`: Remappable action bindings
// - `manager`: winit-backed input source used by the window loop
// - `snapshot`: Plain value input source (scripted frames, tests)

pub mod action;
pub mod config;
pub mod manager;
pub mod snapshot;

pub use action::{Action, Key};
pub use config::InputConfig;
pub use manager::InputManager;

// Scripted input and raw bindings are mostly used by tests
#[allow(unused_imports)]
pub use action::Binding;
#[allow(unused_imports)]
pub use snapshot::InputSnapshot;

/// Per-frame input queries
///
/// Absent keys and pointers read as "not pressed"; queries never fail.
pub trait InputSource {
    /// Is `key` held right now
    fn is_key_pressed(&self, key: Key) -> bool;

    /// Is any active pointer inside `[start, end]` of the screen width (normalized)
    fn is_touched(&self, start: f32, end: f32) -> bool;
}

/// An input source paired with the bindings used to read it
#[derive(Clone, Copy)]
pub struct Controls<'a> {
    source: &'a dyn InputSource,
    config: &'a InputConfig,
}

impl<'a> Controls<'a> {
    pub fn new(source: &'a dyn InputSource, config: &'a InputConfig) -> Self {
        Self { source, config }
    }

    /// Check whether an action is currently triggered
    pub fn is_active(&self, action: Action) -> bool {
        self.config.is_active(action, self.source)
    }
}

// Plain input state value

use super::action::Key;
use super::InputSource;
use std::collections::HashSet;

/// Keys held and pointers down for a single frame
///
/// Pointer positions are already normalized against the window width.
#[derive(Debug, Clone, Default)]
pub struct InputSnapshot {
    held: HashSet<Key>,
    pointers: Vec<f32>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style key press, handy when scripting a frame
    #[cfg(test)]
    pub fn with_key(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    /// Builder-style pointer at a normalized x position
    #[cfg(test)]
    pub fn with_pointer(mut self, normalized_x: f32) -> Self {
        self.pointers.push(normalized_x);
        self
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn clear(&mut self) {
        self.held.clear();
        self.pointers.clear();
    }
}

impl InputSource for InputSnapshot {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn is_touched(&self, start: f32, end: f32) -> bool {
        self.pointers.iter().any(|&x| x >= start && x <= end)
    }
}

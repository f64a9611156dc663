// Input manager - turns winit events into pollable key and pointer state

use super::action::Key;
use super::snapshot::InputSnapshot;
use super::InputSource;
use std::collections::HashMap;
use winit::event::{ElementState, KeyEvent, MouseButton, Touch, TouchPhase};
use winit::keyboard::PhysicalKey;

/// Collects window events and answers per-frame input queries
///
/// The left mouse button at the cursor acts as an extra pointer so the touch
/// zones also work on desktop.
#[derive(Debug, Default)]
pub struct InputManager {
    /// Held keys (pointers are tracked separately in pixels)
    keys: InputSnapshot,

    /// Active touches, keyed by finger id, in physical pixels
    touches: HashMap<u64, f64>,

    /// Last known cursor x in physical pixels
    cursor_x: f64,

    /// Whether the left mouse button is down
    mouse_down: bool,

    /// Window width used to normalize pointer positions
    window_width: u32,
}

impl InputManager {
    pub fn new(window_width: u32) -> Self {
        Self {
            window_width,
            ..Self::default()
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(code) = event.physical_key {
            if let Some(key) = Key::from_key_code(code) {
                self.set_key(key, event.state);
            }
        }
    }

    /// Apply a key transition
    pub fn set_key(&mut self, key: Key, state: ElementState) {
        match state {
            ElementState::Pressed => self.keys.press(key),
            ElementState::Released => self.keys.release(key),
        }
    }

    /// Process a touch event from winit
    pub fn process_touch(&mut self, touch: &Touch) {
        match touch.phase {
            TouchPhase::Started | TouchPhase::Moved => {
                self.touch_started(touch.id, touch.location.x)
            }
            TouchPhase::Ended | TouchPhase::Cancelled => self.touch_ended(touch.id),
        }
    }

    /// A finger went down or moved to pixel column `x`
    pub fn touch_started(&mut self, id: u64, x: f64) {
        self.touches.insert(id, x);
    }

    /// A finger lifted or its touch was cancelled
    pub fn touch_ended(&mut self, id: u64) {
        self.touches.remove(&id);
    }

    pub fn process_cursor_moved(&mut self, x: f64) {
        self.cursor_x = x;
    }

    pub fn process_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        if button == MouseButton::Left {
            self.mouse_down = state == ElementState::Pressed;
        }
    }

    /// Update the width pointer positions are measured against
    pub fn set_window_width(&mut self, width: u32) {
        self.window_width = width;
    }

    /// Drop all held keys and pointers (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.keys.clear();
        self.touches.clear();
        self.mouse_down = false;
    }

    fn pointer_positions(&self) -> impl Iterator<Item = f64> + '_ {
        let mouse = self.mouse_down.then_some(self.cursor_x);
        self.touches.values().copied().chain(mouse)
    }
}

impl InputSource for InputManager {
    fn is_key_pressed(&self, key: Key) -> bool {
        self.keys.is_key_pressed(key)
    }

    fn is_touched(&self, start: f32, end: f32) -> bool {
        if self.window_width == 0 {
            return false;
        }
        let width = self.window_width as f64;
        self.pointer_positions().any(|px| {
            let x = (px / width) as f32;
            x >= start && x <= end
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;
    use winit::event::DeviceId;

    #[test]
    fn test_manager_creation() {
        let manager = InputManager::new(800);
        assert!(!manager.is_touched(0.0, 1.0));
        assert!(!manager.is_key_pressed(Key::Up));
    }

    #[test]
    fn test_key_press_release() {
        let mut manager = InputManager::new(800);
        manager.set_key(Key::W, ElementState::Pressed);
        assert!(manager.is_key_pressed(Key::W));

        manager.set_key(Key::W, ElementState::Released);
        assert!(!manager.is_key_pressed(Key::W));
    }

    #[test]
    fn test_mouse_acts_as_pointer() {
        let mut manager = InputManager::new(800);
        manager.process_cursor_moved(700.0);
        assert!(!manager.is_touched(0.75, 1.0));

        manager.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        assert!(manager.is_touched(0.75, 1.0));
        assert!(!manager.is_touched(0.0, 0.5));

        manager.process_mouse_button(ElementState::Released, MouseButton::Left);
        assert!(!manager.is_touched(0.75, 1.0));
    }

    #[test]
    fn test_right_mouse_button_ignored() {
        let mut manager = InputManager::new(800);
        manager.process_cursor_moved(100.0);
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Right);
        assert!(!manager.is_touched(0.0, 0.25));
    }

    #[test]
    fn test_zero_width_window_reports_no_touch() {
        let mut manager = InputManager::new(0);
        manager.process_cursor_moved(10.0);
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        assert!(!manager.is_touched(0.0, 1.0));
    }

    #[test]
    fn test_resize_renormalizes() {
        let mut manager = InputManager::new(400);
        manager.process_cursor_moved(350.0);
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        assert!(manager.is_touched(0.75, 1.0));

        manager.set_window_width(1400);
        assert!(manager.is_touched(0.25, 0.5));
    }

    #[test]
    fn test_reset() {
        let mut manager = InputManager::new(800);
        manager.set_key(Key::Left, ElementState::Pressed);
        manager.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        manager.touch_started(3, 700.0);
        manager.reset();

        assert!(!manager.is_key_pressed(Key::Left));
        assert!(!manager.is_touched(0.0, 1.0));
    }

    #[test]
    fn test_lifting_one_finger_keeps_the_other() {
        let mut manager = InputManager::new(800);
        manager.touch_started(1, 100.0);
        manager.touch_started(2, 700.0);
        assert!(manager.is_touched(0.0, 0.25));
        assert!(manager.is_touched(0.75, 1.0));

        manager.touch_ended(1);
        assert!(!manager.is_touched(0.0, 0.25));
        assert!(manager.is_touched(0.75, 1.0));
    }

    #[test]
    fn test_touch_moves_between_zones() {
        let mut manager = InputManager::new(800);
        manager.touch_started(7, 100.0);
        manager.touch_started(7, 300.0);
        assert!(!manager.is_touched(0.0, 0.2));
        assert!(manager.is_touched(0.25, 0.5));
    }

    #[test]
    fn test_cancelled_touch_is_dropped() {
        let mut manager = InputManager::new(800);
        manager.touch_started(4, 700.0);
        manager.process_touch(&Touch {
            device_id: unsafe { DeviceId::dummy() },
            phase: TouchPhase::Cancelled,
            location: PhysicalPosition::new(700.0, 10.0),
            force: None,
            id: 4,
        });
        assert!(!manager.is_touched(0.75, 1.0));
    }
}

// Game action definitions and default bindings

use winit::keyboard::KeyCode;

/// Represents all in-game actions the koala reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Jump,
}

impl Action {
    pub const ALL: [Action; 3] = [Action::MoveLeft, Action::MoveRight, Action::Jump];
}

/// Keys the game polls every frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    D,
    Escape,
}

impl Key {
    /// Map a physical winit key code to a game key
    pub fn from_key_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::ArrowUp => Some(Key::Up),
            KeyCode::ArrowDown => Some(Key::Down),
            KeyCode::ArrowLeft => Some(Key::Left),
            KeyCode::ArrowRight => Some(Key::Right),
            KeyCode::KeyW => Some(Key::W),
            KeyCode::KeyA => Some(Key::A),
            KeyCode::KeyD => Some(Key::D),
            KeyCode::Escape => Some(Key::Escape),
            _ => None,
        }
    }
}

/// Something that can make an action active: a key, or a strip of the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Binding {
    Keyboard(Key),
    /// Horizontal screen zone, normalized so 0.0 is the left edge and 1.0 the right edge
    TouchZone { start: f32, end: f32 },
}

impl Binding {
    /// Create a keyboard binding
    pub fn key(key: Key) -> Self {
        Self::Keyboard(key)
    }

    /// Create a touch zone binding
    pub fn zone(start: f32, end: f32) -> Self {
        Self::TouchZone { start, end }
    }
}

/// Default bindings: arrows, WASD, and three touch strips
pub fn default_bindings() -> Vec<(Binding, Action)> {
    vec![
        (Binding::key(Key::Left), Action::MoveLeft),
        (Binding::key(Key::A), Action::MoveLeft),
        (Binding::zone(0.0, 0.25), Action::MoveLeft),
        (Binding::key(Key::Right), Action::MoveRight),
        (Binding::key(Key::D), Action::MoveRight),
        (Binding::zone(0.25, 0.5), Action::MoveRight),
        (Binding::key(Key::Up), Action::Jump),
        (Binding::key(Key::W), Action::Jump),
        (Binding::zone(0.75, 1.0), Action::Jump),
    ]
}

// The player character

use glam::Vec2;

use super::config::KoalaConfig;
use super::state::BehavioralState;
use crate::core::Rect;

/// The single controllable character
#[derive(Debug, Clone, PartialEq)]
pub struct Koala {
    /// Bottom-left corner of the bounding box, in world units
    pub position: Vec2,
    /// Units per second between frames (scaled to units per frame inside a step)
    pub velocity: Vec2,
    /// Behaviour state, also selects the animation
    pub state: BehavioralState,
    /// Seconds of animation time; keeps running across state changes
    pub state_time: f32,
    /// Last horizontal direction, only used to mirror the sprite
    pub faces_right: bool,
    /// Set by landing on a tile, cleared by jumping
    pub grounded: bool,
}

impl Koala {
    /// Spawn a koala at `position`, at rest and airborne
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            state: BehavioralState::Walking,
            state_time: 0.0,
            faces_right: true,
            grounded: false,
        }
    }

    /// Current bounding box
    pub fn bounds(&self, config: &KoalaConfig) -> Rect {
        Rect::from_corner(self.position, config.width, config.height)
    }
}

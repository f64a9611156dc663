// Sprite draw commands

use crate::core::Rect;
use glam::Vec2;

/// One sprite-sheet region drawn at a world rectangle
///
/// A negative width means the region is mirrored horizontally; the origin then
/// sits on the right edge so the sprite still covers the same rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteDraw {
    /// Index of the region in the sprite sheet
    pub region: usize,
    pub origin: Vec2,
    pub size: Vec2,
    /// Texture coordinates of the region as (u_min, v_min, u_max, v_max)
    pub uv: (f32, f32, f32, f32),
}

impl SpriteDraw {
    /// Build a draw for a body whose bottom-left corner is `position`
    pub fn facing(
        region: usize,
        position: Vec2,
        width: f32,
        height: f32,
        faces_right: bool,
    ) -> Self {
        if faces_right {
            Self {
                region,
                origin: position,
                size: Vec2::new(width, height),
                uv: (0.0, 0.0, 1.0, 1.0),
            }
        } else {
            Self {
                region,
                origin: Vec2::new(position.x + width, position.y),
                size: Vec2::new(-width, height),
                uv: (0.0, 0.0, 1.0, 1.0),
            }
        }
    }

    pub fn with_uv(mut self, uv: (f32, f32, f32, f32)) -> Self {
        self.uv = uv;
        self
    }

    pub fn is_mirrored(&self) -> bool {
        self.size.x < 0.0
    }

    /// World rectangle covered by the sprite, regardless of mirroring
    pub fn bounds(&self) -> Rect {
        let x = self.origin.x.min(self.origin.x + self.size.x);
        Rect::new(x, self.origin.y, self.size.x.abs(), self.size.y)
    }
}

// Math utilities and geometry primitives

use glam::Vec2;

/// Axis-aligned rectangle in world units, anchored at its bottom-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from a bottom-left corner and a size
    pub fn from_corner(corner: Vec2, width: f32, height: f32) -> Self {
        Self::new(corner.x, corner.y, width, height)
    }

    /// Check if two rectangles overlap
    ///
    /// Edges that only touch do not count as an overlap, so a body resting
    /// exactly on top of a tile is not considered to be inside it.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }
}

/// Clamp a value's magnitude to `max`, keeping its sign
///
/// Values whose magnitude is already at or below `max` are returned untouched.
pub fn clamp_magnitude(value: f32, max: f32) -> f32 {
    if value.abs() > max {
        value.signum() * max
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap() {
        let a = Rect::new(0.0, 0.0, 2.0, 2.0);
        let b = Rect::new(1.0, 1.0, 2.0, 2.0);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let floor = Rect::new(0.0, 0.0, 1.0, 1.0);
        let body = Rect::new(0.0, 1.0, 1.0, 1.5);
        assert!(!floor.overlaps(&body));

        let wall = Rect::new(1.0, 0.0, 1.0, 1.0);
        assert!(!floor.overlaps(&wall));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(5.0, 5.0, 1.0, 1.0);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_edges() {
        let rect = Rect::from_corner(Vec2::new(2.0, 3.0), 1.5, 0.5);
        assert_eq!(rect.right(), 3.5);
        assert_eq!(rect.top(), 3.5);
    }

    #[test]
    fn test_clamp_magnitude() {
        assert_eq!(clamp_magnitude(25.0, 10.0), 10.0);
        assert_eq!(clamp_magnitude(-25.0, 10.0), -10.0);
        assert_eq!(clamp_magnitude(3.0, 10.0), 3.0);
    }

    #[test]
    fn test_clamp_magnitude_keeps_boundary() {
        assert_eq!(clamp_magnitude(10.0, 10.0), 10.0);
        assert_eq!(clamp_magnitude(-10.0, 10.0), -10.0);
    }
}

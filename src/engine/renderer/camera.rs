// Camera and viewport for the tile world

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2};

/// World units visible horizontally
pub const VIEW_WIDTH: f32 = 30.0;
/// World units visible vertically
pub const VIEW_HEIGHT: f32 = 20.0;

/// Orthographic 2D camera, measured in world units (1 unit == 1 tile)
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera centre in world space
    position: Vec2,
    viewport_width: f32,
    viewport_height: f32,
    view_proj: Mat4,
}

impl Camera {
    /// Create a camera whose view starts at the world origin
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        let mut camera = Self {
            position: Vec2::new(viewport_width / 2.0, viewport_height / 2.0),
            viewport_width,
            viewport_height,
            view_proj: Mat4::IDENTITY,
        };
        camera.update_view_proj();
        camera
    }

    fn update_view_proj(&mut self) {
        let half_width = self.viewport_width / 2.0;
        let half_height = self.viewport_height / 2.0;

        self.view_proj = Mat4::orthographic_rh(
            self.position.x - half_width,
            self.position.x + half_width,
            self.position.y - half_height,
            self.position.y + half_height,
            -1.0,
            1.0,
        );
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Track a target horizontally; the vertical position never moves
    pub fn follow_x(&mut self, x: f32) {
        self.position.x = x;
        self.update_view_proj();
    }

    pub fn view_proj_matrix(&self) -> Mat4 {
        self.view_proj
    }

    /// Get the viewport bounds in world coordinates
    pub fn viewport_bounds(&self) -> Viewport {
        let half = Vec2::new(self.viewport_width / 2.0, self.viewport_height / 2.0);
        Viewport {
            min: self.position - half,
            max: self.position + half,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(VIEW_WIDTH, VIEW_HEIGHT)
    }
}

/// Viewport bounds in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub min: Vec2,
    pub max: Vec2,
}

impl Viewport {
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Camera uniform for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new(camera: &Camera) -> Self {
        Self {
            view_proj: camera.view_proj_matrix().to_cols_array_2d(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_view() {
        let camera = Camera::default();
        assert_eq!(camera.position(), Vec2::new(15.0, 10.0));

        let bounds = camera.viewport_bounds();
        assert_eq!(bounds.min, Vec2::ZERO);
        assert_eq!(bounds.max, Vec2::new(30.0, 20.0));
    }

    #[test]
    fn test_follow_x_only() {
        let mut camera = Camera::default();
        camera.follow_x(42.5);
        assert_eq!(camera.position(), Vec2::new(42.5, 10.0));
        assert!(camera.viewport_bounds().contains(Vec2::new(42.5, 10.0)));
        assert!(!camera.viewport_bounds().contains(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_view_proj_maps_centre_to_origin() {
        let mut camera = Camera::default();
        camera.follow_x(20.0);
        let clip = camera
            .view_proj_matrix()
            .project_point3(glam::Vec3::new(20.0, 10.0, 0.0));
        assert_relative_eq!(clip.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_uniform_bytes() {
        let uniform = CameraUniform::new(&Camera::default());
        assert_eq!(bytemuck::bytes_of(&uniform).len(), 64);
    }
}

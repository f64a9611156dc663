// Rendering boundary
//
// The simulation hands a read-only `FrameView` to whatever draws the frame.
// Nothing in the game calls back into the renderer.

mod camera;
mod sprite;

pub use camera::{Camera, CameraUniform};
#[allow(unused_imports)]
pub use camera::{Viewport, VIEW_HEIGHT, VIEW_WIDTH};
pub use sprite::SpriteDraw;

use log::trace;

/// Everything needed to draw one frame
#[derive(Debug, Clone)]
pub struct FrameView {
    pub camera: Camera,
    /// The koala's sprite, if its current state has an animation
    pub koala: Option<SpriteDraw>,
}

impl FrameView {
    pub fn camera_uniform(&self) -> CameraUniform {
        CameraUniform::new(&self.camera)
    }
}

/// Consumer of frame views
pub trait Renderer {
    fn draw(&mut self, view: &FrameView);
}

/// Renderer that only reports what it would draw
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames_drawn: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, view: &FrameView) {
        self.frames_drawn += 1;

        let Some(sprite) = view.koala else {
            trace!("frame {}: nothing to draw", self.frames_drawn);
            return;
        };

        let uniform = view.camera_uniform();
        trace!(
            "frame {}: camera translation ({:.3}, {:.3})",
            self.frames_drawn,
            uniform.view_proj[3][0],
            uniform.view_proj[3][1]
        );

        let bounds = sprite.bounds();
        let visible = view
            .camera
            .viewport_bounds()
            .contains(glam::Vec2::new(bounds.x, bounds.y));
        trace!(
            "frame {}: koala region {} uv {:?} at ({:.2}, {:.2}) mirrored={} visible={}",
            self.frames_drawn,
            sprite.region,
            sprite.uv,
            sprite.origin.x,
            sprite.origin.y,
            sprite.is_mirrored(),
            visible
        );
    }
}

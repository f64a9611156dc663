// Game session: one koala in one level

pub mod characters;
pub mod level;

use anyhow::Result;
use log::{debug, info, trace, warn};

use crate::core::Rect;
use crate::engine::input::{Action, Controls, InputConfig, InputSource};
use crate::engine::physics::TileLayer;
use crate::engine::renderer::{Camera, FrameView, SpriteDraw};
use characters::{
    CollisionResolver, Koala, KoalaAnimations, KoalaConfig, SpriteSheetConfig, StepReport,
    SPRITE_FRAME_HEIGHT, SPRITE_FRAME_WIDTH,
};

/// Everything that lives for the length of a play session
pub struct Game {
    koala: Koala,
    level: TileLayer,
    resolver: CollisionResolver,
    animations: KoalaAnimations,
    sheet: SpriteSheetConfig,
    camera: Camera,
    bindings: InputConfig,
}

impl Game {
    /// Set up the demo level with the koala at its spawn point
    pub fn new() -> Result<Self> {
        let config = KoalaConfig::from_sprite_size(SPRITE_FRAME_WIDTH, SPRITE_FRAME_HEIGHT)?;
        let level = level::demo_level()?;
        info!(
            "Loaded {}x{} level with {} blocks",
            level.width(),
            level.height(),
            level.solid_count()
        );
        let game = Self::with_level(level, config);
        for action in Action::ALL {
            if !game.bindings.has_binding(action) {
                warn!("{:?} has no input bound", action);
            }
        }
        Ok(game)
    }

    /// Start a session on an arbitrary level
    pub fn with_level(level: TileLayer, config: KoalaConfig) -> Self {
        Self {
            koala: Koala::new(level::SPAWN_POINT),
            level,
            resolver: CollisionResolver::new(config),
            animations: KoalaAnimations::standard(),
            sheet: SpriteSheetConfig::koala(),
            camera: Camera::default(),
            bindings: InputConfig::default(),
        }
    }

    /// Run one frame of simulation and move the camera after the koala
    pub fn update(&mut self, dt: f32, input: &dyn InputSource) -> StepReport {
        let previous_state = self.koala.state;
        let was_grounded = self.koala.grounded;
        let controls = Controls::new(input, &self.bindings);
        let report = self
            .resolver
            .update(&mut self.koala, &controls, &mut self.level, dt);

        if self.koala.state != previous_state {
            debug!(
                "Koala state {} -> {} at ({:.2}, {:.2})",
                previous_state.animation_name(),
                self.koala.state.animation_name(),
                self.koala.position.x,
                self.koala.position.y
            );
        }

        if let Some(event) = report.horizontal {
            let tile = event.tile();
            trace!("Koala blocked by the tile at ({}, {})", tile.x, tile.y);
        }
        if let Some(tile) = landing_tile(was_grounded, &self.koala, &report) {
            debug!("Koala landed on the tile at ({}, {})", tile.x, tile.y);
        }

        self.camera.follow_x(self.koala.position.x);
        report
    }

    /// Read-only description of what to draw this frame
    pub fn frame_view(&self) -> FrameView {
        let config = self.resolver.config();
        let koala = self
            .animations
            .region(self.koala.state, self.koala.state_time)
            .map(|region| {
                SpriteDraw::facing(
                    region,
                    self.koala.position,
                    config.width,
                    config.height,
                    self.koala.faces_right,
                )
                .with_uv(self.sheet.region_uvs(region))
            });

        FrameView {
            camera: self.camera.clone(),
            koala,
        }
    }

    /// Window lost focus. Nothing is suspended.
    pub fn pause(&mut self) {
        info!("Pause requested (no-op)");
    }

    /// Window regained focus. Nothing is restored.
    pub fn resume(&mut self) {
        info!("Resume requested (no-op)");
    }

    /// The view always spans the same world area, so a resize changes nothing.
    pub fn resize(&mut self, width: u32, height: u32) {
        info!("Window resized to {}x{}", width, height);
    }

    pub fn koala(&self) -> &Koala {
        &self.koala
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }
}

/// The tile the koala touched down on, only on the frame it became grounded
fn landing_tile(was_grounded: bool, koala: &Koala, report: &StepReport) -> Option<Rect> {
    if was_grounded || !koala.grounded {
        return None;
    }
    report.vertical.map(|event| event.tile())
}

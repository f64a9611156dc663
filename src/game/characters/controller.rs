// Per-frame koala movement and tile collision
//
// Velocity is kept in units per second between frames. Inside `update` it is
// scaled by the frame time so the sweeps work with this frame's displacement,
// then scaled back before damping.

use log::debug;

use super::character::Koala;
use super::config::KoalaConfig;
use super::state::BehavioralState;
use crate::core::clamp_magnitude;
use crate::engine::input::Controls;
use crate::engine::physics::{CellRange, CollisionEvent, TileGrid, TileQuery};

/// What happened to the koala during one step
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepReport {
    /// Horizontal sweep result, if something blocked it
    pub horizontal: Option<CollisionEvent>,
    /// Vertical sweep result, if something was hit
    pub vertical: Option<CollisionEvent>,
}

/// Integrates koala movement and resolves it against a tile grid, one axis at a time
#[derive(Debug)]
pub struct CollisionResolver {
    config: KoalaConfig,
    /// Candidate tiles for the current sweep
    query: TileQuery,
}

impl CollisionResolver {
    pub fn new(config: KoalaConfig) -> Self {
        Self {
            config,
            query: TileQuery::new(),
        }
    }

    pub fn config(&self) -> &KoalaConfig {
        &self.config
    }

    /// Advance the koala by `dt` seconds
    ///
    /// A zero `dt` leaves everything untouched.
    pub fn update<G: TileGrid + ?Sized>(
        &mut self,
        koala: &mut Koala,
        controls: &Controls<'_>,
        grid: &mut G,
        dt: f32,
    ) -> StepReport {
        if dt == 0.0 {
            return StepReport::default();
        }
        koala.state_time += dt;

        for state in BehavioralState::PRE_GRAVITY {
            state.react_to_input(koala, controls, &self.config);
        }

        koala.velocity.y += self.config.gravity;
        koala.velocity.x = clamp_magnitude(koala.velocity.x, self.config.max_velocity);

        BehavioralState::Standing.react_to_input(koala, controls, &self.config);

        koala.velocity *= dt;

        let report = StepReport {
            horizontal: self.sweep_horizontal(koala, &*grid),
            vertical: self.sweep_vertical(koala, grid),
        };

        koala.position += koala.velocity;
        koala.velocity *= 1.0 / dt;

        // Stop coasting once input is released
        koala.velocity.x *= self.config.damping;

        report
    }

    /// Cancel horizontal movement if the leading edge would enter a solid tile
    fn sweep_horizontal<G: TileGrid + ?Sized>(
        &mut self,
        koala: &mut Koala,
        grid: &G,
    ) -> Option<CollisionEvent> {
        let mut rect = koala.bounds(&self.config);
        let leading_x = if koala.velocity.x > 0.0 {
            rect.right() + koala.velocity.x
        } else {
            rect.x + koala.velocity.x
        };
        let range = CellRange::column(leading_x as i32, rect.y as i32, rect.top() as i32);
        self.query.collect(grid, range);

        rect.x += koala.velocity.x;
        let tile = self.query.first_overlap(&rect)?;
        koala.velocity.x = 0.0;
        Some(CollisionEvent::Blocked { tile })
    }

    /// Stop vertical movement against the first tile hit, snapping the koala to it
    ///
    /// Hitting a tile from below destroys it; landing on one grounds the koala.
    fn sweep_vertical<G: TileGrid + ?Sized>(
        &mut self,
        koala: &mut Koala,
        grid: &mut G,
    ) -> Option<CollisionEvent> {
        let mut rect = koala.bounds(&self.config);
        let leading_y = if koala.velocity.y > 0.0 {
            rect.top() + koala.velocity.y
        } else {
            rect.y + koala.velocity.y
        };
        let range = CellRange::row(leading_y as i32, rect.x as i32, rect.right() as i32);
        self.query.collect(&*grid, range);

        rect.y += koala.velocity.y;
        let tile = self.query.first_overlap(&rect)?;

        let event = if koala.velocity.y > 0.0 {
            koala.position.y = tile.y - self.config.height;
            grid.clear(tile.x as i32, tile.y as i32);
            debug!("Koala broke the tile at ({}, {})", tile.x, tile.y);
            CollisionEvent::Ceiling { tile }
        } else {
            koala.position.y = tile.top();
            koala.grounded = true;
            CollisionEvent::Landed { tile }
        };
        koala.velocity.y = 0.0;

        Some(event)
    }
}

impl Default for CollisionResolver {
    fn default() -> Self {
        Self::new(KoalaConfig::default())
    }
}

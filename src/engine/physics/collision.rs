use super::tiles::TileGrid;
use crate::core::Rect;

/// Inclusive rectangle of grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}

impl CellRange {
    pub fn new(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Self {
        Self {
            start_x,
            start_y,
            end_x,
            end_y,
        }
    }

    /// Single column `x`, spanning rows `start_y..=end_y`
    pub fn column(x: i32, start_y: i32, end_y: i32) -> Self {
        Self::new(x, start_y, x, end_y)
    }

    /// Single row `y`, spanning columns `start_x..=end_x`
    pub fn row(y: i32, start_x: i32, end_x: i32) -> Self {
        Self::new(start_x, y, end_x, y)
    }
}

/// Something the sweep ran into during a step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionEvent {
    /// Horizontal movement was cancelled by a wall
    Blocked { tile: Rect },

    /// Hit a tile from below; the tile was destroyed
    Ceiling { tile: Rect },

    /// Came down on (or rested against) a tile
    Landed { tile: Rect },
}

impl CollisionEvent {
    /// The tile involved in the collision
    pub fn tile(&self) -> Rect {
        match *self {
            Self::Blocked { tile } | Self::Ceiling { tile } | Self::Landed { tile } => tile,
        }
    }
}

/// Scratch list of solid tile rectangles for one sweep
///
/// The buffer is refilled on every query and never shared across frames.
#[derive(Debug, Default)]
pub struct TileQuery {
    tiles: Vec<Rect>,
}

impl TileQuery {
    pub fn new() -> Self {
        Self {
            tiles: Vec::with_capacity(8),
        }
    }

    /// Gather every solid cell in `range` as a unit rectangle
    ///
    /// Cells are visited row by row from the bottom, left to right.
    pub fn collect<G: TileGrid + ?Sized>(&mut self, grid: &G, range: CellRange) -> &[Rect] {
        self.tiles.clear();
        for y in range.start_y..=range.end_y {
            for x in range.start_x..=range.end_x {
                if grid.solid_at(x, y) {
                    self.tiles.push(Rect::new(x as f32, y as f32, 1.0, 1.0));
                }
            }
        }
        &self.tiles
    }

    /// First collected tile overlapping `rect`, in collection order
    pub fn first_overlap(&self, rect: &Rect) -> Option<Rect> {
        self.tiles.iter().copied().find(|tile| rect.overlaps(tile))
    }
}

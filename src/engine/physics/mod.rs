// Tile physics: grid storage and swept cell queries

mod collision;
mod tiles;

pub use collision::{CellRange, CollisionEvent, TileQuery};
pub use tiles::{LevelError, TileGrid, TileLayer};

// Built-in demo level

use glam::Vec2;

use crate::engine::physics::{LevelError, TileLayer};

/// Where the koala enters the level
pub const SPAWN_POINT: Vec2 = Vec2::new(20.0, 20.0);

/// Demo level, top row first. `#` is a breakable solid block.
const DEMO_ROWS: [&str; 16] = [
    "#..........................................................#",
    "#..........................................................#",
    "#..........................................................#",
    "#..........................................................#",
    "#..........................................................#",
    "#..........................................................#",
    "#..........................................................#",
    "#..........................................................#",
    "#.....................................######...............#",
    "#................#######...................................#",
    "#..........................................................#",
    "#.............................####................#........#",
    "#.........#.......................................#........#",
    "#.........#.......................................#........#",
    "############################################################",
    "############################################################",
];

/// Build the demo level's collision layer
pub fn demo_level() -> Result<TileLayer, LevelError> {
    TileLayer::from_rows(&DEMO_ROWS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::physics::TileGrid;

    #[test]
    fn test_demo_level_parses() {
        let level = demo_level().unwrap();
        assert_eq!(level.width(), 60);
        assert_eq!(level.height(), 16);
    }

    #[test]
    fn test_demo_level_has_floor_and_walls() {
        let level = demo_level().unwrap();
        for x in 0..60 {
            assert!(level.solid_at(x, 0));
            assert!(level.solid_at(x, 1));
        }
        for y in 0..16 {
            assert!(level.solid_at(0, y));
            assert!(level.solid_at(59, y));
        }
    }

    #[test]
    fn test_spawn_is_open() {
        let level = demo_level().unwrap();
        assert!(!level.solid_at(SPAWN_POINT.x as i32, SPAWN_POINT.y as i32));
    }
}

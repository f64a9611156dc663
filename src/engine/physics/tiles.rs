// Tile grid storage and queries

/// Errors raised while building a tile layer
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LevelError {
    #[error("Level has no rows")]
    Empty,

    #[error("Row {row} is {actual} tiles wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Unknown tile '{glyph}' at column {column}, row {row}")]
    UnknownTile { glyph: char, column: usize, row: usize },
}

/// Solid/empty cells addressed by integer coordinates
///
/// Coordinates outside the grid are always empty, and clearing them does nothing.
pub trait TileGrid {
    fn solid_at(&self, x: i32, y: i32) -> bool;

    /// Destroy the tile at a cell, leaving it empty
    fn clear(&mut self, x: i32, y: i32);
}

/// Dense in-memory tile layer, one tile per world unit, y pointing up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLayer {
    width: usize,
    height: usize,
    /// Row-major, row 0 is the bottom of the level
    cells: Vec<bool>,
}

impl TileLayer {
    /// Glyph for a solid tile in text levels
    pub const SOLID: char = '#';
    /// Glyph for an empty tile in text levels
    pub const EMPTY: char = '.';

    /// Create an empty layer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    /// Parse a layer from text rows, top row first
    ///
    /// `#` is solid and `.` or a space is empty.
    pub fn from_rows(rows: &[&str]) -> Result<Self, LevelError> {
        let width = rows.first().ok_or(LevelError::Empty)?.chars().count();
        let height = rows.len();
        let mut layer = Self::new(width, height);

        for (row, line) in rows.iter().enumerate() {
            let actual = line.chars().count();
            if actual != width {
                return Err(LevelError::RaggedRow {
                    row,
                    expected: width,
                    actual,
                });
            }

            let y = height - 1 - row;
            for (column, glyph) in line.chars().enumerate() {
                match glyph {
                    Self::SOLID => layer.cells[y * width + column] = true,
                    Self::EMPTY | ' ' => {}
                    _ => return Err(LevelError::UnknownTile { glyph, column, row }),
                }
            }
        }

        Ok(layer)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Mark a cell solid or empty; out-of-range cells are ignored
    pub fn set(&mut self, x: i32, y: i32, solid: bool) {
        if let Some(index) = self.index(x, y) {
            self.cells[index] = solid;
        }
    }

    /// Number of solid tiles left in the layer
    pub fn solid_count(&self) -> usize {
        self.cells.iter().filter(|&&solid| solid).count()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| y * self.width + x)
    }
}

impl TileGrid for TileLayer {
    fn solid_at(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|index| self.cells[index])
    }

    fn clear(&mut self, x: i32, y: i32) {
        self.set(x, y, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_layer_is_empty() {
        let layer = TileLayer::new(4, 3);
        assert_eq!(layer.solid_count(), 0);
        assert!(!layer.solid_at(0, 0));
    }

    #[test]
    fn test_from_rows_flips_y() {
        let layer = TileLayer::from_rows(&["#..", "...", "..#"]).unwrap();
        assert_eq!(layer.width(), 3);
        assert_eq!(layer.height(), 3);
        assert!(layer.solid_at(0, 2));
        assert!(layer.solid_at(2, 0));
        assert!(!layer.solid_at(0, 0));
        assert_eq!(layer.solid_count(), 2);
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let layer = TileLayer::from_rows(&["###", "###"]).unwrap();
        assert!(!layer.solid_at(-1, 0));
        assert!(!layer.solid_at(0, -1));
        assert!(!layer.solid_at(3, 0));
        assert!(!layer.solid_at(0, 2));
        assert!(!layer.solid_at(i32::MIN, i32::MAX));
    }

    #[test]
    fn test_clear() {
        let mut layer = TileLayer::from_rows(&["##"]).unwrap();
        layer.clear(1, 0);
        assert!(layer.solid_at(0, 0));
        assert!(!layer.solid_at(1, 0));
    }

    #[test]
    fn test_clear_out_of_range_is_noop() {
        let mut layer = TileLayer::from_rows(&["##"]).unwrap();
        layer.clear(5, 5);
        layer.clear(-1, 0);
        assert_eq!(layer.solid_count(), 2);
    }

    #[test]
    fn test_empty_level_rejected() {
        assert_eq!(TileLayer::from_rows(&[]), Err(LevelError::Empty));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = TileLayer::from_rows(&["###", "##"]).unwrap_err();
        assert_eq!(
            err,
            LevelError::RaggedRow {
                row: 1,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_unknown_glyph_rejected() {
        let err = TileLayer::from_rows(&["#x#"]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown tile 'x' at column 1, row 0");
    }
}

//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either free or occupied.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)
//!
//! Collision treats the floor, both side walls and occupied cells as solid.
//! The ceiling is open: cells above row 0 never collide, so pieces may spawn
//! or rotate partially above the visible grid.

use crate::catalog::Shape;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i16 || y < 0 || y >= BOARD_HEIGHT as i16 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<bool> {
        Self::index(x as i16, y as i16).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, occupied: bool) -> bool {
        match Self::index(x as i16, y as i16) {
            Some(idx) => {
                self.cells[idx] = occupied;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(true))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell)
    }

    /// Whether `shape` placed with its top-left corner at (x, y) hits the floor,
    /// a side wall, or an occupied cell.
    ///
    /// Cells above row 0 are not collisions.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().iter().any(|&(dx, dy)| {
            let px = x as i16 + dx as i16;
            let py = y as i16 + dy as i16;
            if py >= BOARD_HEIGHT as i16 || px < 0 || px >= BOARD_WIDTH as i16 {
                return true;
            }
            if py < 0 {
                return false;
            }
            Self::index(px, py).is_some_and(|idx| self.cells[idx])
        })
    }

    /// Mark every cell of `shape` at (x, y) occupied.
    ///
    /// The caller must have checked `collides` first. Overlapping cells are
    /// silently overwritten and cells outside the grid are dropped.
    pub fn lock(&mut self, shape: &Shape, x: i8, y: i8) {
        for (dx, dy) in shape.cells() {
            if let Some(idx) = Self::index(x as i16 + dx as i16, y as i16 + dy as i16) {
                self.cells[idx] = true;
            }
        }
    }

    /// Remove row `y` and shift all rows above down, leaving an empty row at the top
    /// Rows move with `copy_within`
    pub fn clear_row(&mut self, y: usize) {
        if y >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles overlapping ranges safely
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells.copy_within(src_start..src_start + width, dst_start);
        }

        self.cells[..width].fill(false);
    }

    /// Clear all full rows and return how many were removed
    ///
    /// Scans bottom to top. After removing a row the same index is examined
    /// again, because the row above has just shifted into it.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = BOARD_HEIGHT as usize;

        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared += 1;
            } else {
                y -= 1;
            }
        }

        cleared
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Copy occupancy into a row-major `0`/`1` grid
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            for (dst, &src) in row.iter_mut().zip(&self.cells[start..start + width]) {
                *dst = u8::from(src);
            }
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Build a board from text rows, bottom-aligned (`#`/`X` occupied, anything else free).
    ///
    /// Useful for scripting test positions; rows beyond the board are ignored.
    pub fn from_ascii(rows: &[&str]) -> Self {
        let mut board = Self::new();
        let offset = (BOARD_HEIGHT as usize).saturating_sub(rows.len());
        for (i, line) in rows.iter().enumerate().take(BOARD_HEIGHT as usize) {
            for (x, ch) in line.chars().enumerate().take(BOARD_WIDTH as usize) {
                if matches!(ch, '#' | 'X') {
                    board.set(x as i8, (offset + i) as i8, true);
                }
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::get_shape;
    use crate::types::ShapeKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, true);
        board.set(5, 10, true);

        assert_eq!(board.get(0, 0), Some(true));
        assert_eq!(board.get(5, 10), Some(true));

        assert!(board.cells[0]);
        assert!(board.cells[10 * 10 + 5]);
    }

    #[test]
    fn test_collides_ignores_ceiling() {
        let board = Board::new();
        let i = get_shape(ShapeKind::I).rotated();

        // Vertical I poking three rows above the grid.
        assert!(!board.collides(&i, 0, -3));
        // Entirely above the grid is still not a collision.
        assert!(!board.collides(&i, 0, -10));
    }

    #[test]
    fn test_collides_with_extreme_anchor_does_not_overflow() {
        let board = Board::new();
        let i = get_shape(ShapeKind::I);
        assert!(board.collides(&i, i8::MAX, 0));
        assert!(board.collides(&i, 0, i8::MAX));
        assert!(board.collides(&i, i8::MIN, 0));
    }

    #[test]
    fn test_clear_full_rows_reexamines_shifted_row() {
        // Two adjacent full rows: after removing row 19, row 18 drops into 19
        // and must be checked again before moving on.
        let mut board = Board::from_ascii(&["#.........", "##########", "##########"]);
        assert_eq!(board.clear_full_rows(), 2);
        assert_eq!(board.get(0, 19), Some(true));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_from_ascii_bottom_aligned() {
        let board = Board::from_ascii(&["X.........", ".........#"]);
        assert!(board.is_occupied(0, 18));
        assert!(board.is_occupied(9, 19));
        assert_eq!(board.occupied_count(), 2);
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(3, 7, true);
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[7][3], 1);
        assert_eq!(grid.iter().flatten().map(|&v| v as usize).sum::<usize>(), 1);
    }
}

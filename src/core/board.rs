//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty (0) or holds a piece
//! color (1..=7). Uses a flat array for better cache locality and
//! zero-allocation. Coordinates: (x, y) where x ranges 0..9 (left to right),
//! y ranges 0..19 (top to bottom). Pieces spawn above the board (negative y),
//! so the collision oracle treats rows < 0 as always open.

use arrayvec::ArrayVec;

use crate::core::catalog::PieceShape;
use crate::core::piece::ActivePiece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [u8; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [0; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell color at position (x, y).
    /// Returns None if out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<u8> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell color at position (x, y).
    /// Returns false if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, color: u8) -> bool {
        debug_assert!(color <= 7);
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = color;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(c) if c != 0)
    }

    /// Collision oracle backing every movement and rotation legality check.
    ///
    /// Tests the shape at rotation state `rotation`, anchored at `(x, y)`.
    /// An occupied cell conflicts when it is out of horizontal bounds, at or
    /// past the bottom row, or overlaps a filled cell. Rows above the board
    /// (y < 0) never conflict with grid content: the spawn area is open.
    pub fn conflicts(&self, shape: &PieceShape, rotation: usize, x: i8, y: i8) -> bool {
        for (i, j) in shape.cells(rotation) {
            let cx = x + i;
            let cy = y + j;
            if cx < 0 || cx >= BOARD_WIDTH as i8 || cy >= BOARD_HEIGHT as i8 {
                return true;
            }
            if cy >= 0 && self.is_occupied(cx, cy) {
                return true;
            }
        }
        false
    }

    /// Write a landed piece's occupied cells into the grid.
    ///
    /// Cells still above row 0 are not written. Returns true when any cell
    /// was dropped that way, which the game treats as a top-out.
    pub fn place(&mut self, piece: &ActivePiece, shape: &PieceShape) -> bool {
        let mut overflowed = false;
        for (i, j) in shape.cells(piece.rotation()) {
            let cx = piece.x() + i;
            let cy = piece.y() + j;
            if cy < 0 {
                overflowed = true;
            } else {
                self.set(cx, cy, shape.color());
            }
        }
        overflowed
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|&cell| cell != 0)
    }

    /// Clear all full rows and return their indices in scan order.
    ///
    /// Scans top-down; each full row found is compacted immediately by
    /// shifting every row above it down one and zeroing row 0. Single pass,
    /// zero-allocation (at most 4 rows can be full per placement).
    pub fn clear_lines(&mut self) -> ArrayVec<usize, 4> {
        let mut cleared = ArrayVec::new();
        let width = BOARD_WIDTH as usize;

        for y in 0..BOARD_HEIGHT as usize {
            if !self.is_row_full(y) {
                continue;
            }
            cleared.push(y);

            // Shift rows [0..y) down to [1..y+1) using overlap-safe copies.
            for row in (1..=y).rev() {
                let src_start = (row - 1) * width;
                let dst_start = row * width;
                self.cells
                    .copy_within(src_start..src_start + width, dst_start);
            }
            for cell in &mut self.cells[0..width] {
                *cell = 0;
            }
        }

        cleared
    }

    /// Count of non-empty cells (test and debug aid).
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Copy the grid into a `[row][col]` color matrix (snapshot form).
    pub fn write_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            row.copy_from_slice(&self.cells[y * width..(y + 1) * width]);
        }
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

    fn fill_row(board: &mut Board, y: i8) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, 1);
        }
    }

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
    fn test_board_set_and_get() {
        let mut board = Board::new();
        assert!(board.set(5, 10, 3));
        assert_eq!(board.get(5, 10), Some(3));
        assert!(board.is_occupied(5, 10));

        assert!(board.set(5, 10, 0));
        assert!(!board.is_occupied(5, 10));

        assert!(!board.set(-1, 0, 1));
        assert!(!board.set(0, 20, 1));
        assert_eq!(board.get(10, 0), None);
    }

    #[test]
    fn test_clear_lines_single_row() {
        let mut board = Board::new();
        fill_row(&mut board, 19);
        board.set(4, 18, 2);

        let cleared = board.clear_lines();
        assert_eq!(cleared.as_slice(), &[19]);

        // The marker above dropped one row, the top row is empty.
        assert_eq!(board.get(4, 19), Some(2));
        assert_eq!(board.get(4, 18), Some(0));
        assert_eq!(board.filled_cells(), 1);
    }

    #[test]
    fn test_clear_lines_preserves_relative_order() {
        let mut board = Board::new();
        fill_row(&mut board, 10);
        fill_row(&mut board, 15);
        board.set(0, 4, 6);
        board.set(0, 12, 7);

        let cleared = board.clear_lines();
        assert_eq!(cleared.as_slice(), &[10, 15]);

        // Marker above both cleared rows drops two; marker between drops one.
        assert_eq!(board.get(0, 6), Some(6));
        assert_eq!(board.get(0, 13), Some(7));
        assert_eq!(board.filled_cells(), 2);
    }

    #[test]
    fn test_clear_lines_empty_board() {
        let mut board = Board::new();
        assert!(board.clear_lines().is_empty());
        assert_eq!(board.filled_cells(), 0);
    }

    #[test]
    fn test_is_row_full() {
        let mut board = Board::new();
        assert!(!board.is_row_full(5));
        fill_row(&mut board, 5);
        assert!(board.is_row_full(5));
        board.set(9, 5, 0);
        assert!(!board.is_row_full(5));
        assert!(!board.is_row_full(20));
    }
}

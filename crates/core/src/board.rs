//! Board module - manages the game grid
//!
//! The board is a 20x20 grid where each cell is either empty (`0`) or holds the
//! tag of the piece kind that locked there.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..19
//! (left to right).

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 20 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [EMPTY; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_WIDTH as usize) + (col as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if a cell is occupied.
    ///
    /// Coordinates outside the grid read as unoccupied; rejecting them is the
    /// collision check's job.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(cell) if cell > EMPTY)
    }

    /// Write one cell.
    ///
    /// The caller guarantees `row < height` and `col < width`.
    pub fn set(&mut self, row: usize, col: usize, value: Cell) {
        debug_assert!(row < BOARD_HEIGHT as usize && col < BOARD_WIDTH as usize);
        self.cells[row * BOARD_WIDTH as usize + col] = value;
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * BOARD_WIDTH as usize;
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_HEIGHT as usize {
            return false;
        }
        self.row(row).iter().all(|&cell| cell > EMPTY)
    }

    /// Remove `row`, shift every row above it down by one and empty the top row.
    pub fn clear_row_and_shift_down(&mut self, row: usize) {
        if row >= BOARD_HEIGHT as usize {
            return;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, r * width);
        }

        self.cells[..width].fill(EMPTY);
    }

    /// Number of rows holding at least one occupied cell
    pub fn occupied_row_count(&self) -> usize {
        (0..BOARD_HEIGHT as usize)
            .filter(|&r| self.row(r).iter().any(|&cell| cell > EMPTY))
            .count()
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

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 19), Some(19));
        assert_eq!(Board::index(1, 0), Some(20));
        assert_eq!(Board::index(19, 19), Some(399));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 20), None);
        assert_eq!(Board::index(20, 0), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set(0, 0, 1);
        board.set(10, 5, 2);

        assert_eq!(board.get(0, 0), Some(1));
        assert_eq!(board.get(10, 5), Some(2));

        assert_eq!(board.cells[0], 1);
        assert_eq!(board.cells[10 * 20 + 5], 2);
    }

    #[test]
    fn test_clear_top_row_only_empties_it() {
        let mut board = Board::new();
        for col in 0..20 {
            board.set(0, col, 4);
        }
        board.set(1, 3, 4);

        board.clear_row_and_shift_down(0);

        assert!(board.row(0).iter().all(|&c| c == EMPTY));
        assert_eq!(board.get(1, 3), Some(4));
    }

    #[test]
    fn test_clear_row_out_of_range_is_noop() {
        let mut board = Board::new();
        board.set(19, 0, 1);
        let before = board.clone();
        board.clear_row_and_shift_down(20);
        assert_eq!(board, before);
    }
}

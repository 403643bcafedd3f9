//! Collision and placement rules
//!
//! Decides whether a mask fits at an anchor, merges a landed piece into the
//! board, and compacts completed rows.

use log::debug;

use crate::board::Board;
use crate::game_state::ActivePiece;
use crate::pieces::Shape;

/// Check whether `shape` anchored at (`row`, `col`) fits on `board`.
///
/// A cell is rejected when it lands below the floor, left or right of the
/// walls, or on an occupied board cell. Rows above the top edge are not
/// rejected: pieces spawn on row 0 and never move upward.
pub fn can_place(shape: &Shape, row: i8, col: i8, board: &Board) -> bool {
    let height = board.height() as i8;
    let width = board.width() as i8;

    shape.occupied_cells().all(|(r, c, _)| {
        let target_row = row + r;
        let target_col = col + c;
        target_row < height
            && target_col >= 0
            && target_col < width
            && !board.is_occupied(target_row, target_col)
    })
}

/// Write every occupied cell of `piece` into `board`.
///
/// No validation: call only once a downward move has failed, so the piece is
/// known to sit inside the grid.
pub fn lock_piece(piece: &ActivePiece, board: &mut Board) {
    for (r, c, value) in piece.shape.occupied_cells() {
        board.set((piece.row + r) as usize, (piece.col + c) as usize, value);
    }
}

/// Remove every full row, bottom to top, and return how many were removed.
///
/// After a clear the same row index is examined again, since the row above
/// has just shifted into it.
pub fn clear_completed_lines(board: &mut Board) -> usize {
    let mut cleared = 0;
    let mut row = board.height() as usize;

    while row > 0 {
        if board.is_row_full(row - 1) {
            board.clear_row_and_shift_down(row - 1);
            cleared += 1;
        } else {
            row -= 1;
        }
    }

    if cleared > 0 {
        debug!("cleared {} line(s)", cleared);
    }
    cleared
}

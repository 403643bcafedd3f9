//! GameView: maps the board and active piece into a text framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ActivePiece, Board};
use crate::fb::FrameBuffer;

/// Glyph for the top and bottom border
pub const BORDER_HORIZONTAL: char = '-';
/// Glyph for the left and right border
pub const BORDER_VERTICAL: char = '|';
/// Glyph for locked and falling blocks
pub const BLOCK: char = '#';
/// Glyph for empty cells
pub const BLANK: char = ' ';

/// Bordered one-character-per-cell view of the playfield.
#[derive(Debug, Default, Clone, Copy)]
pub struct GameView;

impl GameView {
    pub fn new() -> Self {
        Self
    }

    /// Frame dimensions for a board: the grid plus a one-cell border.
    pub fn frame_size(board: &Board) -> (u16, u16) {
        (board.width() as u16 + 2, board.height() as u16 + 2)
    }

    /// Render into an existing framebuffer, resizing it to the frame size.
    pub fn render_into(&self, board: &Board, active: Option<&ActivePiece>, fb: &mut FrameBuffer) {
        let (frame_w, frame_h) = Self::frame_size(board);
        fb.resize(frame_w, frame_h);
        fb.clear(BLANK);

        for x in 0..frame_w {
            fb.set(x, 0, BORDER_HORIZONTAL);
            fb.set(x, frame_h - 1, BORDER_HORIZONTAL);
        }

        for row in 0..board.height() {
            let y = row as u16 + 1;
            fb.set(0, y, BORDER_VERTICAL);
            fb.set(frame_w - 1, y, BORDER_VERTICAL);

            for col in 0..board.width() {
                if board.is_occupied(row as i8, col as i8) {
                    fb.set(col as u16 + 1, y, BLOCK);
                }
            }
        }

        if let Some(piece) = active {
            for (row, col) in piece.cells() {
                // Cells above the grid are simply not drawn.
                if row >= 0 && col >= 0 {
                    fb.set(col as u16 + 1, row as u16 + 1, BLOCK);
                }
            }
        }
    }

    /// Render into a fresh framebuffer.
    pub fn render(&self, board: &Board, active: Option<&ActivePiece>) -> FrameBuffer {
        let (w, h) = Self::frame_size(board);
        let mut fb = FrameBuffer::new(w, h);
        self.render_into(board, active, &mut fb);
        fb
    }
}

/// Render the playfield as text lines joined by `\n`.
///
/// # Examples
///
/// ```
/// use text_tetris_term::core::Board;
/// use text_tetris_term::render_text;
///
/// let text = render_text(&Board::new(), None);
/// let lines: Vec<&str> = text.lines().collect();
/// assert_eq!(lines.len(), 22);
/// assert_eq!(lines[0], "-".repeat(22));
/// assert_eq!(lines[1], format!("|{}|", " ".repeat(20)));
/// ```
pub fn render_text(board: &Board, active: Option<&ActivePiece>) -> String {
    GameView::new().render(board, active).to_text()
}

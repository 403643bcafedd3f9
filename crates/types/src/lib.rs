//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 20 columns (indexed 0-19)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn anchor**: row 0, column `BOARD_WIDTH / 2 - 1`
//!
//! # Timing
//!
//! The game loop runs at a fixed cadence of [`TICK_MS`] milliseconds. Every
//! tick drains all buffered input and then attempts one gravity step.

/// Board width in cells (20 columns)
pub const BOARD_WIDTH: u8 = 20;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed game loop cadence in milliseconds
pub const TICK_MS: u32 = 200;

/// Row of the spawn anchor
pub const SPAWN_ROW: i8 = 0;

/// Column of the spawn anchor (horizontally centered)
pub const SPAWN_COL: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// A cell on the game board
///
/// - `0`: Empty cell
/// - `> 0`: Occupied; the value is the [`PieceKind::tag`] of the piece that locked there
pub type Cell = u8;

/// Value of an empty cell
pub const EMPTY: Cell = 0;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    O,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    /// All kinds in catalog order.
    pub const ALL: [PieceKind; Self::LEN] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Non-zero cell value written into the board when this kind locks.
    pub const fn tag(self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::T => 2,
            PieceKind::O => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::L => 6,
            PieceKind::J => 7,
        }
    }
}

/// Player commands applied to the falling piece
///
/// Illegal commands are silently ignored by the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Rotate piece 90° clockwise in place (no wall kicks)
    Rotate,
}

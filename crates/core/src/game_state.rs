//! Game state module - the falling piece and the spawn/fall/lock cycle
//!
//! This module ties together the board, the piece catalog, collision rules and
//! the piece picker. It owns the active piece and drives the phase machine:
//!
//! ```text
//! Spawning --fits--> Falling --gravity blocked--> (lock, clear) --> Spawning
//!     \--blocked--> GameOver
//! ```

use log::{debug, info};

use crate::collision::{can_place, clear_completed_lines, lock_piece};
use crate::pieces::{get_shape, Shape};
use crate::rng::PiecePicker;
use crate::types::{GameAction, PieceKind, SPAWN_COL, SPAWN_ROW};
use crate::Board;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    /// Anchor row (top of the mask)
    pub row: i8,
    /// Anchor column (left of the mask)
    pub col: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn anchor
    pub fn new(kind: PieceKind) -> Self {
        Self::at(kind, SPAWN_ROW, SPAWN_COL)
    }

    /// Create a piece in its spawn orientation at an explicit anchor
    pub fn at(kind: PieceKind, row: i8, col: i8) -> Self {
        Self {
            kind,
            shape: get_shape(kind),
            row,
            col,
        }
    }

    /// Absolute (row, col) of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .occupied_cells()
            .map(move |(r, c, _)| (self.row + r, self.col + c))
    }

    /// Whether the piece covers the board cell (row, col)
    pub fn covers(&self, row: i8, col: i8) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }

    /// Check if the piece fits on the board where it stands
    pub fn fits(&self, board: &Board) -> bool {
        can_place(&self.shape, self.row, self.col, board)
    }
}

/// Lifecycle phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No active piece; the next one is about to be drawn
    Spawning,
    /// A piece is falling and accepts commands
    Falling,
    /// Terminal: the last spawn did not fit
    GameOver,
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to advance
    Idle,
    /// The active piece moved down one row
    Fell,
    /// The piece locked and the next piece spawned
    Locked { lines_cleared: usize },
    /// The game ended on this step
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    picker: PiecePicker,
    phase: Phase,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self::with_picker(PiecePicker::from_seed(seed))
    }

    /// Create a new game drawing pieces from `picker`
    pub fn with_picker(picker: PiecePicker) -> Self {
        Self {
            board: Board::new(),
            active: None,
            picker,
            phase: Phase::Spawning,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Number of pieces merged into the board so far
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Number of rows removed so far
    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Replace the falling piece, e.g. to set up a position.
    pub fn set_active(&mut self, piece: ActivePiece) {
        self.active = Some(piece);
        self.phase = Phase::Falling;
    }

    /// Draw a random piece and spawn it
    pub fn spawn(&mut self) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }
        let kind = self.picker.pick();
        self.spawn_kind(kind)
    }

    /// Spawn `kind` at the spawn anchor.
    ///
    /// Moves to [`Phase::Falling`] when it fits, otherwise to
    /// [`Phase::GameOver`] with no active piece.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if self.phase == Phase::GameOver {
            return false;
        }

        let piece = ActivePiece::new(kind);
        if !piece.fits(&self.board) {
            info!(
                "spawn blocked for {:?} after {} pieces, {} lines",
                kind, self.pieces_locked, self.lines_cleared
            );
            self.active = None;
            self.phase = Phase::GameOver;
            return false;
        }

        debug!("spawned {:?} at ({}, {})", kind, piece.row, piece.col);
        self.active = Some(piece);
        self.phase = Phase::Falling;
        true
    }

    /// Try to shift the active piece by (`d_row`, `d_col`)
    pub fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        if !can_place(&active.shape, active.row + d_row, active.col + d_col, &self.board) {
            return false;
        }
        active.row += d_row;
        active.col += d_col;
        true
    }

    /// Try to rotate the active piece clockwise in place (no wall kicks)
    pub fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let rotated = active.shape.rotated_cw();
        if !can_place(&rotated, active.row, active.col, &self.board) {
            return false;
        }
        active.shape = rotated;
        true
    }

    /// Apply a player command; illegal commands are ignored
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        if self.phase != Phase::Falling {
            return false;
        }
        match action {
            GameAction::MoveLeft => self.try_move(0, -1),
            GameAction::MoveRight => self.try_move(0, 1),
            GameAction::SoftDrop => self.try_move(1, 0),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Lock the active piece onto the board and clear completed rows.
    ///
    /// Leaves the game in [`Phase::Spawning`]. Returns the number of rows removed.
    pub fn lock_active(&mut self) -> usize {
        let Some(active) = self.active.take() else {
            return 0;
        };

        lock_piece(&active, &mut self.board);
        let cleared = clear_completed_lines(&mut self.board);

        self.pieces_locked += 1;
        self.lines_cleared += cleared as u32;
        self.phase = Phase::Spawning;
        debug!(
            "locked {:?} at ({}, {}), {} line(s) cleared",
            active.kind, active.row, active.col, cleared
        );
        cleared
    }

    /// Gravity step: fall one row, or lock, clear and spawn the next piece.
    pub fn gravity_step(&mut self) -> TickOutcome {
        match self.phase {
            Phase::GameOver => TickOutcome::GameOver,
            Phase::Spawning => {
                if self.spawn() {
                    TickOutcome::Idle
                } else {
                    TickOutcome::GameOver
                }
            }
            Phase::Falling => {
                if self.try_move(1, 0) {
                    return TickOutcome::Fell;
                }
                let lines_cleared = self.lock_active();
                if self.spawn() {
                    TickOutcome::Locked { lines_cleared }
                } else {
                    TickOutcome::GameOver
                }
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

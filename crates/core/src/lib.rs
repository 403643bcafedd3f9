//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state management.
//! It has **no dependencies** on terminal I/O, which makes it:
//!
//! - **Deterministic**: Same seed produces identical piece sequences
//! - **Testable**: Every rule can be exercised on a headless board
//! - **Portable**: Can run behind any input source and renderer
//!
//! # Module Structure
//!
//! - [`board`]: 20x20 occupancy grid with row queries and row compaction
//! - [`pieces`]: the seven tetromino masks and the clockwise rotation transform
//! - [`collision`]: placement checks, piece locking and line clearing
//! - [`game_state`]: active piece control and the spawn/fall/lock phase machine
//! - [`rng`]: uniform random piece selection
//!
//! # Game Rules
//!
//! - New pieces spawn at row 0, column `width / 2 - 1`; a blocked spawn ends the game
//! - Left, right and down moves are ignored when blocked
//! - Rotation turns the mask clockwise in place; there are no wall kicks
//! - When gravity cannot move the piece down it locks, full rows are removed
//!   bottom to top, and the next piece spawns
//!
//! # Example
//!
//! ```
//! use text_tetris_core::{GameState, TickOutcome};
//! use text_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! assert!(game.spawn());
//!
//! game.apply_action(GameAction::MoveLeft);
//! game.apply_action(GameAction::Rotate);
//!
//! assert_eq!(game.gravity_step(), TickOutcome::Fell);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;

pub use text_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::{can_place, clear_completed_lines, lock_piece};
pub use game_state::{ActivePiece, GameState, Phase, TickOutcome};
pub use pieces::{get_shape, Shape};
pub use rng::PiecePicker;

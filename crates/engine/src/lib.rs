//! Game loop driver.
//!
//! Sequences the fixed-cadence cycle around a [`GameState`]:
//!
//! 1. draw the current frame
//! 2. sleep one tick
//! 3. drain every buffered input event, applying each immediately
//! 4. attempt one gravity step (lock, clear and respawn when blocked)
//!
//! Input arrives through [`InputSource`] and frames leave through
//! [`FrameSink`], so the loop runs identically against a terminal or in tests.

pub mod game_loop;
pub mod sink;

pub use text_tetris_core as core;
pub use text_tetris_input as input;
pub use text_tetris_types as types;

pub use game_loop::{Exit, GameLoop, Step};
pub use sink::{FrameSink, NullSink, TextSink};

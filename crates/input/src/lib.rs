//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and exposes
//! buffered keyboard input through the non-blocking [`InputSource`] trait, so
//! the game loop can run against a real terminal or a scripted queue.

pub mod map;
pub mod source;

pub use text_tetris_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::{CrosstermInput, InputEvent, InputSource, ScriptedInput};

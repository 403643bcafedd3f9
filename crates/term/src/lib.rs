//! Terminal rendering module.
//!
//! Rendering is split in two:
//! - [`game_view`] maps the board and active piece into a [`FrameBuffer`]
//!   of plain characters. It is pure and unit-testable.
//! - [`renderer`] flushes a framebuffer to the real terminal with crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use text_tetris_core as core;
pub use text_tetris_types as types;

pub use fb::FrameBuffer;
pub use game_view::{render_text, GameView};
pub use renderer::{encode_full_into, TerminalRenderer};

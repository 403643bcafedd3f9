//! Text Tetris (workspace facade crate).
//!
//! This package exposes the `text_tetris::{core,engine,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use text_tetris_core as core;
pub use text_tetris_engine as engine;
pub use text_tetris_input as input;
pub use text_tetris_term as term;
pub use text_tetris_types as types;

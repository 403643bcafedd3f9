//! Frame sinks: where the loop sends each rendered frame.

use anyhow::Result;
use text_tetris_term::{FrameBuffer, GameView, TerminalRenderer};

use crate::core::GameState;

/// Receives one frame per tick
pub trait FrameSink {
    fn draw(&mut self, state: &GameState) -> Result<()>;
}

impl FrameSink for TerminalRenderer {
    fn draw(&mut self, state: &GameState) -> Result<()> {
        let fb = GameView::new().render(state.board(), state.active());
        TerminalRenderer::draw(self, &fb)
    }
}

/// Discards frames
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl FrameSink for NullSink {
    fn draw(&mut self, _state: &GameState) -> Result<()> {
        Ok(())
    }
}

/// Keeps every frame as text, for headless runs and tests.
#[derive(Debug, Default, Clone)]
pub struct TextSink {
    fb: Option<FrameBuffer>,
    frames: Vec<String>,
}

impl TextSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    pub fn last(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }
}

impl FrameSink for TextSink {
    fn draw(&mut self, state: &GameState) -> Result<()> {
        let fb = self.fb.get_or_insert_with(|| FrameBuffer::new(0, 0));
        GameView::new().render_into(state.board(), state.active(), fb);
        self.frames.push(fb.to_text());
        Ok(())
    }
}

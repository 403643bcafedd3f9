//! The drain-then-tick loop.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use crate::core::{GameState, TickOutcome};
use crate::input::{InputEvent, InputSource};
use crate::sink::FrameSink;
use crate::types::TICK_MS;

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    /// A new piece had no room to spawn
    GameOver,
    /// The player asked to quit
    Quit,
}

/// Result of one loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue(TickOutcome),
    Stop(Exit),
}

/// Fixed-cadence game loop over an input source and a frame sink
pub struct GameLoop<I, S> {
    state: GameState,
    input: I,
    sink: S,
    tick: Duration,
}

impl<I: InputSource, S: FrameSink> GameLoop<I, S> {
    pub fn new(state: GameState, input: I, sink: S) -> Self {
        Self {
            state,
            input,
            sink,
            tick: Duration::from_millis(TICK_MS as u64),
        }
    }

    /// Override the tick length (zero runs as fast as possible)
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (GameState, I, S) {
        (self.state, self.input, self.sink)
    }

    /// Spawn the first piece if none is falling yet.
    ///
    /// Returns `false` when the spawn is blocked.
    pub fn start(&mut self) -> bool {
        if self.state.active().is_some() {
            return true;
        }
        self.state.spawn()
    }

    /// Run until game over or quit.
    pub fn run(&mut self) -> Result<Exit> {
        info!("game loop started, tick {:?}", self.tick);
        if !self.start() {
            return Ok(Exit::GameOver);
        }

        loop {
            self.sink.draw(&self.state)?;
            if !self.tick.is_zero() {
                thread::sleep(self.tick);
            }
            if let Step::Stop(exit) = self.advance()? {
                info!(
                    "game loop stopped: {:?} ({} pieces, {} lines)",
                    exit,
                    self.state.pieces_locked(),
                    self.state.lines_cleared()
                );
                return Ok(exit);
            }
        }
    }

    /// One iteration without drawing or sleeping: drain input, then gravity.
    pub fn advance(&mut self) -> Result<Step> {
        if self.drain_input()? {
            return Ok(Step::Stop(Exit::Quit));
        }

        let outcome = self.state.gravity_step();
        if let TickOutcome::Locked { lines_cleared } = outcome {
            debug!("piece locked, {} line(s) cleared", lines_cleared);
        }
        Ok(match outcome {
            TickOutcome::GameOver => Step::Stop(Exit::GameOver),
            other => Step::Continue(other),
        })
    }

    /// Apply every pending event in arrival order.
    ///
    /// Returns `true` if a quit request was seen; events after it stay buffered.
    fn drain_input(&mut self) -> Result<bool> {
        while let Some(event) = self.input.try_next()? {
            match event {
                InputEvent::Quit => return Ok(true),
                InputEvent::Action(action) => {
                    self.state.apply_action(action);
                }
            }
        }
        Ok(false)
    }
}

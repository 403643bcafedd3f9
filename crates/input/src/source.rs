//! Non-blocking input sources.
//!
//! The game loop drains a source once per tick: it calls
//! [`InputSource::try_next`] until it returns `Ok(None)`.

use std::collections::VecDeque;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, should_quit};
use crate::types::GameAction;

/// A decoded input event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Action(GameAction),
    Quit,
}

impl InputEvent {
    /// Decode a key press; `None` for keys the game ignores.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if should_quit(key) {
            return Some(InputEvent::Quit);
        }
        handle_key_event(key).map(InputEvent::Action)
    }
}

/// Source of buffered player input
pub trait InputSource {
    /// Return the next pending event without blocking, or `None` when the
    /// buffer is empty.
    fn try_next(&mut self) -> Result<Option<InputEvent>>;
}

/// Reads keys from the controlling terminal via crossterm.
#[derive(Debug, Default)]
pub struct CrosstermInput;

impl CrosstermInput {
    pub fn new() -> Self {
        Self
    }
}

impl InputSource for CrosstermInput {
    fn try_next(&mut self) -> Result<Option<InputEvent>> {
        while event::poll(Duration::ZERO)? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            // Terminal auto-repeat counts as another press.
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if let Some(input) = InputEvent::from_key(key) {
                return Ok(Some(input));
            }
        }
        Ok(None)
    }
}

/// Queue-backed source for headless runs and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pending: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer one event
    pub fn push(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    /// Buffer one game action
    pub fn push_action(&mut self, action: GameAction) {
        self.push(InputEvent::Action(action));
    }

    /// Number of events not yet drained
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FromIterator<GameAction> for ScriptedInput {
    fn from_iter<T: IntoIterator<Item = GameAction>>(iter: T) -> Self {
        Self {
            pending: iter.into_iter().map(InputEvent::Action).collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn try_next(&mut self) -> Result<Option<InputEvent>> {
        Ok(self.pending.pop_front())
    }
}

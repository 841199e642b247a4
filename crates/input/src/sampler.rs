//! Per-tick input sampling with a bounded wait.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::{map_key, should_quit};
use crate::types::{Intents, INPUT_POLL};

/// What one tick's sampling produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub intents: Intents,
    pub quit: bool,
}

impl TickInput {
    /// Build a tick's input from a single key event.
    ///
    /// One keystroke per tick is the whole contract, so one event fully
    /// determines the result: a quit key sets `quit`, a movement key sets its
    /// flag, anything else leaves the default (all-false) untouched.
    pub fn from_key(key: KeyEvent) -> Self {
        let mut tick = TickInput::default();
        if should_quit(key) {
            tick.quit = true;
        } else if let Some(intent) = map_key(key) {
            tick.intents.set(intent);
        }
        tick
    }
}

/// Samples at most one key event per tick.
pub struct InputSampler {
    poll_timeout: Duration,
}

impl InputSampler {
    pub fn new() -> Self {
        Self {
            poll_timeout: INPUT_POLL,
        }
    }

    pub fn with_timeout(poll_timeout: Duration) -> Self {
        Self { poll_timeout }
    }

    /// Poll once with the bounded wait and read at most one event.
    ///
    /// No event within the window, a non-key event, or a poll/read error all
    /// come back as the default all-false input; intents never survive a tick
    /// without a fresh keystroke.
    pub fn sample(&self) -> TickInput {
        match event::poll(self.poll_timeout) {
            Ok(true) => match event::read() {
                Ok(Event::Key(key))
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                {
                    TickInput::from_key(key)
                }
                _ => TickInput::default(),
            },
            Ok(false) | Err(_) => TickInput::default(),
        }
    }
}

impl Default for InputSampler {
    fn default() -> Self {
        Self::new()
    }
}

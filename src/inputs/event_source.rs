use anyhow::Result;
pub use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::collections::VecDeque;
use std::time::Duration;

/// Trait for abstracting event sources to enable testing
pub trait EventSource {
    /// Poll for events with a timeout
    fn poll(&mut self, timeout: Duration) -> Result<bool>;

    /// Read the next event
    fn read(&mut self) -> Result<Event>;
}

/// Real keyboard event source using crossterm
pub struct KeyboardEventSource;

impl EventSource for KeyboardEventSource {
    fn poll(&mut self, timeout: Duration) -> Result<bool> {
        Ok(crossterm::event::poll(timeout)?)
    }

    fn read(&mut self) -> Result<Event> {
        Ok(crossterm::event::read()?)
    }
}

/// Simulated event source for testing.
///
/// `None` entries are idle ticks: the poll for them times out. Once the
/// script is exhausted every read yields `q`, so a viewer loop always ends.
pub struct SimulatedEventSource {
    script: VecDeque<Option<Event>>,
}

impl SimulatedEventSource {
    pub fn new(events: Vec<Event>) -> Self {
        Self::from_script(events.into_iter().map(Some).collect())
    }

    pub fn from_script(script: Vec<Option<Event>>) -> Self {
        Self {
            script: script.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    /// Helper method to create a key event
    pub fn key_event(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers,
            kind: crossterm::event::KeyEventKind::Press,
            state: crossterm::event::KeyEventState::empty(),
        })
    }

    /// Helper method to create a simple character key event
    pub fn char_key(c: char) -> Event {
        Self::key_event(KeyCode::Char(c), KeyModifiers::empty())
    }

    /// Helper method to create a Ctrl+char key event
    pub fn ctrl_char_key(c: char) -> Event {
        Self::key_event(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Helper method to create a terminal resize event
    pub fn resize(columns: u16, rows: u16) -> Event {
        Event::Resize(columns, rows)
    }
}

impl EventSource for SimulatedEventSource {
    fn poll(&mut self, _timeout: Duration) -> Result<bool> {
        if matches!(self.script.front(), Some(None)) {
            self.script.pop_front();
            return Ok(false);
        }
        Ok(true)
    }

    fn read(&mut self) -> Result<Event> {
        match self.script.pop_front() {
            Some(Some(event)) => Ok(event),
            // Idle ticks are only consumed by poll; skip any read past them
            Some(None) => self.read(),
            None => Ok(SimulatedEventSource::char_key('q')),
        }
    }
}

//! Event handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind};

/// Result of event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue processing.
    Continue,
    /// Exit application.
    Exit,
}

/// Terminal event filtering.
pub struct EventHandler;

impl EventHandler {
    /// Returns the key of a press or repeat event. Releases are dropped so
    /// terminals that report them do not trigger actions twice.
    #[must_use]
    pub fn key_press(event: &Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) if Self::is_press(key) => Some(*key),
            _ => None,
        }
    }

    /// Checks if key is a press.
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
    }
}

use crossterm::event::{Event, KeyEvent, MouseEvent};

/// An input event read from the terminal.
///
/// Delivered by the
/// [`terminal_events`](crate::subscriptions::terminal_events) subscription,
/// which maps each one into the application's message type.
///
/// The payloads are the [`crossterm::event`] types, so key codes, modifiers,
/// buttons, and coordinates match against the full crossterm API. Mouse
/// variants (press, release, wheel, and the motion events hover depends on)
/// arrive only while mouse capture is on; see
/// [`ProgramOptions::mouse_capture`](crate::runtime::ProgramOptions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A key press, repeat, or release.
    Key(KeyEvent),
    /// A pointer event: button, motion, or wheel.
    Mouse(MouseEvent),
    /// The terminal is now (columns, rows) big.
    Resize(u16, u16),
    /// The terminal window took focus.
    FocusGained,
    /// The terminal window dropped focus.
    FocusLost,
    /// Text pasted under bracketed paste.
    Paste(String),
}

impl From<Event> for TerminalEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Self::Key(key),
            Event::Mouse(mouse) => Self::Mouse(mouse),
            Event::Resize(cols, rows) => Self::Resize(cols, rows),
            Event::FocusGained => Self::FocusGained,
            Event::FocusLost => Self::FocusLost,
            Event::Paste(text) => Self::Paste(text),
        }
    }
}

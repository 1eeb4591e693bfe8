//! Built-in subscription sources.
//!
//! Currently a single source: terminal events ([`terminal_events`],
//! [`TerminalEvents`]): keyboard, mouse, resize, focus, and paste events
//! from the terminal.

mod terminal;

pub use terminal::*;

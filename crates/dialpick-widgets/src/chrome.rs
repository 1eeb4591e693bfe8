//! Shared chrome for picker screens.

use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, BorderType};

/// A titled border whose frame tracks focus.
///
/// Focused widgets get a rounded cyan frame; everything else sits in a plain
/// dark gray one.
pub fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let (color, kind) = if focused {
        (Color::Cyan, BorderType::Rounded)
    } else {
        (Color::DarkGray, BorderType::Plain)
    };
    Block::bordered()
        .border_type(kind)
        .border_style(Style::new().fg(color))
        .title(title)
}

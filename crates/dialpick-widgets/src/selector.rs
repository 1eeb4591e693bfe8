//! Searchable country selector: a text input paired with a filterable
//! dropdown of country records.
//!
//! Typing filters the directory by case-insensitive substring match on the
//! country name. Arrow keys move the highlight (wrapping at both ends), Enter
//! accepts the highlighted row, and the mouse can hover and click rows
//! directly. The dropdown is visible while the widget is focused; focus is
//! derived from pointer-down targets: a click on the input row focuses, a
//! click outside the input and the dropdown blurs, and a row click selects
//! and blurs in one step.
//!
//! # Example
//!
//! ```ignore
//! use dialpick_widgets::selector::CountrySelector;
//!
//! let selector = CountrySelector::new()
//!     .with_placeholder("Enter your country")
//!     .with_max_visible(8);
//! ```

use std::cell::Cell;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use dialpick_core::command::Command;
use dialpick_core::component::Component;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::country::{self, Country};
use crate::editor::LineEditor;
use crate::unicode;

/// Whether the selector is accepting keyboard navigation and showing its
/// dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPhase {
    /// Keyboard navigation active, dropdown visible.
    Focused,
    /// Dropdown hidden; only pointer input is observed.
    #[default]
    Blurred,
}

/// Messages for the country selector.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event. Processed only while focused.
    KeyPress(KeyEvent),
    /// A mouse event: hover, clicks, wheel scroll, and the click-outside
    /// observation that drives blur.
    Mouse(MouseEvent),
    /// The query changed.
    Changed(String),
    /// A country was picked (row click or Enter).
    Selected(&'static Country),
    /// The focus phase changed (click inside the input / click outside).
    FocusChanged(FocusPhase),
}

/// Style configuration for the selector.
#[derive(Debug, Clone)]
pub struct CountrySelectorStyle {
    /// Style for the input text.
    pub input: Style,
    /// Style for the placeholder text.
    pub placeholder: Style,
    /// Style for the cursor.
    pub cursor: Style,
    /// Style for unhighlighted dropdown rows.
    pub item: Style,
    /// Style for the highlighted dropdown row.
    pub hovered_item: Style,
    /// Style for the dial code at the end of each row.
    pub dial: Style,
}

impl Default for CountrySelectorStyle {
    fn default() -> Self {
        Self {
            input: Style::default(),
            placeholder: Style::default().fg(Color::DarkGray),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            item: Style::default().fg(Color::White),
            hovered_item: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            dial: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Searchable country dial-code selector component.
pub struct CountrySelector {
    records: &'static [Country],
    editor: LineEditor,
    filtered: Vec<&'static Country>,
    hovered: Option<&'static str>,
    selected: Option<&'static Country>,
    phase: FocusPhase,
    max_visible: usize,
    scroll_offset: usize,
    placeholder: String,
    style: CountrySelectorStyle,
    dropdown_block: Option<Block<'static>>,
    // Geometry of the last render, for pointer hit-testing. The update path
    // tests pointer-down targets against what was actually on screen.
    input_area: Cell<Rect>,
    list_area: Cell<Rect>,
    rows_area: Cell<Rect>,
}

impl Default for CountrySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CountrySelector {
    /// Create a new selector over the built-in directory.
    pub fn new() -> Self {
        Self {
            records: country::ALL,
            editor: LineEditor::new(),
            filtered: country::ALL.iter().collect(),
            hovered: None,
            selected: None,
            phase: FocusPhase::Blurred,
            max_visible: 8,
            scroll_offset: 0,
            placeholder: "Enter your country".to_string(),
            style: CountrySelectorStyle::default(),
            dropdown_block: None,
            input_area: Cell::new(Rect::ZERO),
            list_area: Cell::new(Rect::ZERO),
            rows_area: Cell::new(Rect::ZERO),
        }
    }

    /// Use a custom record list instead of the built-in directory.
    pub fn with_records(mut self, records: &'static [Country]) -> Self {
        self.records = records;
        self.filtered = records.iter().collect();
        self.hovered = None;
        self.selected = None;
        self.scroll_offset = 0;
        self
    }

    /// Set the maximum number of visible dropdown rows.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.max_visible = max.max(1);
        self
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: CountrySelectorStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the block (border/title container) for the dropdown.
    pub fn with_dropdown_block(mut self, block: Block<'static>) -> Self {
        self.dropdown_block = Some(block);
        self
    }

    /// The raw input text, exactly as typed.
    pub fn value(&self) -> String {
        self.editor.text()
    }

    /// The query used for matching: the trimmed input text.
    pub fn query(&self) -> String {
        self.editor.text().trim().to_string()
    }

    /// Current focus phase.
    pub fn phase(&self) -> FocusPhase {
        self.phase
    }

    /// The record last explicitly chosen, if any.
    pub fn selected(&self) -> Option<&'static Country> {
        self.selected
    }

    /// ISO code of the currently highlighted row, if any.
    pub fn hovered_code(&self) -> Option<&'static str> {
        self.hovered
    }

    /// The records currently matching the query, in directory order.
    pub fn filtered_records(&self) -> &[&'static Country] {
        &self.filtered
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match (key.code, key.modifiers) {
            (KeyCode::Up, _) => {
                self.step_hover(-1);
                Command::none()
            }
            (KeyCode::Down, _) => {
                self.step_hover(1);
                Command::none()
            }
            (KeyCode::Enter, _) => {
                // No highlighted row (or a stale one): explicitly a no-op.
                let hit = self
                    .hovered
                    .and_then(|code| self.filtered.iter().copied().find(|c| c.iso_code == code));
                match hit {
                    Some(record) => self.select_record(record),
                    None => Command::none(),
                }
            }
            (KeyCode::Backspace, _) => {
                if self.editor.backspace() {
                    self.query_edited()
                } else {
                    Command::none()
                }
            }
            (KeyCode::Delete, _) => {
                if self.editor.delete() {
                    self.query_edited()
                } else {
                    Command::none()
                }
            }
            (KeyCode::Left, _) => {
                self.editor.left();
                Command::none()
            }
            (KeyCode::Right, _) => {
                self.editor.right();
                Command::none()
            }
            (KeyCode::Home, _) => {
                self.editor.home();
                Command::none()
            }
            (KeyCode::End, _) => {
                self.editor.end();
                Command::none()
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.editor.insert(c);
                self.query_edited()
            }
            _ => Command::none(),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Command<Message> {
        let position = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved => {
                if let Some(record) = self.row_at(position) {
                    self.hovered = Some(record.iso_code);
                }
                Command::none()
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if self.input_area.get().contains(position) {
                    self.transition(FocusPhase::Focused)
                } else if let Some(record) = self.row_at(position) {
                    self.select_record(record)
                } else if self.list_area.get().contains(position) {
                    // Inside the dropdown chrome but not on a row: keep focus.
                    Command::none()
                } else {
                    self.transition(FocusPhase::Blurred)
                }
            }
            MouseEventKind::ScrollDown => {
                if self.list_area.get().contains(position) {
                    self.scroll_rows(1);
                }
                Command::none()
            }
            MouseEventKind::ScrollUp => {
                if self.list_area.get().contains(position) {
                    self.scroll_rows(-1);
                }
                Command::none()
            }
            _ => Command::none(),
        }
    }

    /// Re-filter and report after the edit buffer changed.
    fn query_edited(&mut self) -> Command<Message> {
        let query = self.query();
        self.refilter(&query);
        if query.is_empty() {
            self.hovered = None;
        }
        self.clamp_scroll();
        Command::message(Message::Changed(query))
    }

    /// Recompute `filtered` by case-insensitive substring match on the name,
    /// preserving directory order.
    fn refilter(&mut self, query: &str) {
        let needle = query.to_lowercase();
        self.filtered = self
            .records
            .iter()
            .filter(|c| c.name.to_lowercase().contains(&needle))
            .collect();
        // The highlight must always reference a row that is actually in the
        // filtered list.
        if let Some(code) = self.hovered {
            if !self.filtered.iter().any(|c| c.iso_code == code) {
                self.hovered = None;
            }
        }
    }

    /// Move the highlight by `step` rows, wrapping at both ends. With no
    /// current highlight, Down starts at the first row and Up at the last.
    fn step_hover(&mut self, step: isize) {
        if self.filtered.is_empty() {
            return;
        }
        let len = self.filtered.len();
        let current = self
            .hovered
            .and_then(|code| self.filtered.iter().position(|c| c.iso_code == code));
        let next = match (current, step) {
            (None, s) if s > 0 => 0,
            (None, _) => len - 1,
            (Some(i), s) if s > 0 => {
                if i + 1 >= len {
                    0
                } else {
                    i + 1
                }
            }
            (Some(i), _) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
        };
        self.hovered = Some(self.filtered[next].iso_code);
        self.center_hover(next);
    }

    /// Scroll the highlighted row into view, centered, iff it is outside the
    /// current viewport.
    fn center_hover(&mut self, index: usize) {
        if index < self.scroll_offset || index >= self.scroll_offset + self.max_visible {
            let max_offset = self.filtered.len().saturating_sub(self.max_visible);
            self.scroll_offset = index.saturating_sub(self.max_visible / 2).min(max_offset);
        }
    }

    fn clamp_scroll(&mut self) {
        let max_offset = self.filtered.len().saturating_sub(self.max_visible);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }

    fn scroll_rows(&mut self, step: isize) {
        let max_offset = self.filtered.len().saturating_sub(self.max_visible);
        self.scroll_offset = self
            .scroll_offset
            .saturating_add_signed(step)
            .min(max_offset);
    }

    /// Record an explicit choice: take the record's name as the query,
    /// re-filter against it, and leave the widget blurred.
    fn select_record(&mut self, record: &'static Country) -> Command<Message> {
        self.selected = Some(record);
        self.editor.set_text(record.name);
        let query = self.query();
        self.refilter(&query);
        self.hovered = Some(record.iso_code);
        self.phase = FocusPhase::Blurred;
        self.scroll_offset = 0;
        Command::message(Message::Selected(record))
    }

    /// Apply a pointer-derived focus transition. Same-phase observations are
    /// not transitions and produce no message.
    fn transition(&mut self, phase: FocusPhase) -> Command<Message> {
        if self.phase == phase {
            return Command::none();
        }
        self.phase = phase;
        match phase {
            FocusPhase::Focused => {
                let query = self.query();
                self.refilter(&query);
                self.clamp_scroll();
            }
            FocusPhase::Blurred => {
                self.filtered = self.records.iter().collect();
                self.hovered = self.selected.map(|c| c.iso_code);
                self.scroll_offset = 0;
            }
        }
        Command::message(Message::FocusChanged(phase))
    }

    /// The record under `position`, based on the geometry of the last render.
    fn row_at(&self, position: Position) -> Option<&'static Country> {
        if self.phase != FocusPhase::Focused {
            return None;
        }
        let rows = self.rows_area.get();
        if !rows.contains(position) {
            return None;
        }
        let index = (position.y - rows.y) as usize + self.scroll_offset;
        self.filtered.get(index).copied()
    }
}

impl Component for CountrySelector {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if self.phase != FocusPhase::Focused {
                    return Command::none();
                }
                self.handle_key(key)
            }
            Message::Mouse(mouse) => self.handle_mouse(mouse),
            Message::Changed(_) | Message::Selected(_) | Message::FocusChanged(_) => {
                Command::none()
            }
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            self.input_area.set(Rect::ZERO);
            self.list_area.set(Rect::ZERO);
            self.rows_area.set(Rect::ZERO);
            return;
        }

        let focused = self.phase == FocusPhase::Focused;

        // Input line (first row of area)
        let input_area = Rect { height: 1, ..area };
        self.input_area.set(input_area);

        let chars = self.editor.chars();
        let cursor = self.editor.cursor();
        let mut spans = Vec::new();
        if chars.is_empty() {
            if focused {
                spans.push(Span::styled(" ", self.style.cursor));
            } else if !self.placeholder.is_empty() {
                spans.push(Span::styled(
                    self.placeholder.clone(),
                    self.style.placeholder,
                ));
            }
        } else {
            let before: String = chars[..cursor].iter().collect();
            if !before.is_empty() {
                spans.push(Span::styled(before, self.style.input));
            }
            if !focused {
                let after: String = chars[cursor..].iter().collect();
                if !after.is_empty() {
                    spans.push(Span::styled(after, self.style.input));
                }
            } else if cursor < chars.len() {
                let cursor_char: String = chars[cursor..cursor + 1].iter().collect();
                spans.push(Span::styled(cursor_char, self.style.cursor));
                let after: String = chars[cursor + 1..].iter().collect();
                if !after.is_empty() {
                    spans.push(Span::styled(after, self.style.input));
                }
            } else {
                spans.push(Span::styled(" ", self.style.cursor));
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), input_area);

        // Dropdown (below the input), visible iff focused
        if !focused || area.height <= 1 {
            self.list_area.set(Rect::ZERO);
            self.rows_area.set(Rect::ZERO);
            return;
        }

        let visible_count = self.filtered.len().min(self.max_visible);
        let list_height = if self.dropdown_block.is_some() {
            (visible_count as u16 + 2).min(area.height - 1) // +2 for borders
        } else {
            (visible_count as u16).min(area.height - 1)
        };
        let list_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: list_height,
        };
        self.list_area.set(list_area);

        frame.render_widget(Clear, list_area);

        let inner = if let Some(ref block) = self.dropdown_block {
            let inner = block.inner(list_area);
            frame.render_widget(block.clone(), list_area);
            inner
        } else {
            list_area
        };
        self.rows_area.set(inner);

        let end = (self.scroll_offset + self.max_visible).min(self.filtered.len());
        for (i, index) in (self.scroll_offset..end).enumerate() {
            if i as u16 >= inner.height {
                break;
            }
            let row_area = Rect {
                x: inner.x,
                y: inner.y + i as u16,
                width: inner.width,
                height: 1,
            };
            let record = self.filtered[index];
            let is_hovered = self.hovered == Some(record.iso_code);
            let style = if is_hovered {
                self.style.hovered_item
            } else {
                self.style.item
            };
            let marker = if is_hovered { "▸ " } else { "  " };

            let dial = record.dial_code;
            let label = format!("{marker}{} {}", record.flag(), record.name);
            let label_width = (row_area.width as usize)
                .saturating_sub(unicode::display_width(dial) + 1);
            let label = unicode::truncate(&label, label_width, "…");

            let line = Line::from(vec![
                Span::styled(label, style),
                Span::raw(" "),
                Span::styled(dial, self.style.dial),
            ]);
            frame.render_widget(Paragraph::new(line), row_area);
        }
    }

    fn focused(&self) -> bool {
        self.phase == FocusPhase::Focused
    }
}

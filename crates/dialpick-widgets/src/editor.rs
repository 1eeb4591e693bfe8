//! Single-line edit buffer backing the selector's query field.
//!
//! The buffer is a `Vec<char>` with a char-index cursor, which keeps cursor
//! arithmetic trivial and safe for multibyte names like "Curaçao".

/// Editable single line of text with a cursor.
#[derive(Default)]
pub struct LineEditor {
    buf: Vec<char>,
    cursor: usize,
}

impl LineEditor {
    /// An empty buffer with the cursor at the start.
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffer contents as a `String`.
    pub fn text(&self) -> String {
        self.buf.iter().collect()
    }

    /// Replace the contents and put the cursor after the last character.
    pub fn set_text(&mut self, text: &str) {
        self.buf = text.chars().collect();
        self.cursor = self.buf.len();
    }

    /// The raw character buffer.
    pub fn chars(&self) -> &[char] {
        &self.buf
    }

    /// Cursor position as a char index, `0..=len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the buffer holds no characters.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Insert `c` at the cursor and move past it.
    pub fn insert(&mut self, c: char) {
        self.buf.insert(self.cursor, c);
        self.cursor += 1;
    }

    /// Remove the character before the cursor. Returns whether anything was
    /// removed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.buf.remove(self.cursor);
        true
    }

    /// Remove the character under the cursor. Returns whether anything was
    /// removed.
    pub fn delete(&mut self) -> bool {
        if self.cursor == self.buf.len() {
            return false;
        }
        self.buf.remove(self.cursor);
        true
    }

    /// Step the cursor one character left, stopping at the start.
    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Step the cursor one character right, stopping at the end.
    pub fn right(&mut self) {
        if self.cursor < self.buf.len() {
            self.cursor += 1;
        }
    }

    /// Jump the cursor to the start.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Jump the cursor past the last character.
    pub fn end(&mut self) {
        self.cursor = self.buf.len();
    }

    /// Drop all content and return the cursor to the start.
    pub fn clear(&mut self) {
        self.buf.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_with(text: &str) -> LineEditor {
        let mut editor = LineEditor::new();
        editor.set_text(text);
        editor
    }

    #[test]
    fn starts_empty() {
        let editor = LineEditor::new();
        assert!(editor.is_empty());
        assert_eq!((editor.len(), editor.cursor()), (0, 0));
        assert_eq!(editor.text(), "");
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut editor = LineEditor::new();
        editor.insert('g');
        editor.insert('r');
        assert_eq!(editor.text(), "gr");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn inserting_mid_buffer() {
        let mut editor = editor_with("gc");
        editor.left();
        editor.insert('r');
        assert_eq!(editor.text(), "grc");
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut editor = editor_with("de");
        assert!(editor.backspace());
        assert_eq!(editor.text(), "d");
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn backspace_at_start_reports_false() {
        let mut editor = editor_with("d");
        editor.home();
        assert!(!editor.backspace());
        assert_eq!(editor.text(), "d");
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut editor = editor_with("de");
        editor.home();
        assert!(editor.delete());
        assert_eq!(editor.text(), "e");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn delete_at_end_reports_false() {
        let mut editor = editor_with("d");
        assert!(!editor.delete());
        assert_eq!(editor.text(), "d");
    }

    #[test]
    fn cursor_stops_at_both_ends() {
        let mut editor = editor_with("abc");
        editor.right();
        assert_eq!(editor.cursor(), 3);

        editor.home();
        editor.left();
        assert_eq!(editor.cursor(), 0);

        editor.end();
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn multibyte_names_edit_by_character() {
        let mut editor = LineEditor::new();
        for c in "Curaçao".chars() {
            editor.insert(c);
        }
        assert_eq!(editor.cursor(), 7);

        editor.backspace();
        editor.backspace();
        editor.backspace();
        assert_eq!(editor.text(), "Cura");
    }

    #[test]
    fn set_text_parks_cursor_at_end() {
        let editor = editor_with("Greece");
        assert_eq!(editor.cursor(), 6);
        assert_eq!(editor.text(), "Greece");
    }

    #[test]
    fn clear_resets_buffer_and_cursor() {
        let mut editor = editor_with("Greece");
        editor.clear();
        assert!(editor.is_empty());
        assert_eq!(editor.cursor(), 0);
    }
}

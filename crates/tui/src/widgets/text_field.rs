//! Single-line text input.
//!
//! Holds the edit buffer and cursor of the focused text field. The cursor is
//! a character index, so multi-byte input edits correctly.

use crate::event::EventStatus;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Edit buffer for one text field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    /// Current input text
    input: String,
    /// Cursor position, in characters
    cursor_pos: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current input text.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Cursor position in characters from the start of the input.
    pub fn cursor(&self) -> usize {
        self.cursor_pos
    }

    /// Replace the buffer, placing the cursor at the end.
    pub fn set_value(&mut self, value: &str) {
        self.input = value.to_string();
        self.cursor_pos = self.char_count();
    }

    /// Insert a character at the cursor position.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index();
        self.input.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Insert pasted text at the cursor position. Line breaks are dropped.
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor (backspace).
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            self.cursor_pos -= 1;
            let at = self.byte_index();
            self.input.remove(at);
        }
    }

    /// Delete the character under the cursor (delete).
    pub fn delete_forward(&mut self) {
        if self.cursor_pos < self.char_count() {
            let at = self.byte_index();
            self.input.remove(at);
        }
    }

    /// Clear all input.
    pub fn clear(&mut self) {
        self.input.clear();
        self.cursor_pos = 0;
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.char_count() {
            self.cursor_pos += 1;
        }
    }

    /// Apply an editing key.
    ///
    /// Returns `NotConsumed` for keys that are not edits, including any
    /// key chord with Control or Alt held.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> EventStatus {
        if key_event
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return EventStatus::NotConsumed;
        }

        match key_event.code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_pos = 0,
            KeyCode::End => self.cursor_pos = self.char_count(),
            _ => return EventStatus::NotConsumed,
        }
        EventStatus::Consumed
    }

    fn char_count(&self) -> usize {
        self.input.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_pos)
            .map_or(self.input.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_text(field: &mut TextField, text: &str) {
        for c in text.chars() {
            field.insert_char(c);
        }
    }

    #[test]
    fn test_new_field_is_empty() {
        let field = TextField::new();
        assert_eq!(field.input(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_backspace_removes_character() {
        let mut field = TextField::new();
        type_text(&mut field, "abc");

        field.delete_char();
        assert_eq!(field.input(), "ab");

        field.delete_char();
        field.delete_char();
        assert_eq!(field.input(), "");

        // Nothing left to delete
        field.delete_char();
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_insert_in_the_middle() {
        let mut field = TextField::new();
        type_text(&mut field, "Aa");
        field.move_cursor_left();
        field.insert_char('s');

        assert_eq!(field.input(), "Asa");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::new();
        type_text(&mut field, "Zoë");
        field.move_cursor_left();
        field.delete_char();

        assert_eq!(field.input(), "Zë");
        field.move_cursor_right();
        field.insert_char('!');
        assert_eq!(field.input(), "Zë!");
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut field = TextField::new();
        field.set_value("Chennai");
        assert_eq!(field.cursor(), 7);

        field.clear();
        assert_eq!(field.input(), "");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn test_paste_drops_line_breaks() {
        let mut field = TextField::new();
        field.insert_str("98765\n43210");
        assert_eq!(field.input(), "9876543210");
    }

    #[test]
    fn test_handle_key_event() {
        let mut field = TextField::new();

        assert_eq!(
            field.handle_key_event(KeyEvent::from(KeyCode::Char('x'))),
            EventStatus::Consumed
        );
        assert_eq!(
            field.handle_key_event(KeyEvent::from(KeyCode::Home)),
            EventStatus::Consumed
        );
        assert_eq!(
            field.handle_key_event(KeyEvent::from(KeyCode::Delete)),
            EventStatus::Consumed
        );
        assert_eq!(field.input(), "");

        assert_eq!(
            field.handle_key_event(KeyEvent::from(KeyCode::Enter)),
            EventStatus::NotConsumed
        );
        assert_eq!(
            field.handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)),
            EventStatus::NotConsumed
        );
        assert_eq!(field.input(), "");
    }
}

//! Application-level state.

use super::Notification;

/// Input mode for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keystrokes edit the ticker input.
    #[default]
    Editing,
    /// Keystrokes navigate the result panel.
    Normal,
}

/// Global application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current input mode.
    pub input_mode: InputMode,
    /// Whether to show help overlay.
    pub show_help: bool,
    /// Current notification.
    pub notification: Option<Notification>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Ticker list being typed.
    pub input_buffer: String,
    /// Cursor position in input buffer, in characters.
    pub cursor_position: usize,
    /// Endpoint shown in the status bar.
    pub endpoint: String,
}

impl AppState {
    /// Create a new application state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if keystrokes go to the ticker input.
    pub fn is_editing(&self) -> bool {
        self.input_mode == InputMode::Editing
    }

    /// Clear the input buffer.
    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    /// Add a character to the input buffer.
    pub fn push_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input_buffer.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Remove the character before the cursor.
    pub fn pop_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index();
            self.input_buffer.remove(idx);
        }
    }

    /// Remove the character under the cursor.
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.input_len() {
            let idx = self.byte_index();
            self.input_buffer.remove(idx);
        }
    }

    /// Move cursor left.
    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right.
    pub fn cursor_right(&mut self) {
        if self.cursor_position < self.input_len() {
            self.cursor_position += 1;
        }
    }

    /// Move cursor to the start of the input.
    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to the end of the input.
    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_len();
    }

    fn input_len(&self) -> usize {
        self.input_buffer.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.input_buffer
            .char_indices()
            .nth(self.cursor_position)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing() {
        let mut state = AppState::new();
        for c in "AAPL".chars() {
            state.push_char(c);
        }
        assert_eq!(state.input_buffer, "AAPL");
        assert_eq!(state.cursor_position, 4);

        state.cursor_left();
        state.cursor_left();
        state.push_char(',');
        assert_eq!(state.input_buffer, "AA,PL");

        state.pop_char();
        assert_eq!(state.input_buffer, "AAPL");
        assert_eq!(state.cursor_position, 2);

        state.delete_char();
        assert_eq!(state.input_buffer, "AAL");

        state.cursor_end();
        state.delete_char();
        assert_eq!(state.input_buffer, "AAL");
        state.cursor_right();
        assert_eq!(state.cursor_position, 3);

        state.cursor_home();
        state.pop_char();
        assert_eq!(state.input_buffer, "AAL");

        state.clear_input();
        assert!(state.input_buffer.is_empty());
        assert_eq!(state.cursor_position, 0);
    }

    #[test]
    fn test_multibyte_input() {
        let mut state = AppState::new();
        state.push_char('é');
        state.push_char('A');
        state.cursor_left();
        state.pop_char();
        assert_eq!(state.input_buffer, "A");
    }
}

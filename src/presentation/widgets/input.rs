//! Text input widget.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const MASK_CHAR: char = '•';

/// Automatic capitalisation applied while typing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AutoCapitalize {
    /// Leave input as typed.
    #[default]
    None,
    /// Uppercase the first letter of each sentence.
    Sentences,
    /// Uppercase the first letter of each word.
    Words,
    /// Uppercase everything.
    Characters,
}

/// Editable single-line text. The cursor is a char index, not a byte index.
#[derive(Debug, Clone)]
pub struct TextInput {
    value: String,
    cursor: usize,
    masked: bool,
    placeholder: String,
    auto_capitalize: AutoCapitalize,
}

impl TextInput {
    /// Creates empty input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            masked: false,
            placeholder: String::new(),
            auto_capitalize: AutoCapitalize::None,
        }
    }

    /// Enables password masking.
    #[must_use]
    pub fn password(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Sets placeholder text.
    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Sets capitalisation mode.
    #[must_use]
    pub const fn auto_capitalize(mut self, mode: AutoCapitalize) -> Self {
        self.auto_capitalize = mode;
        self
    }

    /// Switches masking on or off. The value is untouched.
    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// Returns current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the cursor position in chars.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Sets value and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_count();
    }

    /// Inserts character at cursor.
    pub fn input_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        if self.should_capitalize(at) {
            let upper: String = c.to_uppercase().collect();
            self.value.insert_str(at, &upper);
            self.cursor += upper.chars().count();
        } else {
            self.value.insert(at, c);
            self.cursor += 1;
        }
    }

    /// Deletes character before cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes character at cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Applies an editing key. Returns whether the value changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let before = self.value.len();
        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input_char(c);
                return true;
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            _ => {}
        }
        self.value.len() != before
    }

    /// Text to draw: placeholder, mask or value.
    #[must_use]
    pub fn display_text(&self) -> String {
        if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            MASK_CHAR.to_string().repeat(self.char_count())
        } else {
            self.value.clone()
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn should_capitalize(&self, at: usize) -> bool {
        let before = &self.value[..at];
        match self.auto_capitalize {
            AutoCapitalize::None => false,
            AutoCapitalize::Characters => true,
            AutoCapitalize::Words => before.chars().last().is_none_or(char::is_whitespace),
            AutoCapitalize::Sentences => {
                let trimmed = before.trim_end();
                trimmed.is_empty()
                    || (trimmed.ends_with(['.', '!', '?']) && trimmed.len() < before.len())
            }
        }
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

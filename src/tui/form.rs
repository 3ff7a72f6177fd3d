use crate::util::unicode;

/// Single-line text input state: the value plus a byte-offset cursor.
/// The cursor always sits on a grapheme boundary.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    pub value: String,
    pub cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        TextField::default()
    }

    pub fn with_value(value: &str) -> Self {
        TextField {
            value: value.to_string(),
            cursor: value.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the content and put the cursor at the end.
    pub fn set(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the grapheme before the cursor.
    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.value, self.cursor) {
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the grapheme under the cursor.
    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.value, self.cursor) {
            self.value.replace_range(self.cursor..next, "");
        }
    }

    pub fn left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.value, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.value, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn word_left(&mut self) {
        self.cursor = unicode::word_boundary_left(&self.value, self.cursor);
    }

    pub fn word_right(&mut self) {
        self.cursor = unicode::word_boundary_right(&self.value, self.cursor);
    }
}

//! Line-addressed document storage.
//!
//! Text lives in a [`Rope`], which gives O(log N) line access and editing.
//! Content is stored LF-normalized, on load and on every edit, so line
//! classification never sees a CRLF.

use ropey::Rope;
use std::borrow::Cow;

/// Shape of a completed edit, in whole lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentEdit {
    /// First line the edit touched.
    pub first_line: usize,
    /// How many lines the touched region covered before the edit.
    pub old_line_count: usize,
    /// How many lines the region covers after the edit.
    pub new_line_count: usize,
}

/// An editable text document addressed by line.
///
/// All offsets are character offsets; columns are characters within a line.
/// Out-of-range offsets clamp to the document end rather than panic.
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a document from text, normalizing CRLF line endings to LF.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(&normalized(text)),
        }
    }

    /// Full text with LF line endings.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total line count. An empty document has one line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Text of the given line without its trailing newline.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let mut text = self.rope.line(line).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }
        Some(text)
    }

    /// Line and column of a character offset.
    pub fn position_of(&self, char_offset: usize) -> (usize, usize) {
        let char_offset = char_offset.min(self.rope.len_chars());
        let line = self.rope.char_to_line(char_offset);
        let line_start = self.rope.line_to_char(line);
        (line, char_offset - line_start)
    }

    /// Character offset of a line and column, clamped to the line end.
    pub fn offset_of(&self, line: usize, column: usize) -> usize {
        if line >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        let line_start = self.rope.line_to_char(line);
        let line_len = if line + 1 < self.rope.len_lines() {
            self.rope.line_to_char(line + 1) - line_start - 1
        } else {
            self.rope.len_chars() - line_start
        };
        line_start + column.min(line_len)
    }

    /// Insert text at a character offset.
    pub fn insert(&mut self, char_offset: usize, text: &str) -> DocumentEdit {
        self.replace(char_offset, 0, text)
    }

    /// Remove `len` characters starting at a character offset.
    pub fn remove(&mut self, char_offset: usize, len: usize) -> DocumentEdit {
        self.replace(char_offset, len, "")
    }

    /// Replace `len` characters starting at a character offset with new text.
    pub fn replace(&mut self, char_offset: usize, len: usize, text: &str) -> DocumentEdit {
        let start = char_offset.min(self.rope.len_chars());
        let end = start.saturating_add(len).min(self.rope.len_chars());
        let first_line = self.rope.char_to_line(start);
        let last_line = self.rope.char_to_line(end);

        self.rope.remove(start..end);
        let text = normalized(text);
        self.rope.insert(start, &text);

        DocumentEdit {
            first_line,
            old_line_count: last_line - first_line + 1,
            new_line_count: 1 + text.matches('\n').count(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

fn normalized(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

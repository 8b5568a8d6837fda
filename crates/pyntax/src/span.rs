//! Classified spans over a single line.
//!
//! All public offsets are **character offsets** (Unicode scalar values), not
//! byte offsets, and all ranges are half-open `[start, end)`.

use crate::category::Category;

/// A half-open character range within one line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Inclusive start character offset.
    pub start: usize,
    /// Exclusive end character offset.
    pub end: usize,
}

impl Span {
    /// Create a new span with `[start, end)` character offsets.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` if the span covers no characters.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Returns `true` if the span contains the character position.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// Returns `true` if two spans share at least one character position.
    pub fn overlaps(&self, other: Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A span paired with the category the classifier assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpan {
    /// The classified character range.
    pub span: Span,
    /// The category assigned to the range.
    pub category: Category,
}

impl CategorySpan {
    /// Create a categorized span from `[start, end)` character offsets.
    pub fn new(start: usize, end: usize, category: Category) -> Self {
        Self {
            span: Span::new(start, end),
            category,
        }
    }
}

/// Byte offset to character offset mapping for one line of text.
///
/// Classification runs regexes in byte space; output spans are character
/// offsets. This table makes the conversion exact for non-ASCII lines.
#[derive(Debug)]
pub(crate) struct CharMap {
    char_to_byte: Vec<usize>,
    text_len: usize,
}

impl CharMap {
    pub(crate) fn new(text: &str) -> Self {
        let mut char_to_byte: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        char_to_byte.push(text.len());
        Self {
            char_to_byte,
            text_len: text.len(),
        }
    }

    pub(crate) fn byte_to_char(&self, byte_offset: usize) -> usize {
        let clamped = byte_offset.min(self.text_len);
        match self.char_to_byte.binary_search(&clamped) {
            Ok(idx) => idx,
            Err(idx) => idx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 10);
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
    }

    #[test]
    fn test_span_overlaps() {
        let span = Span::new(5, 10);
        assert!(span.overlaps(Span::new(9, 12)));
        assert!(span.overlaps(Span::new(0, 6)));
        assert!(span.overlaps(Span::new(6, 8)));
        assert!(!span.overlaps(Span::new(10, 12)));
        assert!(!span.overlaps(Span::new(0, 5)));
    }

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(3, 7).len(), 4);
        assert_eq!(Span::new(7, 7).len(), 0);
        assert!(Span::new(7, 7).is_empty());
        assert!(!Span::new(3, 7).is_empty());
    }

    #[test]
    fn test_char_map_ascii() {
        let map = CharMap::new("hello");
        assert_eq!(map.byte_to_char(0), 0);
        assert_eq!(map.byte_to_char(3), 3);
        assert_eq!(map.byte_to_char(5), 5);
    }

    #[test]
    fn test_char_map_multibyte() {
        // "你好x" is 3 chars, 7 bytes (3 + 3 + 1).
        let map = CharMap::new("你好x");
        assert_eq!(map.byte_to_char(0), 0);
        assert_eq!(map.byte_to_char(3), 1);
        assert_eq!(map.byte_to_char(6), 2);
        assert_eq!(map.byte_to_char(7), 3);
        // Beyond-end offsets clamp to the final character position.
        assert_eq!(map.byte_to_char(100), 3);
    }
}

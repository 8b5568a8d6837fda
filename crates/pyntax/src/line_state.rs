//! Highlight state carried between consecutive lines.
//!
//! A triple-quoted literal left open on one line changes how every
//! following line must be read. [`LineState`] is that single piece of
//! carry-over: produced when classifying line `i`, consumed when
//! classifying line `i + 1`. The classifier never stores it; the caller
//! caches one value per line (see [`crate::HighlightEngine`]).

/// The flavor of a triple-quote delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TripleQuote {
    /// `'''`
    Single,
    /// `"""`
    Double,
}

impl TripleQuote {
    /// The three-character delimiter text.
    pub const fn delimiter(self) -> &'static str {
        match self {
            TripleQuote::Single => "'''",
            TripleQuote::Double => "\"\"\"",
        }
    }
}

/// Highlight state carried from one line to the next.
///
/// A document's first line is classified with `LineState::default()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineState {
    /// Outside any multi-line literal.
    #[default]
    Outside,
    /// Inside an unterminated triple-quoted literal opened with this
    /// delimiter.
    InsideTripleQuote(TripleQuote),
}

impl LineState {
    /// Returns `true` if the next line starts inside an unterminated
    /// triple-quoted literal.
    pub fn is_inside_string(&self) -> bool {
        matches!(self, LineState::InsideTripleQuote(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_outside() {
        assert_eq!(LineState::default(), LineState::Outside);
        assert!(!LineState::default().is_inside_string());
    }

    #[test]
    fn test_delimiters() {
        assert_eq!(TripleQuote::Single.delimiter(), "'''");
        assert_eq!(TripleQuote::Double.delimiter(), "\"\"\"");
    }

    #[test]
    fn test_inside_states_are_distinct() {
        let single = LineState::InsideTripleQuote(TripleQuote::Single);
        let double = LineState::InsideTripleQuote(TripleQuote::Double);
        assert!(single.is_inside_string());
        assert!(double.is_inside_string());
        assert_ne!(single, double);
    }
}

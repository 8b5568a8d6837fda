//! Incremental highlighting over a document.
//!
//! The engine caches one span list and one end state per line. After an edit
//! it reclassifies only the edited lines, then keeps cascading downward while
//! a line's end state differs from what was cached, since only a changed end
//! state can affect the line below. A reopened or removed triple quote is the
//! case that makes the cascade run far; a plain in-line edit stops after one
//! line.

use crate::classifier::{LineClassifier, PythonClassifier, classify};
use crate::document::{Document, DocumentEdit};
use crate::line_state::LineState;
use crate::span::CategorySpan;

/// Fresh classification for one line, reported by [`HighlightEngine::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineUpdate {
    /// Line the update applies to.
    pub line: usize,
    /// New spans for the line.
    pub spans: Vec<CategorySpan>,
    /// State the line hands to the next one.
    pub end_state: LineState,
}

/// Per-line cache that keeps highlighting in sync with an edited document.
pub struct HighlightEngine<C = PythonClassifier> {
    classifier: C,
    states: Vec<LineState>,
    spans: Vec<Option<Vec<CategorySpan>>>,
    dirty: Option<(usize, usize)>,
}

impl HighlightEngine {
    /// Create an engine using the built-in Python classifier.
    pub fn new() -> Self {
        Self::with_classifier(PythonClassifier::new())
    }
}

impl Default for HighlightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: LineClassifier> HighlightEngine<C> {
    /// Create an engine using a custom classifier.
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            states: Vec::new(),
            spans: Vec::new(),
            dirty: Some((0, usize::MAX)),
        }
    }

    /// Record an edit so the next [`refresh`](Self::refresh) reclassifies the
    /// lines it touched.
    pub fn apply_edit(&mut self, edit: &DocumentEdit) {
        let first = edit.first_line.min(self.states.len());
        let old_end = (edit.first_line + edit.old_line_count).min(self.states.len());
        // The replaced region's exit state is what seeded the lines below it.
        // Keeping it in the placeholder slots lets refresh detect whether the
        // edit changed what flows past the region.
        let old_exit = if old_end > first {
            self.states[old_end - 1]
        } else {
            LineState::Outside
        };

        self.states.splice(
            first..old_end,
            std::iter::repeat(old_exit).take(edit.new_line_count),
        );
        self.spans.splice(
            first..old_end,
            std::iter::repeat_with(|| None).take(edit.new_line_count),
        );

        let delta = edit.new_line_count as isize - edit.old_line_count as isize;
        let edited_to = first + edit.new_line_count.saturating_sub(1);
        self.dirty = match self.dirty {
            None => Some((first, edited_to)),
            Some((from, to)) => {
                // An older dirty range below the edit shifts with the lines.
                let from = if from > first { shift_line(from, delta) } else { from };
                let to = if to >= first { shift_line(to, delta) } else { to };
                Some((from.min(first), to.max(edited_to)))
            }
        };
    }

    /// Mark one line for reclassification.
    pub fn invalidate_line(&mut self, line: usize) {
        self.mark_dirty(line, line);
    }

    /// Mark every line from `line` to the end for reclassification.
    pub fn invalidate_from(&mut self, line: usize) {
        self.mark_dirty(line, usize::MAX);
    }

    /// Throw the whole cache away.
    pub fn invalidate_all(&mut self) {
        self.dirty = Some((0, usize::MAX));
        self.spans.fill_with(|| None);
    }

    /// Whether a refresh would do any work.
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }

    /// Reclassify dirty lines and report every line whose spans changed.
    ///
    /// Reclassification starts at the first dirty line, seeded with the state
    /// cached for the line above, and continues past the dirty range while
    /// end states keep changing.
    pub fn refresh(&mut self, document: &Document) -> Vec<LineUpdate> {
        self.sync_len(document.line_count());
        let Some((from, to)) = self.dirty.take() else {
            return Vec::new();
        };

        let line_count = self.states.len();
        let last = line_count.saturating_sub(1);
        let from = from.min(last);
        let to = to.min(last);

        let mut updates = Vec::new();
        let mut state = if from == 0 {
            LineState::default()
        } else {
            self.states[from - 1]
        };

        for line in from..line_count {
            let text = document.line_text(line).unwrap_or_default();
            let result = self.classifier.classify_line(&text, state);
            let old_state = self.states[line];
            let changed = match &self.spans[line] {
                Some(cached) => *cached != result.spans,
                None => true,
            };

            self.states[line] = result.end_state;
            state = result.end_state;
            if changed {
                self.spans[line] = Some(result.spans.clone());
                updates.push(LineUpdate {
                    line,
                    spans: result.spans,
                    end_state: result.end_state,
                });
            }

            if line >= to && old_state == result.end_state {
                break;
            }
        }

        updates
    }

    /// Cached spans for a line, if it has been classified.
    pub fn line_spans(&self, line: usize) -> Option<&[CategorySpan]> {
        self.spans.get(line).and_then(|spans| spans.as_deref())
    }

    /// Cached end state for a line, if it has been classified.
    pub fn line_state(&self, line: usize) -> Option<LineState> {
        self.states.get(line).copied()
    }

    fn mark_dirty(&mut self, from: usize, to: usize) {
        self.dirty = match self.dirty {
            None => Some((from, to)),
            Some((f, t)) => Some((f.min(from), t.max(to))),
        };
    }

    fn sync_len(&mut self, line_count: usize) {
        if self.states.len() == line_count {
            return;
        }
        let shared = self.states.len().min(line_count);
        self.states.resize(line_count, LineState::Outside);
        self.spans.resize_with(line_count, || None);
        self.mark_dirty(shared.saturating_sub(1), usize::MAX);
    }
}

fn shift_line(line: usize, delta: isize) -> usize {
    if delta >= 0 {
        line.saturating_add(delta as usize)
    } else {
        line.saturating_sub(delta.unsigned_abs())
    }
}

/// Classify every line of a document from top to bottom.
pub fn highlight_all(document: &Document) -> Vec<Vec<CategorySpan>> {
    let mut state = LineState::default();
    (0..document.line_count())
        .map(|line| {
            let text = document.line_text(line).unwrap_or_default();
            let result = classify(&text, state);
            state = result.end_state;
            result.spans
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::line_state::TripleQuote;

    fn updated_lines(updates: &[LineUpdate]) -> Vec<usize> {
        updates.iter().map(|u| u.line).collect()
    }

    #[test]
    fn test_initial_refresh_reports_every_line() {
        let doc = Document::from_text("a = 1\nb = 2\nc = 3");
        let mut engine = HighlightEngine::new();
        let updates = engine.refresh(&doc);
        assert_eq!(updated_lines(&updates), vec![0, 1, 2]);
        assert!(!engine.is_dirty());
    }

    #[test]
    fn test_clean_refresh_reports_nothing() {
        let doc = Document::from_text("a = 1\nb = 2");
        let mut engine = HighlightEngine::new();
        engine.refresh(&doc);
        assert_eq!(engine.refresh(&doc), vec![]);
    }

    #[test]
    fn test_edit_within_line_touches_one_line() {
        let mut doc = Document::from_text("a = 1\nb = 2\nc = 3");
        let mut engine = HighlightEngine::new();
        engine.refresh(&doc);

        let edit = doc.insert(doc.offset_of(1, 4), "0");
        engine.apply_edit(&edit);
        let updates = engine.refresh(&doc);
        assert_eq!(updated_lines(&updates), vec![1]);
    }

    #[test]
    fn test_opening_triple_quote_cascades_to_end() {
        let mut doc = Document::from_text("a = 1\nb = 2\nc = 3");
        let mut engine = HighlightEngine::new();
        engine.refresh(&doc);

        let edit = doc.insert(0, "'''");
        engine.apply_edit(&edit);
        let updates = engine.refresh(&doc);
        assert_eq!(updated_lines(&updates), vec![0, 1, 2]);
        assert_eq!(
            engine.line_state(2),
            Some(LineState::InsideTripleQuote(TripleQuote::Single))
        );
        for line in 1..3 {
            let spans = engine.line_spans(line).unwrap();
            assert!(spans.iter().all(|s| s.category == Category::Docstring));
        }
    }

    #[test]
    fn test_edit_inside_docstring_stops_cascading() {
        let mut doc = Document::from_text("x = '''\naaa\n''' \ny = 1");
        let mut engine = HighlightEngine::new();
        engine.refresh(&doc);

        let edit = doc.insert(doc.offset_of(1, 0), "b");
        engine.apply_edit(&edit);
        let updates = engine.refresh(&doc);
        assert_eq!(updated_lines(&updates), vec![1]);
    }

    #[test]
    fn test_inserted_line_shifts_cache() {
        let mut doc = Document::from_text("a = 1\nb = 2");
        let mut engine = HighlightEngine::new();
        engine.refresh(&doc);

        let edit = doc.insert(0, "\n");
        assert_eq!(edit.new_line_count, 2);
        engine.apply_edit(&edit);
        let updates = engine.refresh(&doc);
        // The untouched line keeps its cache at the shifted position.
        assert_eq!(updated_lines(&updates), vec![0, 1]);
        assert!(engine.line_spans(2).is_some());
    }

    #[test]
    fn test_removing_closing_quote_cascades() {
        let mut doc = Document::from_text("'''\na\n'''\nx = 1");
        let mut engine = HighlightEngine::new();
        engine.refresh(&doc);
        assert_eq!(engine.line_state(3), Some(LineState::Outside));

        // Drop the line holding the closing delimiter.
        let edit = doc.remove(doc.offset_of(1, 1), 4);
        assert_eq!(doc.text(), "'''\na\nx = 1");
        engine.apply_edit(&edit);
        let updates = engine.refresh(&doc);
        assert_eq!(updated_lines(&updates), vec![1, 2]);
        assert_eq!(
            engine.line_state(2),
            Some(LineState::InsideTripleQuote(TripleQuote::Single))
        );
    }

    #[test]
    fn test_invalidate_all_recomputes_every_line() {
        let doc = Document::from_text("a = 1\nb = 2");
        let mut engine = HighlightEngine::new();
        engine.refresh(&doc);

        engine.invalidate_all();
        let updates = engine.refresh(&doc);
        assert_eq!(updated_lines(&updates), vec![0, 1]);
    }

    #[test]
    fn test_invalidate_line_reports_no_change_for_same_text() {
        let doc = Document::from_text("a = 1\nb = 2");
        let mut engine = HighlightEngine::new();
        engine.refresh(&doc);

        engine.invalidate_line(1);
        // The text did not change, so recomputed spans match the cache.
        assert_eq!(engine.refresh(&doc), vec![]);
    }

    #[test]
    fn test_highlight_all_matches_engine_cache() {
        let doc = Document::from_text("def f():\n    '''doc\n    body'''\n    return 1");
        let mut engine = HighlightEngine::new();
        engine.refresh(&doc);

        let all = highlight_all(&doc);
        for (line, spans) in all.iter().enumerate() {
            assert_eq!(engine.line_spans(line), Some(spans.as_slice()));
        }
    }
}

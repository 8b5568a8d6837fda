//! Bracket matching across document lines.

use crate::document::Document;

/// Find the bracket matching the one at `(line, column)`.
///
/// Columns are character offsets within the line. Returns `None` when the
/// position does not hold a bracket or its partner is missing.
pub fn matching_bracket(
    document: &Document,
    line: usize,
    column: usize,
) -> Option<(usize, usize)> {
    matching_bracket_filtered(document, line, column, |_, _| false)
}

/// Like [`matching_bracket`], ignoring positions for which `skip` is true.
///
/// The predicate lets a caller exclude brackets that only appear inside
/// string or comment spans, using cached classification for the lines.
pub fn matching_bracket_filtered<F>(
    document: &Document,
    line: usize,
    column: usize,
    skip: F,
) -> Option<(usize, usize)>
where
    F: Fn(usize, usize) -> bool,
{
    let text = document.line_text(line)?;
    let origin = text.chars().nth(column)?;
    let (other, forward) = counterpart(origin)?;
    if skip(line, column) {
        return None;
    }

    let mut depth = 1usize;
    if forward {
        let mut current = line;
        let mut start_column = column + 1;
        while let Some(text) = document.line_text(current) {
            for (col, ch) in text.chars().enumerate().skip(start_column) {
                if skip(current, col) {
                    continue;
                }
                if ch == origin {
                    depth += 1;
                } else if ch == other {
                    depth -= 1;
                    if depth == 0 {
                        return Some((current, col));
                    }
                }
            }
            current += 1;
            start_column = 0;
        }
        None
    } else {
        let mut current = line;
        let mut end_column = column;
        loop {
            if let Some(text) = document.line_text(current) {
                let chars: Vec<char> = text.chars().collect();
                for col in (0..end_column.min(chars.len())).rev() {
                    if skip(current, col) {
                        continue;
                    }
                    let ch = chars[col];
                    if ch == origin {
                        depth += 1;
                    } else if ch == other {
                        depth -= 1;
                        if depth == 0 {
                            return Some((current, col));
                        }
                    }
                }
            }
            if current == 0 {
                return None;
            }
            current -= 1;
            end_column = usize::MAX;
        }
    }
}

/// Partner character and scan direction for a bracket, forward for openers.
fn counterpart(ch: char) -> Option<(char, bool)> {
    match ch {
        '(' => Some((')', true)),
        '[' => Some((']', true)),
        '{' => Some(('}', true)),
        ')' => Some(('(', false)),
        ']' => Some(('[', false)),
        '}' => Some(('{', false)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_on_same_line() {
        let doc = Document::from_text("f(a, b)");
        assert_eq!(matching_bracket(&doc, 0, 1), Some((0, 6)));
        assert_eq!(matching_bracket(&doc, 0, 6), Some((0, 1)));
    }

    #[test]
    fn test_nested_same_family() {
        let doc = Document::from_text("((a))");
        assert_eq!(matching_bracket(&doc, 0, 0), Some((0, 4)));
        assert_eq!(matching_bracket(&doc, 0, 1), Some((0, 3)));
        assert_eq!(matching_bracket(&doc, 0, 3), Some((0, 1)));
    }

    #[test]
    fn test_families_do_not_interfere() {
        let doc = Document::from_text("f([a])");
        assert_eq!(matching_bracket(&doc, 0, 1), Some((0, 5)));
        assert_eq!(matching_bracket(&doc, 0, 2), Some((0, 4)));
    }

    #[test]
    fn test_match_across_lines() {
        let doc = Document::from_text("def f(\n    a,\n    b)");
        assert_eq!(matching_bracket(&doc, 0, 5), Some((2, 5)));
        assert_eq!(matching_bracket(&doc, 2, 5), Some((0, 5)));
    }

    #[test]
    fn test_unbalanced_returns_none() {
        let doc = Document::from_text("(((");
        assert_eq!(matching_bracket(&doc, 0, 0), None);
    }

    #[test]
    fn test_non_bracket_returns_none() {
        let doc = Document::from_text("abc");
        assert_eq!(matching_bracket(&doc, 0, 0), None);
        assert_eq!(matching_bracket(&doc, 0, 99), None);
        assert_eq!(matching_bracket(&doc, 9, 0), None);
    }

    #[test]
    fn test_filtered_skips_bracket_inside_string() {
        let doc = Document::from_text("x = (')')");
        // Treat columns 5..8 as string content.
        let inside_string = |line: usize, col: usize| line == 0 && (5..8).contains(&col);
        assert_eq!(matching_bracket(&doc, 0, 4), Some((0, 6)));
        assert_eq!(
            matching_bracket_filtered(&doc, 0, 4, inside_string),
            Some((0, 8))
        );
    }

    #[test]
    fn test_filtered_origin_inside_string_is_no_match() {
        let doc = Document::from_text("x = (')')");
        let inside_string = |line: usize, col: usize| line == 0 && (5..8).contains(&col);
        assert_eq!(matching_bracket_filtered(&doc, 0, 6, inside_string), None);
    }

    #[test]
    fn test_backward_across_lines_with_nesting() {
        let doc = Document::from_text("a = [\n    [1, 2],\n    3,\n]");
        assert_eq!(matching_bracket(&doc, 3, 0), Some((0, 4)));
        assert_eq!(matching_bracket(&doc, 1, 9), Some((1, 4)));
    }
}

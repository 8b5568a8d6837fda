//! Per-line syntax classification for Python source.
//!
//! Classification is stateful only through [`LineState`]: a line is examined
//! together with the state left by the line above it and yields spans plus the
//! state it hands to the line below. Nothing else is shared between lines,
//! which is what keeps incremental re-highlighting cheap.
//!
//! Within a line, passes run in a fixed order and claim the byte ranges they
//! emit. A later pass never touches a claimed byte, so the pass order is the
//! only precedence rule and the resulting spans never overlap.

use crate::category::Category;
use crate::line_state::{LineState, TripleQuote};
use crate::rules::{PATTERNS, WORD_TABLES};
use crate::span::{CategorySpan, CharMap};
use regex::Regex;

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClassification {
    /// Non-overlapping spans in ascending start order, character offsets.
    pub spans: Vec<CategorySpan>,
    /// State handed to the following line.
    pub end_state: LineState,
}

/// A per-line classifier that threads [`LineState`] between lines.
pub trait LineClassifier {
    /// Classify one line given the state left by the previous line.
    fn classify_line(&self, line: &str, prev: LineState) -> LineClassification;
}

/// The built-in Python classifier.
#[derive(Debug, Clone, Copy)]
pub struct PythonClassifier;

impl PythonClassifier {
    /// Create a classifier.
    pub fn new() -> Self {
        Self
    }
}

impl Default for PythonClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LineClassifier for PythonClassifier {
    fn classify_line(&self, line: &str, prev: LineState) -> LineClassification {
        classify(line, prev)
    }
}

/// Classify one line of Python source.
///
/// `prev` is the state left by the previous line, [`LineState::default`] for
/// the first line of a document. The line must not contain a line break.
pub fn classify(line: &str, prev: LineState) -> LineClassification {
    let mut claims = ClaimSet::new(line.len());
    let mut raw: Vec<(usize, usize, Category)> = Vec::new();

    let end_state = scan_triple_quotes(line, prev, &mut claims, &mut raw);
    scan_pattern(line, &PATTERNS.f_string, Category::FString, &mut claims, &mut raw);
    scan_pattern(line, &PATTERNS.string, Category::String, &mut claims, &mut raw);
    scan_comment(line, &mut claims, &mut raw);
    scan_pattern(line, &PATTERNS.number, Category::Number, &mut claims, &mut raw);
    scan_pattern(line, &PATTERNS.decorator, Category::Decorator, &mut claims, &mut raw);
    scan_words(line, &mut claims, &mut raw);
    scan_pattern(line, &PATTERNS.operator, Category::Operator, &mut claims, &mut raw);
    scan_brackets(line, &mut claims, &mut raw);
    scan_binding(line, &PATTERNS.class_name, Category::ClassName, &mut claims, &mut raw);
    scan_binding(line, &PATTERNS.function_name, Category::FunctionName, &mut claims, &mut raw);
    scan_pattern(line, &PATTERNS.self_cls, Category::SelfOrCls, &mut claims, &mut raw);

    let map = CharMap::new(line);
    let mut spans: Vec<CategorySpan> = raw
        .into_iter()
        .map(|(start, end, category)| {
            CategorySpan::new(map.byte_to_char(start), map.byte_to_char(end), category)
        })
        .collect();
    spans.sort_by_key(|s| s.span.start);

    LineClassification { spans, end_state }
}

/// Byte-granular ownership map for one line.
struct ClaimSet {
    claimed: Vec<bool>,
}

impl ClaimSet {
    fn new(len: usize) -> Self {
        Self {
            claimed: vec![false; len],
        }
    }

    fn claim(&mut self, start: usize, end: usize) {
        for slot in &mut self.claimed[start..end] {
            *slot = true;
        }
    }

    fn is_free_at(&self, byte: usize) -> bool {
        !self.claimed[byte]
    }

    fn is_free(&self, start: usize, end: usize) -> bool {
        self.claimed[start..end].iter().all(|claimed| !claimed)
    }

    /// Maximal unclaimed runs inside `[start, end)`.
    fn free_gaps(&self, start: usize, end: usize) -> Vec<(usize, usize)> {
        let mut gaps = Vec::new();
        let mut run_start = None;
        for i in start..end {
            match (self.claimed[i], run_start) {
                (false, None) => run_start = Some(i),
                (true, Some(s)) => {
                    gaps.push((s, i));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = run_start {
            gaps.push((s, end));
        }
        gaps
    }
}

/// Triple-quoted strings, including the continuation of a block opened on an
/// earlier line. Returns the state handed to the next line.
fn scan_triple_quotes(
    line: &str,
    prev: LineState,
    claims: &mut ClaimSet,
    raw: &mut Vec<(usize, usize, Category)>,
) -> LineState {
    let mut pos = 0;

    if let LineState::InsideTripleQuote(quote) = prev {
        let delimiter = quote.delimiter();
        match line.find(delimiter) {
            None => {
                if !line.is_empty() {
                    claims.claim(0, line.len());
                    raw.push((0, line.len(), Category::Docstring));
                }
                return prev;
            }
            Some(at) => {
                let close = at + delimiter.len();
                claims.claim(0, close);
                raw.push((0, close, Category::Docstring));
                pos = close;
            }
        }
    }

    loop {
        let rest = &line[pos..];
        let single = rest.find("'''").map(|i| (pos + i, TripleQuote::Single));
        let double = rest.find("\"\"\"").map(|i| (pos + i, TripleQuote::Double));
        let (open, quote) = match (single, double) {
            (None, None) => return LineState::Outside,
            (Some(s), None) => s,
            (None, Some(d)) => d,
            (Some(s), Some(d)) => {
                if s.0 < d.0 {
                    s
                } else {
                    d
                }
            }
        };
        let delimiter = quote.delimiter();
        let body = open + delimiter.len();
        match line[body..].find(delimiter) {
            Some(i) => {
                let close = body + i + delimiter.len();
                claims.claim(open, close);
                raw.push((open, close, Category::Docstring));
                pos = close;
            }
            None => {
                claims.claim(open, line.len());
                raw.push((open, line.len(), Category::Docstring));
                return LineState::InsideTripleQuote(quote);
            }
        }
    }
}

/// Emit every match of `pattern` whose range is still unclaimed.
fn scan_pattern(
    line: &str,
    pattern: &Regex,
    category: Category,
    claims: &mut ClaimSet,
    raw: &mut Vec<(usize, usize, Category)>,
) {
    for m in pattern.find_iter(line) {
        if claims.is_free(m.start(), m.end()) {
            claims.claim(m.start(), m.end());
            raw.push((m.start(), m.end(), category));
        }
    }
}

/// Line comment. The first `#` outside any string starts a comment that runs
/// to the end of the line.
fn scan_comment(line: &str, claims: &mut ClaimSet, raw: &mut Vec<(usize, usize, Category)>) {
    let hash = line
        .bytes()
        .enumerate()
        .find(|&(i, b)| b == b'#' && claims.is_free_at(i));
    let Some((start, _)) = hash else {
        return;
    };
    // String literals claimed earlier inside the tail keep their spans; the
    // comment covers the gaps around them.
    for (s, e) in claims.free_gaps(start, line.len()) {
        raw.push((s, e, Category::Comment));
    }
    claims.claim(start, line.len());
}

/// Whole-word lookup over the five word tables. Identifiers that match no
/// table stay unclaimed for the later binding passes.
fn scan_words(line: &str, claims: &mut ClaimSet, raw: &mut Vec<(usize, usize, Category)>) {
    for m in PATTERNS.identifier.find_iter(line) {
        if !claims.is_free(m.start(), m.end()) {
            continue;
        }
        if let Some(category) = WORD_TABLES.categorize(m.as_str()) {
            claims.claim(m.start(), m.end());
            raw.push((m.start(), m.end(), category));
        }
    }
}

/// Bracket characters, one span each.
fn scan_brackets(line: &str, claims: &mut ClaimSet, raw: &mut Vec<(usize, usize, Category)>) {
    for (i, ch) in line.char_indices() {
        let category = match ch {
            '(' | ')' => Category::BracketRound,
            '{' | '}' => Category::BracketCurly,
            '[' | ']' => Category::BracketSquare,
            _ => continue,
        };
        if claims.is_free_at(i) {
            claims.claim(i, i + 1);
            raw.push((i, i + 1, category));
        }
    }
}

/// Name bound by a `class` or `def` statement. Only the name itself is
/// claimed, and a name already owned by an earlier pass keeps its category.
fn scan_binding(
    line: &str,
    pattern: &Regex,
    category: Category,
    claims: &mut ClaimSet,
    raw: &mut Vec<(usize, usize, Category)>,
) {
    for caps in pattern.captures_iter(line) {
        let Some(name) = caps.get(1) else {
            continue;
        };
        if claims.is_free(name.start(), name.end()) {
            claims.claim(name.start(), name.end());
            raw.push((name.start(), name.end(), category));
        }
    }
}

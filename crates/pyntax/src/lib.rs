#![warn(missing_docs)]
//! # pyntax
//!
//! Incremental, line-oriented syntax highlighting for Python source.
//!
//! The core idea is that highlighting state between lines is tiny: the only
//! thing one line can pass to the next is whether an unterminated
//! triple-quoted string is open, and with which delimiter. Each line is
//! classified on its own against that one-value state, so after an edit only
//! the touched lines and the lines whose inherited state changed need work.
//!
//! ## Pipeline
//!
//! ```text
//! Document (rope)          edits produce DocumentEdit records
//!       │
//!       ▼
//! HighlightEngine          per-line cache, dirty tracking, cascade
//!       │
//!       ▼
//! classify(line, state)    ordered passes over one line
//!       │
//!       ▼
//! Vec<CategorySpan>        non-overlapping, character-offset spans
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use pyntax::{classify, Category, LineState};
//!
//! let result = classify("def greet(name):", LineState::default());
//! assert_eq!(result.end_state, LineState::default());
//! assert!(result.spans.iter().any(|s| s.category == Category::FunctionName));
//! ```
//!
//! Editor-style use goes through [`Document`] and [`HighlightEngine`]:
//!
//! ```
//! use pyntax::{Document, HighlightEngine};
//!
//! let mut doc = Document::from_text("x = 1\ny = 2\n");
//! let mut engine = HighlightEngine::new();
//! engine.refresh(&doc);
//!
//! let edit = doc.insert(0, "# ");
//! engine.apply_edit(&edit);
//! let updates = engine.refresh(&doc);
//! assert_eq!(updates.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`category`] - the span categories a classifier can assign
//! - [`span`] - character-offset spans
//! - [`line_state`] - the state threaded between lines
//! - [`rules`] - word tables and patterns behind the Python classifier
//! - [`classifier`] - per-line classification
//! - [`document`] - rope-backed, line-addressed text storage
//! - [`engine`] - incremental highlighting cache
//! - [`indent`] - auto-indent for new lines
//! - [`brackets`] - bracket matching across lines
//! - [`words`] - completion word harvesting

pub mod brackets;
pub mod category;
pub mod classifier;
pub mod document;
pub mod engine;
pub mod indent;
pub mod line_state;
pub mod rules;
pub mod span;
pub mod words;

pub use brackets::{matching_bracket, matching_bracket_filtered};
pub use category::Category;
pub use classifier::{LineClassification, LineClassifier, PythonClassifier, classify};
pub use document::{Document, DocumentEdit};
pub use engine::{HighlightEngine, LineUpdate, highlight_all};
pub use indent::{DEFAULT_INDENT_WIDTH, indent_for_next_line, leading_whitespace};
pub use line_state::{LineState, TripleQuote};
pub use span::{CategorySpan, Span};
pub use words::completion_words;

//! Completion word harvesting.

use crate::document::Document;
use crate::rules::{BUILTIN_FUNCTIONS, CONSTANTS, EXCEPTIONS, KEYWORDS, MAGIC_METHODS};
use std::collections::BTreeSet;
use unicode_segmentation::UnicodeSegmentation;

/// Collect completion candidates for a document.
///
/// Candidates are every identifier-shaped word in the text plus the language
/// word lists, deduplicated and sorted. Numeric tokens are dropped.
pub fn completion_words(document: &Document) -> Vec<String> {
    let text = document.text();
    let mut words: BTreeSet<String> = BTreeSet::new();

    for word in text.unicode_words() {
        let identifier_shaped = word
            .chars()
            .next()
            .is_some_and(|ch| ch.is_alphabetic() || ch == '_');
        if identifier_shaped {
            words.insert(word.to_string());
        }
    }

    for list in [
        KEYWORDS,
        BUILTIN_FUNCTIONS,
        CONSTANTS,
        EXCEPTIONS,
        MAGIC_METHODS,
    ] {
        for word in list {
            words.insert((*word).to_string());
        }
    }

    words.into_iter().collect()
}

//! Incremental highlighting example
//!
//! Shows how `HighlightEngine` recomputes only the lines an edit touches.

use pyntax::{Category, Document, HighlightEngine, LineState, TripleQuote};

fn main() {
    let mut document = Document::from_text("import sys\ndef main():\n    print(sys.argv)");
    let mut engine = HighlightEngine::new();

    // The first refresh classifies every line.
    let updates = engine.refresh(&document);
    assert_eq!(updates.len(), document.line_count());
    for update in &updates {
        println!("line {}: {} spans", update.line, update.spans.len());
    }

    // "import" on line 0 is a keyword.
    let spans = engine.line_spans(0).unwrap();
    assert_eq!(spans[0].category, Category::Keyword);

    // Comment out the print call. Only that line is reclassified.
    let offset = document.offset_of(2, 4);
    let edit = document.insert(offset, "# ");
    engine.apply_edit(&edit);
    let updates = engine.refresh(&document);
    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].line, 2);
    assert_eq!(updates[0].spans[0].category, Category::Comment);

    // Opening a docstring at the top cascades through the whole file.
    let edit = document.insert(0, "'''\n");
    engine.apply_edit(&edit);
    let updates = engine.refresh(&document);
    assert_eq!(updates.len(), document.line_count());
    assert_eq!(
        engine.line_state(3),
        Some(LineState::InsideTripleQuote(TripleQuote::Single))
    );

    println!("final text:\n{}", document.text());
}

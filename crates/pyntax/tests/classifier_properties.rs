use pyntax::{Category, LineState, TripleQuote, classify};
use rand::Rng;

fn category_at(line: &str, state: LineState, ch: usize) -> Option<Category> {
    classify(line, state)
        .spans
        .iter()
        .find(|s| s.span.contains(ch))
        .map(|s| s.category)
}

#[test]
fn test_docstring_state_threads_through_a_block() {
    let lines = ["x = '''abc", "more text", "end'''", "y = 1"];
    let mut state = LineState::default();
    let mut states = Vec::new();
    for line in lines {
        state = classify(line, state).end_state;
        states.push(state);
    }
    assert_eq!(
        states,
        vec![
            LineState::InsideTripleQuote(TripleQuote::Single),
            LineState::InsideTripleQuote(TripleQuote::Single),
            LineState::Outside,
            LineState::Outside,
        ]
    );
}

#[test]
fn test_categories_on_a_method_definition() {
    let line = "    def update(self, key, value=None):";
    assert_eq!(category_at(line, LineState::default(), 4), Some(Category::Keyword));
    assert_eq!(
        category_at(line, LineState::default(), 8),
        Some(Category::FunctionName)
    );
    assert_eq!(
        category_at(line, LineState::default(), 15),
        Some(Category::SelfOrCls)
    );
    assert_eq!(
        category_at(line, LineState::default(), 32),
        Some(Category::Constant)
    );
    // The trailing colon stays plain.
    assert_eq!(category_at(line, LineState::default(), 37), None);
}

#[test]
fn test_mixed_line_with_every_string_flavor() {
    let line = "a = 'one' + f\"two {n}\" + '''three'''";
    assert_eq!(category_at(line, LineState::default(), 5), Some(Category::String));
    assert_eq!(
        category_at(line, LineState::default(), 13),
        Some(Category::FString)
    );
    assert_eq!(
        category_at(line, LineState::default(), 28),
        Some(Category::Docstring)
    );
}

#[test]
fn test_comment_marker_inside_string_does_not_comment() {
    let line = "x = '# not a comment'";
    let spans = classify(line, LineState::default()).spans;
    assert!(spans.iter().all(|s| s.category != Category::Comment));
}

#[test]
fn test_raw_f_prefix_spellings() {
    for line in ["a = f'x'", "a = rf'x'", "a = fr'x'"] {
        assert_eq!(
            category_at(line, LineState::default(), 5),
            Some(Category::FString),
            "line: {line}"
        );
    }
}

fn random_line(rng: &mut impl Rng) -> String {
    const FRAGMENTS: &[&str] = &[
        "def ", "class ", "Foo", "value", "self", "cls", "'''", "\"\"\"", "'txt'", "\"txt\"",
        "f'v {x}'", "# note ", "0x1F", "3.14e10", "2j", "@deco", "==", "->", "(", ")", "[", "]",
        "{", "}", " ", "    ", "True", "print", "ValueError", "__init__", "é∂", "\\",
    ];
    let count = rng.gen_range(0..12);
    let mut line = String::new();
    for _ in 0..count {
        line.push_str(FRAGMENTS[rng.gen_range(0..FRAGMENTS.len())]);
    }
    line
}

fn random_state(rng: &mut impl Rng) -> LineState {
    match rng.gen_range(0..3) {
        0 => LineState::Outside,
        1 => LineState::InsideTripleQuote(TripleQuote::Single),
        _ => LineState::InsideTripleQuote(TripleQuote::Double),
    }
}

#[test]
fn test_random_lines_produce_sorted_disjoint_in_bounds_spans() {
    let mut rng = rand::thread_rng();
    for _ in 0..2_000 {
        let line = random_line(&mut rng);
        let state = random_state(&mut rng);
        let result = classify(&line, state);
        let char_count = line.chars().count();

        for span in &result.spans {
            assert!(span.span.start < span.span.end, "empty span in {line:?}");
            assert!(span.span.end <= char_count, "out of bounds in {line:?}");
        }
        for pair in result.spans.windows(2) {
            assert!(
                pair[0].span.end <= pair[1].span.start,
                "overlap in {line:?}"
            );
        }
    }
}

#[test]
fn test_classification_is_deterministic() {
    let mut rng = rand::thread_rng();
    for _ in 0..500 {
        let line = random_line(&mut rng);
        let state = random_state(&mut rng);
        assert_eq!(classify(&line, state), classify(&line, state));
    }
}

#[test]
fn test_inside_state_without_delimiter_claims_whole_line() {
    let mut rng = rand::thread_rng();
    let inside = LineState::InsideTripleQuote(TripleQuote::Double);
    for _ in 0..500 {
        let line = random_line(&mut rng);
        if line.contains("\"\"\"") || line.is_empty() {
            continue;
        }
        let result = classify(&line, inside);
        assert_eq!(result.end_state, inside, "line: {line:?}");
        assert_eq!(result.spans.len(), 1, "line: {line:?}");
        assert_eq!(result.spans[0].category, Category::Docstring);
        assert_eq!(result.spans[0].span.len(), line.chars().count());
    }
}

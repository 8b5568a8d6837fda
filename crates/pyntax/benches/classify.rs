use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use pyntax::{Document, HighlightEngine, LineState, classify, highlight_all};

fn python_source(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 40);
    for i in 0..line_count {
        match i % 5 {
            0 => out.push_str(&format!("def handler_{i}(self, value={i}):\n")),
            1 => out.push_str("    total = value + 0x1F  # running sum\n"),
            2 => out.push_str("    name = f\"item {value}\"\n"),
            3 => out.push_str("    print(total, True, None)\n"),
            _ => out.push_str("    return [total, {'k': 1}]\n"),
        }
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

fn bench_classify_single_line(c: &mut Criterion) {
    c.bench_function("classify_line/typical", |b| {
        b.iter(|| {
            let result = classify(
                black_box("    value = compute(x, 0x1F) + f\"total {n}\"  # tally"),
                LineState::default(),
            );
            black_box(result.spans.len());
        })
    });
}

fn bench_full_document_highlight(c: &mut Criterion) {
    let doc = Document::from_text(&python_source(10_000));
    c.bench_function("highlight_all/10k_lines", |b| {
        b.iter(|| {
            black_box(highlight_all(black_box(&doc)).len());
        })
    });
}

fn bench_incremental_middle_insert(c: &mut Criterion) {
    let text = python_source(10_000);
    c.bench_function("incremental_edit/middle_insert", |b| {
        b.iter_batched(
            || {
                let mut engine = HighlightEngine::new();
                let doc = Document::from_text(&text);
                engine.refresh(&doc);
                (doc, engine)
            },
            |(mut doc, mut engine)| {
                let offset = doc.char_count() / 2;
                let edit = doc.insert(offset, "x");
                engine.apply_edit(&edit);
                black_box(engine.refresh(&doc).len());
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(
    benches,
    bench_classify_single_line,
    bench_full_document_highlight,
    bench_incremental_middle_insert
);
criterion_main!(benches);

use criterion::{Criterion, criterion_group, criterion_main};
use lunaria::{HighlightCache, Highlighter};

const SAMPLE: &str = include_str!("../src/fixtures/sample.lua");

fn highlight_sample_benchmark(c: &mut Criterion) {
    let highlighter = Highlighter::new().expect("Failed to build highlighter");

    c.bench_function("highlight sample.lua", |b| {
        b.iter(|| {
            let result = highlighter.highlight(SAMPLE);
            std::hint::black_box(result);
        })
    });
}

fn highlight_large_benchmark(c: &mut Criterion) {
    let highlighter = Highlighter::new().expect("Failed to build highlighter");
    let content = SAMPLE.repeat(200);

    c.bench_function("highlight sample.lua x200", |b| {
        b.iter(|| {
            let result = highlighter.try_highlight(&content).unwrap();
            std::hint::black_box(result);
        })
    });
}

fn unclosed_openers_benchmark(c: &mut Criterion) {
    let highlighter = Highlighter::new().expect("Failed to build highlighter");
    let content = "local s = \"[[\"\nx = 1 -- see [[\n".repeat(4000);

    c.bench_function("highlight unclosed [[ openers", |b| {
        b.iter(|| {
            let result = highlighter.try_highlight(&content).unwrap();
            std::hint::black_box(result);
        })
    });
}

fn cached_highlight_benchmark(c: &mut Criterion) {
    let mut cache = HighlightCache::new(Highlighter::new().expect("Failed to build highlighter"));

    c.bench_function("cached highlight sample.lua", |b| {
        b.iter(|| {
            // only the first call should do any work
            let result = cache.get(SAMPLE).len();
            std::hint::black_box(result);
        })
    });
}

criterion_group!(
    benches,
    highlight_sample_benchmark,
    highlight_large_benchmark,
    unclosed_openers_benchmark,
    cached_highlight_benchmark
);
criterion_main!(benches);

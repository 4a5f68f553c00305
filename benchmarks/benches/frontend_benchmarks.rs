//! Benchmarks for the glint front end
//!
//! Measures performance of:
//! - Lexer throughput
//! - Parser throughput
//! - The full per-edit pass (tokenize, filter, parse)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use lang::{filter_trivia, lex, Analysis, LexerConfig, Parser};

/// Simple arithmetic assignment
const SIMPLE: &str = "x = 1 + 2 * 3";

/// Nested arithmetic with comparisons
const NESTED: &str = "x = 1 + 2 * 3 + 4 / 5 - 6 + (7 * 8 - 9) + 10 < 11";

/// Function definition and calls
const FUNCTION: &str = r#"
def add(a, b) {
    return a + b
}
result = add(add(1, 2), add(3, 4))
"#;

/// Loops, branches and comments
const CONTROL_FLOW: &str = r#"
# count evens
total = 0
for (i in range(100)) {
    if (i / 2 * 2 == i) {
        total += i
    } else {
        /* odd */
        skipped += 1
    }
}
while (total > 10) {
    total /= 2
}
"#;

fn large_buffer() -> String {
    CONTROL_FLOW.repeat(200)
}

fn bench_lexer(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let test_cases = [
        ("simple", SIMPLE),
        ("nested", NESTED),
        ("function", FUNCTION),
        ("control_flow", CONTROL_FLOW),
    ];

    for (name, source) in test_cases {
        group.bench_with_input(BenchmarkId::new("lex", name), source, |b, source| {
            b.iter(|| lex(black_box(source)))
        });
    }

    group.finish();
}

fn bench_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    let test_cases = [
        ("simple", SIMPLE),
        ("nested", NESTED),
        ("function", FUNCTION),
        ("control_flow", CONTROL_FLOW),
    ];

    for (name, source) in test_cases {
        // Pre-lex for parser-only benchmark
        let tokens = filter_trivia(lex(source));

        group.bench_with_input(BenchmarkId::new("parse", name), &tokens, |b, tokens| {
            b.iter(|| {
                let mut parser = Parser::new(tokens.clone());
                parser.parse_program()
            })
        });
    }

    group.finish();
}

fn bench_edit_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_pass");
    let buffer = large_buffer();
    let config = LexerConfig::default();

    group.throughput(Throughput::Bytes(buffer.len() as u64));
    group.bench_function("large_buffer", |b| {
        b.iter(|| Analysis::run(black_box(&buffer), &config))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer, bench_parser, bench_edit_pass);
criterion_main!(benches);

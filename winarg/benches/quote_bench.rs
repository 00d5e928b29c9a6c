use criterion::{black_box, criterion_group, criterion_main, Criterion};
use winarg::{bash_quote, quote, relative_to};

fn bench_quote(c: &mut Criterion) {
    let mut group = c.benchmark_group("quote");

    // Benchmark the no-op fast path
    group.bench_function("plain_token", |b| {
        b.iter(|| quote(black_box("C:\\tools\\launcher\\run.exe")));
    });

    // Benchmark a token with spaces only
    group.bench_function("spaces_only", |b| {
        b.iter(|| quote(black_box("C:\\Program Files\\tool\\run.exe")));
    });

    // Benchmark a token exercising backslash-run handling
    group.bench_function("backslash_runs", |b| {
        b.iter(|| quote(black_box("a\\\\b \"c\" d\\\\\\")));
    });

    // Benchmark the shell-style variant on the same input
    group.bench_function("bash_variant", |b| {
        b.iter(|| bash_quote(black_box("a\\\\b \"c\" d\\\\\\")));
    });

    group.finish();
}

fn bench_relative_to(c: &mut Criterion) {
    let mut group = c.benchmark_group("relative_to");

    let sibling_path = "C:\\users\\dev\\project\\bin\\launcher";
    let sibling_base = "C:\\users\\dev\\project\\obj\\cache";
    let deep_base = "C:\\users\\dev\\project\\a\\b\\c\\d\\e\\f";

    // Benchmark the sibling case
    group.bench_function("sibling", |b| {
        b.iter(|| relative_to(black_box(sibling_path), black_box(sibling_base)));
    });

    // Benchmark a deep ascent
    group.bench_function("deep_ascent", |b| {
        b.iter(|| relative_to(black_box(sibling_path), black_box(deep_base)));
    });

    // Benchmark the identity case
    group.bench_function("identity", |b| {
        b.iter(|| relative_to(black_box(sibling_path), black_box(sibling_path)));
    });

    group.finish();
}

criterion_group!(benches, bench_quote, bench_relative_to);
criterion_main!(benches);

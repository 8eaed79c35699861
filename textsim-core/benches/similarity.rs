use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use textsim_core::{compute_similarity, normalize, Corpus};

const ESSAY: &str = "Rust is a multi-paradigm, general-purpose programming language that \
emphasizes performance, type safety, and concurrency. It enforces memory safety, meaning \
that all references point to valid memory, without a garbage collector.";

fn bench_normalize(c: &mut Criterion) {
    let text = ESSAY.repeat(20);
    c.bench_function("normalize_essay", |b| b.iter(|| normalize(black_box(&text))));
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_similarity");

    for &copies in &[1usize, 10, 100] {
        let a = ESSAY.repeat(copies);
        let b = ESSAY.replace("memory", "storage").repeat(copies);
        group.bench_with_input(BenchmarkId::from_parameter(copies), &copies, |bench, _| {
            bench.iter(|| compute_similarity(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_corpus_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_check");

    for &docs in &[100usize, 1000, 5000] {
        let mut corpus = Corpus::new();
        for i in 0..docs {
            corpus
                .add(&format!("Submission {} about topic {} and {}", i, i % 10, ESSAY))
                .unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(docs), &docs, |b, _| {
            b.iter(|| corpus.check(black_box("a submission about topic 3 and rust"), 10));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_compare, bench_corpus_check);
criterion_main!(benches);

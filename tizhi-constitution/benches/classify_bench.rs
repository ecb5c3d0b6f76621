use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tizhi_constitution::ConstitutionEngine;

fn bench_classify(c: &mut Criterion) {
    let engine = ConstitutionEngine::new();
    let answers: Vec<u8> = (0..30).map(|i| (i % 5) as u8 + 1).collect();

    c.bench_function("classify_30_answers", |b| {
        b.iter(|| engine.classify(black_box(&answers)).unwrap())
    });

    c.bench_function("score_only_30_answers", |b| {
        b.iter(|| engine.score_only(black_box(&answers)).unwrap())
    });
}

criterion_group!(benches, bench_classify);
criterion_main!(benches);

//! Benchmark for page generation performance.
//!
//! Generation is the hot path behind every navigation step, so it should
//! stay comfortably under a millisecond per page.
//!
//! Run with: cargo bench --package babel_engine --bench generation_benchmark

use babel_engine::{Coordinate, PageGenerator, SeededRng};
use babel_lexicon::Lexicon;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

fn benchmark_rng_draws(c: &mut Criterion) {
    c.bench_function("seeded_rng_draw", |b| {
        let mut rng = SeededRng::from_seed("0-1-1-1-1");
        b.iter(|| black_box(rng.next_f64()));
    });
}

fn benchmark_coherent_page(c: &mut Criterion) {
    let lexicon = Lexicon::embedded().unwrap();
    let generator = PageGenerator::new(&lexicon);

    c.bench_function("coherent_page", |b| {
        let mut page = 0u32;
        b.iter(|| {
            page = page % 410 + 1;
            let coord = Coordinate::new("bench", 1, 1, 1, page);
            black_box(generator.generate(&coord, true))
        });
    });
}

fn benchmark_chaos_page(c: &mut Criterion) {
    let lexicon = Lexicon::embedded().unwrap();
    let generator = PageGenerator::new(&lexicon);

    c.bench_function("chaos_page", |b| {
        let mut page = 0u32;
        b.iter(|| {
            page = page % 410 + 1;
            let coord = Coordinate::new("bench", 1, 1, 1, page);
            black_box(generator.generate(&coord, false))
        });
    });
}

fn benchmark_volume_sweep(c: &mut Criterion) {
    let lexicon = Lexicon::embedded().unwrap();
    let generator = PageGenerator::new(&lexicon);
    let base = Coordinate::new("sweep", 1, 1, 1, 1);

    let mut group = c.benchmark_group("volume_sweep");
    group.throughput(Throughput::Elements(410));
    group.sample_size(10);

    group.bench_function("410_pages", |b| {
        b.iter(|| {
            for page in 1..=410 {
                black_box(generator.generate(&base.with_page(page), true));
            }
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_rng_draws,
    benchmark_coherent_page,
    benchmark_chaos_page,
    benchmark_volume_sweep
);
criterion_main!(benches);

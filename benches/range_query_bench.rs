use bimodal_explorer::{MixtureSpec, RangeHistogramEngine, SortedSampleStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Store built from the default bimodal mixture
fn default_store(size: usize) -> SortedSampleStore {
    SortedSampleStore::from_mixture(size, &MixtureSpec::default(), Some(42)).unwrap()
}

fn bench_query_by_bins(c: &mut Criterion) {
    let mut group = c.benchmark_group("RangeQuery/bins");
    let store = default_store(1_000_000);
    let engine = RangeHistogramEngine::new();

    for &bins in &[10usize, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(bins), &bins, |b, &bins| {
            b.iter(|| engine.compute(black_box(&store), -50.0, 150.0, bins))
        });
    }
    group.finish();
}

fn bench_query_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("RangeQuery/samples");
    let engine = RangeHistogramEngine::new();

    // Query cost should grow with log N only
    for &size in &[10_000usize, 100_000, 1_000_000, 5_000_000] {
        let store = default_store(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &store, |b, store| {
            b.iter(|| engine.compute(black_box(store), -50.0, 150.0, 500))
        });
    }
    group.finish();
}

fn bench_slider_drag(c: &mut Criterion) {
    let store = default_store(1_000_000);
    let engine = RangeHistogramEngine::new();

    c.bench_function("RangeQuery/drag", |b| {
        b.iter(|| {
            for step in 0..50 {
                let lo = -50.0 + step as f64;
                black_box(engine.compute(&store, lo, lo + 120.0, 300).unwrap());
            }
        })
    });
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("Build");
    group.sample_size(10);
    for &size in &[100_000usize, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| default_store(black_box(size)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_query_by_bins,
    bench_query_by_size,
    bench_slider_drag,
    bench_build
);
criterion_main!(benches);

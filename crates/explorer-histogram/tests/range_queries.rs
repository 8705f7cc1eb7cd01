//! Range query behaviour against brute-force counting and concurrent use

mod common;

use approx::assert_relative_eq;
use common::{brute_force_count, normal_store, uniform_samples};
use explorer_histogram::{RangeHistogramEngine, SortedSampleStore};
use explorer_sampling::{MixtureComponent, MixtureSpec};
use std::sync::Arc;

#[test]
fn test_single_component_single_bin() {
    let spec = MixtureSpec::new(vec![MixtureComponent::new(0.0, 1.0, 1.0)]).unwrap();
    let store = SortedSampleStore::from_mixture(10, &spec, Some(11)).unwrap();
    // Ten standard-normal draws stay well inside [-5, 5] for this seed
    assert!(store.min() > -5.0 && store.max() < 5.0);

    let hist = RangeHistogramEngine::new().compute(&store, -5.0, 5.0, 1).unwrap();
    assert_eq!(hist.counts(), &[10]);
    assert_relative_eq!(hist.densities()[0], 0.1);
    assert_relative_eq!(hist.centers()[0], 0.0);
    assert_relative_eq!(hist.bin_width(), 10.0);
}

#[test]
fn test_full_observed_range_single_bin() {
    let spec = MixtureSpec::bimodal((0.0, 8.0, 0.5), (50.0, 13.8, 0.5)).unwrap();
    let store = SortedSampleStore::from_mixture(1000, &spec, Some(3)).unwrap();

    let hist = RangeHistogramEngine::new().compute(&store, store.min(), store.max(), 1).unwrap();
    let width = store.max() - store.min();
    assert_eq!(hist.counts(), &[1000]);
    assert_relative_eq!(hist.bin_width(), width);
    assert_relative_eq!(hist.densities()[0], 1.0 / width, max_relative = 1e-12);
}

#[test]
fn test_matches_brute_force() {
    let raw = uniform_samples(20_000, -10.0, 10.0, 17);
    let store = SortedSampleStore::build(raw.clone()).unwrap();
    let engine = RangeHistogramEngine::new();

    for &(lo, hi, bins) in &[(-10.0, 10.0, 20), (-3.3, 4.7, 7), (0.0, 0.01, 3), (-20.0, 20.0, 1)] {
        let hist = engine.compute(&store, lo, hi, bins).unwrap();
        let edges = hist.edges();
        for (k, &count) in hist.counts().iter().enumerate() {
            let closed = k == bins - 1;
            assert_eq!(
                count,
                brute_force_count(&raw, edges[k], edges[k + 1], closed),
                "bin {k} of [{lo}, {hi}] x {bins}"
            );
        }
    }
}

#[test]
fn test_count_conservation_over_closed_range() {
    let store = normal_store(50_000, 5);
    let engine = RangeHistogramEngine::new();
    for &(lo, hi) in &[(-1.0, 1.0), (-0.5, 2.5), (-100.0, 100.0)] {
        let hist = engine.compute(&store, lo, hi, 37).unwrap();
        assert_eq!(hist.visible_count(), store.count_between(lo, hi));
    }
}

#[test]
fn test_narrow_range_under_integrates() {
    let store = normal_store(100_000, 9);
    let hist = RangeHistogramEngine::new().compute(&store, -1.0, 1.0, 50).unwrap();
    // Roughly 68% of a standard normal lies within one sigma
    let fraction = hist.visible_fraction();
    assert!((fraction - 0.6827).abs() < 0.01, "fraction {fraction}");
}

#[test]
fn test_repeated_queries_identical() {
    let store = normal_store(10_000, 1);
    let engine = RangeHistogramEngine::new();
    let first = engine.compute(&store, -2.0, 3.0, 123).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.compute(&store, -2.0, 3.0, 123).unwrap(), first);
    }
}

#[test]
fn test_concurrent_queries_share_store() {
    let store = Arc::new(normal_store(100_000, 21));
    let expected = RangeHistogramEngine::new().compute(&store, -3.0, 3.0, 64).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                scope.spawn(move || {
                    RangeHistogramEngine::new()
                        .compute(&store, -3.0, 3.0, 64)
                        .unwrap()
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_result_owns_its_buffers() {
    let store = normal_store(1_000, 2);
    let (centers, densities, width) = RangeHistogramEngine::new()
        .compute(&store, -1.0, 1.0, 4)
        .unwrap()
        .into_parts();
    drop(store);
    assert_eq!(centers.len(), 4);
    assert_eq!(densities.len(), 4);
    assert_relative_eq!(width, 0.5);
}

#[test]
fn test_summary_of_mixture() {
    let store = SortedSampleStore::from_mixture(200_000, &MixtureSpec::default(), Some(8)).unwrap();
    let summary = store.summary();
    assert_eq!(summary.n, 200_000);
    // Mixture mean is 0.06 * 0 + 0.94 * 50 = 47
    assert!((summary.mean - 47.0).abs() < 0.3, "mean {}", summary.mean);
    assert_eq!(summary.data_min, store.min());
    assert_eq!(summary.data_max, store.max());
    assert!(summary.abs_min <= summary.data_min && summary.abs_max >= summary.data_max);
}

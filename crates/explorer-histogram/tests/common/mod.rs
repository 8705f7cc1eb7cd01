//! Common test utilities for explorer-histogram tests

use explorer_histogram::SortedSampleStore;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};

/// Store of `n` standard-normal samples
pub fn normal_store(n: usize, seed: u64) -> SortedSampleStore {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0).unwrap();
    let samples = (0..n).map(|_| normal.sample(&mut rng)).collect();
    SortedSampleStore::build(samples).unwrap()
}

/// Unordered uniform samples on `[lo, hi)`
pub fn uniform_samples(n: usize, lo: f64, hi: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let uniform = Uniform::new(lo, hi);
    (0..n).map(|_| uniform.sample(&mut rng)).collect()
}

/// Count samples in `[lo, hi)` by linear scan, closing the interval when `closed`
pub fn brute_force_count(values: &[f64], lo: f64, hi: f64, closed: bool) -> usize {
    values
        .iter()
        .filter(|&&x| x >= lo && (x < hi || (closed && x == hi)))
        .count()
}

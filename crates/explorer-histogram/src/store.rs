//! Immutable, sorted sample storage

use crate::search::{lower_bound, upper_bound};
use crate::summary::SampleSummary;
use explorer_core::{Error, Result};
use explorer_sampling::{MixtureSampler, MixtureSpec, SampleGenerator};
use std::fmt;
use std::ops::Index;
use tracing::{debug, info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ascending-sorted, read-only sample buffer
///
/// The store is the single source of truth for every histogram query. It is
/// sorted exactly once in [`build`](Self::build) and exposes no mutable access
/// afterwards, so `value_at(i) <= value_at(j)` holds for every `i < j` for the
/// whole lifetime of the value. A store only exists once sorting has finished,
/// and it is `Send + Sync`, so it can be shared behind an `Arc` and queried
/// from several threads at once.
#[derive(Clone, PartialEq)]
pub struct SortedSampleStore {
    values: Box<[f64]>,
}

impl SortedSampleStore {
    /// Take ownership of unordered samples and sort them
    ///
    /// Fails on an empty buffer or any NaN/infinite value.
    #[instrument(skip(samples), fields(n = samples.len()))]
    pub fn build(mut samples: Vec<f64>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::empty_input());
        }
        if samples.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("sample set"));
        }

        #[cfg(feature = "parallel")]
        samples.par_sort_unstable_by(f64::total_cmp);

        #[cfg(not(feature = "parallel"))]
        samples.sort_unstable_by(f64::total_cmp);

        debug!(
            min = samples[0],
            max = samples[samples.len() - 1],
            "sample store sorted"
        );

        Ok(Self {
            values: samples.into_boxed_slice(),
        })
    }

    /// Generate `n` samples with `generator`, then sort them
    pub fn from_generator<G>(generator: &G, n: usize) -> Result<Self>
    where
        G: SampleGenerator + ?Sized,
    {
        info!(generator = generator.name(), n, "building sample store");
        Self::build(generator.generate(n)?)
    }

    /// Sample a Gaussian mixture and sort the result
    ///
    /// Without a seed the samples differ between runs.
    pub fn from_mixture(n: usize, spec: &MixtureSpec, seed: Option<u64>) -> Result<Self> {
        let sampler = match seed {
            Some(seed) => MixtureSampler::with_seed(spec.clone(), seed),
            None => MixtureSampler::new(spec.clone()),
        };
        Self::from_generator(&sampler, n)
    }

    /// Value at sorted position `i`, or `None` past the end
    pub fn value_at(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    /// Number of samples (N)
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Alias of [`size`](Self::size)
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// A built store always holds at least one sample
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the sorted buffer
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Smallest sample
    pub fn min(&self) -> f64 {
        self.values[0]
    }

    /// Largest sample
    pub fn max(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    /// First position whose value is `>= target`
    pub fn lower_bound(&self, target: f64) -> usize {
        lower_bound(&self.values, target)
    }

    /// First position whose value is `> target`
    pub fn upper_bound(&self, target: f64) -> usize {
        upper_bound(&self.values, target)
    }

    /// Number of samples in the closed interval `[lo, hi]`
    pub fn count_between(&self, lo: f64, hi: f64) -> usize {
        if hi < lo {
            return 0;
        }
        self.upper_bound(hi) - self.lower_bound(lo)
    }

    /// Descriptive statistics over the whole store
    pub fn summary(&self) -> SampleSummary {
        SampleSummary::from_sorted(&self.values)
    }
}

impl Index<usize> for SortedSampleStore {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl fmt::Debug for SortedSampleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never dump tens of millions of samples
        f.debug_struct("SortedSampleStore")
            .field("len", &self.len())
            .field("min", &self.min())
            .field("max", &self.max())
            .finish()
    }
}

impl fmt::Display for SortedSampleStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SortedSampleStore(n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.min(),
            self.max()
        )
    }
}

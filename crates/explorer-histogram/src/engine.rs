//! Binary-search range histograms over a sorted store
//!
//! A query never scans the samples. It places `bins + 1` equally spaced edges
//! across `[v_min, v_max]`, finds each edge's position in the sorted buffer
//! with a binary search, and takes differences of neighbouring positions as
//! bin counts. Cost is `O(bins · log N)` regardless of how large N is.
//!
//! Densities are normalized by the size of the *whole* store, not by the
//! number of samples inside the range, so the histogram integrates to the
//! share of the population that is visible.

use crate::store::SortedSampleStore;
use crate::types::RangeHistogram;
use explorer_core::{ensure_finite, Error, Result};
use tracing::trace;

/// Stateless range-histogram query engine
///
/// Every call is a pure function of its arguments and the store; repeated
/// identical calls produce bit-identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct RangeHistogramEngine;

impl RangeHistogramEngine {
    /// Create a new engine
    pub fn new() -> Self {
        Self
    }

    /// Density histogram of `[v_min, v_max]` split into `bins` equal-width bins
    ///
    /// `bins == 0` and non-finite bounds are rejected. A collapsed or inverted
    /// range (`v_max <= v_min`) is not an error and yields
    /// [`RangeHistogram::empty`]. Bins are half-open `[left, right)` except
    /// the last, which also includes `v_max`.
    pub fn compute(
        &self,
        store: &SortedSampleStore,
        v_min: f64,
        v_max: f64,
        bins: usize,
    ) -> Result<RangeHistogram> {
        if bins == 0 {
            return Err(Error::invalid_parameters("bin count must be positive"));
        }
        ensure_finite("v_min", v_min)?;
        ensure_finite("v_max", v_max)?;

        let n = store.size();
        if v_max <= v_min {
            trace!(v_min, v_max, "collapsed range, nothing to show");
            return Ok(RangeHistogram::empty(n));
        }

        let bin_width = (v_max - v_min) / bins as f64;
        if !(bin_width.is_finite() && bin_width > 0.0) {
            return Err(Error::invalid_parameters(format!(
                "range [{v_min}, {v_max}] with {bins} bins has no representable bin width"
            )));
        }
        let edges = bin_edges(v_min, v_max, bins);

        let mut positions = Vec::with_capacity(bins + 1);
        for &edge in &edges[..bins] {
            positions.push(store.lower_bound(edge));
        }
        // Close the last bin so samples equal to v_max are counted
        positions.push(store.upper_bound(v_max));

        if let Some(&index) = positions.iter().find(|&&p| p > n) {
            return Err(Error::IndexOutOfRange { index, len: n });
        }

        let counts = positions
            .windows(2)
            .map(|w| {
                w[1].checked_sub(w[0]).ok_or(Error::IndexOutOfRange {
                    index: w[1],
                    len: n,
                })
            })
            .collect::<Result<Vec<usize>>>()?;

        let total = n as f64;
        let densities: Vec<f64> = counts
            .iter()
            .map(|&c| (c as f64 / total) / bin_width)
            .collect();
        let centers: Vec<f64> = edges
            .windows(2)
            .map(|w| w[0] + (w[1] - w[0]) / 2.0)
            .collect();

        trace!(
            v_min,
            v_max,
            bins,
            visible = positions[bins] - positions[0],
            "range histogram computed"
        );

        Ok(RangeHistogram::new(edges, counts, densities, centers, bin_width, n))
    }

    /// Histogram over the observed data range `[min, max]`
    ///
    /// Every sample is counted. A store whose samples are all equal has a
    /// zero-width range and yields the empty result.
    pub fn compute_full(&self, store: &SortedSampleStore, bins: usize) -> Result<RangeHistogram> {
        self.compute(store, store.min(), store.max(), bins)
    }
}

/// `bins + 1` equally spaced edges from `v_min` to `v_max` inclusive
///
/// Edges are interpolated as `(1 - t) * v_min + t * v_max` with `t = k / bins`,
/// which never forms `v_max - v_min` and so stays finite and non-decreasing
/// for any finite bounds. `edges[0]` is exactly `v_min` and the last edge is
/// pinned to exactly `v_max`. Returns an empty vector for `bins == 0`.
///
/// # Examples
///
/// ```rust
/// use explorer_histogram::engine::bin_edges;
///
/// assert_eq!(bin_edges(-5.0, 5.0, 4), vec![-5.0, -2.5, 0.0, 2.5, 5.0]);
/// ```
pub fn bin_edges(v_min: f64, v_max: f64, bins: usize) -> Vec<f64> {
    if bins == 0 {
        return vec![];
    }
    let steps = bins as f64;
    let mut edges: Vec<f64> = (0..bins)
        .map(|k| {
            let t = k as f64 / steps;
            (1.0 - t) * v_min + t * v_max
        })
        .collect();
    edges.push(v_max);
    edges
}

/// Convenience wrapper around [`RangeHistogramEngine::compute`]
pub fn compute(
    store: &SortedSampleStore,
    v_min: f64,
    v_max: f64,
    bins: usize,
) -> Result<RangeHistogram> {
    RangeHistogramEngine::new().compute(store, v_min, v_max, bins)
}

//! Result types for range histogram queries

use serde::Serialize;
use std::fmt;

/// A single bin of a [`RangeHistogram`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of samples in this bin
    pub count: usize,
    /// Density (count / (store_size * bin_width))
    pub density: f64,
}

impl HistogramBin {
    /// Get the center point of the bin
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the bin
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.5}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// Density histogram of one value range of a sample store
///
/// Owns all of its buffers; nothing here points back into the store. An empty
/// histogram (no bins, zero width) is the defined answer to a collapsed or
/// inverted range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeHistogram {
    edges: Vec<f64>,
    counts: Vec<usize>,
    densities: Vec<f64>,
    centers: Vec<f64>,
    bin_width: f64,
    total_count: usize,
}

impl RangeHistogram {
    pub(crate) fn new(
        edges: Vec<f64>,
        counts: Vec<usize>,
        densities: Vec<f64>,
        centers: Vec<f64>,
        bin_width: f64,
        total_count: usize,
    ) -> Self {
        Self {
            edges,
            counts,
            densities,
            centers,
            bin_width,
            total_count,
        }
    }

    /// The "nothing to show" result for a collapsed range
    pub fn empty(total_count: usize) -> Self {
        Self::new(vec![], vec![], vec![], vec![], 0.0, total_count)
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// True for the empty-range result
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Bin centers, one per bin
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }

    /// Densities, one per bin
    pub fn densities(&self) -> &[f64] {
        &self.densities
    }

    /// Raw per-bin counts
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Bin edges, `len() + 1` values (empty for the empty result)
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    /// Width shared by every bin; 0.0 for the empty result
    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Size of the whole store the densities are normalized against
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Samples that fell inside the queried range
    pub fn visible_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Integral of the density step function over the range
    ///
    /// Equals `visible_count / total_count`, so it drops below 1 whenever the
    /// range cuts off part of the population.
    pub fn visible_fraction(&self) -> f64 {
        self.densities.iter().map(|d| d * self.bin_width).sum()
    }

    /// Get the maximum density in the histogram
    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Iterate over the bins
    pub fn bins(&self) -> impl Iterator<Item = HistogramBin> + '_ {
        self.counts.iter().enumerate().map(move |(k, &count)| HistogramBin {
            left: self.edges[k],
            right: self.edges[k + 1],
            count,
            density: self.densities[k],
        })
    }

    /// Split into `(centers, densities, bin_width)` for a bar renderer
    pub fn into_parts(self) -> (Vec<f64>, Vec<f64>, f64) {
        (self.centers, self.densities, self.bin_width)
    }
}

impl fmt::Display for RangeHistogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) => write!(
                f,
                "RangeHistogram({} bins, range=[{:.3}, {:.3}], visible={}/{})",
                self.len(),
                lo,
                hi,
                self.visible_count(),
                self.total_count
            ),
            _ => write!(f, "RangeHistogram(empty, n={})", self.total_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RangeHistogram {
        RangeHistogram::new(
            vec![0.0, 1.0, 2.0, 3.0],
            vec![2, 5, 3],
            vec![0.1, 0.25, 0.15],
            vec![0.5, 1.5, 2.5],
            1.0,
            20,
        )
    }

    #[test]
    fn test_histogram_bin() {
        let bin = HistogramBin {
            left: 0.0,
            right: 1.0,
            count: 5,
            density: 0.5,
        };
        assert_eq!(bin.center(), 0.5);
        assert_eq!(bin.width(), 1.0);
        assert_eq!(bin.to_string(), "[0.000, 1.000): count=5, density=0.50000");
    }

    #[test]
    fn test_accessors() {
        let hist = sample();
        assert_eq!(hist.len(), 3);
        assert!(!hist.is_empty());
        assert_eq!(hist.visible_count(), 10);
        assert_eq!(hist.max_count(), 5);
        assert_eq!(hist.max_density(), 0.25);
        assert!((hist.visible_fraction() - 0.5).abs() < 1e-12);

        let bins: Vec<HistogramBin> = hist.bins().collect();
        assert_eq!(bins.len(), 3);
        assert_eq!(bins[1].left, 1.0);
        assert_eq!(bins[1].right, 2.0);
        assert_eq!(bins[1].count, 5);
    }

    #[test]
    fn test_into_parts() {
        let (centers, densities, width) = sample().into_parts();
        assert_eq!(centers, vec![0.5, 1.5, 2.5]);
        assert_eq!(densities, vec![0.1, 0.25, 0.15]);
        assert_eq!(width, 1.0);
    }

    #[test]
    fn test_empty() {
        let hist = RangeHistogram::empty(100);
        assert!(hist.is_empty());
        assert_eq!(hist.bin_width(), 0.0);
        assert_eq!(hist.max_density(), 0.0);
        assert_eq!(hist.bins().count(), 0);
        assert_eq!(hist.to_string(), "RangeHistogram(empty, n=100)");
    }
}

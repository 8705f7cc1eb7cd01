//! Whole-population statistics for a sorted sample set

use serde::Serialize;
use std::fmt;

/// Descriptive statistics of a [`SortedSampleStore`](crate::SortedSampleStore)
///
/// `abs_min`/`abs_max` are the data extremes rounded outward to whole numbers,
/// which is what an integer range slider needs as its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SampleSummary {
    /// Total number of samples
    pub n: usize,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0.0 when n < 2
    pub std_dev: f64,
    /// Smallest sample
    pub data_min: f64,
    /// Largest sample
    pub data_max: f64,
    /// `floor(data_min)`
    pub abs_min: f64,
    /// `ceil(data_max)`
    pub abs_max: f64,
}

impl SampleSummary {
    /// Compute the summary from an ascending, non-empty slice
    ///
    /// Min and max are read from the ends, so only the mean and variance
    /// passes touch every element.
    pub fn from_sorted(sorted: &[f64]) -> Self {
        let n = sorted.len();
        if n == 0 {
            return Self {
                n: 0,
                mean: 0.0,
                std_dev: 0.0,
                data_min: 0.0,
                data_max: 0.0,
                abs_min: 0.0,
                abs_max: 0.0,
            };
        }

        let n_f = n as f64;
        let mean = sorted.iter().sum::<f64>() / n_f;
        let std_dev = if n < 2 {
            0.0
        } else {
            let ss: f64 = sorted
                .iter()
                .map(|&x| {
                    let diff = x - mean;
                    diff * diff
                })
                .sum();
            (ss / (n_f - 1.0)).sqrt()
        };

        let data_min = sorted[0];
        let data_max = sorted[n - 1];

        Self {
            n,
            mean,
            std_dev,
            data_min,
            data_max,
            abs_min: data_min.floor(),
            abs_max: data_max.ceil(),
        }
    }

    /// `data_max - data_min`
    pub fn range(&self) -> f64 {
        self.data_max - self.data_min
    }
}

impl fmt::Display for SampleSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={}, mean={:.3}, std={:.3}, range=[{:.3}, {:.3}]",
            self.n, self.mean, self.std_dev, self.data_min, self.data_max
        )
    }
}

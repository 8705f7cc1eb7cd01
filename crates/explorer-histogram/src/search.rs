//! Ordered search over ascending `f64` slices
//!
//! Both searches assume the slice is sorted ascending and contains no NaN;
//! [`SortedSampleStore`](crate::SortedSampleStore) guarantees that.

/// First index whose value is not less than `target`
///
/// Returns `sorted.len()` when every value is below `target`.
///
/// # Examples
///
/// ```rust
/// use explorer_histogram::search::lower_bound;
///
/// let data = [1.0, 2.0, 2.0, 3.0];
/// assert_eq!(lower_bound(&data, 2.0), 1);
/// assert_eq!(lower_bound(&data, 2.5), 3);
/// assert_eq!(lower_bound(&data, 0.0), 0);
/// assert_eq!(lower_bound(&data, 9.0), 4);
/// ```
pub fn lower_bound(sorted: &[f64], target: f64) -> usize {
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if sorted[mid] < target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// First index whose value is greater than `target`
///
/// # Examples
///
/// ```rust
/// use explorer_histogram::search::upper_bound;
///
/// let data = [1.0, 2.0, 2.0, 3.0];
/// assert_eq!(upper_bound(&data, 2.0), 3);
/// assert_eq!(upper_bound(&data, 3.0), 4);
/// assert_eq!(upper_bound(&data, 0.5), 0);
/// ```
pub fn upper_bound(sorted: &[f64], target: f64) -> usize {
    let mut lo = 0;
    let mut hi = sorted.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if sorted[mid] <= target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

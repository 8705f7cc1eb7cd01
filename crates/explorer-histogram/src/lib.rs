//! Sorted sample storage and binary-search range histograms
//!
//! This crate holds the query side of the explorer. A [`SortedSampleStore`]
//! sorts a sample buffer once and then only hands out read access; the
//! [`RangeHistogramEngine`] answers "density over `[v_min, v_max]` in `bins`
//! equal-width bins" with one binary search per bin edge, so interactive
//! range and bin changes never rescan the samples.
//!
//! # Examples
//!
//! ## Querying a mixture
//!
//! ```rust
//! use explorer_histogram::{RangeHistogramEngine, SortedSampleStore};
//! use explorer_sampling::MixtureSpec;
//!
//! let store =
//!     SortedSampleStore::from_mixture(100_000, &MixtureSpec::default(), Some(42)).unwrap();
//! let engine = RangeHistogramEngine::new();
//!
//! let hist = engine.compute(&store, -50.0, 150.0, 100).unwrap();
//! assert_eq!(hist.len(), 100);
//! for bin in hist.bins().take(3) {
//!     println!("{bin}");
//! }
//! ```
//!
//! ## Collapsed ranges
//!
//! ```rust
//! use explorer_histogram::{compute, SortedSampleStore};
//!
//! let store = SortedSampleStore::build(vec![3.0, 1.0, 2.0]).unwrap();
//! let hist = compute(&store, 2.0, 2.0, 10).unwrap();
//! assert!(hist.is_empty());
//! ```

pub mod engine;
pub mod search;
pub mod store;
pub mod summary;
pub mod types;

// Re-export main types
pub use engine::{bin_edges, compute, RangeHistogramEngine};
pub use store::SortedSampleStore;
pub use summary::SampleSummary;
pub use types::{HistogramBin, RangeHistogram};

pub use explorer_core::{Error, Result};

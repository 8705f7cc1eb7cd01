//! Interactive range-histogram engine for very large bimodal sample sets
//!
//! The explorer answers "what does the density look like between `v_min` and
//! `v_max` with `bins` bars?" for tens of millions of samples, fast enough to
//! follow a slider drag. It does this in two phases:
//!
//! 1. **Construction** ([`build`]): draw N samples from a Gaussian mixture and
//!    sort them once into a [`SortedSampleStore`].
//! 2. **Query** ([`compute`]): binary-search each bin edge in the sorted store
//!    and turn position differences into counts and densities.
//!
//! Construction is the only `O(N log N)` step. Queries cost
//! `O(bins · log N)` and never copy the sample buffer.
//!
//! # Example
//!
//! ```rust
//! use bimodal_explorer::{build, compute, MixtureComponent};
//!
//! let store = build(
//!     10_000,
//!     &[
//!         MixtureComponent::new(0.0, 8.0, 0.06),
//!         MixtureComponent::new(50.0, 13.8, 0.94),
//!     ],
//!     Some(42),
//! )
//! .unwrap();
//!
//! let (centers, densities, bin_width) = compute(&store, -50.0, 150.0, 100)
//!     .unwrap()
//!     .into_parts();
//! assert_eq!(centers.len(), 100);
//! assert_eq!(densities.len(), 100);
//! assert_eq!(bin_width, 2.0);
//! ```
//!
//! # Sessions
//!
//! [`ExplorerSession`] wraps a shared store with the slider state a UI needs:
//!
//! ```rust
//! use bimodal_explorer::{ExplorerConfig, ExplorerSession};
//!
//! let config = ExplorerConfig {
//!     seed: Some(1),
//!     ..ExplorerConfig::with_sample_count(20_000)
//! };
//! let mut session = ExplorerSession::from_config(&config).unwrap();
//!
//! session.set_bins(250);
//! session.set_range(-20.0, 90.0).unwrap();
//! let update = session.refresh().unwrap();
//! assert_eq!(update.histogram.len(), 250);
//! ```

pub mod config;
pub mod session;

pub use config::{ExplorerConfig, ViewConfig};
pub use session::{BinLimits, ExplorerSession, QueryRequest, Ticket, ViewState, ViewUpdate};

pub use explorer_core::{Error, Result};
pub use explorer_histogram::{
    compute, HistogramBin, RangeHistogram, RangeHistogramEngine, SampleSummary, SortedSampleStore,
};
pub use explorer_sampling::{MixtureComponent, MixtureSampler, MixtureSpec, SampleGenerator};

/// Generate `n` samples from `components` and sort them into a ready store
///
/// Fails with [`Error::InvalidParameters`] for a zero sample count or a
/// malformed mixture; no store is returned in that case.
pub fn build(
    n: usize,
    components: &[MixtureComponent],
    seed: Option<u64>,
) -> Result<SortedSampleStore> {
    let spec = MixtureSpec::new(components.to_vec())?;
    SortedSampleStore::from_mixture(n, &spec, seed)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build, compute, ExplorerConfig, ExplorerSession, MixtureComponent, MixtureSpec,
        RangeHistogram, RangeHistogramEngine, Result, SortedSampleStore,
    };
}

//! Interactive view state over a shared sample store
//!
//! A session tracks what the user is currently looking at (range and bin
//! count), keeps both inside their slider limits, and turns the view into
//! histogram queries. It does no rendering; a presentation layer feeds it
//! slider changes and draws the returned [`ViewUpdate`]s.
//!
//! Every view change and every request advances a revision counter. A
//! [`QueryRequest`] can be run on another thread; when its result comes back,
//! [`ExplorerSession::accept`] drops it if the view moved on in the meantime.

use crate::config::{ExplorerConfig, ViewConfig};
use explorer_core::{ensure_finite, Error, Result};
use explorer_histogram::{RangeHistogram, RangeHistogramEngine, SampleSummary, SortedSampleStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Headroom factor applied above the tallest bar
const Y_HEADROOM: f64 = 1.2;

/// Selectable bin-count interval, always `1 <= min < max`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinLimits {
    min: usize,
    max: usize,
}

impl BinLimits {
    /// Build limits, raising `max` to `min + 1` when `min >= max`
    pub fn new(min: usize, max: usize) -> Self {
        let min = min.max(1);
        let max = if min >= max { min + 1 } else { max };
        Self { min, max }
    }

    /// Lowest selectable bin count
    pub fn min(&self) -> usize {
        self.min
    }

    /// Highest selectable bin count
    pub fn max(&self) -> usize {
        self.max
    }

    /// Clamp a bin count into the limits
    pub fn clamp(&self, bins: usize) -> usize {
        bins.clamp(self.min, self.max)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.min == 0 || self.min >= self.max {
            return Err(Error::invalid_parameters(format!(
                "bin limits must satisfy 1 <= min < max, got [{}, {}]",
                self.min, self.max
            )));
        }
        Ok(())
    }
}

impl Default for BinLimits {
    fn default() -> Self {
        Self { min: 10, max: 1000 }
    }
}

/// What the user is currently looking at
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewState {
    pub v_min: f64,
    pub v_max: f64,
    pub bins: usize,
}

/// Identifies one histogram request; higher tickets are newer
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw revision number
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A self-contained histogram query that can run on any thread
#[derive(Debug, Clone)]
pub struct QueryRequest {
    ticket: Ticket,
    view: ViewState,
    store: Arc<SortedSampleStore>,
}

impl QueryRequest {
    /// Ticket this request was issued under
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// View being queried
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Compute the histogram for this request
    pub fn run(self) -> Result<ViewUpdate> {
        let ViewState { v_min, v_max, bins } = self.view;
        let histogram = RangeHistogramEngine::new().compute(&self.store, v_min, v_max, bins)?;
        let y_ceiling = histogram.max_density() * Y_HEADROOM + 1e-6;
        trace!(ticket = self.ticket.0, %histogram, "view update ready");
        Ok(ViewUpdate {
            ticket: self.ticket,
            view: self.view,
            histogram,
            y_ceiling,
        })
    }
}

/// Result of one view query, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct ViewUpdate {
    pub ticket: Ticket,
    pub view: ViewState,
    pub histogram: RangeHistogram,
    /// Suggested upper bound for the density axis
    pub y_ceiling: f64,
}

/// View state and slider limits over one shared store
#[derive(Debug)]
pub struct ExplorerSession {
    store: Arc<SortedSampleStore>,
    view: ViewState,
    range_bounds: (f64, f64),
    limits: BinLimits,
    revision: u64,
}

impl ExplorerSession {
    /// Open a session on an already built store
    pub fn new(store: Arc<SortedSampleStore>, config: &ViewConfig) -> Result<Self> {
        config.validate()?;
        let limits = config.bin_limits;
        let (lo, hi) = config.range_bounds;
        let (v_min, v_max) = config.initial_range;
        Ok(Self {
            store,
            view: ViewState {
                v_min: v_min.clamp(lo, hi),
                v_max: v_max.clamp(lo, hi),
                bins: limits.clamp(config.initial_bins),
            },
            range_bounds: config.range_bounds,
            limits,
            revision: 0,
        })
    }

    /// Build the configured store, then open a session on it
    #[instrument(skip(config), fields(n = config.sample_count))]
    pub fn from_config(config: &ExplorerConfig) -> Result<Self> {
        let store = Arc::new(config.build_store()?);
        Self::new(store, &config.view)
    }

    /// Shared handle to the store
    pub fn store(&self) -> &Arc<SortedSampleStore> {
        &self.store
    }

    /// Whole-population statistics of the store
    pub fn summary(&self) -> SampleSummary {
        self.store.summary()
    }

    /// Current view
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Current bin limits
    pub fn bin_limits(&self) -> BinLimits {
        self.limits
    }

    /// Outer range limits
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range_bounds
    }

    /// Replace the bin limits and pull the current bin count inside them
    pub fn set_bin_limits(&mut self, min: usize, max: usize) -> BinLimits {
        self.limits = BinLimits::new(min, max);
        self.view.bins = self.limits.clamp(self.view.bins);
        self.revision += 1;
        debug!(
            min = self.limits.min,
            max = self.limits.max,
            bins = self.view.bins,
            "bin limits changed"
        );
        self.limits
    }

    /// Select a bin count, clamped into the limits; returns the applied value
    pub fn set_bins(&mut self, bins: usize) -> usize {
        self.view.bins = self.limits.clamp(bins);
        self.revision += 1;
        self.view.bins
    }

    /// Select a value range, clamped into the range bounds
    ///
    /// A collapsed or inverted range is accepted; it produces an empty
    /// histogram on the next refresh.
    pub fn set_range(&mut self, v_min: f64, v_max: f64) -> Result<(f64, f64)> {
        ensure_finite("v_min", v_min)?;
        ensure_finite("v_max", v_max)?;
        let (lo, hi) = self.range_bounds;
        self.view.v_min = v_min.clamp(lo, hi);
        self.view.v_max = v_max.clamp(lo, hi);
        self.revision += 1;
        Ok((self.view.v_min, self.view.v_max))
    }

    /// Issue a query for the current view under a fresh ticket
    pub fn request(&mut self) -> QueryRequest {
        self.revision += 1;
        QueryRequest {
            ticket: Ticket(self.revision),
            view: self.view,
            store: Arc::clone(&self.store),
        }
    }

    /// Query the current view synchronously
    pub fn refresh(&mut self) -> Result<ViewUpdate> {
        self.request().run()
    }

    /// Whether a result issued under `ticket` still reflects the current view
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.revision
    }

    /// Keep `update` only if nothing changed since it was requested
    pub fn accept(&self, update: ViewUpdate) -> Option<ViewUpdate> {
        if self.is_current(update.ticket) {
            Some(update)
        } else {
            trace!(ticket = update.ticket.0, current = self.revision, "discarding stale update");
            None
        }
    }
}

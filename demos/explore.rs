//! Simulates an interactive session: build a store, then drag the sliders
//!
//! Run with `RUST_LOG=debug cargo run --release --example explore [N]`.

use bimodal_explorer::{ExplorerConfig, ExplorerSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let sample_count = std::env::args()
        .nth(1)
        .map(|arg| arg.parse::<usize>())
        .transpose()?
        .unwrap_or(2_000_000);

    let config = ExplorerConfig {
        seed: Some(42),
        ..ExplorerConfig::with_sample_count(sample_count)
    };

    let started = std::time::Instant::now();
    let mut session = ExplorerSession::from_config(&config)?;
    info!(elapsed = ?started.elapsed(), summary = %session.summary(), "store ready");

    let update = session.refresh()?;
    info!(histogram = %update.histogram, y_ceiling = update.y_ceiling, "initial view");

    // Drag the bins slider
    let started = std::time::Instant::now();
    for bins in (10..=1000).step_by(10) {
        session.set_bins(bins);
        session.refresh()?;
    }
    info!(elapsed = ?started.elapsed(), "100 bin changes");

    // Drag the left range handle until the range collapses
    let started = std::time::Instant::now();
    for lo in (-150..=150).step_by(5) {
        let (v_min, v_max) = session.set_range(f64::from(lo), 100.0)?;
        let update = session.refresh()?;
        if update.histogram.is_empty() {
            info!(v_min, v_max, "range collapsed, nothing to draw");
        }
    }
    info!(elapsed = ?started.elapsed(), "61 range changes");

    // A result requested before a change is stale by the time it arrives
    let pending = session.request();
    session.set_bins(250);
    let stale = pending.run()?;
    info!(kept = session.accept(stale).is_some(), "stale update");

    session.set_range(-50.0, 150.0)?;
    let update = session.refresh()?;
    for bin in update.histogram.bins().step_by(25) {
        info!(%bin, "sample bin");
    }
    info!(visible_fraction = update.histogram.visible_fraction(), "final view");
    Ok(())
}

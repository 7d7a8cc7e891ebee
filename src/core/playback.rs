//! Real-time playback of a reveal schedule.
//!
//! Every reveal event gets its own timer task sleeping until the event's
//! offset. Fired events are funnelled through a channel to the single task
//! that owns the adapter, so the adapter is never touched concurrently and no
//! event waits on another. If the receiving side goes away, timers that fire
//! later are simply discarded.

use latency_numbers_core::{RenderAdapter, RevealEvents};
use log::{debug, trace};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;

/// What a playback run did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Number of reveal events applied
    pub applied: usize,
    /// Wall time from start to the last applied event
    pub elapsed: Duration,
}

/// Draw every metric, then apply each event when its offset elapses.
pub async fn play(
    adapter: &mut dyn RenderAdapter,
    events: RevealEvents<'_>,
) -> anyhow::Result<PlaybackSummary> {
    let metrics = events.metrics();
    for (index, metric) in metrics.iter().enumerate() {
        adapter.draw_metric(index, metric)?;
    }

    let start = Instant::now();
    let (tx, mut rx) = mpsc::unbounded_channel();
    for event in events {
        let tx = tx.clone();
        tokio::spawn(async move {
            match start.checked_add(event.offset) {
                Some(deadline) => tokio::time::sleep_until(deadline).await,
                None => tokio::time::sleep(event.offset).await,
            }
            // Receiver gone means playback was torn down; drop the event
            let _ = tx.send(event);
        });
    }
    drop(tx);

    debug!("Playing {} reveals on {} adapter", metrics.len(), adapter.id());

    let mut applied = 0;
    while let Some(event) = rx.recv().await {
        trace!("Reveal {} at {:?} ({:?})", event.index, event.offset, event.class);
        adapter.apply_reveal(&event)?;
        applied += 1;
    }
    adapter.finish()?;

    Ok(PlaybackSummary {
        applied,
        elapsed: start.elapsed(),
    })
}

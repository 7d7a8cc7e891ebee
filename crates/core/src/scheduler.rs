//! Staggered reveal scheduling.
//!
//! The scheduler turns a catalog into a timed sequence of reveal events. It
//! decides only *what* is shown and *when*; applying the events is left to a
//! [`RenderAdapter`](crate::RenderAdapter) or to a timer-driven player.
//!
//! Events are produced lazily and in increasing offset order. Each event
//! carries everything needed to apply it, so a host may fire them
//! independently and in any interleaving.

use crate::catalog::MetricCatalog;
use crate::constants::{REVEAL_OVERLAP, STEP_DURATION};
use crate::metric::Metric;
use latency_numbers_types::{RevealClass, RevealEvent};
use log::{info, warn};
use std::iter::FusedIterator;
use std::time::Duration;

/// Assigns reveal offsets and visual classes to sorted metrics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealScheduler {
    step: Duration,
    overlap: f64,
}

impl RevealScheduler {
    /// Scheduler revealing one metric every `step * overlap`.
    ///
    /// A non-finite or negative overlap falls back to the default.
    pub fn new(step: Duration, overlap: f64) -> Self {
        let overlap = if overlap.is_finite() && overlap >= 0.0 {
            overlap
        } else {
            warn!("Invalid reveal overlap {}, using {}", overlap, REVEAL_OVERLAP);
            REVEAL_OVERLAP
        };
        Self { step, overlap }
    }

    pub fn step(&self) -> Duration {
        self.step
    }

    pub fn overlap(&self) -> f64 {
        self.overlap
    }

    /// Offset of the reveal at sorted position `index`, saturating at
    /// `Duration::MAX` when the product does not fit
    pub fn offset_for(&self, index: usize) -> Duration {
        let secs = self.step.as_secs_f64() * index as f64 * self.overlap;
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Visual class for the metric at sorted position `index` of `len`
    pub fn class_for(index: usize, len: usize, metric: &Metric) -> RevealClass {
        if index + 1 == len {
            RevealClass::Last
        } else if metric.force_down_one() {
            RevealClass::Shrink
        } else {
            RevealClass::Plain
        }
    }

    /// Sort `catalog` into reveal order and return its events.
    ///
    /// The returned sequence is one-shot; replaying requires scheduling again.
    pub fn schedule<'a>(&self, catalog: &'a mut MetricCatalog) -> RevealEvents<'a> {
        catalog.sort_for_reveal();
        let catalog: &'a MetricCatalog = catalog;
        info!(
            "Scheduling {} reveals for {} every {:?}",
            catalog.len(),
            catalog.year(),
            self.offset_for(1)
        );
        RevealEvents {
            scheduler: *self,
            metrics: catalog.metrics(),
            next: 0,
        }
    }

    /// Total time from the first reveal to the last one starting
    pub fn span(&self, len: usize) -> Duration {
        self.offset_for(len.saturating_sub(1))
    }
}

impl Default for RevealScheduler {
    fn default() -> Self {
        Self::new(STEP_DURATION, REVEAL_OVERLAP)
    }
}

/// Lazy sequence of reveal events over a sorted catalog
#[derive(Debug, Clone)]
pub struct RevealEvents<'a> {
    scheduler: RevealScheduler,
    metrics: &'a [Metric],
    next: usize,
}

impl<'a> RevealEvents<'a> {
    /// The metrics in reveal order; event `index` refers into this slice
    pub fn metrics(&self) -> &'a [Metric] {
        self.metrics
    }
}

impl Iterator for RevealEvents<'_> {
    type Item = RevealEvent;

    fn next(&mut self) -> Option<RevealEvent> {
        let index = self.next;
        let metric = self.metrics.get(index)?;
        self.next += 1;
        Some(RevealEvent {
            index,
            offset: self.scheduler.offset_for(index),
            class: RevealScheduler::class_for(index, self.metrics.len(), metric),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.metrics.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RevealEvents<'_> {}

impl FusedIterator for RevealEvents<'_> {}

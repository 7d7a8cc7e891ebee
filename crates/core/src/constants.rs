//! Shared constants for the model, the classifier and the reveal animation

use std::time::Duration;

/// Origin of the trend model's time axis (the year the PC came out).
/// Exponents are taken relative to it so `b^(year - BASE_YEAR)` stays small.
pub const BASE_YEAR: f64 = 1982.0;

/// Boxes in one full grid; one box of the next tier replaces this many
pub const BOXES_PER_TIER: f64 = 100.0;

/// Columns before a box grid wraps to the next row
pub const GRID_COLUMNS: u32 = 10;

/// Edge length of a single unit box in pixels
pub const BOX_SIZE_PX: f64 = 30.0;

/// Time between consecutive reveals, before overlap is applied.
/// Must stay in sync with `--stepTime` in the page stylesheet.
pub const STEP_DURATION: Duration = Duration::from_millis(4000);

/// Fraction of a step after which the next reveal starts (overlapping reveals)
pub const REVEAL_OVERLAP: f64 = 0.9;

/// Payload for the sequential-read metrics (1 MB)
pub const PAYLOAD_BYTES: f64 = 1_000_000.0;

/// Payload for the network-send metric (2 KB)
pub const NETWORK_PAYLOAD_BYTES: f64 = 2_000.0;

pub const NANOS_PER_SECOND: f64 = 1_000_000_000.0;

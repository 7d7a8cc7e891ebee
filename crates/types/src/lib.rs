//! latency-numbers-types: Shared data types for latency-numbers.
//!
//! Pure value types (colors, visual tiers, display units, reveal events)
//! shared by the core, render and application crates. No classification
//! or scheduling logic lives here.

pub mod color;
pub mod reveal;
pub mod tier;
pub mod unit;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use reveal::{RevealClass, RevealEvent};
pub use tier::Tier;
pub use unit::TimeUnit;

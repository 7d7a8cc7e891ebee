//! latency-numbers-core: trend model, metric classification and reveal
//! scheduling.
//!
//! The pipeline for one render pass is
//! [`MetricCatalog::for_year`] (trend estimates wrapped as classified
//! [`Metric`]s) followed by [`RevealScheduler::schedule`] (sorted reveal
//! events), consumed by a [`RenderAdapter`].

pub mod catalog;
pub mod constants;
pub mod format;
pub mod metric;
mod render_adapter;
pub mod scheduler;
pub mod trend;

pub use catalog::{reveal_order, CatalogEntry, Estimate, MetricCatalog};
pub use constants::{
    BOXES_PER_TIER, BOX_SIZE_PX, GRID_COLUMNS, NETWORK_PAYLOAD_BYTES, PAYLOAD_BYTES,
    REVEAL_OVERLAP, STEP_DURATION,
};
pub use format::format_number;
pub use metric::{Metric, MetricError};
pub use render_adapter::{
    render_all, HeadlessAdapter, HeadlessElement, RenderAdapter, RenderError,
};
pub use scheduler::{RevealEvents, RevealScheduler};

// Re-export types used in public signatures for convenience
pub use latency_numbers_types::{Color, RevealClass, RevealEvent, Tier, TimeUnit};
